//! Compatibility dataset - the web-features snapshot and its schema
//!
//! The dataset is an externally versioned table keyed by feature
//! identifier. A snapshot is bundled into the binary (`data/`), and the
//! consumer can hydrate a newer one at runtime; the classifier depends
//! on the shape, not the source.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bundled snapshot of the web-features dataset
pub const BUNDLED_FEATURES: &str = include_str!("../../data/web-features.json");

// ==================== TYPE DEFINITIONS ====================

/// Per-browser minimum supported versions, passed through to the
/// consumer unmodified.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct BrowserSupport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firefox: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge: Option<String>,
}

/// Raw baseline indicator as it appears in the dataset: a boolean or a
/// tier string ("high" / "low" / "newly").
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum BaselineIndicator {
    Flag(bool),
    Tier(String),
}

/// Status block of a dataset entry
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FeatureStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BaselineIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_low_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_high_date: Option<String>,
    #[serde(default)]
    pub support: BrowserSupport,
}

/// One read-only dataset entry
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CompatRecord {
    #[serde(default)]
    pub status: FeatureStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
}

// ==================== MAIN IMPLEMENTATION ====================

/// In-memory compatibility dataset, read-only after load
#[derive(Debug, Default)]
pub struct FeatureDataset {
    records: HashMap<String, CompatRecord>,
}

impl FeatureDataset {
    /// Parse a dataset from its JSON form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records: HashMap<String, CompatRecord> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    /// Parse the bundled snapshot
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_FEATURES)
    }

    /// Empty dataset - every lookup misses. The degraded state after a
    /// failed load.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact-key lookup, no fuzzy matching
    pub fn get(&self, feature_id: &str) -> Option<&CompatRecord> {
        self.records.get(feature_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_snapshot_parses() {
        let dataset = FeatureDataset::bundled().unwrap();
        assert!(dataset.len() > 50);
    }

    #[test]
    fn test_bundled_snapshot_has_core_vocabulary() {
        let dataset = FeatureDataset::bundled().unwrap();
        for id in ["grid", "flexbox", "xhr", "async-await", "dialog", "article"] {
            assert!(dataset.get(id).is_some(), "missing {}", id);
        }
    }

    #[test]
    fn test_indicator_forms() {
        let dataset = FeatureDataset::bundled().unwrap();

        // tier string
        let grid = dataset.get("grid").unwrap();
        assert_eq!(
            grid.status.baseline,
            Some(BaselineIndicator::Tier("high".to_string()))
        );

        // boolean true
        let article = dataset.get("article").unwrap();
        assert_eq!(article.status.baseline, Some(BaselineIndicator::Flag(true)));

        // boolean false
        let dnd = dataset.get("draganddrop").unwrap();
        assert_eq!(dnd.status.baseline, Some(BaselineIndicator::Flag(false)));
    }

    #[test]
    fn test_support_map() {
        let dataset = FeatureDataset::bundled().unwrap();
        let grid = dataset.get("grid").unwrap();

        assert_eq!(grid.status.support.chrome.as_deref(), Some("57"));
        assert_eq!(grid.status.support.safari.as_deref(), Some("10.1"));
    }

    #[test]
    fn test_partial_entry_parses() {
        let json = r#"{"bare": {}}"#;
        let dataset = FeatureDataset::from_json(json).unwrap();
        let record = dataset.get("bare").unwrap();

        assert!(record.status.baseline.is_none());
        assert!(record.description.is_none());
        assert!(record.status.support.chrome.is_none());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(FeatureDataset::from_json("not json").is_err());
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = FeatureDataset::empty();
        assert!(dataset.is_empty());
        assert!(dataset.get("grid").is_none());
    }
}
