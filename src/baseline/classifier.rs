//! BaselineCortex - Baseline compatibility classification
//!
//! Maps a feature identifier to a normalized support tier using the
//! compatibility dataset. The dataset is parsed asynchronously exactly
//! once per process; concurrent first callers share one in-flight
//! promise. A failed load degrades to an empty dataset so every lookup
//! resolves to `unknown` - `classify` never rejects.
//!
//! Tier derivation from the raw baseline indicator:
//!
//! | raw indicator      | status               |
//! |--------------------|----------------------|
//! | `true` / `"high"`  | widely-available     |
//! | `"newly"` / `"low"`| newly-available      |
//! | `false`            | limited-availability |
//! | anything else      | unknown              |

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

use super::dataset::{BaselineIndicator, BrowserSupport, FeatureDataset};
use crate::log_error;

// ==================== TYPE DEFINITIONS ====================

/// Fixed description for identifiers absent from the dataset
pub const NOT_FOUND_DESCRIPTION: &str = "Feature not found in baseline data";

/// Normalized support tier
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum BaselineStatus {
    WidelyAvailable,
    NewlyAvailable,
    LimitedAvailability,
    Unknown,
}

impl BaselineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaselineStatus::WidelyAvailable => "widely-available",
            BaselineStatus::NewlyAvailable => "newly-available",
            BaselineStatus::LimitedAvailability => "limited-availability",
            BaselineStatus::Unknown => "unknown",
        }
    }
}

/// Classification output for one feature id
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClassificationResult {
    pub status: String,
    pub feature: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_low_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_high_date: Option<String>,
    #[serde(default)]
    pub support: BrowserSupport,
}

// ==================== CLASSIFICATION ====================

/// Derive the support tier from a raw baseline indicator
pub fn derive_status(indicator: Option<&BaselineIndicator>) -> BaselineStatus {
    match indicator {
        Some(BaselineIndicator::Flag(true)) => BaselineStatus::WidelyAvailable,
        Some(BaselineIndicator::Tier(tier)) if tier == "high" => BaselineStatus::WidelyAvailable,
        Some(BaselineIndicator::Tier(tier)) if tier == "newly" || tier == "low" => {
            BaselineStatus::NewlyAvailable
        }
        Some(BaselineIndicator::Flag(false)) => BaselineStatus::LimitedAvailability,
        _ => BaselineStatus::Unknown,
    }
}

/// Classify a feature id against a dataset. Exact-key lookup; an absent
/// record is a normal `unknown` outcome, never an error.
pub fn classify_with(dataset: &FeatureDataset, feature_id: &str) -> ClassificationResult {
    let record = match dataset.get(feature_id) {
        Some(record) => record,
        None => {
            return ClassificationResult {
                status: BaselineStatus::Unknown.as_str().to_string(),
                feature: feature_id.to_string(),
                description: NOT_FOUND_DESCRIPTION.to_string(),
                baseline_low_date: None,
                baseline_high_date: None,
                support: BrowserSupport::default(),
            }
        }
    };

    let status = derive_status(record.status.baseline.as_ref());
    let description = record
        .description_html
        .clone()
        .or_else(|| record.description.clone())
        .unwrap_or_else(|| format!("{} compatibility", feature_id));

    ClassificationResult {
        status: status.as_str().to_string(),
        feature: feature_id.to_string(),
        description,
        baseline_low_date: record.status.baseline_low_date.clone(),
        baseline_high_date: record.status.baseline_high_date.clone(),
        support: record.status.support.clone(),
    }
}

// ==================== ONE-TIME LOAD ====================

// Process-wide memoized dataset. Single-threaded WASM; the pending
// promise is the shared handle that keeps the load from running twice.
thread_local! {
    static DATASET: RefCell<Option<Rc<FeatureDataset>>> = const { RefCell::new(None) };
    static PENDING_LOAD: RefCell<Option<js_sys::Promise>> = const { RefCell::new(None) };
}

fn loaded_dataset() -> Option<Rc<FeatureDataset>> {
    DATASET.with(|cell| cell.borrow().clone())
}

fn install_dataset(dataset: FeatureDataset) {
    DATASET.with(|cell| *cell.borrow_mut() = Some(Rc::new(dataset)));
}

/// Start or join the one-time load, returning the shared promise.
fn ensure_load_started() -> js_sys::Promise {
    if loaded_dataset().is_some() {
        return js_sys::Promise::resolve(&JsValue::NULL);
    }
    if let Some(pending) = PENDING_LOAD.with(|cell| cell.borrow().clone()) {
        return pending;
    }

    let promise = future_to_promise(async {
        let dataset = match FeatureDataset::bundled() {
            Ok(dataset) => dataset,
            Err(e) => {
                log_error(&format!(
                    "[BaselineCortex] Failed to load features data: {}",
                    e
                ));
                FeatureDataset::empty()
            }
        };
        // a hydrate may have won the race; keep its data
        if loaded_dataset().is_none() {
            install_dataset(dataset);
        }
        PENDING_LOAD.with(|cell| *cell.borrow_mut() = None);
        Ok(JsValue::NULL)
    });

    PENDING_LOAD.with(|cell| *cell.borrow_mut() = Some(promise.clone()));
    promise
}

async fn ensure_loaded() -> Rc<FeatureDataset> {
    if let Some(dataset) = loaded_dataset() {
        return dataset;
    }
    // the shared promise never rejects; the result value is unused
    let _ = JsFuture::from(ensure_load_started()).await;
    loaded_dataset().unwrap_or_else(|| Rc::new(FeatureDataset::empty()))
}

// ==================== MAIN IMPLEMENTATION ====================

/// BaselineCortex - compatibility tier lookup over the memoized dataset
#[wasm_bindgen]
pub struct BaselineCortex;

#[wasm_bindgen]
impl BaselineCortex {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self
    }

    /// Kick off the one-time dataset load. Idempotent; concurrent
    /// callers all receive the same in-flight promise.
    #[wasm_bindgen(js_name = initialize)]
    pub fn initialize(&self) -> js_sys::Promise {
        ensure_load_started()
    }

    /// True once the dataset is in memory
    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        loaded_dataset().is_some()
    }

    /// Number of features in the loaded dataset (0 before the load, or
    /// after a failed one)
    #[wasm_bindgen(js_name = featureCount)]
    pub fn feature_count(&self) -> usize {
        loaded_dataset().map_or(0, |dataset| dataset.len())
    }

    /// Classify a feature id (JS)
    ///
    /// Resolves with a ClassificationResult; never rejects. Unknown ids
    /// resolve with status "unknown".
    #[wasm_bindgen(js_name = classify)]
    pub fn classify(&self, feature_id: &str) -> js_sys::Promise {
        let feature_id = feature_id.to_string();
        future_to_promise(async move {
            let dataset = ensure_loaded().await;
            let result = classify_with(&dataset, &feature_id);
            Ok(serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL))
        })
    }

    /// Replace the dataset with a caller-supplied JSON snapshot.
    /// Returns the number of features loaded.
    #[wasm_bindgen(js_name = hydrateFeatures)]
    pub fn hydrate_features(&self, json: &str) -> Result<usize, JsValue> {
        let dataset = FeatureDataset::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid features data: {}", e)))?;
        let count = dataset.len();
        install_dataset(dataset);
        Ok(count)
    }
}

impl Default for BaselineCortex {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== TESTS ====================
