//! BaselineScanner - Unified line scanning facade
//!
//! Orchestrates FeatureCortex and FrameworkCortex to provide a single
//! entry point for one line of source text. Classification of the
//! detected feature ids is a separate concern - see `baseline::BaselineCortex`.
//!
//! # Usage (JavaScript)
//! ```javascript
//! import init, { BaselineScanner } from 'baselinecore';
//!
//! await init();
//! const scanner = new BaselineScanner();
//! const result = scanner.scan('display: grid;', 'css', 'style.css');
//! // result.features -> [{ feature_id: 'grid', start: 0, end: 13, ... }]
//! ```

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::feature::{FeatureCortex, FeatureMatch, Language};
use super::framework::{FrameworkCortex, FrameworkFeature};

// ==================== TYPE DEFINITIONS ====================

/// Configuration for the BaselineScanner
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScannerConfig {
    #[serde(default = "default_true")]
    pub enable_features: bool,
    #[serde(default = "default_true")]
    pub enable_frameworks: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            enable_features: true,
            enable_frameworks: true,
        }
    }
}

/// Unified scan result for one line
#[derive(Serialize, Deserialize)]
pub struct ScanResult {
    pub features: Vec<FeatureMatch>,
    pub frameworks: Vec<FrameworkFeature>,
    pub stats: ScanStats,
}

/// Performance statistics for the scan
#[derive(Serialize, Deserialize)]
pub struct ScanStats {
    pub total_time_ms: f64,
    pub feature_time_ms: f64,
    pub framework_time_ms: f64,
    pub line_length: usize,
    pub feature_count: usize,
    pub framework_count: usize,
}

// ==================== MAIN IMPLEMENTATION ====================

/// BaselineScanner - unified per-line detection engine
#[wasm_bindgen]
pub struct BaselineScanner {
    feature: FeatureCortex,
    framework: FrameworkCortex,
    config: ScannerConfig,
}

impl BaselineScanner {
    /// Run the enabled cortices over one line. Pure computation; the
    /// JS-facing `scan` adds timings on top.
    pub fn scan_parts(
        &self,
        line: &str,
        language: Language,
        file_name: Option<&str>,
    ) -> (Vec<FeatureMatch>, Vec<FrameworkFeature>) {
        let features = if self.config.enable_features {
            self.feature.detect(line, language)
        } else {
            Vec::new()
        };

        let frameworks = if self.config.enable_frameworks {
            self.framework.detect(line, file_name)
        } else {
            Vec::new()
        };

        (features, frameworks)
    }
}

#[wasm_bindgen]
impl BaselineScanner {
    /// Create a new BaselineScanner with optional configuration
    ///
    /// # Arguments
    /// * `config` - Optional JSON configuration object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<BaselineScanner, JsValue> {
        let config: ScannerConfig = if config.is_null() || config.is_undefined() {
            ScannerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };

        Ok(Self {
            feature: FeatureCortex::new(),
            framework: FrameworkCortex::new(),
            config,
        })
    }

    /// Scan one line of source text
    ///
    /// # Arguments
    /// * `line` - The line to scan
    /// * `language_tag` - Editor language id (css/html/javascript/typescript)
    /// * `file_name` - Optional file name for the framework heuristic
    #[wasm_bindgen(js_name = scan)]
    pub fn scan(&self, line: &str, language_tag: &str, file_name: Option<String>) -> JsValue {
        let start = js_sys::Date::now();

        let t0 = js_sys::Date::now();
        let features = if self.config.enable_features {
            self.feature.detect(line, Language::from_tag(language_tag))
        } else {
            Vec::new()
        };
        let feature_time = js_sys::Date::now() - t0;

        let t0 = js_sys::Date::now();
        let frameworks = if self.config.enable_frameworks {
            self.framework.detect(line, file_name.as_deref())
        } else {
            Vec::new()
        };
        let framework_time = js_sys::Date::now() - t0;

        let result = ScanResult {
            stats: ScanStats {
                total_time_ms: js_sys::Date::now() - start,
                feature_time_ms: feature_time,
                framework_time_ms: framework_time,
                line_length: line.len(),
                feature_count: features.len(),
                framework_count: frameworks.len(),
            },
            features,
            frameworks,
        };

        serde_wasm_bindgen::to_value(&result)
            .unwrap_or_else(|_| js_sys::Object::new().into())
    }

    /// Scan only for web features (fast path)
    #[wasm_bindgen(js_name = scanFeatures)]
    pub fn scan_features(&self, line: &str, language_tag: &str) -> JsValue {
        self.feature.js_detect(line, language_tag)
    }

    /// Scan only for framework features (fast path)
    #[wasm_bindgen(js_name = scanFrameworks)]
    pub fn scan_frameworks(&self, line: &str, file_name: Option<String>) -> JsValue {
        self.framework.js_detect(line, file_name)
    }

    /// Get scanner status
    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> JsValue {
        let status = serde_json::json!({
            "config": {
                "enable_features": self.config.enable_features,
                "enable_frameworks": self.config.enable_frameworks,
            },
        });
        JsValue::from_str(&status.to_string())
    }
}

// ==================== TESTS ====================
