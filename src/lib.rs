//! BaselineCore: Web feature detection + Baseline compatibility engine
//!
//! A Rust/WASM implementation of the Baseline Buddy analysis pipeline.
//! The editor extension calls into this core once per visible or edited
//! line and renders the results as inline hints, hovers, diagnostics,
//! and quick fixes.
//!
//! # Architecture
//!
//! ## Scanner Components
//! - `core.rs` - BaselineScanner: **unified facade** - single scan() per line
//! - `feature.rs` - FeatureCortex: web feature detection (100+ rules, 4 dialects)
//! - `rules.rs` - Dialect rule tables (CSS / JS / HTML / TS), data not code
//! - `framework.rs` - FrameworkCortex: framework version advisories
//!
//! ## Baseline Components
//! - `dataset.rs` - FeatureDataset: bundled web-features snapshot + schema
//! - `classifier.rs` - BaselineCortex: async one-shot load, tier mapping
//! - `polyfills.rs` - PolyfillAdvisor: polyfill + alternative lookups
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { BaselineScanner, BaselineCortex } from 'baselinecore';
//!
//! await init();
//!
//! const scanner = new BaselineScanner();
//! const baseline = new BaselineCortex();
//! await baseline.initialize();
//!
//! const { features } = scanner.scan('display: grid;', 'css', 'style.css');
//! for (const match of features) {
//!   const status = await baseline.classify(match.feature_id);
//!   console.log(match.feature_id, status.status);  // grid widely-available
//! }
//! ```

pub mod baseline;
pub mod scanner;

// Public exports - Scanner
pub use scanner::*;

// Public exports - Baseline
pub use baseline::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("baselinecore v{}", env!("CARGO_PKG_VERSION"))
}

/// Console warning that stays off the JS ABI in native builds
pub(crate) fn log_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", message);
}

/// Console error that stays off the JS ABI in native builds
pub(crate) fn log_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", message);
}
