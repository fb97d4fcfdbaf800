//! PolyfillAdvisor - polyfill and alternative lookups for quick fixes
//!
//! Static tables: featureId -> polyfill package (install command, docs
//! URL) and featureId -> literal code replacements. Pure lookup; the
//! quick-fix flow on the editor side drives it.

use serde::Serialize;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

// ==================== TYPE DEFINITIONS ====================

/// A polyfill package suggestion for one feature
#[derive(Serialize, Clone, Copy, Debug)]
pub struct PolyfillSuggestion {
    pub feature: &'static str,
    pub polyfill: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub installation: &'static str,
}

/// A literal code-replacement suggestion
#[derive(Serialize, Clone, Copy, Debug)]
pub struct Alternative {
    pub name: &'static str,
    pub replacement: &'static str,
}

const SUGGESTIONS: &[PolyfillSuggestion] = &[
    // ========== JAVASCRIPT ==========
    PolyfillSuggestion {
        feature: "fetch",
        polyfill: "whatwg-fetch",
        url: "https://github.com/github/fetch",
        description: "Polyfill for the Fetch API",
        installation: "npm install whatwg-fetch",
    },
    PolyfillSuggestion {
        feature: "promise",
        polyfill: "es6-promise",
        url: "https://github.com/stefanpenner/es6-promise",
        description: "Polyfill for ES6 Promises",
        installation: "npm install es6-promise",
    },
    PolyfillSuggestion {
        feature: "intersection-observer",
        polyfill: "intersection-observer",
        url: "https://github.com/w3c/IntersectionObserver/tree/main/polyfill",
        description: "Polyfill for Intersection Observer API",
        installation: "npm install intersection-observer",
    },
    PolyfillSuggestion {
        feature: "resize-observer",
        polyfill: "resize-observer-polyfill",
        url: "https://github.com/que-etc/resize-observer-polyfill",
        description: "Polyfill for Resize Observer API",
        installation: "npm install resize-observer-polyfill",
    },
    PolyfillSuggestion {
        feature: "url",
        polyfill: "url-polyfill",
        url: "https://github.com/lifaon74/url-polyfill",
        description: "Polyfill for URL constructor",
        installation: "npm install url-polyfill",
    },
    // ========== CSS ==========
    PolyfillSuggestion {
        feature: "grid",
        polyfill: "css-grid-polyfill",
        url: "https://github.com/FremyCompany/css-grid-polyfill",
        description: "Polyfill for CSS Grid Layout (IE 10-11)",
        installation: "npm install css-grid-polyfill",
    },
    PolyfillSuggestion {
        feature: "flexbox",
        polyfill: "flexibility",
        url: "https://github.com/jonathantneal/flexibility",
        description: "Polyfill for Flexbox (IE 8-9)",
        installation: "npm install flexibility",
    },
    PolyfillSuggestion {
        feature: "has",
        polyfill: "css-has-pseudo",
        url: "https://github.com/csstools/postcss-plugins/tree/main/plugins/css-has-pseudo",
        description: "Transform :has() selectors for older browsers",
        installation: "npm install css-has-pseudo",
    },
    PolyfillSuggestion {
        feature: "container-queries",
        polyfill: "container-query-polyfill",
        url: "https://github.com/GoogleChromeLabs/container-query-polyfill",
        description: "Polyfill for CSS Container Queries",
        installation: "npm install container-query-polyfill",
    },
    // ========== HTML ==========
    PolyfillSuggestion {
        feature: "dialog",
        polyfill: "dialog-polyfill",
        url: "https://github.com/GoogleChrome/dialog-polyfill",
        description: "Polyfill for HTML5 dialog element",
        installation: "npm install dialog-polyfill",
    },
    PolyfillSuggestion {
        feature: "details",
        polyfill: "details-element-polyfill",
        url: "https://github.com/javan/details-element-polyfill",
        description: "Polyfill for HTML5 details/summary elements",
        installation: "npm install details-element-polyfill",
    },
    PolyfillSuggestion {
        feature: "picture",
        polyfill: "picturefill",
        url: "https://github.com/scottjehl/picturefill",
        description: "Responsive images polyfill for picture element",
        installation: "npm install picturefill",
    },
];

const ALTERNATIVES: &[(&str, &[Alternative])] = &[
    (
        "fetch",
        &[Alternative {
            name: "XMLHttpRequest",
            replacement: "new XMLHttpRequest()",
        }],
    ),
    (
        "grid",
        &[Alternative {
            name: "Flexbox",
            replacement: "display: flex",
        }],
    ),
    (
        "container-queries",
        &[Alternative {
            name: "Media Queries",
            replacement: "@media (max-width: 768px)",
        }],
    ),
    (
        "has",
        &[Alternative {
            name: "Class selector",
            replacement: ".parent.has-child",
        }],
    ),
    (
        "dialog",
        &[Alternative {
            name: "Modal div",
            replacement: "<div role=\"dialog\" aria-modal=\"true\">",
        }],
    ),
];

// ==================== MAIN IMPLEMENTATION ====================

/// PolyfillAdvisor - has/get/list over the static advisory tables
#[wasm_bindgen]
pub struct PolyfillAdvisor {
    suggestions: HashMap<&'static str, &'static PolyfillSuggestion>,
    alternatives: HashMap<&'static str, &'static [Alternative]>,
}

impl PolyfillAdvisor {
    /// Look up the polyfill suggestion for a feature
    pub fn suggestion(&self, feature_id: &str) -> Option<&'static PolyfillSuggestion> {
        self.suggestions.get(feature_id).copied()
    }

    /// Literal replacement suggestions for a feature; empty when none
    pub fn alternatives(&self, feature_id: &str) -> &'static [Alternative] {
        self.alternatives.get(feature_id).copied().unwrap_or(&[])
    }

    /// Every suggestion, in table order
    pub fn all(&self) -> &'static [PolyfillSuggestion] {
        SUGGESTIONS
    }
}

#[wasm_bindgen]
impl PolyfillAdvisor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            suggestions: SUGGESTIONS.iter().map(|s| (s.feature, s)).collect(),
            alternatives: ALTERNATIVES.iter().copied().collect(),
        }
    }

    /// True when a polyfill exists for the feature
    #[wasm_bindgen(js_name = hasPolyfill)]
    pub fn has_polyfill(&self, feature_id: &str) -> bool {
        self.suggestions.contains_key(feature_id)
    }

    /// Polyfill suggestion for a feature, or undefined (JS)
    #[wasm_bindgen(js_name = getSuggestion)]
    pub fn js_suggestion(&self, feature_id: &str) -> JsValue {
        match self.suggestion(feature_id) {
            Some(suggestion) => {
                serde_wasm_bindgen::to_value(suggestion).unwrap_or(JsValue::UNDEFINED)
            }
            None => JsValue::UNDEFINED,
        }
    }

    /// Every suggestion (JS)
    #[wasm_bindgen(js_name = allSuggestions)]
    pub fn js_all(&self) -> JsValue {
        serde_wasm_bindgen::to_value(SUGGESTIONS)
            .unwrap_or_else(|_| js_sys::Array::new().into())
    }

    /// Replacement suggestions for a feature (JS)
    #[wasm_bindgen(js_name = alternativesFor)]
    pub fn js_alternatives(&self, feature_id: &str) -> JsValue {
        serde_wasm_bindgen::to_value(self.alternatives(feature_id))
            .unwrap_or_else(|_| js_sys::Array::new().into())
    }

    /// Render the polyfill hover markdown for a feature
    #[wasm_bindgen(js_name = polyfillMarkdown)]
    pub fn polyfill_markdown(&self, feature_id: &str) -> String {
        let suggestion = match self.suggestion(feature_id) {
            Some(suggestion) => suggestion,
            None => return format!("No polyfill suggestions available for {}.", feature_id),
        };

        format!(
            "## Polyfill Available\n\n**{}** - {}\n\n**Installation:**\n```bash\n{}\n```\n\n**Usage:**\n```javascript\nimport '{}';\n```\n\n[View Documentation]({})",
            suggestion.polyfill,
            suggestion.description,
            suggestion.installation,
            suggestion.polyfill,
            suggestion.url,
        )
    }
}

impl Default for PolyfillAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_polyfill() {
        let advisor = PolyfillAdvisor::new();
        assert!(advisor.has_polyfill("fetch"));
        assert!(advisor.has_polyfill("dialog"));
        assert!(!advisor.has_polyfill("async-await"));
    }

    #[test]
    fn test_suggestion_lookup() {
        let advisor = PolyfillAdvisor::new();
        let suggestion = advisor.suggestion("grid").unwrap();

        assert_eq!(suggestion.polyfill, "css-grid-polyfill");
        assert_eq!(suggestion.installation, "npm install css-grid-polyfill");
        assert!(advisor.suggestion("unknown-thing").is_none());
    }

    #[test]
    fn test_all_in_table_order() {
        let advisor = PolyfillAdvisor::new();
        let all = advisor.all();

        assert_eq!(all.len(), 12);
        assert_eq!(all[0].feature, "fetch");
        assert_eq!(all[all.len() - 1].feature, "picture");
    }

    #[test]
    fn test_alternatives() {
        let advisor = PolyfillAdvisor::new();

        let fetch = advisor.alternatives("fetch");
        assert_eq!(fetch.len(), 1);
        assert_eq!(fetch[0].name, "XMLHttpRequest");
        assert_eq!(fetch[0].replacement, "new XMLHttpRequest()");

        let grid = advisor.alternatives("grid");
        assert_eq!(grid[0].replacement, "display: flex");

        assert!(advisor.alternatives("flexbox").is_empty());
    }

    #[test]
    fn test_polyfill_markdown() {
        let advisor = PolyfillAdvisor::new();

        let markdown = advisor.polyfill_markdown("dialog");
        assert!(markdown.contains("dialog-polyfill"));
        assert!(markdown.contains("npm install dialog-polyfill"));
        assert!(markdown.contains("[View Documentation]"));

        let missing = advisor.polyfill_markdown("nope");
        assert!(missing.contains("No polyfill suggestions available"));
    }
}
