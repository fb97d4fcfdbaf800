//! FrameworkCortex - Framework feature detection with version advisories
//!
//! Detects framework-specific syntax markers (hooks, template directives,
//! decorators) and reports the minimum framework version each one needs.
//! Independent of the baseline-compatibility model; shares the
//! pattern-table design of FeatureCortex.
//!
//! Framework selection is heuristic: file-extension hints take priority,
//! then import/content markers (Aho-Corasick over literal fragments).
//! Ambiguity is a first-class outcome - with no signal, every framework
//! table is checked.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::log_warn;

// ==================== TYPE DEFINITIONS ====================

/// Supported frameworks
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum Framework {
    React,
    Vue,
    Angular,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
        }
    }
}

/// A framework feature with its minimum-version requirement
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FrameworkFeature {
    pub feature: String,
    pub framework: String,
    pub version: String,
    pub alternative: String,
}

/// Declarative table entry: pattern -> feature + version advisory
struct FrameworkRule {
    pattern: &'static str,
    feature: &'static str,
    version: &'static str,
    alternative: &'static str,
}

const REACT_RULES: &[FrameworkRule] = &[
    FrameworkRule {
        pattern: r"useLayoutEffect",
        feature: "useLayoutEffect",
        version: "16.8+",
        alternative: "useEffect for non-layout effects",
    },
    FrameworkRule {
        pattern: r"useDeferredValue",
        feature: "useDeferredValue",
        version: "18.0+",
        alternative: "useState with setTimeout for older versions",
    },
    FrameworkRule {
        pattern: r"Suspense",
        feature: "Suspense",
        version: "16.6+",
        alternative: "Loading states with conditional rendering",
    },
    FrameworkRule {
        pattern: r"React\.lazy",
        feature: "React.lazy",
        version: "16.6+",
        alternative: "Dynamic imports with loading states",
    },
    FrameworkRule {
        pattern: r"useTransition",
        feature: "useTransition",
        version: "18.0+",
        alternative: "Custom loading states for older versions",
    },
];

const VUE_RULES: &[FrameworkRule] = &[
    FrameworkRule {
        pattern: r"<script setup>",
        feature: "script setup",
        version: "3.0+",
        alternative: "Options API or Composition API setup()",
    },
    FrameworkRule {
        pattern: r"defineProps",
        feature: "defineProps",
        version: "3.0+",
        alternative: "props option in Options API",
    },
    FrameworkRule {
        pattern: r"defineEmits",
        feature: "defineEmits",
        version: "3.0+",
        alternative: "emits option in Options API",
    },
    FrameworkRule {
        pattern: r"Teleport",
        feature: "Teleport",
        version: "3.0+",
        alternative: "Portal libraries for Vue 2",
    },
    FrameworkRule {
        pattern: r"Suspense.*#fallback",
        feature: "Suspense",
        version: "3.0+",
        alternative: "Loading states with v-if/v-else",
    },
];

const ANGULAR_RULES: &[FrameworkRule] = &[
    FrameworkRule {
        pattern: r"@Component.*standalone:\s*true",
        feature: "Standalone Components",
        version: "14.0+",
        alternative: "NgModule-based components",
    },
    FrameworkRule {
        pattern: r"inject\(",
        feature: "inject()",
        version: "14.0+",
        alternative: "Constructor injection",
    },
    FrameworkRule {
        pattern: r"@defer",
        feature: "Deferrable Views",
        version: "17.0+",
        alternative: "Lazy loading with router or dynamic imports",
    },
    FrameworkRule {
        pattern: r"@if\b",
        feature: "New Control Flow",
        version: "17.0+",
        alternative: "*ngIf, *ngFor structural directives",
    },
];

/// Content markers for the framework heuristic. Lower priority wins;
/// ties resolve leftmost. Import markers outrank template markers,
/// which outrank decorators (the order the extension hints are also
/// consulted in).
const CONTENT_MARKERS: &[(&str, Framework, u8)] = &[
    ("from 'react'", Framework::React, 0),
    ("from \"react\"", Framework::React, 0),
    ("@angular/", Framework::Angular, 0),
    ("<template>", Framework::Vue, 1),
    ("<script setup", Framework::Vue, 1),
    ("@component", Framework::Angular, 2),
    ("@injectable", Framework::Angular, 2),
    ("@ngmodule", Framework::Angular, 2),
];

// ==================== MAIN IMPLEMENTATION ====================

/// FrameworkCortex - framework feature detector
#[wasm_bindgen]
pub struct FrameworkCortex {
    react: Vec<(Regex, &'static FrameworkRule)>,
    vue: Vec<(Regex, &'static FrameworkRule)>,
    angular: Vec<(Regex, &'static FrameworkRule)>,
    markers: AhoCorasick,
    marker_meta: Vec<(Framework, u8)>,
}

impl FrameworkCortex {
    /// Decide which framework the text belongs to.
    ///
    /// Extension hints first, then content markers. `None` means
    /// ambiguous - the caller checks every table.
    pub fn detect_framework(&self, text: &str, file_name: Option<&str>) -> Option<Framework> {
        if let Some(name) = file_name {
            if name.ends_with(".vue") {
                return Some(Framework::Vue);
            }
            if name.ends_with(".tsx") || name.ends_with(".jsx") {
                return Some(Framework::React);
            }
            if name.ends_with(".component.ts") || name.ends_with(".component.html") {
                return Some(Framework::Angular);
            }
        }

        let mut best: Option<(u8, usize, Framework)> = None;
        for m in self.markers.find_iter(text) {
            let (framework, priority) = self.marker_meta[m.pattern().as_usize()];
            let candidate = (priority, m.start(), framework);
            if best.map_or(true, |b| (candidate.0, candidate.1) < (b.0, b.1)) {
                best = Some(candidate);
            }
        }
        best.map(|(_, _, framework)| framework)
    }

    /// Detect framework features in the text.
    pub fn detect(&self, text: &str, file_name: Option<&str>) -> Vec<FrameworkFeature> {
        let tables: Vec<(&[(Regex, &'static FrameworkRule)], Framework)> =
            match self.detect_framework(text, file_name) {
                Some(Framework::React) => vec![(self.react.as_slice(), Framework::React)],
                Some(Framework::Vue) => vec![(self.vue.as_slice(), Framework::Vue)],
                Some(Framework::Angular) => vec![(self.angular.as_slice(), Framework::Angular)],
                None => vec![
                    (self.react.as_slice(), Framework::React),
                    (self.vue.as_slice(), Framework::Vue),
                    (self.angular.as_slice(), Framework::Angular),
                ],
            };

        let mut features = Vec::new();
        for (table, framework) in tables {
            for (regex, rule) in table {
                if regex.is_match(text) {
                    features.push(FrameworkFeature {
                        feature: rule.feature.to_string(),
                        framework: framework.as_str().to_string(),
                        version: rule.version.to_string(),
                        alternative: rule.alternative.to_string(),
                    });
                }
            }
        }
        features
    }

    /// Render the minimum-version warning for a detected feature.
    pub fn warning(feature: &FrameworkFeature) -> String {
        format!(
            "**{}** requires {} {}\n\n**Alternative:** {}\n\nConsider checking your {} version or using a compatible alternative.",
            feature.feature,
            feature.framework,
            feature.version,
            feature.alternative,
            feature.framework,
        )
    }

    fn compile_table(rules: &'static [FrameworkRule]) -> Vec<(Regex, &'static FrameworkRule)> {
        let mut compiled = Vec::new();
        for rule in rules {
            match RegexBuilder::new(rule.pattern).case_insensitive(true).build() {
                Ok(regex) => compiled.push((regex, rule)),
                Err(e) => log_warn(&format!(
                    "[FrameworkCortex] Dropped rule for {}: {}",
                    rule.feature, e
                )),
            }
        }
        compiled
    }
}

#[wasm_bindgen]
impl FrameworkCortex {
    /// Create a new FrameworkCortex with all tables compiled
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let patterns: Vec<&str> = CONTENT_MARKERS.iter().map(|(p, _, _)| *p).collect();
        let marker_meta: Vec<(Framework, u8)> = CONTENT_MARKERS
            .iter()
            .map(|(_, framework, priority)| (*framework, *priority))
            .collect();

        // The marker set is static, so the build cannot fail; keep the
        // degraded path anyway so a bad marker never takes the cortex down.
        let markers = AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .ascii_case_insensitive(true)
            .build(&patterns)
            .unwrap_or_else(|e| {
                log_warn(&format!("[FrameworkCortex] Marker build error: {}", e));
                AhoCorasick::new(Vec::<&str>::new()).expect("empty automaton")
            });

        Self {
            react: Self::compile_table(REACT_RULES),
            vue: Self::compile_table(VUE_RULES),
            angular: Self::compile_table(ANGULAR_RULES),
            markers,
            marker_meta,
        }
    }

    /// Detect framework features (JS)
    ///
    /// Returns an array of FrameworkFeature objects; empty on failure.
    #[wasm_bindgen(js_name = detect)]
    pub fn js_detect(&self, text: &str, file_name: Option<String>) -> JsValue {
        let features = self.detect(text, file_name.as_deref());
        serde_wasm_bindgen::to_value(&features)
            .unwrap_or_else(|_| js_sys::Array::new().into())
    }

    /// Name the detected framework, or null when ambiguous (JS)
    #[wasm_bindgen(js_name = detectFramework)]
    pub fn js_detect_framework(&self, text: &str, file_name: Option<String>) -> Option<String> {
        self.detect_framework(text, file_name.as_deref())
            .map(|f| f.as_str().to_string())
    }

    /// Render a version warning for a FrameworkFeature object (JS)
    #[wasm_bindgen(js_name = renderWarning)]
    pub fn js_render_warning(&self, feature: JsValue) -> Result<String, JsValue> {
        let feature: FrameworkFeature = serde_wasm_bindgen::from_value(feature)
            .map_err(|e| JsValue::from_str(&format!("Invalid feature: {}", e)))?;
        Ok(Self::warning(&feature))
    }
}

impl Default for FrameworkCortex {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_hint_vue() {
        let cortex = FrameworkCortex::new();
        assert_eq!(
            cortex.detect_framework("anything", Some("App.vue")),
            Some(Framework::Vue)
        );
    }

    #[test]
    fn test_extension_hint_react() {
        let cortex = FrameworkCortex::new();
        assert_eq!(
            cortex.detect_framework("anything", Some("App.tsx")),
            Some(Framework::React)
        );
        assert_eq!(
            cortex.detect_framework("anything", Some("App.jsx")),
            Some(Framework::React)
        );
    }

    #[test]
    fn test_extension_hint_angular() {
        let cortex = FrameworkCortex::new();
        assert_eq!(
            cortex.detect_framework("anything", Some("app.component.ts")),
            Some(Framework::Angular)
        );
    }

    #[test]
    fn test_extension_hint_beats_content() {
        let cortex = FrameworkCortex::new();
        // react import in a .vue file - extension wins
        let text = "import { ref } from 'react'";
        assert_eq!(
            cortex.detect_framework(text, Some("App.vue")),
            Some(Framework::Vue)
        );
    }

    #[test]
    fn test_content_marker_react_import() {
        let cortex = FrameworkCortex::new();
        let text = "import { useState } from 'react';";
        assert_eq!(cortex.detect_framework(text, None), Some(Framework::React));
    }

    #[test]
    fn test_content_marker_angular_import() {
        let cortex = FrameworkCortex::new();
        let text = "import { Component } from '@angular/core';";
        assert_eq!(cortex.detect_framework(text, None), Some(Framework::Angular));
    }

    #[test]
    fn test_content_marker_vue_template() {
        let cortex = FrameworkCortex::new();
        let text = "<template>\n  <div/>\n</template>";
        assert_eq!(cortex.detect_framework(text, None), Some(Framework::Vue));
    }

    #[test]
    fn test_content_marker_angular_decorator() {
        let cortex = FrameworkCortex::new();
        let text = "@Component({ selector: 'app-root' })";
        assert_eq!(cortex.detect_framework(text, None), Some(Framework::Angular));
    }

    #[test]
    fn test_import_marker_outranks_decorator() {
        let cortex = FrameworkCortex::new();
        // decorator appears first in the text, but the import marker has
        // higher priority
        let text = "@Component({}) // from \"react\"";
        assert_eq!(cortex.detect_framework(text, None), Some(Framework::React));
    }

    #[test]
    fn test_ambiguous_is_none() {
        let cortex = FrameworkCortex::new();
        assert_eq!(cortex.detect_framework("const x = 1;", None), None);
    }

    #[test]
    fn test_react_hook_detection() {
        let cortex = FrameworkCortex::new();
        let text = "import { useTransition } from 'react';";
        let features = cortex.detect(text, None);

        assert_eq!(features.len(), 1);
        assert_eq!(features[0].feature, "useTransition");
        assert_eq!(features[0].framework, "react");
        assert_eq!(features[0].version, "18.0+");
    }

    #[test]
    fn test_vue_define_props() {
        let cortex = FrameworkCortex::new();
        let features = cortex.detect("const props = defineProps<Props>()", Some("App.vue"));

        assert_eq!(features.len(), 1);
        assert_eq!(features[0].feature, "defineProps");
        assert_eq!(features[0].framework, "vue");
    }

    #[test]
    fn test_ambiguous_checks_all_tables() {
        let cortex = FrameworkCortex::new();
        // no framework signal; Teleport only exists in the Vue table
        let features = cortex.detect("Teleport", None);

        assert_eq!(features.len(), 1);
        assert_eq!(features[0].framework, "vue");
    }

    #[test]
    fn test_selected_framework_limits_tables() {
        let cortex = FrameworkCortex::new();
        // Suspense exists in both the React and Vue tables; a React
        // signal restricts the scan to the React table
        let text = "import { Suspense } from 'react';";
        let features = cortex.detect(text, None);

        assert_eq!(features.len(), 1);
        assert_eq!(features[0].framework, "react");
        assert_eq!(features[0].version, "16.6+");
    }

    #[test]
    fn test_warning_text() {
        let feature = FrameworkFeature {
            feature: "useTransition".to_string(),
            framework: "react".to_string(),
            version: "18.0+".to_string(),
            alternative: "Custom loading states for older versions".to_string(),
        };

        let warning = FrameworkCortex::warning(&feature);
        assert!(warning.contains("useTransition"));
        assert!(warning.contains("react 18.0+"));
        assert!(warning.contains("Custom loading states"));
    }
}
