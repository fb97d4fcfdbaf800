//! Dialect rule tables - pattern signatures for web-platform features
//!
//! Declarative data consumed by FeatureCortex. Each rule maps a regex
//! signature to a feature identifier from the web-features vocabulary.
//! Four dialect tables: CSS, JavaScript, HTML, TypeScript (the TS table
//! is the JS table plus TS-specific additions - duplicates from shared
//! patterns are expected and are not merged).
//!
//! Rules marked `find_all` report every occurrence on a line instead of
//! only the first.

/// A single pattern -> feature-id rule
#[derive(Clone, Copy, Debug)]
pub struct RuleDef {
    /// Regex source, compiled case-insensitively by FeatureCortex
    pub pattern: &'static str,
    /// Feature identifier in the web-features vocabulary
    pub feature_id: &'static str,
    /// Report every occurrence instead of only the first
    pub find_all: bool,
}

const fn rule(pattern: &'static str, feature_id: &'static str) -> RuleDef {
    RuleDef { pattern, feature_id, find_all: false }
}

const fn rule_all(pattern: &'static str, feature_id: &'static str) -> RuleDef {
    RuleDef { pattern, feature_id, find_all: true }
}

pub const CSS_RULES: &[RuleDef] = &[
    // ========== LAYOUT ==========
    rule(r"display\s*:\s*grid", "grid"),
    rule(r"display\s*:\s*flex", "flexbox"),
    rule(r"display\s*:\s*subgrid", "subgrid"),
    rule(r"gap\s*:", "gap-decorations"),
    rule(r"grid-template", "grid"),
    rule(r"place-items", "grid"),
    rule(r"place-content", "grid"),
    // ========== CONTAINER QUERIES & SELECTORS ==========
    rule(r"@container", "container-queries"),
    rule(r"container-type", "container-queries"),
    rule(r":has\(", "has"),
    rule(r":is\(", "is"),
    rule(r":where\(", "where"),
    // ========== MODERN PROPERTIES ==========
    rule(r"aspect-ratio", "aspect-ratio"),
    rule(r"object-fit", "object-fit"),
    rule(r"backdrop-filter", "backdrop-filter"),
    rule(r"clip-path", "clip-path"),
    rule(r"mask\s*:", "masks"),
    // ========== TRANSFORMS & ANIMATIONS ==========
    rule(r"transform\s*:", "transforms2d"),
    rule(r"transition\s*:", "transitions"),
    rule(r"animation\s*:", "animations-css"),
    rule(r"@keyframes", "animations-css"),
    // ========== COLOR & VISUAL ==========
    rule(r"color-scheme", "color-scheme"),
    rule(r"accent-color", "accent-color"),
    rule(r"filter\s*:", "filter"),
    rule(r"mix-blend-mode", "mix-blend-mode"),
    // ========== TYPOGRAPHY ==========
    rule(r"font-display", "font-display"),
    rule(r"font-variation-settings", "font-variation-settings"),
    rule(r"text-decoration-thickness", "text-decoration"),
    // ========== SCROLL & INTERACTION ==========
    rule(r"scroll-behavior", "scroll-behavior"),
    rule(r"scroll-snap", "scroll-snap"),
    rule(r"overscroll-behavior", "overscroll-behavior"),
    rule(r"touch-action", "touch-action"),
];

pub const JS_RULES: &[RuleDef] = &[
    // ========== FETCH & NETWORK ==========
    rule(r"fetch\s*\(", "xhr"),
    rule(r"new\s+AbortController", "aborting"),
    rule(r"new\s+URLSearchParams", "url"),
    rule(r"new\s+URL\s*\(", "url"),
    // ========== ASYNC/AWAIT ==========
    rule(r"async\s+function", "async-await"),
    rule_all(r"await\s", "async-await"),
    rule(r"Promise\s*\.", "promise"),
    rule(r"Promise\s*\(", "promise"),
    // ========== OBSERVERS ==========
    rule(r"new\s+IntersectionObserver", "intersection-observer"),
    rule(r"new\s+ResizeObserver", "resize-observer"),
    rule(r"new\s+MutationObserver", "mutationobserver"),
    rule(r"new\s+PerformanceObserver", "performance"),
    // ========== STRING & ARRAY METHODS ==========
    rule(r"\.replaceAll\(", "string-replaceall"),
    rule(r"\.includes\(", "array-includes"),
    rule(r"\.find\(", "array-find"),
    rule(r"\.findIndex\(", "array-find"),
    rule(r"\.flatMap\(", "array-flat"),
    rule(r"\.flat\(", "array-flat"),
    // ========== MODERN LANGUAGE FEATURES ==========
    rule(r"\.entries\(", "object-object"),
    rule(r"\.values\(", "object-object"),
    rule(r"\.keys\(", "object-object"),
    rule(r"Object\.assign", "object-object"),
    rule_all(r"\.\.\.\s*\w+", "spread"),
    rule(r"const\s+\{.*\}\s*=", "destructuring"),
    rule(r"let\s+\[.*\]\s*=", "destructuring"),
    // ========== WEB APIS ==========
    rule(r"navigator\.geolocation", "geolocation"),
    rule(r"localStorage", "localstorage"),
    rule(r"sessionStorage", "localstorage"),
    rule(r"new\s+FormData", "file"),
    rule(r"requestAnimationFrame", "request-animation-frame"),
    rule(r"new\s+Intl\.", "intl"),
];

pub const HTML_RULES: &[RuleDef] = &[
    // ========== FORM ELEMENTS ==========
    rule(r#"<input[^>]*type=["']?date"#, "input-date-time"),
    rule(r#"<input[^>]*type=["']?email"#, "input-email-tel-url"),
    rule(r#"<input[^>]*type=["']?tel"#, "input-email-tel-url"),
    rule(r#"<input[^>]*type=["']?url"#, "input-email-tel-url"),
    rule(r#"<input[^>]*type=["']?number"#, "input-number"),
    rule(r#"<input[^>]*type=["']?range"#, "input-range"),
    rule(r#"<input[^>]*type=["']?color"#, "input-color"),
    rule(r#"<input[^>]*type=["']?search"#, "search-input-type"),
    // ========== SEMANTIC ELEMENTS ==========
    rule(r"<article", "article"),
    rule(r"<section", "section"),
    rule(r"<nav", "nav"),
    rule(r"<header", "header-footer"),
    rule(r"<footer", "header-footer"),
    rule(r"<aside", "aside"),
    rule(r"<main", "main"),
    rule(r"<figure", "figure"),
    rule(r"<figcaption", "figure"),
    // ========== MEDIA ELEMENTS ==========
    rule(r"<video", "video"),
    rule(r"<audio", "audio"),
    rule(r"<picture", "picture"),
    rule_all(r"<source", "source"),
    // ========== INTERACTIVE ELEMENTS ==========
    rule(r"<details", "details"),
    rule(r"<summary", "details"),
    rule(r"<dialog", "dialog"),
    // ========== ATTRIBUTES ==========
    rule(r"contenteditable", "contenteditable"),
    rule_all(r"data-\w+", "dataset"),
    rule(r"draggable", "draganddrop"),
    rule(r#"loading=["']?lazy"#, "loading-lazy"),
    rule(r#"decoding=["']?async"#, "loading-lazy"),
];

/// TypeScript-specific additions. The full TS table is [`JS_RULES`]
/// followed by these - see [`ts_rules`].
pub const TS_EXTRA_RULES: &[RuleDef] = &[
    rule(r"interface\s+\w+", "typescript-interfaces"),
    rule(r"type\s+\w+\s*=", "typescript-type-aliases"),
    rule(r"enum\s+\w+", "typescript-enums"),
    rule(r"namespace\s+\w+", "typescript-namespaces"),
    rule(r"public\s+\w+", "typescript-access-modifiers"),
    rule(r"private\s+\w+", "typescript-access-modifiers"),
    rule(r"protected\s+\w+", "typescript-access-modifiers"),
    rule(r"readonly\s+\w+", "typescript-readonly"),
    rule(r"abstract\s+class", "typescript-abstract-classes"),
    rule(r"implements\s+\w+", "typescript-implements"),
];

/// The TypeScript dialect: every JS rule plus the TS additions,
/// in declaration order.
pub fn ts_rules() -> impl Iterator<Item = &'static RuleDef> {
    JS_RULES.iter().chain(TS_EXTRA_RULES.iter())
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    #[test]
    fn test_table_sizes() {
        assert_eq!(CSS_RULES.len(), 32);
        assert_eq!(JS_RULES.len(), 31);
        assert_eq!(HTML_RULES.len(), 29);
        assert_eq!(TS_EXTRA_RULES.len(), 10);
    }

    #[test]
    fn test_ts_is_js_superset() {
        let ts: Vec<_> = ts_rules().collect();
        assert_eq!(ts.len(), JS_RULES.len() + TS_EXTRA_RULES.len());
        // JS rules come first, in declaration order
        for (a, b) in ts.iter().zip(JS_RULES.iter()) {
            assert_eq!(a.pattern, b.pattern);
            assert_eq!(a.feature_id, b.feature_id);
        }
    }

    #[test]
    fn test_all_patterns_compile() {
        let all = CSS_RULES
            .iter()
            .chain(HTML_RULES.iter())
            .chain(ts_rules());
        for def in all {
            let compiled = RegexBuilder::new(def.pattern)
                .case_insensitive(true)
                .build();
            assert!(
                compiled.is_ok(),
                "pattern {:?} for {} failed to compile",
                def.pattern,
                def.feature_id
            );
        }
    }

    #[test]
    fn test_find_all_rules_present() {
        let find_all: Vec<_> = HTML_RULES
            .iter()
            .chain(JS_RULES.iter())
            .filter(|r| r.find_all)
            .map(|r| r.feature_id)
            .collect();
        assert!(find_all.contains(&"dataset"));
        assert!(find_all.contains(&"async-await"));
        assert!(find_all.contains(&"spread"));
    }
}
