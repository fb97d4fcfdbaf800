//! FeatureCortex - Web feature detection via regex rule tables
//!
//! Scans a single line of source text against one dialect table
//! (CSS / JS / HTML / TS) and reports every feature signature found,
//! with character spans for highlighting.
//!
//! # Features
//! - One dialect table per scan, selected by language tag
//! - Unknown tags fall back to the JavaScript table
//! - Rules are evaluated independently; no short-circuiting, no dedup
//! - Case-insensitive throughout
//! - A rule that fails to compile is dropped, the rest keep working

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::rules::{self, RuleDef};
use crate::log_warn;

// ==================== TYPE DEFINITIONS ====================

/// Source language dialect for a scan
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum Language {
    Css,
    Html,
    Javascript,
    Typescript,
    /// Anything else - scanned with the JavaScript table
    Other,
}

impl Language {
    /// Map an editor language-id string to a dialect.
    /// Unrecognized tags become [`Language::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "css" => Language::Css,
            "html" => Language::Html,
            "typescript" => Language::Typescript,
            "javascript" => Language::Javascript,
            _ => Language::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Css => "css",
            Language::Html => "html",
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Other => "other",
        }
    }
}

/// A single feature match result
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FeatureMatch {
    pub feature_id: String,
    pub start: usize,
    pub end: usize,
    pub matched_text: String,
}

/// Statistics about the compiled rule tables
#[derive(Serialize, Deserialize)]
pub struct DetectorStats {
    pub css_rules: usize,
    pub js_rules: usize,
    pub html_rules: usize,
    pub ts_rules: usize,
    pub dropped_rules: usize,
}

/// A rule with its pattern compiled
struct CompiledRule {
    regex: Regex,
    feature_id: &'static str,
    find_all: bool,
}

// ==================== MAIN IMPLEMENTATION ====================

/// FeatureCortex - web feature detector
///
/// Compiles the dialect tables once at construction; each scan is a
/// pure function of (line, language).
#[wasm_bindgen]
pub struct FeatureCortex {
    css: Vec<CompiledRule>,
    html: Vec<CompiledRule>,
    js: Vec<CompiledRule>,
    ts: Vec<CompiledRule>,
    dropped: usize,
}

impl FeatureCortex {
    /// Detect web features on a single line of source text.
    ///
    /// Results preserve rule declaration order, then left-to-right
    /// position within a rule. Consumers must not assume dedup.
    pub fn detect(&self, line: &str, language: Language) -> Vec<FeatureMatch> {
        let table = match language {
            Language::Css => &self.css,
            Language::Html => &self.html,
            Language::Typescript => &self.ts,
            Language::Javascript | Language::Other => &self.js,
        };

        let mut matches = Vec::new();
        for rule in table {
            scan_rule(rule, line, &mut matches);
        }
        matches
    }

    fn compile_table<'a>(
        defs: impl Iterator<Item = &'a RuleDef>,
        dropped: &mut usize,
    ) -> Vec<CompiledRule> {
        let mut compiled = Vec::new();
        for def in defs {
            match RegexBuilder::new(def.pattern).case_insensitive(true).build() {
                Ok(regex) => compiled.push(CompiledRule {
                    regex,
                    feature_id: def.feature_id,
                    find_all: def.find_all,
                }),
                Err(e) => {
                    *dropped += 1;
                    log_warn(&format!(
                        "[FeatureCortex] Dropped rule for {}: {}",
                        def.feature_id, e
                    ));
                }
            }
        }
        compiled
    }
}

/// Scan one rule against the full line.
///
/// Stateless offset scanning: after a zero-width match the offset steps
/// past one full character, so `find_all` rules always terminate.
/// Zero-width matches are not reported (spans must satisfy start < end).
fn scan_rule(rule: &CompiledRule, line: &str, out: &mut Vec<FeatureMatch>) {
    let mut at = 0;
    while at <= line.len() {
        let m = match rule.regex.find_at(line, at) {
            Some(m) => m,
            None => break,
        };

        if m.end() > m.start() {
            out.push(FeatureMatch {
                feature_id: rule.feature_id.to_string(),
                start: m.start(),
                end: m.end(),
                matched_text: line[m.start()..m.end()].to_string(),
            });
        }

        if !rule.find_all {
            break;
        }

        at = if m.end() > m.start() {
            m.end()
        } else {
            match line[m.end()..].chars().next() {
                Some(c) => m.end() + c.len_utf8(),
                None => break,
            }
        };
    }
}

#[wasm_bindgen]
impl FeatureCortex {
    /// Create a new FeatureCortex with all dialect tables compiled
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut dropped = 0;
        let css = Self::compile_table(rules::CSS_RULES.iter(), &mut dropped);
        let html = Self::compile_table(rules::HTML_RULES.iter(), &mut dropped);
        let js = Self::compile_table(rules::JS_RULES.iter(), &mut dropped);
        let ts = Self::compile_table(rules::ts_rules(), &mut dropped);

        Self { css, html, js, ts, dropped }
    }

    /// Detect web features on a single line (JS)
    ///
    /// Returns an array of FeatureMatch objects. Never throws; on an
    /// internal failure the result is an empty array.
    #[wasm_bindgen(js_name = detect)]
    pub fn js_detect(&self, line: &str, language_tag: &str) -> JsValue {
        let matches = self.detect(line, Language::from_tag(language_tag));
        serde_wasm_bindgen::to_value(&matches)
            .unwrap_or_else(|_| js_sys::Array::new().into())
    }

    /// Get rule table statistics
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> JsValue {
        let stats = DetectorStats {
            css_rules: self.css.len(),
            js_rules: self.js.len(),
            html_rules: self.html.len(),
            ts_rules: self.ts.len(),
            dropped_rules: self.dropped,
        };
        serde_wasm_bindgen::to_value(&stats).unwrap_or(JsValue::NULL)
    }
}

impl Default for FeatureCortex {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== TESTS ====================
