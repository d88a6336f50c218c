// src/core/scanner/script_scanner.rs

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::core::knowledge_base::SCRIPT_SUSPICIOUS_PATTERN;

// Statically compiled patterns for script bodies that commonly appear in
// injected or obfuscated payloads.
static RE_EVAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"eval\(").unwrap());
static RE_DOCUMENT_WRITE: Lazy<Regex> = Lazy::new(|| Regex::new(r"document\.write").unwrap());
static RE_UNESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"unescape").unwrap());
static RE_SRC_ASSIGNMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.src\s*=").unwrap());
static RE_WINDOW_LOCATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"window\.location").unwrap());
static RE_BASE64: Lazy<Regex> = Lazy::new(|| Regex::new(r"base64").unwrap());

/// Patterns applied to the text content of every `<script>` element. One
/// match on one script is enough for a positive finding.
static SCRIPT_PATTERNS: &[&Lazy<Regex>] = &[
    &RE_EVAL,
    &RE_DOCUMENT_WRITE,
    &RE_UNESCAPE,
    &RE_SRC_ASSIGNMENT,
    &RE_WINDOW_LOCATION,
    &RE_BASE64,
];

/// Flags any inline script whose body matches one of the suspicious
/// patterns: dynamic code evaluation, direct document mutation, URL
/// unescaping, resource-source reassignment, navigation-location
/// reassignment, or base64 tokens.
pub fn detect_suspicious_scripts(document: &Html) -> Option<&'static str> {
    let selector = Selector::parse("script").ok()?;
    for script in document.select(&selector) {
        let body: String = script.text().collect();
        if SCRIPT_PATTERNS.iter().any(|re| re.is_match(&body)) {
            debug!("Script body matched a suspicious pattern.");
            return Some(SCRIPT_SUSPICIOUS_PATTERN);
        }
    }
    None
}
