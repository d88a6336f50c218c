// src/core/scanner/iframe_scanner.rs

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::core::knowledge_base::{IFRAME_HIDDEN, IFRAME_UNTRUSTED_SOURCE};

/// Iframes whose `src` contains this substring are considered first-party.
/// Everything else is flagged, including ordinary third-party embeds; the
/// over-approximation is deliberate.
pub const TRUSTED_SOURCE_DOMAIN: &str = "example.com";

static RE_ABSOLUTE_POSITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"position:\s*absolute;").unwrap());

/// Flags iframes styled to be invisible, then iframes pointing outside the
/// trusted domain. For each element the style check runs first; either
/// check alone short-circuits the whole scan. Absent attributes are read
/// as empty strings, so an iframe with no `src` counts as untrusted.
pub fn detect_suspicious_iframes(document: &Html) -> Option<&'static str> {
    let selector = Selector::parse("iframe").ok()?;
    for iframe in document.select(&selector) {
        let style = iframe.value().attr("style").unwrap_or("");
        if style.contains("display:none") || RE_ABSOLUTE_POSITION.is_match(style) {
            debug!(style, "Iframe with hidden styling.");
            return Some(IFRAME_HIDDEN);
        }
        let src = iframe.value().attr("src").unwrap_or("");
        if !src.contains(TRUSTED_SOURCE_DOMAIN) {
            debug!(src, "Iframe source outside the trusted domain.");
            return Some(IFRAME_UNTRUSTED_SOURCE);
        }
    }
    None
}
