// src/core/scanner/link_scanner.rs

use scraper::{Html, Selector};
use tracing::debug;

use crate::core::knowledge_base::LINK_PHISHING_KEYWORD;

/// Substrings that commonly appear in credential-harvesting link targets.
/// Matching is case-sensitive and not word-boundary aware, a known
/// over-approximation.
const PHISHING_KEYWORDS: &[&str] = &["login", "verify"];

/// Flags any anchor whose `href` contains one of the phishing keywords.
pub fn detect_phishing_links(document: &Html) -> Option<&'static str> {
    let selector = Selector::parse("a").ok()?;
    for link in document.select(&selector) {
        let href = link.value().attr("href").unwrap_or("");
        if PHISHING_KEYWORDS.iter().any(|keyword| href.contains(keyword)) {
            debug!(href, "Anchor href contains a phishing keyword.");
            return Some(LINK_PHISHING_KEYWORD);
        }
    }
    None
}
