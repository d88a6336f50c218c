// src/core/scanner/meta_scanner.rs

use scraper::{Html, Selector};
use tracing::debug;

use crate::core::knowledge_base::META_REFRESH_REDIRECT;

/// Flags meta refresh directives that carry an embedded redirect target:
/// `http-equiv` equal to "refresh" (case-insensitive) with a `content`
/// whose lowercased form contains "url".
pub fn detect_meta_refresh(document: &Html) -> Option<&'static str> {
    let selector = Selector::parse("meta").ok()?;
    for meta in document.select(&selector) {
        let http_equiv = meta.value().attr("http-equiv").unwrap_or("");
        if !http_equiv.eq_ignore_ascii_case("refresh") {
            continue;
        }
        let content = meta.value().attr("content").unwrap_or("");
        if content.to_lowercase().contains("url") {
            debug!(content, "Meta refresh with an embedded redirect target.");
            return Some(META_REFRESH_REDIRECT);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(html: &str) -> Option<&'static str> {
        detect_meta_refresh(&Html::parse_document(html))
    }

    #[test]
    fn refresh_with_target_is_flagged() {
        let html = r#"<html><head>
            <meta http-equiv="refresh" content="0; URL=http://evil.test/">
            </head></html>"#;
        assert_eq!(detect(html), Some(META_REFRESH_REDIRECT));
    }

    #[test]
    fn http_equiv_match_is_case_insensitive() {
        let html = r#"<html><head>
            <meta http-equiv="Refresh" content="5; url=/next">
            </head></html>"#;
        assert_eq!(detect(html), Some(META_REFRESH_REDIRECT));
    }

    #[test]
    fn refresh_without_target_passes() {
        let html = r#"<html><head><meta http-equiv="refresh" content="30"></head></html>"#;
        assert_eq!(detect(html), None);
    }

    #[test]
    fn refresh_without_content_passes() {
        let html = r#"<html><head><meta http-equiv="refresh"></head></html>"#;
        assert_eq!(detect(html), None);
    }

    #[test]
    fn ordinary_meta_tags_pass() {
        let html = r#"<html><head>
            <meta charset="utf-8">
            <meta name="description" content="url shortener for everyone">
            </head></html>"#;
        assert_eq!(detect(html), None);
    }
}
