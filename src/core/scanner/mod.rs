// src/core/scanner/mod.rs

// Public interface of the threat scanner. One module per detector family;
// the chain below runs them in a fixed order with first-positive-wins
// semantics.
pub mod iframe_scanner;
pub mod link_scanner;
pub mod meta_scanner;
pub mod script_scanner;

use scraper::Html;
use tracing::{debug, info};

use crate::core::fetcher::Fetch;
use crate::core::knowledge_base;
use crate::core::models::Finding;

/// One content detector: inspects the parsed document and returns the
/// knowledge-base code of a positive finding, or `None`.
pub type Detector = fn(&Html) -> Option<&'static str>;

/// The fixed detector chain. Order matters: the first positive finding
/// wins and later detectors are skipped.
const DETECTORS: &[Detector] = &[
    script_scanner::detect_suspicious_scripts,
    iframe_scanner::detect_suspicious_iframes,
    link_scanner::detect_phishing_links,
    meta_scanner::detect_meta_refresh,
];

/// Retrieves `url` and scans the document for indicators of malicious or
/// deceptive content.
///
/// The scanner fetches the page itself rather than reusing the body from
/// the reachability stage. Scanning only proceeds on HTTP status exactly
/// 200: any other status is reported as a page-load finding and a
/// transport failure as a content-retrieval finding. Neither is an error
/// to the caller.
pub async fn run_scan(fetcher: &dyn Fetch, url: &str) -> Finding {
    info!(url, "Starting content scan.");
    let page = match fetcher.get(url).await {
        Ok(page) => page,
        Err(e) => {
            debug!(url, detail = e.detail(), "Scan retrieval failed.");
            return Finding::clear(format!("Failed to retrieve content: {}", e.detail()));
        }
    };
    if page.status != 200 {
        debug!(url, status = page.status, "Page did not load with status 200.");
        return Finding::clear("Error loading page");
    }

    let document = Html::parse_document(&page.body);
    for detector in DETECTORS {
        if let Some(code) = detector(&document) {
            info!(url, code, "Positive finding, stopping detector chain.");
            return Finding::threat(code, knowledge_base::title_for(code));
        }
    }
    info!(url, "No detector fired.");
    Finding::clear("No malicious content detected.")
}
