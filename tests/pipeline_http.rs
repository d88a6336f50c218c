//! End-to-end pipeline tests: a local HTTP fixture server, the production
//! reqwest fetcher, and the full report protocol.

mod common;

use std::net::TcpListener;

use urlguard_rs_scanner::core::assess::run_assessment;
use urlguard_rs_scanner::core::config::ScanConfig;
use urlguard_rs_scanner::core::fetcher::HttpFetcher;

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(&ScanConfig::default()).expect("client")
}

#[tokio::test]
async fn clean_page_produces_the_full_report() {
    let url = common::page_server::start(200, "<html><body><p>hello</p></body></html>");
    let report = run_assessment(&fetcher(), &url).await;
    assert_eq!(
        report.lines(),
        ["Valid URL", "Request successful", "No malicious content detected."]
    );
}

#[tokio::test]
async fn malicious_script_page_is_flagged() {
    let url = common::page_server::start(
        200,
        "<html><head><script>document.write(unescape('%3Cdiv%3E'))</script></head></html>",
    );
    let report = run_assessment(&fetcher(), &url).await;
    assert_eq!(
        report.lines(),
        ["Valid URL", "Request successful", "Suspicious script detected"]
    );
}

#[tokio::test]
async fn hidden_iframe_page_is_flagged() {
    let url = common::page_server::start(
        200,
        r#"<html><body><iframe style="display:none" src="http://evil.test"></iframe></body></html>"#,
    );
    let report = run_assessment(&fetcher(), &url).await;
    assert_eq!(
        report.lines(),
        ["Valid URL", "Request successful", "Hidden iframe detected"]
    );
}

#[tokio::test]
async fn not_found_page_is_a_request_failure() {
    let url = common::page_server::start(404, "<html>missing</html>");
    let report = run_assessment(&fetcher(), &url).await;
    assert_eq!(
        report.lines(),
        [
            "Valid URL".to_string(),
            format!("Request error: HTTP status 404 for {}", url)
        ]
    );
}

#[tokio::test]
async fn refused_connection_is_a_connection_failure() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{}/", port);
    let report = run_assessment(&fetcher(), &url).await;
    assert_eq!(
        report.lines(),
        ["Valid URL", "Connection error: Could not connect to the URL."]
    );
}

#[tokio::test]
async fn invalid_candidate_never_reaches_the_network() {
    let report = run_assessment(&fetcher(), "no scheme at all").await;
    assert_eq!(report.lines(), ["Invalid URL"]);
}

#[tokio::test]
async fn repeated_assessments_are_byte_identical() {
    let url = common::page_server::start(
        200,
        r#"<html><body><a href="http://site.test/verify">check</a></body></html>"#,
    );
    let first = run_assessment(&fetcher(), &url).await;
    let second = run_assessment(&fetcher(), &url).await;
    assert_eq!(first, second);
    assert_eq!(
        first.lines(),
        ["Valid URL", "Request successful", "Possible phishing link detected"]
    );
}
