// src/core/assess.rs

//! The report aggregator: orchestrates validation, retrieval, and scanning
//! for one candidate URL.

use tracing::info;

use crate::core::fetcher::{self, Fetch};
use crate::core::models::Report;
use crate::core::{scanner, validator};

/// Runs the full assessment pipeline for one candidate URL and returns the
/// ordered report.
///
/// Stages run in sequence and short-circuit: an invalid candidate never
/// touches the network, and a failed retrieval never reaches the scanner.
/// Every outcome, including every failure, becomes a report line; this
/// function itself cannot fail.
pub async fn run_assessment(fetcher: &dyn Fetch, candidate: &str) -> Report {
    info!(url = candidate, "Starting assessment.");
    let mut report = Report::new();

    if !validator::validate(candidate) {
        report.append("Invalid URL");
        return report;
    }
    report.append("Valid URL");

    match fetcher::retrieve(fetcher, candidate).await {
        Ok(_body) => {
            // The scan stage performs its own retrieval; this body only
            // established reachability.
            report.append("Request successful");
            let finding = scanner::run_scan(fetcher, candidate).await;
            report.append(finding.message);
        }
        Err(e) => report.append(e.to_string()),
    }

    info!(url = candidate, lines = report.lines().len(), "Assessment finished.");
    report
}
