// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;

use urlguard_rs_scanner::core::assess::run_assessment;
use urlguard_rs_scanner::core::config::ScanConfig;
use urlguard_rs_scanner::core::fetcher::HttpFetcher;
use urlguard_rs_scanner::core::knowledge_base;
use urlguard_rs_scanner::core::models::AssessmentRecord;
use urlguard_rs_scanner::logging;

/// Pre-screens a URL with cheap heuristics and prints an ordered report of
/// findings.
#[derive(Debug, Parser)]
#[command(name = "urlguard", version, about = "Assess whether a URL is safe to visit")]
struct Cli {
    /// Candidate URL to assess.
    url: String,

    /// Emit the report as a JSON record instead of plain lines.
    #[arg(long)]
    json: bool,

    /// Explain positive findings and mirror diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::initialize_logging(cli.verbose)?;

    let config = ScanConfig::load();
    let fetcher = HttpFetcher::new(&config)?;
    let report = run_assessment(&fetcher, &cli.url).await;

    if cli.json {
        let record = AssessmentRecord::new(&cli.url, report);
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    for line in report.lines() {
        println!("{line}");
    }
    if cli.verbose {
        for line in report.lines() {
            if let Some(detail) = knowledge_base::find_by_title(line) {
                println!();
                println!("[{}] {:?}", detail.category, detail.severity);
                println!("{}", detail.description);
                println!("Advice: {}", detail.advice);
            }
        }
    }
    Ok(())
}
