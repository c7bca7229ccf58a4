//! Search Smoke - standalone runner
//!
//! Runs the fixed scenario against the Selenium Grid hub and exits with
//! the report's code: 0 on pass, 1 on fail. The report itself is printed
//! as JSON for whatever harness invoked the binary.

use tracing::info;

use search_smoke::{SearchTestConfig, TestRunner};

#[tokio::main]
async fn main() {
    // Held until just before exit so buffered file output gets flushed
    let guard = search_smoke::init_logging();

    info!("Starting search smoke test");

    if let Some(dir) = search_smoke::log_dir() {
        info!("Log files saved to: {}", dir.display());
    }

    let config = SearchTestConfig::default();
    info!(
        "Hub: {} | start: {} | query: '{}'",
        config.hub_url, config.start_url, config.query
    );

    let report = TestRunner::new(config).execute().await;

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(_) => println!("passed: {}", report.passed),
    }

    // process::exit skips destructors; drop the guard first so the file
    // appender flushes
    drop(guard);
    std::process::exit(report.exit_code());
}
