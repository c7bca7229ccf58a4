//! End-to-end test against a running Selenium Grid hub
//!
//! Requires a hub with at least one chrome-capable node, e.g. a
//! `selenium/hub` container with a `selenium/node-chrome` attached.
//! The scenario targets the fixed endpoint from the default config;
//! point `hub_config` elsewhere when running against a local grid.
//!
//! Run with: `cargo test --test google_search -- --ignored`

use search_smoke::{RemoteSession, SearchTestConfig, TestRunner};

fn hub_config() -> SearchTestConfig {
    SearchTestConfig::default()
}

#[tokio::test]
#[ignore = "requires a running Selenium Grid hub"]
async fn test_google_search_end_to_end() {
    let report = TestRunner::new(hub_config()).execute().await;

    assert!(
        report.passed,
        "smoke test failed: {}",
        report.error.unwrap_or_default()
    );

    let title = report.title.expect("passing report carries the title");
    assert!(
        title.contains(&report.query),
        "title '{}' should contain '{}'",
        title,
        report.query
    );
}

#[tokio::test]
#[ignore = "requires a running Selenium Grid hub"]
async fn test_session_release_is_idempotent() {
    let mut session = RemoteSession::connect(&hub_config())
        .await
        .expect("hub should allocate a session");
    assert!(session.is_open());

    session.close().await;
    assert!(!session.is_open());

    // Releasing an already-closed session is a safe no-op
    session.close().await;
    assert!(!session.is_open());
}

#[tokio::test]
async fn test_unreachable_hub_fails_setup() {
    // Nothing listens on this port; setup must fail without retrying,
    // and run_test is never reached. Needs no grid, so not ignored.
    let config = hub_config().hub_url("http://127.0.0.1:45999/wd/hub");

    let report = TestRunner::new(config).execute().await;
    assert!(!report.passed);
    assert_eq!(report.exit_code(), 1);
    assert!(report.error.unwrap_or_default().contains("Failed to connect to hub"));
}
