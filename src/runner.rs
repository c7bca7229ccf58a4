//! Test runner
//!
//! Three sequential phases, each run exactly once: `setup` opens the
//! remote session, `run_test` performs the search and the title check,
//! `teardown` releases the session. `execute` drives all three and
//! guarantees teardown on every exit path, including when setup only
//! partially succeeded or the title check failed.

use std::time::Instant;

use tracing::{error, info};

use crate::config::SearchTestConfig;
use crate::search::SearchActions;
use crate::session::{RemoteSession, SessionError};

/// Outcome of one smoke-test run
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    pub passed: bool,
    pub query: String,
    pub title: Option<String>,
    pub error: Option<String>,
    pub duration_ms: u64,
}

impl TestReport {
    /// Process exit code for the invoking harness
    pub fn exit_code(&self) -> i32 {
        if self.passed {
            0
        } else {
            1
        }
    }
}

/// Drives the smoke test: setup, run_test, teardown
pub struct TestRunner {
    config: SearchTestConfig,
    session: Option<RemoteSession>,
}

impl TestRunner {
    /// Create a runner for the given scenario
    pub fn new(config: SearchTestConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Open the remote session against the hub.
    ///
    /// Fails with `ConnectionFailed` when the hub is unreachable or
    /// rejects the capability request; never retried. When this fails,
    /// `run_test` is not invoked.
    pub async fn setup(&mut self) -> Result<(), SessionError> {
        let session = RemoteSession::connect(&self.config).await?;
        self.session = Some(session);
        Ok(())
    }

    /// Navigate to the start page, submit the query, verify the title.
    ///
    /// Returns the results page title on success.
    pub async fn run_test(&mut self) -> Result<String, SessionError> {
        let session = self.session.as_ref().ok_or_else(|| {
            SessionError::Protocol("run_test called without an open session".to_string())
        })?;

        session.navigate(&self.config.start_url).await?;
        SearchActions::submit_query(session, &self.config.query).await?;
        SearchActions::verify_title(session, &self.config.query).await
    }

    /// Release the remote session if one exists.
    ///
    /// Safe no-op when no session was ever created or it was already
    /// released; the hub must never be left holding a browser node.
    pub async fn teardown(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close().await;
        }
    }

    /// Run setup, run_test and teardown in strict sequence, teardown
    /// unconditionally, and fold the outcome into a report instead of
    /// panicking.
    pub async fn execute(mut self) -> TestReport {
        let started = Instant::now();
        let query = self.config.query.clone();

        let result = match self.setup().await {
            Ok(()) => self.run_test().await,
            Err(e) => Err(e),
        };

        // Teardown runs regardless of what setup or run_test produced
        self.teardown().await;

        let duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(title) => {
                info!("Search smoke test passed in {}ms", duration_ms);
                TestReport {
                    passed: true,
                    query,
                    title: Some(title),
                    error: None,
                    duration_ms,
                }
            }
            Err(e) => {
                error!("Search smoke test failed after {}ms: {}", duration_ms, e);
                TestReport {
                    passed: false,
                    query,
                    title: None,
                    error: Some(e.to_string()),
                    duration_ms,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_teardown_without_setup_is_noop() {
        let mut runner = TestRunner::new(SearchTestConfig::default());
        // No session was ever created; both calls must be safe
        runner.teardown().await;
        runner.teardown().await;
    }

    #[tokio::test]
    async fn test_run_test_without_setup_fails() {
        let mut runner = TestRunner::new(SearchTestConfig::default());
        let err = runner.run_test().await.unwrap_err();
        assert!(matches!(err, SessionError::Protocol(_)));
    }

    #[test]
    fn test_exit_codes() {
        let passed = TestReport {
            passed: true,
            query: "q".to_string(),
            title: Some("q - Google Search".to_string()),
            error: None,
            duration_ms: 12,
        };
        assert_eq!(passed.exit_code(), 0);

        let failed = TestReport {
            passed: false,
            query: "q".to_string(),
            title: None,
            error: Some("Assertion failed: title mismatch".to_string()),
            duration_ms: 12,
        };
        assert_eq!(failed.exit_code(), 1);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = TestReport {
            passed: true,
            query: "q".to_string(),
            title: None,
            error: None,
            duration_ms: 3,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["passed"], true);
        assert_eq!(json["durationMs"], 3);
        assert!(json["title"].is_null());
    }
}
