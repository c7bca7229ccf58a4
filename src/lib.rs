//! Search Smoke
//!
//! A single end-to-end smoke test that drives a remote browser through a
//! Selenium Grid hub, performs a Google search and checks the resulting
//! page title. The hub, the WebDriver protocol and the browser itself are
//! external collaborators; this crate only sequences one session against
//! them: connect, act, assert, disconnect.

pub mod config;
pub mod runner;
pub mod search;
pub mod session;

use std::path::PathBuf;

pub use config::SearchTestConfig;
pub use runner::{TestReport, TestRunner};
pub use session::{RemoteSession, SessionError};

/// Get log directory path (shared across modules)
pub fn log_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("search-smoke").join("logs"))
}

/// Initialize logging
///
/// Console layer always, plus a daily rolling file layer when a log
/// directory is available. The returned guard must be held for the
/// lifetime of the process or buffered file output is lost.
pub fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false);

    if let Some(log_dir) = log_dir() {
        let _ = std::fs::create_dir_all(&log_dir);
        let file_appender = tracing_appender::rolling::daily(&log_dir, "search-smoke.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_writer(non_blocking);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();

        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();

        None
    }
}
