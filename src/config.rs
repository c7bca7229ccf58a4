//! Test configuration
//!
//! Every parameter of the smoke test is a literal constant baked into
//! `Default` - there are no CLI flags, environment variables or config
//! files in this version. The builder setters exist for tests and for
//! pointing the scenario at a locally running hub.

use thirtyfour::{Capabilities, DesiredCapabilities};
use url::Url;

use crate::session::SessionError;

/// Configuration for the grid search smoke test
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTestConfig {
    /// Selenium Grid hub endpoint
    pub hub_url: String,
    /// Browser to request from the hub ("chrome" or "firefox")
    pub browser: String,
    /// Page the search starts from
    pub start_url: String,
    /// Search query; the resulting page title must contain it verbatim
    pub query: String,
}

impl Default for SearchTestConfig {
    fn default() -> Self {
        Self {
            hub_url: "http://selenium-hub:4444/wd/hub".to_string(),
            browser: "chrome".to_string(),
            start_url: "https://www.google.com".to_string(),
            query: "GitLab CI Maven Selenium".to_string(),
        }
    }
}

impl SearchTestConfig {
    /// Set hub endpoint
    pub fn hub_url(mut self, hub_url: impl Into<String>) -> Self {
        self.hub_url = hub_url.into();
        self
    }

    /// Set browser name
    pub fn browser(mut self, browser: impl Into<String>) -> Self {
        self.browser = browser.into();
        self
    }

    /// Set start URL
    pub fn start_url(mut self, start_url: impl Into<String>) -> Self {
        self.start_url = start_url.into();
        self
    }

    /// Set search query
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Build the capability descriptor sent with the session request.
    ///
    /// Unknown browser names fall back to chrome rather than failing here;
    /// the hub is the authority on what it can actually provide.
    pub fn capabilities(&self) -> Capabilities {
        match self.browser.as_str() {
            "firefox" => DesiredCapabilities::firefox().into(),
            _ => DesiredCapabilities::chrome().into(),
        }
    }

    /// Check the hub endpoint is a well-formed http(s) URL before any
    /// network I/O happens.
    pub fn validate(&self) -> Result<(), SessionError> {
        let parsed = Url::parse(&self.hub_url)
            .map_err(|e| SessionError::ConnectionFailed(format!("invalid hub URL '{}': {}", self.hub_url, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(SessionError::ConnectionFailed(format!(
                "unsupported hub URL scheme '{}' in '{}'",
                other, self.hub_url
            ))),
        }
    }
}
