//! Remote WebDriver session
//!
//! Wraps the one remote browser instance the hub allocates for the test.
//! The handle is held as an `Option` and taken on close, so releasing an
//! already-closed or never-opened session is a safe no-op.

use std::sync::atomic::{AtomicU32, Ordering};

use thirtyfour::error::WebDriverError;
use thirtyfour::{By, Key, WebDriver, WebElement};
use tracing::{debug, info, warn};

use super::SessionError;
use crate::config::SearchTestConfig;

/// Global counter for sequential session naming (Session-1, Session-2, ...)
static SESSION_COUNTER: AtomicU32 = AtomicU32::new(1);

/// A remote browser session obtained from the grid hub
pub struct RemoteSession {
    /// Display name used in log messages
    id: String,
    /// The remote browser handle; `None` once released
    driver: Option<WebDriver>,
}

impl RemoteSession {
    /// Open a remote session against the hub named in `config`.
    ///
    /// Sends the capability descriptor and blocks until the hub either
    /// allocates a matching browser node or refuses. Failures are not
    /// retried; an unreachable hub surfaces as `ConnectionFailed`.
    pub async fn connect(config: &SearchTestConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let id = format!("Session-{}", SESSION_COUNTER.fetch_add(1, Ordering::Relaxed));

        info!(
            "Session {} connecting to hub {} (browser: {})",
            id, config.hub_url, config.browser
        );

        let driver = WebDriver::new(&config.hub_url, config.capabilities())
            .await
            .map_err(|e| SessionError::ConnectionFailed(e.to_string()))?;

        info!("Session {} established", id);

        Ok(Self {
            id,
            driver: Some(driver),
        })
    }

    /// Get session ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the remote handle is still held
    pub fn is_open(&self) -> bool {
        self.driver.is_some()
    }

    fn driver(&self) -> Result<&WebDriver, SessionError> {
        self.driver
            .as_ref()
            .ok_or_else(|| SessionError::Protocol("session already released".to_string()))
    }

    /// Navigate to a URL
    pub async fn navigate(&self, url: &str) -> Result<(), SessionError> {
        let driver = self.driver()?;

        debug!("Session {} navigating to: {}", self.id, url);
        driver
            .goto(url)
            .await
            .map_err(|e| SessionError::NavigationFailed(e.to_string()))?;

        Ok(())
    }

    /// Find the element whose `name` attribute equals `name`.
    ///
    /// Lookup runs under the automation layer's default wait policy - no
    /// implicit-wait override is applied.
    pub async fn find_by_name(&self, name: &str) -> Result<WebElement, SessionError> {
        let driver = self.driver()?;

        driver.find(By::Name(name)).await.map_err(|e| match &e {
            WebDriverError::NoSuchElement(_) => {
                SessionError::ElementNotFound(format!("name='{}': {}", name, e))
            }
            _ => SessionError::Protocol(e.to_string()),
        })
    }

    /// Send a text payload to an element followed by the Enter key
    pub async fn type_and_submit(
        &self,
        element: &WebElement,
        text: &str,
    ) -> Result<(), SessionError> {
        debug!("Session {} sending keys: {}", self.id, text);

        let mut keys = text.to_string();
        keys.push(char::from(Key::Enter));

        element
            .send_keys(keys)
            .await
            .map_err(|e| SessionError::Protocol(e.to_string()))?;

        Ok(())
    }

    /// Read the current page title
    pub async fn title(&self) -> Result<String, SessionError> {
        let driver = self.driver()?;

        driver
            .title()
            .await
            .map_err(|e| SessionError::Protocol(e.to_string()))
    }

    /// Release the remote session.
    ///
    /// Quit failures are logged and swallowed - teardown must never mask
    /// the test result. No-op when the session was already released.
    pub async fn close(&mut self) {
        if let Some(driver) = self.driver.take() {
            match driver.quit().await {
                Ok(()) => info!("Session {} released", self.id),
                Err(e) => warn!("Session {} failed to quit cleanly: {}", self.id, e),
            }
        } else {
            debug!("Session {} already released, nothing to do", self.id);
        }
    }
}
