//! Search actions against an open remote session
//!
//! Two steps: type the query into the search box and submit it, then read
//! the title of the results page and check it contains the expected
//! substring. The check is an explicit `Result` rather than a runtime
//! assertion, so it cannot be compiled out of any build profile.

use tracing::info;

use crate::session::{RemoteSession, SessionError};

/// Google search selectors
mod selectors {
    /// The search box is located by its `name` attribute
    pub const SEARCH_INPUT_NAME: &str = "q";
}

/// Search steps for the smoke test
pub struct SearchActions;

impl SearchActions {
    /// Locate the search box by name, type the query and press Enter.
    ///
    /// A missing search box surfaces as `ElementNotFound` under the
    /// automation layer's default wait policy.
    pub async fn submit_query(session: &RemoteSession, query: &str) -> Result<(), SessionError> {
        info!("Session {} searching for '{}'", session.id(), query);

        let search_box = session.find_by_name(selectors::SEARCH_INPUT_NAME).await?;
        session.type_and_submit(&search_box, query).await?;

        Ok(())
    }

    /// Read the results page title and require it to contain `expected`.
    ///
    /// Returns the title on success so the caller can report it.
    pub async fn verify_title(
        session: &RemoteSession,
        expected: &str,
    ) -> Result<String, SessionError> {
        let title = session.title().await?;

        if title_contains(&title, expected) {
            info!("Session {} title check passed: '{}'", session.id(), title);
            Ok(title)
        } else {
            Err(SessionError::AssertionFailed(format!(
                "page title '{}' does not contain '{}'",
                title, expected
            )))
        }
    }
}

/// Case-sensitive substring containment
pub fn title_contains(title: &str, expected: &str) -> bool {
    title.contains(expected)
}
