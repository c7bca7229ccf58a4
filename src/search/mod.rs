//! Google search steps
//!
//! The actions the test performs inside an open session: submit the query
//! through the search box and verify the resulting page title.

mod actions;

pub use actions::{title_contains, SearchActions};
