//! Issue domain entity
//!
//! Issues live on the repository host (source of truth). This entity is
//! the tool's view of one: enough to list it and link to it.

use serde::{Deserialize, Serialize};

/// An open issue on the repository host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Title, verbatim from the provider
    pub title: String,
    /// Provider-assigned issue number
    pub number: i64,
    /// Web link to the issue
    pub url: String,
}
