//! Repository-host client port trait
//!
//! One adapter per hosting provider implements this interface. Each
//! adapter owns its provider's URL construction and response unwrapping
//! rules; callers only see domain [`Issue`] values.

use async_trait::async_trait;

use crate::domain::entities::Issue;
use crate::domain::ports::Repo;
use crate::error::HostError;

/// Port trait for repository-host operations
#[async_trait]
pub trait HostClient: std::fmt::Debug + Send + Sync {
    /// The canonical `owner/repo` identifier this client addresses
    fn repo_name(&self) -> &str;

    /// List open issues, preserving the provider's creation order
    async fn issues(&self) -> Result<Vec<Issue>, HostError>;

    /// Submit a release: tag the repository as `version`, then sync it out.
    ///
    /// The tag carries the message `Released {version}`. There is no
    /// rollback: a tag that lands before a failing sync stays.
    async fn release(&self, repo: &dyn Repo, version: &str) -> Result<(), HostError>;
}
