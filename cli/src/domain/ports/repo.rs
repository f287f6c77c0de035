//! Local repository port trait

use async_trait::async_trait;

use crate::error::RepoError;

/// Port trait for reading and mutating the local checkout
#[async_trait]
pub trait Repo: std::fmt::Debug + Send + Sync {
    /// The remote origin URL the checkout tracks
    async fn origin(&self) -> Result<String, RepoError>;

    /// Create a tag named `version` carrying `message`
    async fn tag(&self, version: &str, message: &str) -> Result<(), RepoError>;

    /// Push local state, commits and tags, to the remote
    async fn sync(&self) -> Result<(), RepoError>;
}
