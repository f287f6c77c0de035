//! Adapters layer
//!
//! Implementations of port traits for external systems: one HTTP client
//! per hosting provider, one process-backed repository per VCS.

pub mod bitbucket;
pub mod git;
pub mod github;
pub mod gitlab;
pub mod hg;

pub use bitbucket::BitbucketClient;
pub use git::GitRepo;
pub use github::GithubClient;
pub use gitlab::GitlabClient;
pub use hg::HgRepo;
