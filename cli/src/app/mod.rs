//! Application layer
//!
//! Coordinates domain ports and adapters: picking the right adapter for a
//! repository, and running the release workflow.

pub mod factory;
pub mod release_service;

pub use factory::{host_for_origin, repo_for_workdir};
pub use release_service::ReleaseService;
