//! Release service - orchestrates the release workflow
//!
//! Validates the version label, then drives the host adapter's two-step
//! release (tag, sync) against the local checkout.

use std::sync::Arc;

use regex::Regex;
use tracing::info;

use crate::domain::ports::{HostClient, Repo};
use crate::error::AppError;

/// Shape of an acceptable version label: semver core with an optional
/// pre-release suffix, e.g. `1.2.0`, `v1.2.0`, `2.0.0-beta.1`
const VERSION_PATTERN: &str = r"^v?\d+\.\d+\.\d+(-[0-9A-Za-z][0-9A-Za-z.-]*)?$";

/// Service for running releases against a hosting provider
pub struct ReleaseService {
    host: Arc<dyn HostClient>,
    repo: Arc<dyn Repo>,
}

impl ReleaseService {
    pub fn new(host: Arc<dyn HostClient>, repo: Arc<dyn Repo>) -> Self {
        Self { host, repo }
    }

    /// Tag and sync the repository as `version`.
    ///
    /// Validation happens before any repository mutation. Past that point
    /// failures propagate as-is; a tag created before a failing sync is
    /// not rolled back.
    pub async fn run(&self, version: &str) -> Result<(), AppError> {
        validate_version(version)?;

        info!("Releasing {} as {}", self.host.repo_name(), version);
        self.host.release(self.repo.as_ref(), version).await?;
        info!("Released {}", version);

        Ok(())
    }
}

fn validate_version(version: &str) -> Result<(), AppError> {
    let pattern = Regex::new(VERSION_PATTERN).expect("version pattern is valid");
    if pattern.is_match(version) {
        Ok(())
    } else {
        Err(AppError::InvalidVersion(version.to_string()))
    }
}
