//! Mock implementations of port traits
//!
//! Recording mocks: they store the calls they receive so tests can verify
//! ordering, and can be configured to fail at a chosen operation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::Issue;
use crate::domain::ports::{HostClient, Repo};
use crate::error::{HostError, RepoError};

/// A call observed by [`RecordingRepo`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    Origin,
    Tag(String, String),
    Sync,
}

/// Repository mock that records calls in order
#[derive(Debug, Default)]
pub struct RecordingRepo {
    calls: Arc<Mutex<Vec<RepoCall>>>,
    origin: Option<String>,
    fail_on_tag: bool,
    fail_on_sync: bool,
}

impl RecordingRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(origin: &str) -> Self {
        Self {
            origin: Some(origin.to_string()),
            ..Self::default()
        }
    }

    /// Mock whose `tag` fails after recording the call
    pub fn failing_on_tag() -> Self {
        Self {
            fail_on_tag: true,
            ..Self::default()
        }
    }

    /// Mock whose `sync` fails after `tag` succeeded
    pub fn failing_on_sync() -> Self {
        Self {
            fail_on_sync: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RepoCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn command_failed(op: &str) -> RepoError {
        RepoError::CommandFailed {
            command: op.to_string(),
            stderr: "mock failure".to_string(),
        }
    }
}

#[async_trait]
impl Repo for RecordingRepo {
    async fn origin(&self) -> Result<String, RepoError> {
        self.record(RepoCall::Origin);
        self.origin.clone().ok_or(RepoError::OriginNotConfigured)
    }

    async fn tag(&self, version: &str, message: &str) -> Result<(), RepoError> {
        self.record(RepoCall::Tag(version.to_string(), message.to_string()));
        if self.fail_on_tag {
            return Err(Self::command_failed("tag"));
        }
        Ok(())
    }

    async fn sync(&self) -> Result<(), RepoError> {
        self.record(RepoCall::Sync);
        if self.fail_on_sync {
            return Err(Self::command_failed("sync"));
        }
        Ok(())
    }
}

/// Host mock returning a fixed issue list and recording released versions
#[derive(Debug, Default)]
pub struct MockHostClient {
    repo_name: String,
    issues: Vec<Issue>,
    releases: Arc<Mutex<Vec<String>>>,
}

impl MockHostClient {
    pub fn new(repo_name: &str) -> Self {
        Self {
            repo_name: repo_name.to_string(),
            ..Self::default()
        }
    }

    /// Pre-populate the issue list for `issues()` to return
    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = issues;
        self
    }

    pub fn releases(&self) -> Vec<String> {
        self.releases.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostClient for MockHostClient {
    fn repo_name(&self) -> &str {
        &self.repo_name
    }

    async fn issues(&self) -> Result<Vec<Issue>, HostError> {
        Ok(self.issues.clone())
    }

    async fn release(&self, repo: &dyn Repo, version: &str) -> Result<(), HostError> {
        repo.tag(version, &format!("Released {}", version)).await?;
        repo.sync().await?;
        self.releases.lock().unwrap().push(version.to_string());
        Ok(())
    }
}
