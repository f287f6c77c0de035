//! System-git implementation of the repository port
//!
//! Shells out to the `git` binary in the checkout directory, so the
//! user's SSH config and credential helpers apply as-is.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::ports::Repo;
use crate::error::RepoError;

/// Repository checkout driven through the system `git` binary
#[derive(Debug)]
pub struct GitRepo {
    workdir: PathBuf,
}

impl GitRepo {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<String, RepoError> {
        let command = format!("git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .await
            .map_err(|source| RepoError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RepoError::CommandFailed {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl Repo for GitRepo {
    async fn origin(&self) -> Result<String, RepoError> {
        // `git config --get` exits 1 with empty stderr when the key is unset
        match self.run(&["config", "--get", "remote.origin.url"]).await {
            Ok(origin) if !origin.is_empty() => Ok(origin),
            Ok(_) => Err(RepoError::OriginNotConfigured),
            Err(RepoError::CommandFailed { stderr, .. }) if stderr.is_empty() => {
                Err(RepoError::OriginNotConfigured)
            }
            Err(e) => Err(e),
        }
    }

    async fn tag(&self, version: &str, message: &str) -> Result<(), RepoError> {
        self.run(&["tag", "-a", version, "-m", message]).await?;
        Ok(())
    }

    async fn sync(&self) -> Result<(), RepoError> {
        // Tags do not travel with the branch push
        self.run(&["push"]).await?;
        self.run(&["push", "--tags"]).await?;
        Ok(())
    }
}
