//! System-hg implementation of the repository port

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::ports::Repo;
use crate::error::RepoError;

/// Repository checkout driven through the system `hg` binary
#[derive(Debug)]
pub struct HgRepo {
    workdir: PathBuf,
}

impl HgRepo {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<String, RepoError> {
        let command = format!("hg {}", args.join(" "));

        let output = Command::new("hg")
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
impl Repo for HgRepo {
    async fn origin(&self) -> Result<String, RepoError> {
        match self.run(&["paths", "default"]).await {
            Ok(origin) if !origin.is_empty() => Ok(origin),
            Ok(_) => Err(RepoError::OriginNotConfigured),
            // `hg paths default` exits 1 when no default path exists
            Err(RepoError::CommandFailed { .. }) => Err(RepoError::OriginNotConfigured),
            Err(e) => Err(e),
        }
    }

    async fn tag(&self, version: &str, message: &str) -> Result<(), RepoError> {
        // An hg tag is itself a commit carrying the message
        self.run(&["tag", "-m", message, version]).await?;
        Ok(())
    }

    async fn sync(&self) -> Result<(), RepoError> {
        self.run(&["push"]).await?;
        Ok(())
    }
}
