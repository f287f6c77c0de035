//! Adapter selection
//!
//! The broader tool supports several hosting providers and two VCSes;
//! these helpers pick the adapter pair for a given repository.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::{BitbucketClient, GitRepo, GithubClient, GitlabClient, HgRepo};
use crate::config::Config;
use crate::domain::entities::Provider;
use crate::domain::ports::{HostClient, Repo};
use crate::error::{AppError, RepoError};

/// Build the host client for the provider the origin points at
pub fn host_for_origin(origin: &str, config: &Config) -> Result<Arc<dyn HostClient>, AppError> {
    match Provider::from_origin(origin) {
        Some(Provider::Bitbucket) => {
            let (user, pass) = match (&config.bitbucket_user, &config.bitbucket_pass) {
                (Some(user), Some(pass)) => (user, pass),
                _ => {
                    return Err(AppError::MissingCredentials {
                        provider: Provider::Bitbucket.to_string(),
                        vars: "BITBUCKET_USER and BITBUCKET_PASS".to_string(),
                    })
                }
            };
            Ok(Arc::new(BitbucketClient::new(origin, user, pass)))
        }
        Some(Provider::Github) => {
            let token =
                config
                    .github_token
                    .as_ref()
                    .ok_or_else(|| AppError::MissingCredentials {
                        provider: Provider::Github.to_string(),
                        vars: "GITHUB_TOKEN".to_string(),
                    })?;
            Ok(Arc::new(GithubClient::new(origin, token)))
        }
        Some(Provider::Gitlab) => {
            let token =
                config
                    .gitlab_token
                    .as_ref()
                    .ok_or_else(|| AppError::MissingCredentials {
                        provider: Provider::Gitlab.to_string(),
                        vars: "GITLAB_TOKEN".to_string(),
                    })?;
            Ok(Arc::new(GitlabClient::new(origin, token)))
        }
        None => Err(AppError::UnsupportedOrigin(origin.to_string())),
    }
}

/// Pick the repository adapter for a checkout directory
pub fn repo_for_workdir(workdir: &Path) -> Result<Arc<dyn Repo>, AppError> {
    if workdir.join(".git").exists() {
        Ok(Arc::new(GitRepo::new(workdir)))
    } else if workdir.join(".hg").exists() {
        Ok(Arc::new(HgRepo::new(workdir)))
    } else {
        Err(AppError::Repo(RepoError::NotARepository(
            workdir.display().to_string(),
        )))
    }
}
