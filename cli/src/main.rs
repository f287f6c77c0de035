//! Slipway
//!
//! Release automation for repositories hosted on Bitbucket, GitHub, or
//! GitLab. Uses hexagonal (ports & adapters) architecture: one HTTP
//! adapter per hosting provider, one process-backed adapter per VCS.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod cli;
mod config;
mod domain;
mod error;

#[cfg(test)]
mod test_utils;


use app::{host_for_origin, repo_for_workdir, ReleaseService};
use cli::{Cli, Commands};
use config::Config;
use domain::ports::{HostClient, Repo};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose {
        "debug"
    } else {
        "info,slipway=debug"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let workdir = Path::new(&args.workdir);

    match args.command {
        Commands::Issues { remote } => list_issues(&config, workdir, remote).await,
        Commands::Release { version, remote } => {
            release(&config, workdir, remote, &version).await
        }
    }
}

/// Resolve the repository checkout and the host adapter for its origin
async fn connect(
    config: &Config,
    workdir: &Path,
    remote: Option<String>,
) -> Result<(Arc<dyn Repo>, Arc<dyn HostClient>)> {
    let repo = repo_for_workdir(workdir)?;

    let origin = match remote {
        Some(remote) => remote,
        None => repo
            .origin()
            .await
            .context("Failed to resolve the remote origin")?,
    };
    tracing::debug!("Using origin {}", origin);

    let host = host_for_origin(&origin, config)?;
    Ok((repo, host))
}

async fn list_issues(config: &Config, workdir: &Path, remote: Option<String>) -> Result<()> {
    let (_repo, host) = connect(config, workdir, remote).await?;

    let issues = host.issues().await.context("Failed to list issues")?;
    if issues.is_empty() {
        println!("No open issues for {}", host.repo_name());
        return Ok(());
    }

    for issue in &issues {
        println!("#{:<6} {}", issue.number, issue.title);
        println!("        {}", issue.url);
    }

    Ok(())
}

async fn release(
    config: &Config,
    workdir: &Path,
    remote: Option<String>,
    version: &str,
) -> Result<()> {
    let (repo, host) = connect(config, workdir, remote).await?;

    ReleaseService::new(host, repo)
        .run(version)
        .await
        .context("Release failed")?;

    Ok(())
}
