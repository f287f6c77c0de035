//! CLI definitions for slipway
//!
//! This module contains all CLI argument parsing structures using clap.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "slipway",
    version,
    about = "Release automation for hosted repositories",
    long_about = "Lists open issues for, and releases, a repository hosted on\nBitbucket, GitHub, or GitLab, working from the checkout's remote origin."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Repository checkout to operate on
    #[arg(long, global = true, default_value = ".")]
    pub workdir: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List open issues from the hosting provider
    Issues {
        /// Origin URL override (defaults to the checkout's remote origin)
        #[arg(long)]
        remote: Option<String>,
    },

    /// Tag the repository and sync the release out
    Release {
        /// Version label to release, e.g. 1.2.0
        version: String,

        /// Origin URL override (defaults to the checkout's remote origin)
        #[arg(long)]
        remote: Option<String>,
    },
}
