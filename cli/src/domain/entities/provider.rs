//! Repository hosting providers

use std::fmt;
use std::str::FromStr;

/// A hosting provider the tool has an adapter for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Bitbucket,
    Github,
    Gitlab,
}

impl Provider {
    /// Detect the provider from a remote origin URL
    pub fn from_origin(origin: &str) -> Option<Self> {
        if origin.contains("bitbucket.org") {
            Some(Provider::Bitbucket)
        } else if origin.contains("github.com") {
            Some(Provider::Github)
        } else if origin.contains("gitlab.com") {
            Some(Provider::Gitlab)
        } else {
            None
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Bitbucket => write!(f, "bitbucket"),
            Provider::Github => write!(f, "github"),
            Provider::Gitlab => write!(f, "gitlab"),
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bitbucket" => Ok(Provider::Bitbucket),
            "github" => Ok(Provider::Github),
            "gitlab" => Ok(Provider::Gitlab),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}
