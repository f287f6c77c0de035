//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::config::Config;
use crate::domain::entities::Issue;

/// Create a test issue with default values
pub fn test_issue() -> Issue {
    Issue {
        title: "Bug X".to_string(),
        number: 7,
        url: "https://bitbucket.org/owner/repo/issues/7".to_string(),
    }
}

/// Create a test issue with a specific number
pub fn test_issue_numbered(number: i64) -> Issue {
    Issue {
        title: format!("Issue {}", number),
        number,
        url: format!("https://bitbucket.org/owner/repo/issues/{}", number),
    }
}

/// Config with every provider credential present
pub fn test_config() -> Config {
    Config {
        bitbucket_user: Some("user".to_string()),
        bitbucket_pass: Some("pass".to_string()),
        github_token: Some("gh-token".to_string()),
        gitlab_token: Some("gl-token".to_string()),
    }
}

/// Config with no credentials at all
pub fn empty_config() -> Config {
    Config {
        bitbucket_user: None,
        bitbucket_pass: None,
        github_token: None,
        gitlab_token: None,
    }
}
