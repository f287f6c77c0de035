use std::env;

#[derive(Clone)]
pub struct Config {
    /// Bitbucket Cloud username for API basic auth
    pub bitbucket_user: Option<String>,
    /// Bitbucket app password paired with the username
    pub bitbucket_pass: Option<String>,
    /// GitHub personal access token
    pub github_token: Option<String>,
    /// GitLab personal access token
    pub gitlab_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            bitbucket_user: env::var("BITBUCKET_USER").ok(),
            bitbucket_pass: env::var("BITBUCKET_PASS").ok(),
            github_token: env::var("GITHUB_TOKEN").ok(),
            gitlab_token: env::var("GITLAB_TOKEN").ok(),
        }
    }
}
