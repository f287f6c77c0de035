//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::{header, Client, Method, Url};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Issue;
use crate::domain::ports::{HostClient, Repo};
use crate::error::HostError;

const API_BASE: &str = "https://api.github.com";

/// Implementation of the GitHub API client
#[derive(Debug)]
pub struct GithubClient {
    http: Client,
    token: String,
    repo_name: String,
}

impl GithubClient {
    pub fn new(origin: &str, token: &str) -> Self {
        Self {
            http: Client::new(),
            token: token.to_string(),
            repo_name: repo_name_from_origin(origin),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", API_BASE, path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.api_url(path))
            // GitHub rejects requests without a User-Agent
            .header(header::USER_AGENT, "slipway")
            .header(header::AUTHORIZATION, format!("token {}", self.token))
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, HostError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| HostError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(HostError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(HostError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(HostError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), HostError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(HostError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(HostError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(HostError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Normalize an origin URL into the `owner/repo` identifier.
///
/// Git origins commonly carry a `.git` suffix; it is dropped before
/// trimming. An unparseable origin degrades to an empty identifier.
fn repo_name_from_origin(origin: &str) -> String {
    let mut path = Url::parse(origin)
        .map(|u| u.path().to_string())
        .unwrap_or_default();

    if path.ends_with(".git") {
        path.truncate(path.len() - 4);
    }

    path.trim_matches('/').to_string()
}

/// GitHub returns issue arrays bare, with no envelope
#[derive(Deserialize)]
struct GithubIssueResponse {
    number: i64,
    title: String,
    html_url: String,
}

impl From<GithubIssueResponse> for Issue {
    fn from(r: GithubIssueResponse) -> Self {
        Issue {
            title: r.title,
            number: r.number,
            url: r.html_url,
        }
    }
}

#[derive(Serialize)]
struct CreateReleaseRequest<'a> {
    tag_name: &'a str,
    name: &'a str,
}

#[async_trait]
impl HostClient for GithubClient {
    fn repo_name(&self) -> &str {
        &self.repo_name
    }

    async fn issues(&self) -> Result<Vec<Issue>, HostError> {
        let resp = self
            .request(Method::GET, &format!("/repos/{}/issues", self.repo_name))
            .query(&[("sort", "created"), ("direction", "asc")])
            .send()
            .await?;

        let raw: Vec<GithubIssueResponse> = self.handle_response(resp).await?;
        Ok(raw.into_iter().map(Issue::from).collect())
    }

    async fn release(&self, repo: &dyn Repo, version: &str) -> Result<(), HostError> {
        repo.tag(version, &format!("Released {}", version)).await?;
        repo.sync().await?;

        // Publish the pushed tag as a GitHub release object
        let resp = self
            .request(Method::POST, &format!("/repos/{}/releases", self.repo_name))
            .json(&CreateReleaseRequest {
                tag_name: version,
                name: version,
            })
            .send()
            .await?;

        self.handle_empty_response(resp).await
    }
}
