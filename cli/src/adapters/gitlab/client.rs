//! GitLab API client implementation

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::Issue;
use crate::domain::ports::{HostClient, Repo};
use crate::error::HostError;

const API_BASE: &str = "https://gitlab.com/api/v4";

/// Implementation of the GitLab API client
#[derive(Debug)]
pub struct GitlabClient {
    http: Client,
    token: String,
    repo_name: String,
}

impl GitlabClient {
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

    /// GitLab addresses projects by their URL-encoded full path
    fn project_path(&self) -> String {
        encode(&self.repo_name).into_owned()
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
}

/// Normalize an origin URL into the `group/project` identifier.
///
/// Same rule as GitHub: drop a trailing `.git`, trim slashes, and let an
/// unparseable origin degrade to an empty identifier.
fn repo_name_from_origin(origin: &str) -> String {
    let mut path = Url::parse(origin)
        .map(|u| u.path().to_string())
        .unwrap_or_default();

    if path.ends_with(".git") {
        path.truncate(path.len() - 4);
    }

    path.trim_matches('/').to_string()
}

#[derive(Deserialize)]
struct GitlabIssueResponse {
    /// Project-scoped issue number (`id` is the instance-wide one)
    iid: i64,
    title: String,
    web_url: String,
}

impl From<GitlabIssueResponse> for Issue {
    fn from(r: GitlabIssueResponse) -> Self {
        Issue {
            title: r.title,
            number: r.iid,
            url: r.web_url,
        }
    }
}

#[async_trait]
impl HostClient for GitlabClient {
    fn repo_name(&self) -> &str {
        &self.repo_name
    }

    async fn issues(&self) -> Result<Vec<Issue>, HostError> {
        let resp = self
            .http
            .get(self.api_url(&format!("/projects/{}/issues", self.project_path())))
            .query(&[("order_by", "created_at"), ("sort", "asc")])
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?;

        let raw: Vec<GitlabIssueResponse> = self.handle_response(resp).await?;
        Ok(raw.into_iter().map(Issue::from).collect())
    }

    async fn release(&self, repo: &dyn Repo, version: &str) -> Result<(), HostError> {
        repo.tag(version, &format!("Released {}", version)).await?;
        repo.sync().await?;
        Ok(())
    }
}
