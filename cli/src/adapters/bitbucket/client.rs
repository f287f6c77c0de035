//! Bitbucket Cloud API client implementation

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::domain::entities::Issue;
use crate::domain::ports::{HostClient, Repo};
use crate::error::HostError;

const API_BASE: &str = "https://api.bitbucket.org/2.0";
const WEB_BASE: &str = "https://bitbucket.org";

/// Implementation of the Bitbucket Cloud API client
#[derive(Debug)]
pub struct BitbucketClient {
    http: Client,
    user: String,
    pass: String,
    repo_name: String,
}

impl BitbucketClient {
    /// Build a client for the repository the origin URL points at.
    ///
    /// Credentials are attached per request as basic auth; they never
    /// appear in a URL.
    pub fn new(origin: &str, user: &str, pass: &str) -> Self {
        Self {
            http: Client::new(),
            user: user.to_string(),
            pass: pass.to_string(),
            repo_name: repo_name_from_origin(origin),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", API_BASE, path)
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

/// Normalize an origin URL into the `owner/repo` identifier.
///
/// Historical Mercurial origins carry a `.hg` suffix; exactly the last
/// three characters are dropped before trimming. An origin that does not
/// parse yields an empty identifier - no validation happens here, the
/// provider API rejects the malformed endpoint downstream.
fn repo_name_from_origin(origin: &str) -> String {
    let mut path = Url::parse(origin)
        .map(|u| u.path().to_string())
        .unwrap_or_default();

    if path.ends_with(".hg") {
        path.truncate(path.len() - 3);
    }

    path.trim_matches('/').to_string()
}

/// Bitbucket wraps result arrays in a `values` envelope
#[derive(Deserialize)]
struct Page<T> {
    values: Vec<T>,
}

#[derive(Deserialize)]
struct BitbucketIssueResponse {
    id: i64,
    title: String,
}

impl BitbucketIssueResponse {
    fn into_issue(self, repo_name: &str) -> Issue {
        Issue {
            url: format!("{}/{}/issues/{}", WEB_BASE, repo_name, self.id),
            title: self.title,
            number: self.id,
        }
    }
}

#[async_trait]
impl HostClient for BitbucketClient {
    fn repo_name(&self) -> &str {
        &self.repo_name
    }

    async fn issues(&self) -> Result<Vec<Issue>, HostError> {
        // First page only
        let resp = self
            .http
            .get(self.api_url(&format!("/repositories/{}/issues", self.repo_name)))
            .query(&[("sort", "created_on")])
            .basic_auth(&self.user, Some(&self.pass))
            .send()
            .await?;

        let page: Page<BitbucketIssueResponse> = self.handle_response(resp).await?;

        Ok(page
            .values
            .into_iter()
            .map(|raw| raw.into_issue(&self.repo_name))
            .collect())
    }

    async fn release(&self, repo: &dyn Repo, version: &str) -> Result<(), HostError> {
        repo.tag(version, &format!("Released {}", version)).await?;
        repo.sync().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{RecordingRepo, RepoCall};

    #[test]
    fn hg_suffix_is_dropped() {
        assert_eq!(
            repo_name_from_origin("https://bitbucket.org/owner/repo.hg"),
            "owner/repo"
        );
    }

    #[test]
    fn slashes_are_trimmed() {
        assert_eq!(
            repo_name_from_origin("https://bitbucket.org/owner/repo/"),
            "owner/repo"
        );
    }

    #[test]
    fn plain_origin_passes_through() {
        assert_eq!(
            repo_name_from_origin("https://user@bitbucket.org/owner/repo"),
            "owner/repo"
        );
    }

    #[test]
    fn unparseable_origin_degrades_to_empty() {
        assert_eq!(repo_name_from_origin("not a url"), "");
    }

    #[test]
    fn envelope_maps_to_issues() {
        let page: Page<BitbucketIssueResponse> = serde_json::from_value(serde_json::json!({
            "values": [{"id": 7, "title": "Bug X"}]
        }))
        .unwrap();

        let issues: Vec<Issue> = page
            .values
            .into_iter()
            .map(|raw| raw.into_issue("owner/repo"))
            .collect();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].number, 7);
        assert_eq!(issues[0].title, "Bug X");
        assert_eq!(issues[0].url, "https://bitbucket.org/owner/repo/issues/7");
    }

    #[test]
    fn empty_envelope_maps_to_no_issues() {
        let page: Page<BitbucketIssueResponse> =
            serde_json::from_value(serde_json::json!({ "values": [] })).unwrap();
        assert!(page.values.is_empty());
    }

    #[test]
    fn missing_envelope_field_is_an_error() {
        let page: Result<Page<BitbucketIssueResponse>, _> =
            serde_json::from_value(serde_json::json!({ "items": [] }));
        assert!(page.is_err());
    }

    #[tokio::test]
    async fn release_tags_then_syncs() {
        let client = BitbucketClient::new("https://bitbucket.org/owner/repo", "u", "p");
        let repo = RecordingRepo::new();

        client.release(&repo, "1.2.0").await.unwrap();

        assert_eq!(
            repo.calls(),
            vec![
                RepoCall::Tag("1.2.0".into(), "Released 1.2.0".into()),
                RepoCall::Sync,
            ]
        );
    }

    #[tokio::test]
    async fn failing_tag_skips_sync() {
        let client = BitbucketClient::new("https://bitbucket.org/owner/repo", "u", "p");
        let repo = RecordingRepo::failing_on_tag();

        let err = client.release(&repo, "1.2.0").await.unwrap_err();

        assert!(matches!(err, HostError::Repo(_)));
        assert_eq!(
            repo.calls(),
            vec![RepoCall::Tag("1.2.0".into(), "Released 1.2.0".into())]
        );
    }
}
