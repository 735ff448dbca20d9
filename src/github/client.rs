use reqwest::{header, Client};

use crate::error::{Error, Result};
use crate::models::{Comment, NewComment};

const GITHUB_API: &str = "https://api.github.com";

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, GITHUB_API)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("token {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("GitHub-Issue-Mirror"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub async fn post_comment(
        &self,
        repo: &str,
        issue_number: u64,
        comment: &NewComment,
    ) -> Result<Comment> {
        let url = format!(
            "{}/repos/{}/issues/{}/comments",
            self.base_url, repo, issue_number
        );
        tracing::info!("Commenting on origin issue {}#{}", repo, issue_number);

        let response = self.client.post(&url).json(comment).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to comment on {}#{}: {} - {}",
                repo, issue_number, status, body
            )));
        }

        Ok(response.json().await?)
    }
}
