use reqwest::{header, Client};

use crate::error::{Error, Result};
use crate::models::{CreatedIssue, LabelUpdate, NewIssue};

const CODEBERG_API: &str = "https://codeberg.org/api/v1";

pub struct CodebergClient {
    client: Client,
    base_url: String,
}

impl CodebergClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, CODEBERG_API)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("token {}", token))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub async fn create_issue(&self, repo: &str, issue: &NewIssue) -> Result<CreatedIssue> {
        let url = format!("{}/repos/{}/issues", self.base_url, repo);
        tracing::info!("Creating mirror issue in {}", repo);

        let response = self.client.post(&url).json(issue).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::CodebergApi(format!(
                "Failed to create issue in {}: {} - {}",
                repo, status, body
            )));
        }

        Ok(response.json().await?)
    }

    pub async fn set_labels(&self, repo: &str, number: u64, update: &LabelUpdate) -> Result<()> {
        let url = format!("{}/repos/{}/issues/{}/labels", self.base_url, repo, number);
        tracing::info!("Labeling mirror issue {}#{}", repo, number);

        let response = self.client.post(&url).json(update).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::CodebergApi(format!(
                "Failed to label issue {}#{}: {} - {}",
                repo, number, status, body
            )));
        }

        Ok(())
    }
}
