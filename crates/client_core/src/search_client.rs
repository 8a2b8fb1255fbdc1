use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::Story,
    protocol::{RequestTarget, SearchResponse},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("search endpoint returned status {0}")]
    Status(u16),
    #[error("failed to decode search response: {0}")]
    Decode(#[source] serde_json::Error),
}

#[async_trait]
pub trait StorySource: Send + Sync {
    async fn search(&self, target: &RequestTarget) -> Result<Vec<Story>, SearchError>;
}

/// HTTP client for the Hacker News search API.
#[derive(Clone)]
pub struct HnSearchClient {
    http: Client,
}

impl HnSearchClient {
    pub fn new(timeout: Duration) -> Result<Self, SearchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SearchError::Transport)?;
        Ok(Self { http })
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl StorySource for HnSearchClient {
    async fn search(&self, target: &RequestTarget) -> Result<Vec<Story>, SearchError> {
        let res = self
            .http
            .get(target.as_str())
            .send()
            .await
            .map_err(SearchError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = res.bytes().await.map_err(SearchError::Transport)?;
        let parsed: SearchResponse = serde_json::from_slice(&body).map_err(SearchError::Decode)?;
        Ok(parsed.hits)
    }
}
