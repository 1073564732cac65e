use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::config::FetchConfig;
use crate::models::{SourceLocation, SourceReference};
use crate::utils::error::{AppError, FetchError};

/// Resolves a source reference to raw text.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, source: &SourceReference) -> Result<String, FetchError>;
}

/// Fetches `http`/`https` sources with reqwest and reads everything else from disk.
///
/// One request or one file read per call. Nothing is cached, even when two
/// items share a source.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    client: Client,
}

impl SourceFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    async fn fetch_remote(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Request(format!("failed to read response body: {}", e)))
    }

    async fn fetch_local(&self, path: &Path) -> Result<String, FetchError> {
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

#[async_trait]
impl ContentFetcher for SourceFetcher {
    async fn fetch(&self, source: &SourceReference) -> Result<String, FetchError> {
        tracing::debug!("Fetching {}", source);
        match source.location() {
            SourceLocation::Remote(url) => self.fetch_remote(url).await,
            SourceLocation::Local(path) => self.fetch_local(path).await,
        }
    }
}
