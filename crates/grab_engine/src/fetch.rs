use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::{FailureKind, FetchError, FetchSettings};

/// Network collaborator used by fetchers and workers.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Raw listing bytes for `url`.
    async fn fetch_listing(&self, url: &str) -> Result<Vec<u8>, FetchError>;

    /// Streams the body at `url` into `dest`, returning the bytes written.
    async fn download(&self, url: &str, dest: &mut File) -> Result<u64, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        // The listing host rate-limits clients without a browser user agent.
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch_listing(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.get(url).await?;
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(body.to_vec())
    }

    async fn download(&self, url: &str, dest: &mut File) -> Result<u64, FetchError> {
        let response = self.get(url).await?;

        let mut written = 0u64;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            dest.write_all(&chunk).await.map_err(map_write_error)?;
            written += chunk.len() as u64;
        }
        dest.flush().await.map_err(map_write_error)?;
        Ok(written)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    FetchError::new(FailureKind::Network, err.to_string())
}

fn map_write_error(err: std::io::Error) -> FetchError {
    FetchError::new(FailureKind::Write, err.to_string())
}
