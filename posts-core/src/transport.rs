use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::PostsFeed;

/// Fetches and decodes the whole posts feed published at `url`.
#[async_trait]
pub trait FeedTransport: Send + Sync {
    async fn fetch_feed(&self, url: &str) -> RepositoryResult<PostsFeed>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedTransport for HttpTransport {
    async fn fetch_feed(&self, url: &str) -> RepositoryResult<PostsFeed> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        debug!(url, len = bytes.len(), "received feed body");
        let feed = serde_json::from_slice::<PostsFeed>(&bytes)?;
        Ok(feed)
    }
}

/// Serves a fixed feed without touching the network.
#[derive(Debug, Clone)]
pub struct StaticTransport {
    feed: Option<PostsFeed>,
}

impl StaticTransport {
    pub fn new(feed: PostsFeed) -> Self {
        Self { feed: Some(feed) }
    }

    /// A transport whose every fetch fails.
    pub fn unavailable() -> Self {
        Self { feed: None }
    }
}

#[async_trait]
impl FeedTransport for StaticTransport {
    async fn fetch_feed(&self, url: &str) -> RepositoryResult<PostsFeed> {
        self.feed
            .clone()
            .ok_or_else(|| RepositoryError::Transport(format!("{url} is unreachable")))
    }
}
