use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;

/// Capability to fetch a page body for a URL.
///
/// The scraper core performs no I/O of its own; implement this to back it
/// with a different transport (or a stub in tests). Retry and timeout policy
/// belong to the implementation, not to the pipeline.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Default `Fetch` implementation over a shared `reqwest` client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Self {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; RecipeScraperBot/1.0)")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    pub fn from_config(config: &ScraperConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}
