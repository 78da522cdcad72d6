//! Upstream price feed client.
//!
//! A single GET per call, bounded by its own deadline. The outcome is classified as
//! `Timeout` (deadline expired), `Transport` (connection failure or non-2xx status)
//! or `Parse` (body is not the expected envelope). There is no retry.
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use quote_common::rate::UpstreamEnvelope;
use quote_common::{QuoteError, RateQuote, Result, Stage};
use reqwest::Client;

/// Source of fresh rate observations.
#[async_trait]
pub trait RateFetcher: Send + Sync {
    /// Fetches one observation under the fetcher's own deadline.
    async fn fetch(&self) -> Result<RateQuote>;
}

/// HTTP fetcher for the USD-BRL feed.
pub struct HttpRateFetcher {
    client: Client,
    url: String,
    budget: Duration,
}

impl HttpRateFetcher {
    /// Creates a fetcher for `url` with a per-call `budget`.
    pub fn new(client: Client, url: &str, budget: Duration) -> Self {
        Self {
            client,
            url: String::from(url),
            budget,
        }
    }

    async fn request(&self) -> Result<RateQuote> {
        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        if !res.status().is_success() {
            return Err(QuoteError::Transport(format!(
                "Upstream request failed: {}",
                res.status()
            )));
        }

        let body = res
            .bytes()
            .await
            .map_err(|e| QuoteError::Transport(e.to_string()))?;
        UpstreamEnvelope::parse(&body)
    }
}

#[async_trait]
impl RateFetcher for HttpRateFetcher {
    async fn fetch(&self) -> Result<RateQuote> {
        debug!("Fetching {} (budget {:?})", self.url, self.budget);
        tokio::time::timeout(self.budget, self.request())
            .await
            .map_err(|_| QuoteError::timeout(Stage::Fetch, self.budget))?
    }
}
