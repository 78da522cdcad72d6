//! Single bounded request to the quote service.
//!
//! Failures are reported with the same classes the server uses upstream: a deadline
//! expiry is `Timeout`, a connection failure or error status is `Transport`, and a body
//! that is not a quote is `Parse`.
use std::time::Duration;

use log::debug;
use quote_common::{QuoteError, RateQuote, Result, Stage};
use reqwest::Client;

/// Requests the current quote from `url` and returns its bid.
pub async fn fetch_bid(client: &Client, url: &str, budget: Duration) -> Result<String> {
    debug!("Requesting {} (budget {:?})", url, budget);
    let quote = tokio::time::timeout(budget, request(client, url))
        .await
        .map_err(|_| QuoteError::timeout(Stage::Request, budget))??;
    Ok(quote.bid().to_string())
}

async fn request(client: &Client, url: &str) -> Result<RateQuote> {
    let res = client
        .get(url)
        .send()
        .await
        .map_err(|e| QuoteError::Transport(format!("Failed to reach quote service: {}", e)))?;

    let status = res.status();
    let body = res
        .bytes()
        .await
        .map_err(|e| QuoteError::Transport(format!("Failed to read quote service response: {}", e)))?;

    if !status.is_success() {
        return Err(QuoteError::Transport(format!(
            "Quote service answered {}: {}",
            status,
            String::from_utf8_lossy(&body)
        )));
    }

    RateQuote::from_json_slice(&body)
}
