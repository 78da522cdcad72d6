//! Per-request pipeline: fetch, then persist, then hand the quote back for the response.
//!
//! Each request walks `Received -> Fetching -> Persisting -> Responding`. A failure at
//! any stage aborts the request right there, so a quote that could not be recorded is
//! never served and a failed fetch never reaches the store.
use std::sync::Arc;

use log::{debug, error, info, warn};
use quote_common::{QuoteError, RateQuote, Result};
use strum_macros::Display;

use crate::fetcher::RateFetcher;
use crate::store::RateStore;

/// Request lifecycle, used for log context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RequestState {
    /// Request accepted by the router.
    Received,
    /// Waiting on the upstream feed.
    Fetching,
    /// Waiting on the storage insert.
    Persisting,
    /// Quote recorded and ready to serve.
    Responding,
}

/// Orchestrates fetcher and store for each quote request.
#[derive(Clone)]
pub struct QuoteService {
    fetcher: Arc<dyn RateFetcher>,
    store: Arc<dyn RateStore>,
}

impl QuoteService {
    /// Wires the service to its collaborators.
    pub fn new(fetcher: Arc<dyn RateFetcher>, store: Arc<dyn RateStore>) -> Self {
        Self { fetcher, store }
    }

    /// Runs one request through the pipeline and returns the recorded quote.
    pub async fn current_quote(&self) -> Result<RateQuote> {
        let mut state = RequestState::Received;
        debug!("Quote request {}", state);

        state = RequestState::Fetching;
        let quote = self
            .fetcher
            .fetch()
            .await
            .inspect_err(|e| report(state, e))?;

        state = RequestState::Persisting;
        debug!("Quote request {}: bid {}", state, quote.bid());
        self.store
            .persist(&quote)
            .await
            .inspect_err(|e| report(state, e))?;

        state = RequestState::Responding;
        info!("Quote request {}: {} bid {}", state, quote.code(), quote.bid());
        Ok(quote)
    }
}

fn report(state: RequestState, err: &QuoteError) {
    if err.is_timeout() {
        warn!("Quote request aborted while {}: {}", state, err);
    } else {
        error!("Quote request aborted while {}: {}", state, err);
    }
}
