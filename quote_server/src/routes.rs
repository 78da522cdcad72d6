//! HTTP surface of the quote service.
//!
//! - `GET /` — static welcome text.
//! - `GET /cotacao` — runs the pipeline; `200` with the quote as JSON, `408` when the
//!   upstream fetch timed out, `500` with a plain-text reason for anything else.
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use quote_common::net::QUOTE_PATH;
use quote_common::{QuoteError, RateQuote, Stage};
use thiserror::Error;

use crate::service::QuoteService;

/// Text served on the root path.
pub const WELCOME: &str = "Welcome to the Exchange Rate API!";

/// Pipeline error on its way to the HTTP caller.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] QuoteError);

impl ApiError {
    /// Status code the caller sees for this error.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            QuoteError::Timeout {
                stage: Stage::Fetch,
                ..
            } => StatusCode::REQUEST_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.0.to_string()).into_response()
    }
}

/// Builds the service router.
pub fn app_router(service: QuoteService) -> Router {
    Router::new()
        .route("/", get(home))
        .route(QUOTE_PATH, get(current_quote))
        .with_state(service)
}

async fn home() -> &'static str {
    WELCOME
}

async fn current_quote(State(service): State<QuoteService>) -> Result<Json<RateQuote>, ApiError> {
    let quote = service.current_quote().await?;
    Ok(Json(quote))
}
