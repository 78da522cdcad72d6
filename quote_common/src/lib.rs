//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `rate` — the canonical `RateQuote` record and the upstream envelope.
//! - `config` — per-stage deadline budgets (`Timeouts`).
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod net;
pub mod rate;
pub mod result;

pub use config::Timeouts;
pub use error::{QuoteError, Stage};
pub use rate::RateQuote;
pub use result::Result;
