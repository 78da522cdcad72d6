//! Error types shared between client and server.
//!
//! Every failure is classified where it happens. The server turns the class into
//! an HTTP status, the client turns it into a diagnostic and a non-zero exit.
use std::io;
use std::time::Duration;

use strum_macros::Display;
use thiserror::Error;

/// Pipeline stage whose deadline can expire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    /// Upstream price feed request made by the server.
    Fetch,
    /// Storage insert made by the server.
    Persist,
    /// Client request to the quote service.
    Request,
}

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A stage did not finish inside its budget.
    #[error("{stage} timeout exceeded ({}ms)", .budget.as_millis())]
    Timeout {
        /// Stage that ran out of time.
        stage: Stage,
        /// Budget the stage was given.
        budget: Duration,
    },

    /// Network failure or a non-success HTTP status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body that is not valid JSON or misses required fields.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Storage could not be opened or initialized.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Storage engine rejected the insert.
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// I/O error originating from the standard library (local output file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration value supplied on the command line.
    #[error("Config error: {0}")]
    Config(String),
}

impl QuoteError {
    /// Creates a timeout error for `stage` with the budget it was given.
    pub fn timeout(stage: Stage, budget: Duration) -> Self {
        QuoteError::Timeout { stage, budget }
    }

    /// Returns `true` when the error is a deadline expiry, whatever the stage.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QuoteError::Timeout { .. })
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::Parse(err.to_string())
    }
}
