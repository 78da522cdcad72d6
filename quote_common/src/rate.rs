//! Canonical exchange-rate record and the upstream payload that carries it.
//!
//! A `RateQuote` is built only by deserializing a complete JSON object: every field
//! is required, so decoding either yields a fully populated record or fails with
//! `QuoteError::Parse`. The `bid` is kept as text to preserve the upstream formatting.
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// One USD-BRL observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Currency pair symbol (e.g. `USD`).
    code: String,
    /// Human-readable pair description.
    name: String,
    /// Decimal-formatted rate, exactly as received.
    bid: String,
    /// Upstream observation time, passed through unmodified.
    timestamp: String,
}

impl RateQuote {
    /// Creates a fully populated quote.
    pub fn new(code: &str, name: &str, bid: &str, timestamp: &str) -> Self {
        RateQuote {
            code: String::from(code),
            name: String::from(name),
            bid: String::from(bid),
            timestamp: String::from(timestamp),
        }
    }

    /// Currency pair symbol.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Pair description.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exchange rate as upstream formatted it.
    pub fn bid(&self) -> &str {
        &self.bid
    }

    /// Upstream observation time.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Decodes a quote from the JSON body served by the quote service.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, QuoteError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Encode the quote to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, QuoteError> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}

/// Body returned by the upstream feed: `{"USDBRL": {...}}`.
///
/// Extra fields inside the inner object (`high`, `low`, `varBid`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct UpstreamEnvelope {
    /// The USD-BRL observation.
    #[serde(rename = "USDBRL")]
    pub usdbrl: RateQuote,
}

impl UpstreamEnvelope {
    /// Decodes the upstream body and unwraps the quote.
    pub fn parse(body: &[u8]) -> Result<RateQuote, QuoteError> {
        let envelope: UpstreamEnvelope = serde_json::from_slice(body)?;
        Ok(envelope.usdbrl)
    }
}
