//! Command-line arguments for the quote server.
use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use quote_common::config::{STORAGE_WRITE_MS, UPSTREAM_FETCH_MS};
use quote_common::net::{DATABASE_PATH, UPSTREAM_URL};
use quote_common::{QuoteError, Timeouts};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP listener binds to.
    #[clap(long, default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// Upstream USD-BRL feed.
    #[clap(long, default_value = UPSTREAM_URL)]
    pub upstream_url: String,

    /// SQLite database file, created when missing.
    #[clap(long, default_value = DATABASE_PATH)]
    pub db_path: String,

    /// Deadline for the upstream fetch, in milliseconds.
    #[clap(long, default_value_t = UPSTREAM_FETCH_MS)]
    pub fetch_timeout_ms: u64,

    /// Deadline for the storage insert, in milliseconds.
    #[clap(long, default_value_t = STORAGE_WRITE_MS)]
    pub store_timeout_ms: u64,
}

impl Args {
    /// Parses the listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr, QuoteError> {
        self.listen_addr
            .trim()
            .parse()
            .map_err(|e| QuoteError::Config(format!("Invalid --listen-addr {}: {}", self.listen_addr, e)))
    }

    /// Stage budgets, with the client budget left at its default.
    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            upstream_fetch: Duration::from_millis(self.fetch_timeout_ms),
            storage_write: Duration::from_millis(self.store_timeout_ms),
            ..Timeouts::default()
        }
    }
}
