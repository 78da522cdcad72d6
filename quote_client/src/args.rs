//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::Timeouts;
use quote_common::config::CLIENT_REQUEST_MS;
use quote_common::net::{OUTPUT_FILE, default_quote_url};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Quote endpoint of the running service.
    #[clap(long, default_value_t = default_quote_url())]
    pub server_url: String,

    /// Append-only file that receives one line per successful run.
    #[clap(long, default_value = OUTPUT_FILE)]
    pub output: PathBuf,

    /// Deadline for the whole request, in milliseconds.
    #[clap(long, default_value_t = CLIENT_REQUEST_MS)]
    pub timeout_ms: u64,
}

impl Args {
    /// Stage budgets, with the server budgets left at their defaults.
    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            client_request: Duration::from_millis(self.timeout_ms),
            ..Timeouts::default()
        }
    }
}
