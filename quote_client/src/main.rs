//! Quote Client — a single-shot HTTP client that asks the quote service for the current
//! USD-BRL rate and appends the bid to a local file.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server-url http://localhost:8080/cotacao --output ./cotacao.txt
//! ```
//!
//! Each successful run appends exactly one `Dólar: <bid>` line. Any failure (timeout,
//! unreachable service, error status, malformed body, file error) is logged and the
//! process exits with a non-zero status.
#![warn(missing_docs)]
mod args;
mod ledger;
mod requester;

use std::process;

use crate::args::Args;
use clap::Parser;
use log::{error, info, warn};
use quote_common::Result;
use reqwest::Client;

/// Fetches one bid and records it.
async fn run(args: &Args) -> Result<String> {
    let timeouts = args.timeouts();
    if !timeouts.client_outlasts_server() {
        warn!(
            "--timeout-ms={} does not exceed the server budget of {:?}; the client deadline may fire first",
            args.timeout_ms,
            timeouts.server_budget()
        );
    }

    let bid = requester::fetch_bid(&Client::new(), &args.server_url, timeouts.client_request).await?;
    info!("Received bid {}", bid);

    ledger::append_bid(&args.output, &bid)?;
    info!("Bid appended to {}", args.output.display());
    Ok(bid)
}

#[tokio::main]
async fn main() {
    init_logger();
    let args = Args::parse();

    match run(&args).await {
        Ok(bid) => println!("Response: {}", bid),
        Err(e) => {
            error!("Quote client failed: {}", e);
            process::exit(1);
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requester::tests::{QUOTE_BODY, serve};
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use std::fs;

    fn args(url: &str, output: &std::path::Path) -> Args {
        Args::parse_from([
            "quote_client",
            "--server-url",
            url,
            "--output",
            output.to_str().unwrap(),
            "--timeout-ms",
            "1000",
        ])
    }

    #[tokio::test]
    async fn successful_run_appends_exactly_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");
        let url = serve(Router::new().route("/cotacao", get(|| async { QUOTE_BODY }))).await;

        let bid = run(&args(&url, &output)).await.unwrap();

        assert_eq!(bid, "5.43");
        assert_eq!(fs::read_to_string(&output).unwrap(), "Dólar: 5.43\n");
    }

    #[tokio::test]
    async fn failed_run_leaves_the_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");
        let url = serve(Router::new().route(
            "/cotacao",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Storage write error") }),
        ))
        .await;

        assert!(run(&args(&url, &output)).await.is_err());
        assert!(!output.exists());
    }
}
