//! USD-BRL quote service.
//!
//! This binary serves the current exchange rate over HTTP. Each `GET /cotacao` runs a
//! short pipeline built from three pieces:
//!
//! - `HttpRateFetcher` — asks the upstream feed for the latest USD-BRL observation under
//!   its own deadline (200ms by default).
//! - `SqliteRateStore` — appends the observation to the `exchange_rate` table under a
//!   tighter deadline (10ms by default).
//! - `QuoteService` — runs fetch, then persist, then answers the caller; any failure
//!   stops the request at that stage.
//!
//! Status mapping:
//! - upstream timeout → `408`;
//! - any other fetch or storage failure → `500` with a plain-text reason;
//! - success → `200` with `{"code","name","bid","timestamp"}`.
//!
//! The table is created once before the listener starts. Requests run on their own
//! tokio tasks and share only the SQLite pool.
#![warn(missing_docs)]
use std::sync::Arc;

use clap::Parser;
use log::info;
use quote_common::Result;
use reqwest::Client;

use crate::args::Args;
use crate::fetcher::HttpRateFetcher;
use crate::routes::app_router;
use crate::service::QuoteService;
use crate::store::SqliteRateStore;

mod args;
mod fetcher;
mod routes;
mod service;
mod store;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    let timeouts = args.timeouts();
    let listen_addr = args.socket_addr()?;

    let pool = store::connect(&args.db_path).await?;
    store::init_schema(&pool).await?;
    info!("Database ready at {}", args.db_path);

    let fetcher = HttpRateFetcher::new(Client::new(), &args.upstream_url, timeouts.upstream_fetch);
    let store = SqliteRateStore::new(pool, timeouts.storage_write);
    let service = QuoteService::new(Arc::new(fetcher), Arc::new(store));

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(
        "Quote service listening on {} (fetch budget {:?}, store budget {:?})",
        listener.local_addr()?,
        timeouts.upstream_fetch,
        timeouts.storage_write
    );
    axum::serve(listener, app_router(service)).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
