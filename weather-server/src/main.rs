//! Binary crate for the `weather-server` HTTP gateway.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and resolving configuration
//! - Query validation and HTTP error mapping
//! - Serving the `/weather`, `/multiple` and `/alert` routes

use clap::Parser;

mod cli;
mod error;
mod routes;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
