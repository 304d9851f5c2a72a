//! Scrapes NBA schedule and result tables from basketball-reference.com into
//! per-season CSV files, and reshapes them into one row per team per game.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod reshape;
pub mod season;
pub mod store;

pub use config::Config;
pub use error::{Result, ScrapeError};

/// Install the `fmt` subscriber used by both binaries. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
