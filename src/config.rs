// config.rs
use clap::Parser;
use std::net::SocketAddr;
use url::Url;

pub const DEFAULT_API_URL: &str =
    "https://www.microburbs.com.au/report_generator/api/suburb/properties";

/// Server-rendered, sortable table of for-sale listings.
#[derive(Debug, Clone, Parser)]
#[command(name = "listing_board", version)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "LISTING_BOARD_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Suburb properties endpoint.
    #[arg(long, env = "LISTING_BOARD_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// Bearer token sent to the listings API.
    #[arg(long, env = "LISTING_BOARD_API_TOKEN", default_value = "test", hide_env_values = true)]
    pub api_token: String,

    #[arg(long, env = "LISTING_BOARD_SUBURB", default_value = "Belmont North")]
    pub suburb: String,

    #[arg(long, env = "LISTING_BOARD_PROPERTY_TYPE", default_value = "house")]
    pub property_type: String,

    /// Upper bound on astra worker threads.
    #[arg(long, default_value_t = 8)]
    pub max_workers: usize,

    /// Per-request timeout towards the listings API, in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Fetch attempts before the feed is marked as failed.
    #[arg(long, default_value_t = 3)]
    pub max_attempts: u64,
}
