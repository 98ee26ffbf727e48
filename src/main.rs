use astra::Server;
use clap::Parser;
use listing_board::config::Config;
use listing_board::feed::ListingFeed;
use listing_board::router::{handle, App};
use listing_board::source::{ListingSource, MicroburbsClient};
use listing_board::templates;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("listing_board=info")),
        )
        .init();

    let config = Config::parse();

    // 1️⃣ Build the upstream client
    let source: Arc<dyn ListingSource> = match MicroburbsClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!(error = %e, "listings client initialization failed");
            std::process::exit(1);
        }
    };

    // 2️⃣ Start loading listings in the background; pages show a loading state meanwhile
    let feed = Arc::new(ListingFeed::new());
    if let Err(e) = feed.spawn_initial_load(Arc::clone(&source)) {
        error!(error = %e, "could not start the listings loader");
        std::process::exit(1);
    }

    // 3️⃣ Start the server
    info!(addr = %config.addr, suburb = %config.suburb, "starting server");

    let server = Server::bind(&config.addr).max_workers(config.max_workers);
    let app = App { feed, source };

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
