use crate::config::AppConfig;
use crate::domain::RecordStore;
use crate::router::handle;
use crate::session::SessionStore;
use crate::state::AppState;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod sample_data;
mod session;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() {
    // .env must be loaded before the tracing filter reads RUST_LOG
    dotenv::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env();
    tracing::info!(?config, "configuration loaded");

    // Load and validate the record store
    let store = match RecordStore::sample() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "record store failed to load");
            std::process::exit(1);
        }
    };
    tracing::info!(records = store.len(), "record store loaded");

    let addr = match config.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, "cannot bind");
            std::process::exit(1);
        }
    };

    let state = AppState::new(store, SessionStore::new(config.trend_seed));

    tracing::info!("Starting server at http://{addr}");
    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            templates::html_error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("Server shut down cleanly.");
}
