//! Packcalc JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use crate::{config::ServerConfig, state::State};

mod config;
mod extensions;
mod healthcheck;
mod observability;
mod packs;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Packcalc JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init_subscriber(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "subscriber failed to install, nothing else can report it"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!(
        headroom_factor = config.solver.headroom_factor,
        solve_timeout_ms = config.solver.solve_timeout_ms,
        max_pack_sizes = config.solver.max_pack_sizes,
        "Starting server on {addr}"
    );

    let listener = TcpListener::new(addr).bind().await;

    let router = router::app_router(State::from_settings(&config.solver));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;
}
