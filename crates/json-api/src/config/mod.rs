//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{logging::LoggingConfig, server::ServerRuntimeConfig, solver::SolverSettings};

pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod solver;

/// Packcalc JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "packcalc-json", about = "Packcalc JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Pack solver settings.
    #[command(flatten)]
    pub solver: SolverSettings,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Socket address to bind
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}
