//! Solver Config

use std::time::Duration;

use clap::Args;

use packcalc::config::{DEFAULT_HEADROOM_FACTOR, SolverConfig};

/// Default limit on the number of pack sizes in one request.
pub const DEFAULT_MAX_PACK_SIZES: u16 = 64;

/// Pack solver settings.
#[derive(Debug, Args)]
pub struct SolverSettings {
    /// Largest packs are taken off orders above this many times the sum of pack sizes
    #[arg(
        long,
        env = "HEADROOM_FACTOR",
        default_value_t = DEFAULT_HEADROOM_FACTOR,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub headroom_factor: u32,

    /// Time budget for a single solve, in milliseconds
    ///
    /// A solve that runs past it gets a 503, but its blocking worker is not cancelled and
    /// keeps a pool thread busy until the graph search finishes.
    #[arg(long, env = "SOLVE_TIMEOUT_MS", default_value_t = 5_000_u64)]
    pub solve_timeout_ms: u64,

    /// Most pack sizes accepted in one request
    #[arg(
        long,
        env = "MAX_PACK_SIZES",
        default_value_t = DEFAULT_MAX_PACK_SIZES,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub max_pack_sizes: u16,
}

impl SolverSettings {
    /// Core solver configuration.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::default().with_headroom_factor(self.headroom_factor)
    }

    /// Time budget for a single solve.
    #[must_use]
    pub fn solve_timeout(&self) -> Duration {
        Duration::from_millis(self.solve_timeout_ms)
    }

    /// Most pack sizes accepted in one request.
    #[must_use]
    pub fn max_pack_sizes(&self) -> usize {
        usize::from(self.max_pack_sizes)
    }
}
