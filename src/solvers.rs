//! Solvers for pack quantities

use thiserror::Error;
use tracing::debug;

use crate::{
    config::SolverConfig,
    packs::{PackSizes, Quantity, RequiredPacks},
};

pub mod graph;
pub mod single;

mod clamp;

pub use graph::GraphSolver;
pub use single::SingleSizeSolver;

/// Reasons a set of pack sizes or solver settings cannot be solved with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// No pack sizes were given.
    #[error("at least one pack size is required")]
    NoPackSizes,

    /// A pack size was zero or negative.
    #[error("pack sizes must be positive, got {0}")]
    NonPositivePackSize(i64),

    /// The headroom factor was zero.
    #[error("headroom factor must be positive")]
    ZeroHeadroomFactor,
}

/// Solver Errors
#[derive(Debug, Error)]
pub enum SolverError {
    /// Pack sizes or solver settings were rejected before solving.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),

    /// Internal solver invariant was violated (this is a bug).
    #[error("solver invariant violated: {message}")]
    InvariantViolation {
        /// What invariant was violated
        message: &'static str,
    },
}

/// Trait for working out the packs needed for a quantity
pub trait Solver {
    /// Solve for `quantity` items.
    ///
    /// A quantity of zero or below needs no packs and yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the solver encounters an error.
    fn solve(&self, quantity: Quantity) -> Result<RequiredPacks, SolverError>;
}

/// Pack calculator, chosen once from the available pack sizes.
#[derive(Debug, Clone)]
pub enum PackCalculator {
    /// Only one pack size: ceiling division.
    SingleSize(SingleSizeSolver),

    /// Several pack sizes: quantity graph search.
    MultiSize(GraphSolver),
}

impl PackCalculator {
    /// Pick the calculator for the given pack sizes.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidConfiguration`] if `config` is invalid.
    pub fn new(pack_sizes: PackSizes, config: SolverConfig) -> Result<Self, SolverError> {
        config.validate()?;

        match pack_sizes.single() {
            Some(size) => Ok(Self::SingleSize(SingleSizeSolver::new(size))),
            None => Ok(Self::MultiSize(GraphSolver::new(pack_sizes, config)?)),
        }
    }

    /// Validate raw pack sizes and pick the calculator for them.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidConfiguration`] if the pack sizes are empty or any
    /// size is not positive, or if `config` is invalid.
    pub fn from_sizes(pack_sizes: &[i64], config: SolverConfig) -> Result<Self, SolverError> {
        Self::new(PackSizes::new(pack_sizes)?, config)
    }
}

impl Solver for PackCalculator {
    fn solve(&self, quantity: Quantity) -> Result<RequiredPacks, SolverError> {
        match self {
            Self::SingleSize(solver) => solver.solve(quantity),
            Self::MultiSize(solver) => solver.solve(quantity),
        }
    }
}

/// Work out the packs to ship for `quantity` items using the default configuration.
///
/// # Errors
///
/// Returns [`SolverError::InvalidConfiguration`] if `pack_sizes` is empty or contains a
/// size that is not positive.
pub fn solve(quantity: Quantity, pack_sizes: &[i64]) -> Result<RequiredPacks, SolverError> {
    solve_with_config(quantity, pack_sizes, &SolverConfig::default())
}

/// Work out the packs to ship for `quantity` items.
///
/// # Errors
///
/// Returns [`SolverError::InvalidConfiguration`] if `pack_sizes` is empty, contains a
/// size that is not positive, or `config` is invalid.
pub fn solve_with_config(
    quantity: Quantity,
    pack_sizes: &[i64],
    config: &SolverConfig,
) -> Result<RequiredPacks, SolverError> {
    let calculator = PackCalculator::from_sizes(pack_sizes, *config)?;
    let packs = calculator.solve(quantity)?;

    debug!(quantity, %packs, "solved");

    Ok(packs)
}
