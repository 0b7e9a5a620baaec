//! Quantity graph solver

use tracing::{debug, debug_span};

use crate::{
    config::SolverConfig,
    graph::QuantityGraphBuilder,
    packs::{PackSizes, Quantity, RequiredPacks},
    solvers::{ConfigurationError, Solver, SolverError, clamp::clamp},
};

/// Solver for several pack sizes.
///
/// Clamps very large orders, expands a [`crate::graph::QuantityGraph`] from what is
/// left, picks the reachable cover with the least overshoot and walks the path with the
/// fewest packs to it.
#[derive(Debug, Clone)]
pub struct GraphSolver {
    pack_sizes: PackSizes,
    config: SolverConfig,
}

impl GraphSolver {
    /// Create a solver for `pack_sizes`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if `config` is invalid.
    pub fn new(pack_sizes: PackSizes, config: SolverConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        Ok(Self { pack_sizes, config })
    }
}

impl Solver for GraphSolver {
    fn solve(&self, quantity: Quantity) -> Result<RequiredPacks, SolverError> {
        let span = debug_span!("graph_solve", quantity, pack_sizes = self.pack_sizes.len());
        let _entered = span.enter();

        let mut packs = RequiredPacks::default();

        if quantity <= 0 {
            return Ok(packs);
        }

        let headroom = clamp(quantity, &self.pack_sizes, self.config.headroom_factor);

        if headroom.preassigned > 0 {
            debug!(
                size = headroom.size.get(),
                count = headroom.preassigned,
                remainder = headroom.remainder,
                "clamped quantity"
            );

            packs.add(headroom.size, headroom.preassigned);
        }

        let graph = QuantityGraphBuilder::new(&self.pack_sizes).build(headroom.remainder);

        let Some(candidate) = graph.best_candidate() else {
            return Ok(packs);
        };

        let path = graph
            .fewest_packs_path(candidate)
            .ok_or(SolverError::InvariantViolation {
                message: "selected candidate is unreachable from the root",
            })?;

        let sizes = graph
            .path_pack_sizes(&path)
            .ok_or(SolverError::InvariantViolation {
                message: "consecutive path nodes are not joined by an edge",
            })?;

        for size in sizes {
            packs.add(size, 1);
        }

        Ok(packs)
    }
}
