//! State

use std::{sync::Arc, time::Duration};

use packcalc::config::SolverConfig;

use crate::config::solver::SolverSettings;

/// Settings shared by every request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct State {
    pub(crate) solver: SolverConfig,
    pub(crate) solve_timeout: Duration,
    pub(crate) max_pack_sizes: usize,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        solver: SolverConfig,
        solve_timeout: Duration,
        max_pack_sizes: usize,
    ) -> Self {
        Self {
            solver,
            solve_timeout,
            max_pack_sizes,
        }
    }

    #[must_use]
    pub(crate) fn from_settings(settings: &SolverSettings) -> Arc<Self> {
        Arc::new(Self::new(
            settings.solver_config(),
            settings.solve_timeout(),
            settings.max_pack_sizes(),
        ))
    }
}
