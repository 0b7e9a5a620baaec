//! Test helpers.

use std::{sync::Arc, time::Duration};

use packcalc::config::SolverConfig;
use salvo::{affix_state::inject, prelude::*};

use crate::{config::solver::DEFAULT_MAX_PACK_SIZES, state::State};

pub(crate) fn default_state() -> Arc<State> {
    Arc::new(State::new(
        SolverConfig::default(),
        Duration::from_secs(5),
        usize::from(DEFAULT_MAX_PACK_SIZES),
    ))
}

pub(crate) fn packs_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}
