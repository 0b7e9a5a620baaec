//! Pack Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use packcalc::solvers::SolverError;

use crate::packs::budget::BudgetError;

pub(crate) fn into_status_error(error: SolverError) -> StatusError {
    match error {
        SolverError::InvalidConfiguration(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        SolverError::InvariantViolation { message } => {
            error!("solver invariant violated: {message}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn budget_status_error(error: BudgetError) -> StatusError {
    match error {
        BudgetError::Elapsed(budget) => {
            warn!(budget_ms = budget.as_millis(), "pack calculation timed out");

            StatusError::service_unavailable().brief("Pack calculation timed out")
        }
        BudgetError::Worker(source) => {
            error!("pack calculation worker failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
