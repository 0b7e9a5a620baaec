//! Calculate Packs Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use packcalc::{packs::RequiredPacks, solve_with_config};

use crate::{
    extensions::DepotExt as _,
    packs::{
        budget::run_blocking,
        errors::{budget_status_error, into_status_error},
    },
    state::State,
};

/// Calculate Packs Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CalculatePacksRequest {
    /// Number of items ordered
    pub quantity: i64,

    /// Available pack sizes
    pub pack_sizes: Vec<i64>,
}

/// Packs Response, keyed by pack size
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub(crate) struct PacksResponse(BTreeMap<i64, u64>);

impl From<&RequiredPacks> for PacksResponse {
    fn from(packs: &RequiredPacks) -> Self {
        Self(packs.iter().collect())
    }
}

/// Calculate Packs Handler
///
/// Whole packs covering the order with the least overshoot, then the fewest packs.
#[endpoint(
    tags("packs"),
    summary = "Calculate Packs",
    responses(
        (status_code = StatusCode::OK, description = "Packs per pack size"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Calculation timed out"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CalculatePacksRequest>,
    depot: &mut Depot,
) -> Result<Json<PacksResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let CalculatePacksRequest {
        quantity,
        pack_sizes,
    } = json.into_inner();

    if pack_sizes.len() > state.max_pack_sizes {
        return Err(StatusError::bad_request().brief(format!(
            "at most {} pack sizes are accepted, got {}",
            state.max_pack_sizes,
            pack_sizes.len()
        )));
    }

    let config = state.solver;

    let packs = run_blocking(state.solve_timeout, move || {
        solve_with_config(quantity, &pack_sizes, &config)
    })
    .await
    .map_err(budget_status_error)?
    .map_err(into_status_error)?;

    info!(quantity, packs = packs.total_packs(), "packs calculated");

    Ok(Json(PacksResponse::from(&packs)))
}
