//! Currency catalog handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, CurrencyFull, CurrencyPayload, CurrencyProjection, TimeQuery, created, ok,
    project_currency,
};
use super::helpers::to_local_naive;

/// List currencies active at a point in time
///
/// GET /api/v1/currencies?time=2020-08-30T16:55:00+03:00&actual_only=true&projection=FULL
#[utoipa::path(
    get,
    path = "/api/v1/currencies",
    params(TimeQuery),
    responses(
        (status = 200, description = "Currencies sorted by code", content_type = "application/json"),
        (status = 400, description = "Malformed query")
    ),
    tag = "Currencies"
)]
pub async fn get_currencies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TimeQuery>,
) -> ApiResult<Vec<CurrencyProjection>> {
    let local = to_local_naive(params.time);
    let currencies = state.currencies.list(local, params.actual_only).await?;
    ok(currencies
        .iter()
        .map(|c| project_currency(c, params.projection))
        .collect())
}

/// Register a new currency
///
/// POST /api/v1/currencies
#[utoipa::path(
    post,
    path = "/api/v1/currencies",
    request_body = CurrencyPayload,
    responses(
        (status = 201, description = "Currency registered", content_type = "application/json"),
        (status = 400, description = "Malformed code or quantifier"),
        (status = 409, description = "Code already registered")
    ),
    tag = "Currencies"
)]
pub async fn create_currency(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CurrencyPayload>,
) -> ApiResult<CurrencyFull> {
    payload.validate().map_err(ApiError::bad_request)?;

    let currency = state
        .currencies
        .create(&payload.code, payload.quantifier)
        .await?;
    created(CurrencyFull {
        code: currency.code,
        quantifier: currency.quantifier,
    })
}

/// Replace the quantifier of a registered currency
///
/// PUT /api/v1/currencies
#[utoipa::path(
    put,
    path = "/api/v1/currencies",
    request_body = CurrencyPayload,
    responses(
        (status = 200, description = "Quantifier replaced", content_type = "application/json"),
        (status = 400, description = "Malformed code or quantifier"),
        (status = 404, description = "Code not registered")
    ),
    tag = "Currencies"
)]
pub async fn update_currency(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CurrencyPayload>,
) -> ApiResult<CurrencyFull> {
    payload.validate().map_err(ApiError::bad_request)?;

    let currency = state
        .currencies
        .update(&payload.code, payload.quantifier)
        .await?;
    ok(CurrencyFull {
        code: currency.code,
        quantifier: currency.quantifier,
    })
}
