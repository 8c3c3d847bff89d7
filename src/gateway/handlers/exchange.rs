//! Exchange rate handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, ExchangePayload, ExchangeProjection, Projection, TimeQuery, created, ok,
    project_exchange, validate_currency_code,
};
use super::helpers::to_local_naive;

/// Resolve the exchange rate for a currency pair at a point in time
///
/// GET /api/v1/exchanges/{from}/{to}?time=2020-08-30T16:55:00+03:00&actual_only=true
///
/// Falls back from a direct observation to the inverse pair, then to
/// triangulation through a common base currency; derived rates are persisted.
#[utoipa::path(
    get,
    path = "/api/v1/exchanges/{from}/{to}",
    params(
        ("from" = String, Path, description = "Source currency code"),
        ("to" = String, Path, description = "Target currency code"),
        TimeQuery
    ),
    responses(
        (status = 200, description = "Resolved rate", content_type = "application/json"),
        (status = 400, description = "Malformed code or identical pair"),
        (status = 404, description = "No rate available for this pair and window")
    ),
    tag = "Exchanges"
)]
pub async fn get_rate(
    State(state): State<Arc<AppState>>,
    Path((from, to)): Path<(String, String)>,
    Query(params): Query<TimeQuery>,
) -> ApiResult<ExchangeProjection> {
    validate_currency_code(&from).map_err(ApiError::bad_request)?;
    validate_currency_code(&to).map_err(ApiError::bad_request)?;

    let zone = params.time.timezone();
    let local = to_local_naive(params.time);

    let resolved = if params.actual_only {
        state.exchanges.resolve_at(&from, &to, local).await?
    } else {
        state
            .exchanges
            .resolve_at_non_strict(&from, &to, local)
            .await?
    };

    match resolved {
        Some(exchange) => {
            let projection = project_exchange(&exchange, zone, params.projection)
                .ok_or_else(|| ApiError::db_error("Stored time not representable"))?;
            ok(projection)
        }
        None => ApiError::not_found("No exchange rate available for this pair and time").into_err(),
    }
}

/// Record a primary rate observation
///
/// POST /api/v1/exchanges
///
/// Unknown currencies are registered with a quantifier derived from the
/// rate's own decimal scale.
#[utoipa::path(
    post,
    path = "/api/v1/exchanges",
    request_body = ExchangePayload,
    responses(
        (status = 201, description = "Observation recorded", content_type = "application/json"),
        (status = 400, description = "Malformed code, rate or time")
    ),
    tag = "Exchanges"
)]
pub async fn create_exchange(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ExchangePayload>,
) -> ApiResult<ExchangeProjection> {
    payload.validate().map_err(ApiError::bad_request)?;

    let zone = payload.time.timezone();
    let local = to_local_naive(payload.time);

    let stored = state
        .exchanges
        .ingest(&payload.from, &payload.to, payload.rate.inner(), local)
        .await?;

    let projection = project_exchange(&stored, zone, Projection::Full)
        .ok_or_else(|| ApiError::db_error("Stored time not representable"))?;
    created(projection)
}
