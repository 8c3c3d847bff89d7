//! API response types, error codes and projections
//!
//! - `ApiResponse<T>`: unified response wrapper
//! - `ApiError`: error that renders as an `ApiResponse` with an HTTP status
//! - `error_codes`: standard error code constants
//! - Projection DTOs for exchanges and currencies

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, FixedOffset};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use utoipa::ToSchema;

use super::request::Projection;
use crate::currency::Currency;
use crate::error::ServiceError;
use crate::exchange::Exchange;
use crate::gateway::handlers::helpers::attach_zone;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Handler result: an HTTP status plus the response envelope, or an `ApiError`.
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// 200 OK success response
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// 201 Created success response
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;

    // Resource errors (4xxx)
    pub const RATE_NOT_FOUND: i32 = 4001;
    pub const CURRENCY_NOT_FOUND: i32 = 4002;
    pub const CURRENCY_EXISTS: i32 = 4090;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}

// ============================================================================
// ApiError
// ============================================================================

/// Error carrying an HTTP status and an API error code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: error_codes::INVALID_PARAMETER,
            msg: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: error_codes::RATE_NOT_FOUND,
            msg: msg.into(),
        }
    }

    pub fn currency_not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: error_codes::CURRENCY_NOT_FOUND,
            msg: msg.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            code: error_codes::CURRENCY_EXISTS,
            msg: msg.into(),
        }
    }

    pub fn db_error(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: error_codes::INTERNAL_ERROR,
            msg: msg.into(),
        }
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            code: error_codes::SERVICE_UNAVAILABLE,
            msg: msg.into(),
        }
    }

    /// Convenience for `return ApiError::...(..).into_err();`
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ApiResponse::<()>::error(self.code, self.msg));
        (self.status, body).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidArgument(msg) => ApiError::bad_request(msg),
            ServiceError::AlreadyExists(code) => {
                ApiError::conflict(format!("Currency '{}' already exists", code))
            }
            ServiceError::NotFound(code) => {
                ApiError::currency_not_found(format!("Currency '{}' not exists", code))
            }
            ServiceError::Database(e) => {
                tracing::error!("database error: {}", e);
                ApiError::db_error(format!("Query failed: {}", e))
            }
        }
    }
}

// ============================================================================
// Projection DTOs
// ============================================================================

/// Full exchange projection
#[derive(Debug, Serialize, ToSchema)]
pub struct ExchangeFull {
    #[schema(example = "USD")]
    pub from: String,
    #[schema(example = "RUB")]
    pub to: String,
    /// Rate rounded to the target currency's quantifier
    #[schema(value_type = String, example = "74.30")]
    pub rate: Decimal,
    /// Observation time in the requested zone
    pub time: DateTime<FixedOffset>,
}

/// Short exchange projection (rate and time only)
#[derive(Debug, Serialize, ToSchema)]
pub struct ExchangeShort {
    #[schema(value_type = String, example = "74.30")]
    pub rate: Decimal,
    pub time: DateTime<FixedOffset>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ExchangeProjection {
    Full(ExchangeFull),
    Short(ExchangeShort),
}

/// Full currency projection
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrencyFull {
    #[schema(example = "USD")]
    pub code: String,
    #[schema(example = 2)]
    pub quantifier: i16,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CurrencyProjection {
    Full(CurrencyFull),
    Short(String),
}

/// Round a stored rate to the target currency's quantifier for display,
/// half-down, padded to exactly that many fractional digits.
pub fn display_rate(rate: Decimal, quantifier: i16) -> Decimal {
    let scale = quantifier.max(0) as u32;
    let mut rounded = rate.round_dp_with_strategy(scale, RoundingStrategy::MidpointTowardZero);
    rounded.rescale(scale);
    rounded
}

/// Shape an exchange for the API: display-rounded rate, time re-attached to
/// the requested zone. `None` when the stored local time does not exist in
/// the server's timezone (DST gap).
pub fn project_exchange(
    exchange: &Exchange,
    zone: FixedOffset,
    projection: Projection,
) -> Option<ExchangeProjection> {
    let rate = display_rate(exchange.rate, exchange.to.quantifier);
    let time = attach_zone(exchange.time, zone)?;
    Some(match projection {
        Projection::Full => ExchangeProjection::Full(ExchangeFull {
            from: exchange.from.code.clone(),
            to: exchange.to.code.clone(),
            rate,
            time,
        }),
        Projection::Short => ExchangeProjection::Short(ExchangeShort { rate, time }),
    })
}

pub fn project_currency(currency: &Currency, projection: Projection) -> CurrencyProjection {
    match projection {
        Projection::Full => CurrencyProjection::Full(CurrencyFull {
            code: currency.code.clone(),
            quantifier: currency.quantifier,
        }),
        Projection::Short => CurrencyProjection::Short(currency.code.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_display_rate_rounds_to_quantifier() {
        assert_eq!(display_rate(dec("74.3000000000"), 2).to_string(), "74.30");
        assert_eq!(display_rate(dec("0.0134589502"), 4).to_string(), "0.0135");
        assert_eq!(display_rate(dec("1.5"), 0).to_string(), "1");
        assert_eq!(display_rate(dec("1.7"), 0).to_string(), "2");
    }

    #[test]
    fn test_display_rate_half_down() {
        assert_eq!(display_rate(dec("1.25"), 1).to_string(), "1.2");
        assert_eq!(display_rate(dec("1.26"), 1).to_string(), "1.3");
    }

    #[test]
    fn test_display_rate_pads_to_quantifier() {
        assert_eq!(display_rate(dec("74.3"), 4).to_string(), "74.3000");
    }

    #[test]
    fn test_api_response_success_shape() {
        let resp = ApiResponse::success(42);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 0);
        assert_eq!(json["msg"], "ok");
        assert_eq!(json["data"], 42);
    }

    #[test]
    fn test_api_response_error_omits_data() {
        let resp = ApiResponse::<()>::error(error_codes::RATE_NOT_FOUND, "missing");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 4001);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_currency_short_projection_is_bare_code() {
        let currency = Currency {
            id: 1,
            code: "USD".to_string(),
            quantifier: 2,
        };
        let proj = project_currency(&currency, Projection::Short);
        let json = serde_json::to_value(&proj).unwrap();
        assert_eq!(json, serde_json::json!("USD"));
    }
}
