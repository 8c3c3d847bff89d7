//! Gateway types module
//!
//! Type-safe types for API boundary enforcement:
//!
//! ## Input Types
//! - [`StrictRate`]: format-validated decimal for API input
//! - [`CurrencyPayload`], [`ExchangePayload`]: request bodies
//! - [`TimeQuery`]: time-anchored query parameters
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: unified API response wrapper
//! - Projection DTOs (`ExchangeFull`, `ExchangeShort`, `CurrencyFull`)

pub mod request;
pub mod response;

pub use request::{
    CurrencyPayload, ExchangePayload, Projection, StrictRate, TimeQuery, validate_currency_code,
    validate_quantifier, validate_rate,
};
pub use response::{
    ApiError, ApiResponse, ApiResult, CurrencyFull, CurrencyProjection, ExchangeFull,
    ExchangeProjection, ExchangeShort, created, display_rate, error_codes, ok, project_currency,
    project_exchange,
};
