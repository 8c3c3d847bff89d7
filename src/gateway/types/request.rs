//! Request types and boundary validation
//!
//! Format validation lives here so handlers never see malformed input; the
//! core trusts codes and quantifiers but derives its own rate scale when
//! ingesting.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Maximum integer digits of a rate
const RATE_MAX_INTEGER_DIGITS: usize = 19;
/// Maximum fractional digits of a rate
const RATE_MAX_SCALE: u32 = 10;

// ============================================================================
// StrictRate: Format-Validated Decimal at Serde Layer
// ============================================================================

/// Strict format rate - validates format during deserialization
///
/// - Rejects `.5` (must be `0.5`)
/// - Rejects `5.` (must be `5.0` or `5`)
/// - Rejects negative numbers and zero is left to business validation
/// - Rejects empty strings and scientific notation
#[derive(Debug, Clone, Copy)]
pub struct StrictRate(Decimal);

impl StrictRate {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }

    #[cfg(test)]
    pub fn from_decimal(d: Decimal) -> Self {
        Self(d)
    }
}

impl<'de> Deserialize<'de> for StrictRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        use std::str::FromStr;

        // Only accept JSON strings for strict format control
        let s = String::deserialize(deserializer)?;

        if s.is_empty() {
            return Err(D::Error::custom("Rate cannot be empty"));
        }
        if s.starts_with('.') {
            return Err(D::Error::custom("Invalid format: use 0.5 not .5"));
        }
        if s.ends_with('.') {
            return Err(D::Error::custom("Invalid format: use 5.0 not 5."));
        }
        if s.contains('e') || s.contains('E') {
            return Err(D::Error::custom(
                "Invalid format: scientific notation not allowed",
            ));
        }
        if s.starts_with('+') {
            return Err(D::Error::custom("Invalid format: + prefix not allowed"));
        }

        let d = Decimal::from_str(&s)
            .map_err(|e| D::Error::custom(format!("Invalid decimal: {}", e)))?;

        if d.is_sign_negative() {
            return Err(D::Error::custom("Rate cannot be negative"));
        }

        Ok(StrictRate(d))
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Currency code: 3-5 uppercase letters or digits
pub fn validate_currency_code(code: &str) -> Result<(), &'static str> {
    if code.len() < 3 || code.len() > 5 {
        return Err("Currency code must be 3-5 characters");
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err("Currency code must contain only uppercase letters and digits");
    }
    Ok(())
}

/// Quantifier: 0 to 10 decimal places
pub fn validate_quantifier(quantifier: i16) -> Result<(), &'static str> {
    if !(0..=10).contains(&quantifier) {
        return Err("Quantifier must be between 0 and 10");
    }
    Ok(())
}

/// Rate: positive, at most 19 integer and 10 fractional digits
pub fn validate_rate(rate: Decimal) -> Result<(), &'static str> {
    if rate <= Decimal::ZERO {
        return Err("Rate must be positive");
    }
    if rate.scale() > RATE_MAX_SCALE {
        return Err("Rate allows at most 10 fractional digits");
    }
    if rate.trunc().to_string().len() > RATE_MAX_INTEGER_DIGITS {
        return Err("Rate allows at most 19 integer digits");
    }
    Ok(())
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Output shape selector
#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Projection {
    #[default]
    Full,
    Short,
}

/// Query parameters for time-anchored lookups
#[derive(Debug, Deserialize, IntoParams)]
pub struct TimeQuery {
    /// Query time, RFC 3339 with zone offset
    pub time: DateTime<FixedOffset>,
    /// Restrict to observations no older than the configured expiry
    #[serde(default = "default_actual_only")]
    pub actual_only: bool,
    /// FULL or SHORT output shape
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub projection: Projection,
}

fn default_actual_only() -> bool {
    true
}

/// Body for POST /currencies and PUT /currencies
#[derive(Debug, Deserialize, ToSchema)]
pub struct CurrencyPayload {
    #[schema(example = "USD")]
    pub code: String,
    #[schema(example = 2)]
    pub quantifier: i16,
}

impl CurrencyPayload {
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_currency_code(&self.code)?;
        validate_quantifier(self.quantifier)
    }
}

/// Body for POST /exchanges
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExchangePayload {
    #[schema(example = "USD")]
    pub from: String,
    #[schema(example = "RUB")]
    pub to: String,
    /// Rate as a string, format validated by StrictRate
    #[schema(value_type = String, example = "74.3000000000")]
    pub rate: StrictRate,
    /// Observation time, RFC 3339 with zone offset
    pub time: DateTime<FixedOffset>,
}

impl ExchangePayload {
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_currency_code(&self.from)?;
        validate_currency_code(&self.to)?;
        validate_rate(self.rate.inner())
    }
}
