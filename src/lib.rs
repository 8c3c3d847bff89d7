//! Rate Resolver - Currency Exchange Rate Resolution Service
//!
//! Resolves exchange rates for arbitrary currency pairs from an append-only
//! ledger of rate observations. When no direct observation exists, rates are
//! derived from the inverse pair or triangulated through a common base
//! currency, and every derived rate is written back to the ledger.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration per environment
//! - [`db`] - PostgreSQL connection pool and schema
//! - [`currency`] - Currency catalog (codes and display quantifiers)
//! - [`exchange`] - Rate ledger, resolution and derivation
//! - [`gateway`] - Axum HTTP API with Swagger UI
//! - [`error`] - Service error taxonomy
//! - [`logging`] - Rolling-file tracing setup

pub mod config;
pub mod currency;
pub mod db;
pub mod error;
pub mod exchange;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use currency::{Currency, CurrencyService};
pub use db::Database;
pub use error::ServiceError;
pub use exchange::{DerivedRate, Exchange, ExchangeService};
