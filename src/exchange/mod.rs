//! Rate ledger and rate resolver.
//!
//! The ledger is an append-only store of directed, timestamped rate
//! observations. The resolver answers pair lookups through a short-circuit
//! chain of strategies (direct, inverse, triangulation) and writes any
//! derived rate back into the ledger.

pub mod models;
pub mod repository;
pub mod resolver;
pub mod service;

pub use models::{DerivedRate, Exchange};
pub use repository::ExchangeRepository;
pub use service::ExchangeService;
