//! Currency catalog: identity and display precision for currency codes.

pub mod models;
pub mod repository;
pub mod service;

pub use models::Currency;
pub use repository::CurrencyRepository;
pub use service::CurrencyService;
