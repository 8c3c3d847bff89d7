//! HTTP handlers

pub mod currency;
pub mod exchange;
pub mod health;
pub mod helpers;

pub use currency::*;
pub use exchange::*;
pub use health::*;
