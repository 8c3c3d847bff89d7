use std::sync::Arc;

use crate::currency::CurrencyService;
use crate::db::Database;
use crate::exchange::ExchangeService;

/// Shared gateway application state
pub struct AppState {
    pub db: Arc<Database>,
    pub currencies: CurrencyService,
    pub exchanges: ExchangeService,
}

impl AppState {
    pub fn new(db: Arc<Database>, expire_in_minutes: i64) -> Self {
        Self {
            currencies: CurrencyService::new(db.clone(), expire_in_minutes),
            exchanges: ExchangeService::new(db.clone(), expire_in_minutes),
            db,
        }
    }
}
