//! Rate ledger data model

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::currency::Currency;

/// One directed, timestamped rate observation: 1 unit of `from` equals
/// `rate` units of `to` at `time` (naive server-local time).
///
/// Observations are immutable once stored. Derived rows written back by the
/// resolver are indistinguishable from externally supplied ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub id: i64,
    pub from: Currency,
    pub to: Currency,
    pub rate: Decimal,
    pub time: NaiveDateTime,
}

/// A rate the resolver synthesized but has not yet appended to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRate {
    pub from: Currency,
    pub to: Currency,
    pub rate: Decimal,
    pub time: NaiveDateTime,
}
