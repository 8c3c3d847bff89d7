//! Rate derivation arithmetic.
//!
//! The resolver chain is direct -> inverse -> triangulation. The service
//! layer owns the queries and the write-back; everything here is pure
//! computation over already-fetched ledger rows so it can be tested without
//! a database.
//!
//! Derived rates carry 10 fractional digits, rounded half-down.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashSet;

use super::models::{DerivedRate, Exchange};

/// Fractional digits of a derived rate.
pub const RATE_SCALE: u32 = 10;

/// Upper bound on each triangulation candidate pool.
pub const CANDIDATE_LIMIT: i64 = 1000;

/// Round to [`RATE_SCALE`] fractional digits, half-down.
pub fn round_rate(rate: Decimal) -> Decimal {
    rate.round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointTowardZero)
}

/// Strict window: only observations at most `expire_in_minutes` old count.
pub fn strict_window(time: NaiveDateTime, expire_in_minutes: i64) -> (NaiveDateTime, NaiveDateTime) {
    (time - Duration::minutes(expire_in_minutes), time)
}

/// Non-strict window: the most recent known rate at or before `time`,
/// however old. The floor predates every observation the ledger can hold.
pub fn historical_window(time: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let floor = NaiveDate::from_ymd_opt(2000, 1, 1)
        .expect("valid constant date")
        .and_hms_opt(0, 0, 0)
        .expect("valid constant time");
    (floor, time)
}

/// Number of decimal places used as quantifier when materializing currencies
/// from an ingested rate: the scale of the canonicalized decimal, trailing
/// zeros stripped. `73.490` yields 2, not 3.
pub fn rate_quantifier(rate: Decimal) -> i16 {
    rate.normalize().scale().min(RATE_SCALE) as i16
}

/// Derive `from -> to` from the reverse observation `to -> from`.
///
/// The derived rate is the reciprocal and keeps the reverse observation's
/// timestamp, not the query time. A zero reverse rate is a degenerate ledger
/// row and yields no derivation.
pub fn invert(reverse: &Exchange) -> Option<DerivedRate> {
    let rate = Decimal::ONE.checked_div(reverse.rate)?;
    Some(DerivedRate {
        from: reverse.to.clone(),
        to: reverse.from.clone(),
        rate: round_rate(rate),
        time: reverse.time,
    })
}

/// Derive `from -> to` through a common base currency.
///
/// `by_from` and `by_to` are the candidate pools ending at the requested
/// `from` and `to` codes, both newest first. The base is the source currency
/// of the first `by_from` candidate that also sources a `by_to` candidate;
/// each leg is then the most recent observation with that base in its pool.
///
/// `rate = leg_to.rate / leg_from.rate`, timestamp is the older leg's.
pub fn triangulate(by_from: &[Exchange], by_to: &[Exchange]) -> Option<DerivedRate> {
    if by_from.is_empty() || by_to.is_empty() {
        return None;
    }

    let to_bases: HashSet<&str> = by_to.iter().map(|e| e.from.code.as_str()).collect();
    let leg_from = by_from
        .iter()
        .find(|e| to_bases.contains(e.from.code.as_str()))?;
    let leg_to = by_to.iter().find(|e| e.from.code == leg_from.from.code)?;

    let rate = leg_to.rate.checked_div(leg_from.rate)?;
    let time = leg_from.time.min(leg_to.time);
    Some(DerivedRate {
        from: leg_from.to.clone(),
        to: leg_to.to.clone(),
        rate: round_rate(rate),
        time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;
    use std::str::FromStr;

    fn cur(id: i64, code: &str) -> Currency {
        Currency {
            id,
            code: code.to_string(),
            quantifier: 2,
        }
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 8, 30)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn obs(id: i64, from: Currency, to: Currency, rate: &str, time: NaiveDateTime) -> Exchange {
        Exchange {
            id,
            from,
            to,
            rate: Decimal::from_str(rate).unwrap(),
            time,
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ------------------------------------------------------------------
    // Rounding
    // ------------------------------------------------------------------

    #[test]
    fn test_round_rate_half_down() {
        // Exactly at the midpoint of the 10th digit rounds toward zero
        assert_eq!(round_rate(dec("0.12345678905")), dec("0.1234567890"));
        // Above the midpoint rounds away
        assert_eq!(round_rate(dec("0.12345678906")), dec("0.1234567891"));
        // Shorter scales are untouched
        assert_eq!(round_rate(dec("1.5")), dec("1.5"));
    }

    // ------------------------------------------------------------------
    // Windows
    // ------------------------------------------------------------------

    #[test]
    fn test_strict_window_bounds() {
        let (start, end) = strict_window(at(14, 0), 120);
        assert_eq!(start, at(12, 0));
        assert_eq!(end, at(14, 0));
    }

    #[test]
    fn test_historical_window_floor() {
        let (start, end) = historical_window(at(14, 0));
        assert_eq!(
            start,
            NaiveDate::from_ymd_opt(2000, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert_eq!(end, at(14, 0));
    }

    // ------------------------------------------------------------------
    // Quantifier derivation
    // ------------------------------------------------------------------

    #[test]
    fn test_rate_quantifier_strips_trailing_zeros() {
        // The pinned example: 73.490 has canonical scale 2, not 3
        assert_eq!(rate_quantifier(dec("73.490")), 2);
        assert_eq!(rate_quantifier(dec("74.3000000000")), 1);
        assert_eq!(rate_quantifier(dec("5")), 0);
        assert_eq!(rate_quantifier(dec("5.00")), 0);
        assert_eq!(rate_quantifier(dec("0.0134589502")), 10);
    }

    // ------------------------------------------------------------------
    // Inversion
    // ------------------------------------------------------------------

    #[test]
    fn test_invert_reciprocal_and_direction() {
        let reverse = obs(1, cur(1, "RUB"), cur(2, "USD"), "74.3", at(13, 55));
        let derived = invert(&reverse).unwrap();

        assert_eq!(derived.from.code, "USD");
        assert_eq!(derived.to.code, "RUB");
        assert_eq!(derived.rate, dec("0.0134589502"));
        // Timestamp comes from the reverse observation, not the query
        assert_eq!(derived.time, at(13, 55));
    }

    #[test]
    fn test_invert_exact() {
        let reverse = obs(1, cur(1, "EUR"), cur(2, "USD"), "2", at(10, 0));
        let derived = invert(&reverse).unwrap();
        assert_eq!(derived.rate, dec("0.5"));
    }

    #[test]
    fn test_invert_repeating_fraction_rounds_half_down() {
        let reverse = obs(1, cur(1, "EUR"), cur(2, "USD"), "3", at(10, 0));
        let derived = invert(&reverse).unwrap();
        assert_eq!(derived.rate, dec("0.3333333333"));
    }

    #[test]
    fn test_invert_zero_rate_yields_nothing() {
        let reverse = obs(1, cur(1, "EUR"), cur(2, "USD"), "0", at(10, 0));
        assert!(invert(&reverse).is_none());
    }

    // ------------------------------------------------------------------
    // Triangulation
    // ------------------------------------------------------------------

    #[test]
    fn test_triangulate_common_base() {
        // X->A rate 2 at t1, X->B rate 3 at t2 (t1 <= t2) => A->B = 1.5 at t1
        let x = cur(1, "XAU");
        let a = cur(2, "AAA");
        let b = cur(3, "BBB");
        let by_from = vec![obs(1, x.clone(), a.clone(), "2", at(9, 0))];
        let by_to = vec![obs(2, x.clone(), b.clone(), "3", at(10, 0))];

        let derived = triangulate(&by_from, &by_to).unwrap();
        assert_eq!(derived.from.code, "AAA");
        assert_eq!(derived.to.code, "BBB");
        assert_eq!(derived.rate, dec("1.5"));
        assert_eq!(derived.time, at(9, 0));
    }

    #[test]
    fn test_triangulate_takes_older_leg_time() {
        let x = cur(1, "XAU");
        let a = cur(2, "AAA");
        let b = cur(3, "BBB");
        let by_from = vec![obs(1, x.clone(), a.clone(), "2", at(11, 0))];
        let by_to = vec![obs(2, x.clone(), b.clone(), "3", at(10, 30))];

        let derived = triangulate(&by_from, &by_to).unwrap();
        assert_eq!(derived.time, at(10, 30));
    }

    #[test]
    fn test_triangulate_empty_pool_fails() {
        let x = cur(1, "XAU");
        let a = cur(2, "AAA");
        let by_from = vec![obs(1, x, a, "2", at(9, 0))];
        assert!(triangulate(&by_from, &[]).is_none());
        assert!(triangulate(&[], &by_from).is_none());
    }

    #[test]
    fn test_triangulate_no_common_base_fails() {
        let by_from = vec![obs(1, cur(1, "XAU"), cur(3, "AAA"), "2", at(9, 0))];
        let by_to = vec![obs(2, cur(2, "XAG"), cur(4, "BBB"), "3", at(9, 30))];
        assert!(triangulate(&by_from, &by_to).is_none());
    }

    #[test]
    fn test_triangulate_base_tie_break_is_from_pool_recency() {
        // Both X and Y are common bases. The from-pool is newest first and
        // its first entry uses Y, so Y wins.
        let x = cur(1, "XAU");
        let y = cur(2, "YAU");
        let a = cur(3, "AAA");
        let b = cur(4, "BBB");
        let by_from = vec![
            obs(1, y.clone(), a.clone(), "4", at(10, 0)),
            obs(2, x.clone(), a.clone(), "2", at(9, 0)),
        ];
        let by_to = vec![
            obs(3, x.clone(), b.clone(), "3", at(10, 0)),
            obs(4, y.clone(), b.clone(), "8", at(9, 30)),
        ];

        let derived = triangulate(&by_from, &by_to).unwrap();
        // Legs: Y->A rate 4, Y->B rate 8 => A->B = 2
        assert_eq!(derived.rate, dec("2"));
        assert_eq!(derived.time, at(9, 30));
    }

    #[test]
    fn test_triangulate_picks_most_recent_leg_per_pool() {
        // Two observations with the same base in a pool: the newest one
        // (first in the list) is the leg.
        let x = cur(1, "XAU");
        let a = cur(2, "AAA");
        let b = cur(3, "BBB");
        let by_from = vec![
            obs(1, x.clone(), a.clone(), "2", at(11, 0)),
            obs(2, x.clone(), a.clone(), "5", at(8, 0)),
        ];
        let by_to = vec![obs(3, x.clone(), b.clone(), "3", at(10, 0))];

        let derived = triangulate(&by_from, &by_to).unwrap();
        assert_eq!(derived.rate, dec("1.5"));
    }

    #[test]
    fn test_triangulate_rounds_half_down() {
        let x = cur(1, "XAU");
        let a = cur(2, "AAA");
        let b = cur(3, "BBB");
        let by_from = vec![obs(1, x.clone(), a.clone(), "3", at(9, 0))];
        let by_to = vec![obs(2, x.clone(), b.clone(), "1", at(9, 0))];

        let derived = triangulate(&by_from, &by_to).unwrap();
        assert_eq!(derived.rate, dec("0.3333333333"));
    }

    #[test]
    fn test_triangulate_zero_leg_rate_fails() {
        let x = cur(1, "XAU");
        let a = cur(2, "AAA");
        let b = cur(3, "BBB");
        let by_from = vec![obs(1, x.clone(), a.clone(), "0", at(9, 0))];
        let by_to = vec![obs(2, x.clone(), b.clone(), "3", at(9, 0))];
        assert!(triangulate(&by_from, &by_to).is_none());
    }
}
