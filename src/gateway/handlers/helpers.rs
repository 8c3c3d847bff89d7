//! Handler helper functions
//!
//! The core operates on naive server-local timestamps; these helpers do the
//! zone conversion at the boundary in both directions.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};

/// Convert a zoned input timestamp into the server-local naive time the core
/// operates on.
pub fn to_local_naive(time: DateTime<FixedOffset>) -> NaiveDateTime {
    time.with_timezone(&Local).naive_local()
}

/// Re-attach a requested zone to a stored server-local naive time.
///
/// `None` when the naive time falls into a DST gap of the server timezone.
pub fn attach_zone(time: NaiveDateTime, zone: FixedOffset) -> Option<DateTime<FixedOffset>> {
    Local
        .from_local_datetime(&time)
        .earliest()
        .map(|t| t.with_timezone(&zone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_round_trip_preserves_instant() {
        let zone = FixedOffset::east_opt(3 * 3600).unwrap();
        let input = zone.with_ymd_and_hms(2020, 8, 30, 16, 55, 0).unwrap();

        let naive = to_local_naive(input.fixed_offset());
        let back = attach_zone(naive, zone).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn test_to_local_naive_strips_zone() {
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let input = zone.with_ymd_and_hms(2020, 1, 15, 8, 0, 0).unwrap();

        let naive = to_local_naive(input.fixed_offset());
        // The instant is the same regardless of the offset it was phrased in
        let utc_naive = to_local_naive(input.with_timezone(&chrono::Utc).fixed_offset());
        assert_eq!(naive, utc_naive);
    }
}
