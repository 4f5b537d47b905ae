//! period key encoding and range enumeration
//!
//! monthly keys are `year * 100 + month` and quarterly keys are
//! `year * 10 + quarter`, so keys sort chronologically within one schedule
//! but are not numerically dense: 20244 is followed by 20251, not 20245.
//! range enumeration therefore walks ordinals with year rollover rather
//! than iterating an integer range.

use crate::errors::{ReconciliationError, Result};
use crate::period::Period;
use crate::types::{BillingSchedule, PeriodKey};

/// number of ordinals per year for a schedule
fn max_ordinal(schedule: BillingSchedule) -> u32 {
    match schedule {
        BillingSchedule::Monthly => 12,
        BillingSchedule::Quarterly => 4,
    }
}

/// key multiplier for the year component
fn key_base(schedule: BillingSchedule) -> u32 {
    match schedule {
        BillingSchedule::Monthly => 100,
        BillingSchedule::Quarterly => 10,
    }
}

/// encode a (year, ordinal) pair into a period key
pub fn encode(schedule: BillingSchedule, year: i32, ordinal: u32) -> Result<PeriodKey> {
    if ordinal < 1 || ordinal > max_ordinal(schedule) {
        return Err(ReconciliationError::InvalidOrdinal { schedule, ordinal });
    }
    Ok(year as PeriodKey * key_base(schedule) + ordinal)
}

/// decode a period key into its (year, ordinal) pair
///
/// the only validation is range-checking the derived ordinal; an
/// out-of-range ordinal means the key was corrupted upstream.
pub fn decode(schedule: BillingSchedule, key: PeriodKey) -> Result<(i32, u32)> {
    let base = key_base(schedule);
    let year = (key / base) as i32;
    let ordinal = key % base;
    if ordinal < 1 || ordinal > max_ordinal(schedule) {
        return Err(ReconciliationError::MalformedKey { schedule, key });
    }
    Ok((year, ordinal))
}

/// build the display label for a period key
pub fn label(schedule: BillingSchedule, key: PeriodKey) -> Result<String> {
    Ok(Period::from_key(schedule, key)?.display_label())
}

/// enumerate every period key from start to end inclusive
///
/// advances one ordinal at a time, rolling the year at month 12 or
/// quarter 4. fails with `InvalidRange` when end precedes start in
/// schedule-native chronological order.
pub fn enumerate_range(
    schedule: BillingSchedule,
    start: PeriodKey,
    end: PeriodKey,
) -> Result<Vec<PeriodKey>> {
    let (start_year, start_ordinal) = decode(schedule, start)?;
    let (end_year, end_ordinal) = decode(schedule, end)?;

    if (end_year, end_ordinal) < (start_year, start_ordinal) {
        return Err(ReconciliationError::InvalidRange { start, end });
    }

    let mut keys = Vec::new();
    let mut year = start_year;
    let mut ordinal = start_ordinal;
    loop {
        keys.push(encode(schedule, year, ordinal)?);
        if (year, ordinal) == (end_year, end_ordinal) {
            break;
        }
        ordinal += 1;
        if ordinal > max_ordinal(schedule) {
            ordinal = 1;
            year += 1;
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_monthly() {
        assert_eq!(encode(BillingSchedule::Monthly, 2025, 1).unwrap(), 202501);
        assert_eq!(encode(BillingSchedule::Monthly, 2024, 12).unwrap(), 202412);
    }

    #[test]
    fn test_encode_quarterly() {
        assert_eq!(encode(BillingSchedule::Quarterly, 2025, 1).unwrap(), 20251);
        assert_eq!(encode(BillingSchedule::Quarterly, 2024, 4).unwrap(), 20244);
    }

    #[test]
    fn test_encode_rejects_bad_ordinals() {
        assert_eq!(
            encode(BillingSchedule::Monthly, 2025, 0),
            Err(ReconciliationError::InvalidOrdinal {
                schedule: BillingSchedule::Monthly,
                ordinal: 0,
            })
        );
        assert_eq!(
            encode(BillingSchedule::Monthly, 2025, 13),
            Err(ReconciliationError::InvalidOrdinal {
                schedule: BillingSchedule::Monthly,
                ordinal: 13,
            })
        );
        assert_eq!(
            encode(BillingSchedule::Quarterly, 2025, 5),
            Err(ReconciliationError::InvalidOrdinal {
                schedule: BillingSchedule::Quarterly,
                ordinal: 5,
            })
        );
    }

    #[test]
    fn test_decode_round_trip() {
        for year in [1999, 2024, 2025] {
            for month in 1..=12 {
                let key = encode(BillingSchedule::Monthly, year, month).unwrap();
                assert_eq!(decode(BillingSchedule::Monthly, key).unwrap(), (year, month));
            }
            for quarter in 1..=4 {
                let key = encode(BillingSchedule::Quarterly, year, quarter).unwrap();
                assert_eq!(
                    decode(BillingSchedule::Quarterly, key).unwrap(),
                    (year, quarter)
                );
            }
        }
    }

    #[test]
    fn test_decode_rejects_malformed_keys() {
        // month 13 and month 0 cannot come from encode
        assert_eq!(
            decode(BillingSchedule::Monthly, 202513),
            Err(ReconciliationError::MalformedKey {
                schedule: BillingSchedule::Monthly,
                key: 202513,
            })
        );
        assert_eq!(
            decode(BillingSchedule::Monthly, 202500),
            Err(ReconciliationError::MalformedKey {
                schedule: BillingSchedule::Monthly,
                key: 202500,
            })
        );
        assert_eq!(
            decode(BillingSchedule::Quarterly, 20255),
            Err(ReconciliationError::MalformedKey {
                schedule: BillingSchedule::Quarterly,
                key: 20255,
            })
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(label(BillingSchedule::Monthly, 202501).unwrap(), "January 2025");
        assert_eq!(label(BillingSchedule::Quarterly, 20253).unwrap(), "Q3 2025");
    }

    #[test]
    fn test_enumerate_single_period() {
        let keys = enumerate_range(BillingSchedule::Monthly, 202506, 202506).unwrap();
        assert_eq!(keys, vec![202506]);
    }

    #[test]
    fn test_enumerate_within_year() {
        let keys = enumerate_range(BillingSchedule::Monthly, 202502, 202504).unwrap();
        assert_eq!(keys, vec![202502, 202503, 202504]);
    }

    #[test]
    fn test_monthly_year_rollover() {
        let keys = enumerate_range(BillingSchedule::Monthly, 202412, 202502).unwrap();
        assert_eq!(keys, vec![202412, 202501, 202502]);
    }

    #[test]
    fn test_quarterly_year_rollover() {
        let keys = enumerate_range(BillingSchedule::Quarterly, 20244, 20252).unwrap();
        assert_eq!(keys, vec![20244, 20251, 20252]);
    }

    #[test]
    fn test_enumerate_multi_year() {
        let keys = enumerate_range(BillingSchedule::Quarterly, 20243, 20261).unwrap();
        assert_eq!(keys, vec![20243, 20244, 20251, 20252, 20253, 20254, 20261]);
    }

    #[test]
    fn test_enumerate_rejects_reversed_range() {
        assert_eq!(
            enumerate_range(BillingSchedule::Monthly, 202502, 202412),
            Err(ReconciliationError::InvalidRange {
                start: 202502,
                end: 202412,
            })
        );
    }
}
