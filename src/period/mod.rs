pub mod codec;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::types::{BillingSchedule, PeriodKey};

pub use codec::{decode, encode, enumerate_range, label};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// one decoded billing period
///
/// derived from a period key, never stored. `ordinal` is the month for
/// monthly schedules and the quarter for quarterly schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub schedule: BillingSchedule,
    pub year: i32,
    pub ordinal: u32,
    pub key: PeriodKey,
}

impl Period {
    /// decode a key into a period, validating the derived ordinal
    pub fn from_key(schedule: BillingSchedule, key: PeriodKey) -> Result<Self> {
        let (year, ordinal) = codec::decode(schedule, key)?;
        Ok(Period {
            schedule,
            year,
            ordinal,
            key,
        })
    }

    /// human label: "January 2025" for monthly, "Q1 2025" for quarterly
    pub fn display_label(&self) -> String {
        match self.schedule {
            BillingSchedule::Monthly => {
                format!("{} {}", MONTH_NAMES[(self.ordinal - 1) as usize], self.year)
            }
            BillingSchedule::Quarterly => format!("Q{} {}", self.ordinal, self.year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_key() {
        let period = Period::from_key(BillingSchedule::Monthly, 202503).unwrap();
        assert_eq!(period.year, 2025);
        assert_eq!(period.ordinal, 3);
        assert_eq!(period.key, 202503);
    }

    #[test]
    fn test_display_labels() {
        let march = Period::from_key(BillingSchedule::Monthly, 202503).unwrap();
        assert_eq!(march.display_label(), "March 2025");

        let q1 = Period::from_key(BillingSchedule::Quarterly, 20251).unwrap();
        assert_eq!(q1.display_label(), "Q1 2025");

        let december = Period::from_key(BillingSchedule::Monthly, 202412).unwrap();
        assert_eq!(december.display_label(), "December 2024");
    }
}
