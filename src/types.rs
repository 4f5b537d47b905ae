use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};

/// unique identifier for a payment row
pub type PaymentId = Uuid;

/// compact integer encoding of one billing period
///
/// monthly keys are `year * 100 + month`, quarterly keys are
/// `year * 10 + quarter`. keys sort chronologically within one schedule;
/// keys from different schedules are never comparable.
pub type PeriodKey = u32;

/// how often a contract bills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingSchedule {
    Monthly,
    Quarterly,
}

/// how a contract's fee is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeType {
    /// fee is a fraction of assets under management, per period
    Percentage,
    /// fee is a fixed amount per period
    Flat,
}

/// contracted fee terms for one client
///
/// exactly one of `percent_rate` / `flat_rate` is meaningful for the
/// contract's fee type; the other is ignored. the billing schedule is
/// fixed for the life of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub fee_type: Option<FeeType>,
    pub percent_rate: Option<Rate>,
    pub flat_rate: Option<Money>,
    pub billing_schedule: BillingSchedule,
}

impl Contract {
    pub fn percentage(rate: Rate, schedule: BillingSchedule) -> Self {
        Self {
            fee_type: Some(FeeType::Percentage),
            percent_rate: Some(rate),
            flat_rate: None,
            billing_schedule: schedule,
        }
    }

    pub fn flat(rate: Money, schedule: BillingSchedule) -> Self {
        Self {
            fee_type: Some(FeeType::Flat),
            percent_rate: None,
            flat_rate: Some(rate),
            billing_schedule: schedule,
        }
    }
}

/// one received fee payment
///
/// `start_period_key == end_period_key` means a single-period payment;
/// inequality means a split payment covering every period in the inclusive
/// range. `total_assets` is the AUM snapshot at receipt, when reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub received_date: NaiveDate,
    pub total_assets: Option<Money>,
    pub actual_fee: Money,
    pub start_period_key: PeriodKey,
    pub end_period_key: PeriodKey,
    pub method: Option<String>,
    pub notes: Option<String>,
}

impl Payment {
    /// whether this payment covers more than one billing period
    pub fn is_split(&self) -> bool {
        self.start_period_key != self.end_period_key
    }
}
