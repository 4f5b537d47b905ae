use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decimal::Money;
use crate::types::{BillingSchedule, PeriodKey};

// serializable so a malformed history row can carry its error through
// the view model
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReconciliationError {
    #[error("invalid ordinal {ordinal} for {schedule:?} schedule")]
    InvalidOrdinal {
        schedule: BillingSchedule,
        ordinal: u32,
    },

    #[error("malformed period key {key} for {schedule:?} schedule")]
    MalformedKey {
        schedule: BillingSchedule,
        key: PeriodKey,
    },

    #[error("invalid period range: end {end} precedes start {start}")]
    InvalidRange {
        start: PeriodKey,
        end: PeriodKey,
    },

    #[error("client has no payment history")]
    NoPaymentHistory,

    #[error("invalid payment amount: {amount}")]
    InvalidPaymentAmount {
        amount: Money,
    },

    #[error("payment record is missing period fields for {schedule:?} schedule")]
    MissingPeriodFields {
        schedule: BillingSchedule,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ReconciliationError>;
