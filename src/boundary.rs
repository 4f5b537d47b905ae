//! translation of the external data collaborator's wire shapes
//!
//! the API serves period coverage as four-field pairs that vary by
//! schedule (start/end month+year, or start/end quarter+year). everything
//! past this module works on period keys only; the pairs are encoded once
//! here and validated in the process.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{ReconciliationError, Result};
use crate::period;
use crate::types::{BillingSchedule, Contract, FeeType, Payment};

/// contract row as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    pub fee_type: Option<FeeType>,
    pub percent_rate: Option<Decimal>,
    pub flat_rate: Option<Decimal>,
    pub payment_schedule: BillingSchedule,
}

impl ContractRecord {
    pub fn into_contract(self) -> Contract {
        Contract {
            fee_type: self.fee_type,
            percent_rate: self.percent_rate.map(Rate::from_decimal),
            flat_rate: self.flat_rate.map(Money::from_decimal),
            billing_schedule: self.payment_schedule,
        }
    }
}

/// payment row as served by the API
///
/// monthly payments fill the `applied_*_month*` fields, quarterly ones the
/// `applied_*_quarter*` fields; the contract's schedule decides which set
/// is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub received_date: NaiveDate,
    pub total_assets: Option<Decimal>,
    pub actual_fee: Decimal,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub applied_start_month: Option<u32>,
    #[serde(default)]
    pub applied_start_month_year: Option<i32>,
    #[serde(default)]
    pub applied_end_month: Option<u32>,
    #[serde(default)]
    pub applied_end_month_year: Option<i32>,
    #[serde(default)]
    pub applied_start_quarter: Option<u32>,
    #[serde(default)]
    pub applied_start_quarter_year: Option<i32>,
    #[serde(default)]
    pub applied_end_quarter: Option<u32>,
    #[serde(default)]
    pub applied_end_quarter_year: Option<i32>,
}

impl PaymentRecord {
    /// validate and translate into a domain payment under a schedule
    pub fn into_payment(self, schedule: BillingSchedule) -> Result<Payment> {
        let actual_fee = Money::from_decimal(self.actual_fee);
        if !actual_fee.is_positive() {
            return Err(ReconciliationError::InvalidPaymentAmount { amount: actual_fee });
        }

        let (start_year, start_ordinal, end_year, end_ordinal) = match schedule {
            BillingSchedule::Monthly => period_fields(
                schedule,
                self.applied_start_month,
                self.applied_start_month_year,
                self.applied_end_month,
                self.applied_end_month_year,
            )?,
            BillingSchedule::Quarterly => period_fields(
                schedule,
                self.applied_start_quarter,
                self.applied_start_quarter_year,
                self.applied_end_quarter,
                self.applied_end_quarter_year,
            )?,
        };

        Ok(Payment {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            received_date: self.received_date,
            total_assets: self.total_assets.map(Money::from_decimal),
            actual_fee,
            start_period_key: period::encode(schedule, start_year, start_ordinal)?,
            end_period_key: period::encode(schedule, end_year, end_ordinal)?,
            method: self.method,
            notes: self.notes,
        })
    }
}

fn period_fields(
    schedule: BillingSchedule,
    start_ordinal: Option<u32>,
    start_year: Option<i32>,
    end_ordinal: Option<u32>,
    end_year: Option<i32>,
) -> Result<(i32, u32, i32, u32)> {
    match (start_ordinal, start_year, end_ordinal, end_year) {
        (Some(so), Some(sy), Some(eo), Some(ey)) => Ok((sy, so, ey, eo)),
        _ => Err(ReconciliationError::MissingPeriodFields { schedule }),
    }
}
