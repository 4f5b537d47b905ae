//! split payment allocation
//!
//! one received payment may cover several contiguous billing periods. the
//! fee is spread evenly at cent precision, with the division remainder
//! assigned to the last period so the per-period amounts always sum back
//! to the received fee exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::period::{self, Period};
use crate::types::{BillingSchedule, Payment};

/// one period's share of a split payment
///
/// `total_assets` is the undivided AUM snapshot at receipt time, attached
/// to every row; it is not a per-period share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitDistribution {
    pub period: Period,
    pub distributed_amount: Money,
    pub total_assets: Option<Money>,
}

/// distribute a payment's fee across the periods it covers
///
/// a single-period payment yields one distribution carrying the full fee.
/// fails with `InvalidRange` when the payment's end period precedes its
/// start period.
pub fn allocate(payment: &Payment, schedule: BillingSchedule) -> Result<Vec<SplitDistribution>> {
    let keys = period::enumerate_range(
        schedule,
        payment.start_period_key,
        payment.end_period_key,
    )?;
    let count = keys.len();

    if count == 1 {
        let period = Period::from_key(schedule, keys[0])?;
        return Ok(vec![SplitDistribution {
            period,
            distributed_amount: payment.actual_fee,
            total_assets: payment.total_assets,
        }]);
    }

    // per-period amount floored to the cent; the remainder goes to the
    // last period so the sum stays exact
    let base_cents = (payment.actual_fee.as_decimal() * Decimal::from(100)
        / Decimal::from(count as u64))
    .floor();
    let base = Money::from_decimal(base_cents / Decimal::from(100));
    let last = payment.actual_fee - base * Decimal::from((count - 1) as u64);

    let mut distributions = Vec::with_capacity(count);
    for (index, key) in keys.iter().enumerate() {
        let amount = if index == count - 1 { last } else { base };
        distributions.push(SplitDistribution {
            period: Period::from_key(schedule, *key)?,
            distributed_amount: amount,
            total_assets: payment.total_assets,
        });
    }
    Ok(distributions)
}
