//! per-client reconciliation façade
//!
//! stateless request/response assembly of the payment-history view model:
//! decode periods, compute expected fees, expand split payments, classify
//! variance. every call takes immutable snapshots and returns pure data;
//! nothing here reads a clock or touches storage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ReconciliationConfig;
use crate::decimal::Money;
use crate::errors::{ReconciliationError, Result};
use crate::fees::{
    compute_expected_fee, AssetObservation, ExpectedFeeResult, Variance, VarianceClassifier,
};
use crate::payments::{allocate, SplitDistribution};
use crate::period::Period;
use crate::types::{Contract, Payment, PaymentId};

/// one row of a client's payment history, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentHistoryRow {
    pub payment_id: PaymentId,
    pub received_date: NaiveDate,
    pub actual_fee: Money,
    pub total_assets: Option<Money>,
    pub method: Option<String>,
    pub notes: Option<String>,
    pub detail: RowDetail,
}

/// schedule-dependent detail of a history row
///
/// a split payment carries its per-period breakdown and no top-level
/// expected fee or variance; the source system never defined a per-period
/// expectation for splits, so none is invented here. a structurally
/// invalid payment becomes a `Malformed` row carrying its error while the
/// rest of the history still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowDetail {
    Single {
        period: Period,
        expected: ExpectedFeeResult,
        variance: Option<Variance>,
    },
    Split {
        distributions: Vec<SplitDistribution>,
    },
    Malformed {
        error: ReconciliationError,
    },
}

/// the most recent payment plus the client's unpaid periods
///
/// `missing_periods` is computed by the caller and passed through, never
/// derived here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastPaymentSummary {
    pub row: PaymentHistoryRow,
    pub missing_periods: Vec<String>,
}

/// stateless orchestrator for a single client's reconciliation
#[derive(Debug, Clone, Copy)]
pub struct ReconciliationService {
    config: ReconciliationConfig,
    classifier: VarianceClassifier,
}

impl Default for ReconciliationService {
    fn default() -> Self {
        Self::with_config(ReconciliationConfig::default())
            .expect("default configuration is valid")
    }
}

impl ReconciliationService {
    pub fn with_config(config: ReconciliationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            classifier: VarianceClassifier::new(config.variance_tolerance),
        })
    }

    pub fn config(&self) -> &ReconciliationConfig {
        &self.config
    }

    /// build the full payment history view for one client
    ///
    /// rows come back in input order; callers pre-sort by received date
    /// descending and this never re-sorts. `current_assets` is the
    /// client's AUM at request time, used as the last-resort estimation
    /// basis when neither the payment nor any older payment reported one.
    pub fn build_history(
        &self,
        contract: &Contract,
        payments: &[Payment],
        current_assets: Option<Money>,
    ) -> Vec<PaymentHistoryRow> {
        payments
            .iter()
            .map(|payment| self.build_row(contract, payment, payments, current_assets))
            .collect()
    }

    /// summarize the most recent payment
    ///
    /// fails with `NoPaymentHistory` when the client has no payments.
    /// `missing_periods` comes from the caller and is passed through.
    pub fn build_last_payment_summary(
        &self,
        contract: &Contract,
        payments: &[Payment],
        current_assets: Option<Money>,
        missing_periods: Vec<String>,
    ) -> Result<LastPaymentSummary> {
        let last = payments
            .iter()
            .max_by_key(|payment| payment.received_date)
            .ok_or(ReconciliationError::NoPaymentHistory)?;

        Ok(LastPaymentSummary {
            row: self.build_row(contract, last, payments, current_assets),
            missing_periods,
        })
    }

    fn build_row(
        &self,
        contract: &Contract,
        payment: &Payment,
        all_payments: &[Payment],
        current_assets: Option<Money>,
    ) -> PaymentHistoryRow {
        let detail = if payment.is_split() {
            match allocate(payment, contract.billing_schedule) {
                Ok(distributions) => RowDetail::Split { distributions },
                Err(error) => RowDetail::Malformed { error },
            }
        } else {
            match Period::from_key(contract.billing_schedule, payment.start_period_key) {
                Ok(period) => {
                    let history =
                        assets_history_before(payment, all_payments, current_assets);
                    let expected =
                        compute_expected_fee(contract, payment.total_assets, &history);
                    let variance =
                        self.classifier.classify(payment.actual_fee, expected.fee);
                    RowDetail::Single {
                        period,
                        expected,
                        variance,
                    }
                }
                Err(error) => RowDetail::Malformed { error },
            }
        };

        PaymentHistoryRow {
            payment_id: payment.id,
            received_date: payment.received_date,
            actual_fee: payment.actual_fee,
            total_assets: payment.total_assets,
            method: payment.method.clone(),
            notes: payment.notes.clone(),
            detail,
        }
    }
}

/// assets observations from payments strictly older than the given one,
/// most recent first, with the request-level current assets appended as
/// the final fallback
fn assets_history_before(
    payment: &Payment,
    all_payments: &[Payment],
    current_assets: Option<Money>,
) -> Vec<AssetObservation> {
    let mut older: Vec<&Payment> = all_payments
        .iter()
        .filter(|other| other.received_date < payment.received_date)
        .collect();
    older.sort_by(|a, b| b.received_date.cmp(&a.received_date));

    let mut observations: Vec<AssetObservation> = older
        .into_iter()
        .map(|other| AssetObservation {
            date: other.received_date,
            assets: other.total_assets,
        })
        .collect();

    if current_assets.is_some() {
        observations.push(AssetObservation {
            date: payment.received_date,
            assets: current_assets,
        });
    }
    observations
}
