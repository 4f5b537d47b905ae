use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{Contract, FeeType};

/// one historical AUM observation
///
/// callers order these most recent first; the fallback scan takes the
/// first entry with a reported assets value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetObservation {
    pub date: NaiveDate,
    pub assets: Option<Money>,
}

/// expected fee for one billing period
///
/// `fee` is None only when a percentage contract has no assets value
/// anywhere to apply the rate to. that is an expected user-visible state,
/// not an error; presentation renders it as "N/A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedFeeResult {
    pub fee: Option<Money>,
    pub is_estimated: bool,
    pub basis_note: Option<String>,
}

impl ExpectedFeeResult {
    fn exact(fee: Option<Money>) -> Self {
        Self {
            fee,
            is_estimated: false,
            basis_note: None,
        }
    }
}

/// compute the expected fee for a contract given an assets snapshot
///
/// a flat contract ignores assets entirely. a percentage contract uses
/// `current_assets` when present; otherwise it estimates from the most
/// recent historical observation with a reported value, and gives up
/// with a None fee when there is none.
pub fn compute_expected_fee(
    contract: &Contract,
    current_assets: Option<Money>,
    recent_assets: &[AssetObservation],
) -> ExpectedFeeResult {
    let fee_type = match contract.fee_type {
        Some(fee_type) => fee_type,
        None => return ExpectedFeeResult::exact(None),
    };

    match fee_type {
        FeeType::Flat => ExpectedFeeResult::exact(contract.flat_rate),
        FeeType::Percentage => {
            let rate = contract.percent_rate.unwrap_or(Rate::ZERO);
            if let Some(assets) = current_assets {
                return ExpectedFeeResult::exact(Some(rate.of(assets)));
            }
            match recent_assets.iter().find_map(|obs| obs.assets) {
                Some(assets) => ExpectedFeeResult {
                    fee: Some(rate.of(assets)),
                    is_estimated: true,
                    basis_note: Some(format!("based on last reported AUM of {}", assets)),
                },
                None => ExpectedFeeResult {
                    fee: None,
                    is_estimated: true,
                    basis_note: Some("insufficient data".to_string()),
                },
            }
        }
    }
}
