use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// default tolerance band for a matched payment, in currency units
///
/// payments within this absolute distance of the expected fee are treated
/// as matched, absorbing rounding and timing noise rather than flagging a
/// billing error. overridable per classifier.
pub const DEFAULT_VARIANCE_TOLERANCE: Money = Money::from_cents_const(300);

/// tri-state judgment of a payment against its expected fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarianceStatus {
    WithinTarget,
    Overpaid,
    Underpaid,
}

/// classified variance between an actual and expected fee
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Variance {
    /// signed difference, actual minus expected
    pub amount: Money,
    /// signed percentage of the expected fee; zero when expected is zero
    pub percent: Decimal,
    pub status: VarianceStatus,
}

/// classifies actual-vs-expected variance within a tolerance band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceClassifier {
    pub tolerance: Money,
}

impl Default for VarianceClassifier {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_VARIANCE_TOLERANCE,
        }
    }
}

impl VarianceClassifier {
    pub fn new(tolerance: Money) -> Self {
        Self { tolerance }
    }

    /// classify a payment against its expected fee
    ///
    /// a None expected fee yields None: the variance is unknown, never
    /// zero. this function cannot fail.
    pub fn classify(&self, actual: Money, expected: Option<Money>) -> Option<Variance> {
        let expected = expected?;
        let amount = actual - expected;
        let percent = if expected.is_zero() {
            Decimal::ZERO
        } else {
            amount.as_decimal() / expected.as_decimal() * Decimal::from(100)
        };

        let status = if amount.abs() <= self.tolerance {
            VarianceStatus::WithinTarget
        } else if amount.is_positive() {
            VarianceStatus::Overpaid
        } else {
            VarianceStatus::Underpaid
        };

        Some(Variance {
            amount,
            percent,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn classify(actual: &str, expected: &str) -> Variance {
        VarianceClassifier::default()
            .classify(
                Money::from_str_exact(actual).unwrap(),
                Some(Money::from_str_exact(expected).unwrap()),
            )
            .unwrap()
    }

    #[test]
    fn test_exact_match() {
        let variance = classify("1000", "1000");
        assert_eq!(variance.amount, Money::ZERO);
        assert_eq!(variance.percent, Decimal::ZERO);
        assert_eq!(variance.status, VarianceStatus::WithinTarget);
    }

    #[test]
    fn test_tolerance_boundaries() {
        assert_eq!(classify("1003", "1000").status, VarianceStatus::WithinTarget);
        assert_eq!(classify("997", "1000").status, VarianceStatus::WithinTarget);
        assert_eq!(classify("1003.01", "1000").status, VarianceStatus::Overpaid);
        assert_eq!(classify("996.99", "1000").status, VarianceStatus::Underpaid);
    }

    #[test]
    fn test_signed_amount_and_percent() {
        let overpaid = classify("1100", "1000");
        assert_eq!(overpaid.amount, Money::from_major(100));
        assert_eq!(overpaid.percent, dec!(10));

        let underpaid = classify("900", "1000");
        assert_eq!(underpaid.amount, -Money::from_major(100));
        assert_eq!(underpaid.percent, dec!(-10));
    }

    #[test]
    fn test_zero_expected_fee() {
        let variance = classify("50", "0");
        assert_eq!(variance.percent, Decimal::ZERO);
        assert_eq!(variance.status, VarianceStatus::Overpaid);
    }

    #[test]
    fn test_unknown_expected_fee() {
        let classifier = VarianceClassifier::default();
        assert_eq!(classifier.classify(Money::from_major(1_000), None), None);
    }

    #[test]
    fn test_custom_tolerance() {
        let classifier = VarianceClassifier::new(Money::from_major(50));
        let variance = classifier
            .classify(Money::from_major(1_040), Some(Money::from_major(1_000)))
            .unwrap();
        assert_eq!(variance.status, VarianceStatus::WithinTarget);
    }
}
