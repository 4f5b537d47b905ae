use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{ReconciliationError, Result};
use crate::fees::DEFAULT_VARIANCE_TOLERANCE;

/// reconciliation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationConfig {
    /// absolute band within which a payment counts as matched, in
    /// currency units. a fixed threshold, not scaled by payment size.
    pub variance_tolerance: Money,
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            variance_tolerance: DEFAULT_VARIANCE_TOLERANCE,
        }
    }
}

impl ReconciliationConfig {
    pub fn new(variance_tolerance: Money) -> Self {
        Self { variance_tolerance }
    }

    pub fn validate(&self) -> Result<()> {
        if self.variance_tolerance.is_negative() {
            return Err(ReconciliationError::InvalidConfiguration {
                message: format!(
                    "variance tolerance must not be negative, got {}",
                    self.variance_tolerance
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerance() {
        let config = ReconciliationConfig::default();
        assert_eq!(config.variance_tolerance, Money::from_str_exact("3.00").unwrap());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let config = ReconciliationConfig::new(-Money::from_major(1));
        assert!(matches!(
            config.validate(),
            Err(ReconciliationError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_zero_tolerance_allowed() {
        let config = ReconciliationConfig::new(Money::ZERO);
        assert!(config.validate().is_ok());
    }
}
