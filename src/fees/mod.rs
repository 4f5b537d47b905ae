pub mod expected;
pub mod variance;

pub use expected::{compute_expected_fee, AssetObservation, ExpectedFeeResult};
pub use variance::{Variance, VarianceClassifier, VarianceStatus, DEFAULT_VARIANCE_TOLERANCE};
