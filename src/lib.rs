pub mod boundary;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod fees;
pub mod payments;
pub mod period;
pub mod reconciliation;
pub mod types;

// re-export key types
pub use boundary::{ContractRecord, PaymentRecord};
pub use config::ReconciliationConfig;
pub use decimal::{Money, Rate};
pub use errors::{ReconciliationError, Result};
pub use fees::{
    compute_expected_fee, AssetObservation, ExpectedFeeResult, Variance, VarianceClassifier,
    VarianceStatus, DEFAULT_VARIANCE_TOLERANCE,
};
pub use payments::{allocate, SplitDistribution};
pub use period::Period;
pub use reconciliation::{
    LastPaymentSummary, PaymentHistoryRow, ReconciliationService, RowDetail,
};
pub use types::{BillingSchedule, Contract, FeeType, Payment, PaymentId, PeriodKey};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
