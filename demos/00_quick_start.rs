/// quick start - reconcile one client's payment history
use chrono::NaiveDate;
use fee_reconciliation_rs::{
    BillingSchedule, Contract, Money, Payment, Rate, ReconciliationService, RowDetail, Uuid,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 0.4% of AUM per month
    let contract = Contract::percentage(
        Rate::from_decimal(dec!(0.004)),
        BillingSchedule::Monthly,
    );

    let payments = vec![Payment {
        id: Uuid::new_v4(),
        received_date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
        total_assets: Some(Money::from_major(250_000)),
        actual_fee: Money::from_major(1_000),
        start_period_key: 202501,
        end_period_key: 202501,
        method: Some("ach".to_string()),
        notes: None,
    }];

    let service = ReconciliationService::default();
    let rows = service.build_history(&contract, &payments, None);

    for row in &rows {
        if let RowDetail::Single {
            period,
            expected,
            variance,
        } = &row.detail
        {
            println!(
                "{}: actual {} expected {:?} -> {:?}",
                period.display_label(),
                row.actual_fee,
                expected.fee,
                variance.map(|v| v.status),
            );
        }
    }

    Ok(())
}
