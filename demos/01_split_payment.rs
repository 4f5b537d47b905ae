/// split payment - one check covering three billing periods
use chrono::NaiveDate;
use fee_reconciliation_rs::{
    allocate, BillingSchedule, Money, Payment, Uuid,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let payment = Payment {
        id: Uuid::new_v4(),
        received_date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
        total_assets: Some(Money::from_major(180_000)),
        actual_fee: Money::from_str_exact("1000.00")?,
        start_period_key: 20244,
        end_period_key: 20252,
        method: Some("check".to_string()),
        notes: Some("covers Q4 2024 through Q2 2025".to_string()),
    };

    // even cents with the remainder on the last period
    let distributions = allocate(&payment, BillingSchedule::Quarterly)?;
    for d in &distributions {
        println!("{}: {}", d.period.display_label(), d.distributed_amount);
    }

    let total = distributions
        .iter()
        .fold(Money::ZERO, |sum, d| sum + d.distributed_amount);
    println!("total distributed: {} (received {})", total, payment.actual_fee);

    Ok(())
}
