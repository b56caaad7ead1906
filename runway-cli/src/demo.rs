use chrono::NaiveDate;
use runway_core::{Category, Region, Snapshot, Transaction, TxType};

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap_or_default()
}

/// Four pending rows that run out of cash on payroll day.
pub fn demo_snapshot() -> Snapshot {
    Snapshot {
        transactions: vec![
            Transaction::new(day(2, 1), "Team Payroll", "Monthly Salaries", 1_100_000.0, TxType::Out, Category::Payroll)
                .with_id("d1"),
            Transaction::new(day(2, 1), "Indiqube Rent", "Office Rent", 100_000.0, TxType::Out, Category::Rent)
                .with_id("d2"),
            Transaction::new(day(2, 15), "Client Alpha", "Pending Invoice", 2_500_000.0, TxType::In, Category::Revenue)
                .with_id("d3"),
            Transaction::new(day(2, 5), "AWS", "Hosting", 25_000.0, TxType::Out, Category::Software).with_id("d4"),
        ],
        balance: 300_000.0,
        region: Region::India,
    }
}
