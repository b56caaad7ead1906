//! Forecast engine: crunch date, recurring burn, and runway.

use chrono::{Days, NaiveDate};
use runway_core::time::long_date;
use runway_core::Transaction;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::balance::{crunch_date, effective_balance, future_pending};
use crate::series::{project_balance_series, BalancePoint};

/// Months of cash left at the current net burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Runway {
    Months(f64),
    /// Net burn is zero or negative.
    Unbounded,
}

impl Runway {
    pub fn months(&self) -> Option<f64> {
        match self {
            Runway::Months(m) => Some(*m),
            Runway::Unbounded => None,
        }
    }
}

impl Serialize for Runway {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Runway::Months(m) => serializer.serialize_f64(*m),
            Runway::Unbounded => serializer.serialize_str("Infinity"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub monthly_burn: f64,
    pub monthly_inflow: f64,
    pub net_burn: f64,
    pub runway_months: Runway,
    /// "March 3, 2026"; `None` when runway is unbounded.
    pub runway_end_date: Option<String>,
    /// Payees contributing to burn, in first-seen order.
    pub recurring_items: Vec<String>,
    pub crunch_date: Option<NaiveDate>,
    pub chart_data: Vec<BalancePoint>,
}

/// Compute the forecast snapshot. `today` splits past from future.
pub fn calculate_forecast(transactions: &[Transaction], current_balance: f64, today: NaiveDate) -> ForecastResult {
    let effective = effective_balance(transactions, current_balance);
    let upcoming = future_pending(transactions, today);
    let crunch = crunch_date(&upcoming, effective);
    if let Some(d) = crunch {
        log::debug!("crunch detected on {d} (effective balance {effective:.2})");
    }

    let (recurring_items, monthly_burn) = recurring_burn(transactions);

    let monthly_inflow: f64 = transactions
        .iter()
        .filter(|t| t.is_inflow() && t.description.to_lowercase().contains("retainer"))
        .map(|t| t.amount)
        .sum();

    let net_burn = monthly_burn - monthly_inflow;
    let (runway_months, runway_end_date) = if net_burn <= 0.0 {
        (Runway::Unbounded, None)
    } else {
        let months = round1(effective.max(0.0) / net_burn);
        // Beyond the calendar's range the end date pins to the last representable day.
        let end = today
            .checked_add_days(Days::new((months * 30.0).round() as u64))
            .unwrap_or(NaiveDate::MAX);
        (Runway::Months(months), Some(long_date(end)))
    };

    ForecastResult {
        monthly_burn,
        monthly_inflow,
        net_burn,
        runway_months,
        runway_end_date,
        recurring_items,
        crunch_date: crunch,
        chart_data: project_balance_series(transactions, current_balance, today),
    }
}

/// Recurring outflows keyed by payee. A repeated payee keeps its last-seen amount
/// rather than accumulating, so several line items from one payee count once.
fn recurring_burn(transactions: &[Transaction]) -> (Vec<String>, f64) {
    let mut order: Vec<String> = Vec::new();
    let mut amounts: HashMap<&str, f64> = HashMap::new();

    for t in transactions
        .iter()
        .filter(|t| t.is_outflow() && t.category.is_recurring())
    {
        if amounts.insert(t.payee.as_str(), t.amount.abs()).is_none() {
            order.push(t.payee.clone());
        }
    }

    let burn = order.iter().map(|p| amounts[p.as_str()]).sum();
    (order, burn)
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use runway_core::{Category, TxStatus, TxType};

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn tx(payee: &str, desc: &str, amount: f64, tx_type: TxType, category: Category) -> Transaction {
        Transaction::new(day(2, 1), payee, desc, amount, tx_type, category)
    }

    #[test]
    fn test_empty_is_healthy() {
        let f = calculate_forecast(&[], 50_000.0, day(1, 15));
        assert_eq!(f.monthly_burn, 0.0);
        assert_eq!(f.runway_months, Runway::Unbounded);
        assert_eq!(f.runway_end_date, None);
        assert_eq!(f.crunch_date, None);
        assert!(f.recurring_items.is_empty());
    }

    #[test]
    fn test_recurring_dedupes_by_payee_last_wins() {
        let txns = vec![
            tx("AWS", "Hosting", 100.0, TxType::Out, Category::Software),
            tx("Landlord", "Rent", 1_000.0, TxType::Out, Category::Rent),
            tx("AWS", "Hosting", 250.0, TxType::Out, Category::Software),
            tx("Facebook", "Ads", 999.0, TxType::Out, Category::Marketing),
            tx("Payroll", "Salaries", 5_000.0, TxType::In, Category::Payroll),
        ];
        let f = calculate_forecast(&txns, 0.0, day(1, 1));
        assert_eq!(f.recurring_items, vec!["AWS".to_string(), "Landlord".to_string()]);
        assert_eq!(f.monthly_burn, 1_250.0);
    }

    #[test]
    fn test_retainer_inflow_offsets_burn() {
        let txns = vec![
            tx("Landlord", "Rent", 1_000.0, TxType::Out, Category::Rent),
            tx("Client", "Monthly RETAINER", 400.0, TxType::In, Category::Revenue),
            tx("Client", "One-off project", 9_000.0, TxType::In, Category::Revenue),
        ];
        let f = calculate_forecast(&txns, 3_000.0, day(1, 1));
        assert_eq!(f.monthly_inflow, 400.0);
        assert_eq!(f.net_burn, 600.0);
        assert_eq!(f.runway_months, Runway::Months(5.0));
        // 5.0 months -> 150 days after Jan 1
        assert_eq!(f.runway_end_date.as_deref(), Some("May 31, 2026"));
    }

    #[test]
    fn test_runway_unbounded_when_inflow_covers_burn() {
        let txns = vec![
            tx("AWS", "Hosting", 100.0, TxType::Out, Category::Software),
            tx("Client", "retainer", 100.0, TxType::In, Category::Revenue),
        ];
        let f = calculate_forecast(&txns, 10.0, day(1, 1));
        assert_eq!(f.net_burn, 0.0);
        assert_eq!(f.runway_months, Runway::Unbounded);
        assert_eq!(f.runway_end_date, None);
    }

    #[test]
    fn test_runway_never_negative() {
        let txns = vec![
            tx("Landlord", "Rent", 1_000.0, TxType::Out, Category::Rent).with_status(TxStatus::Paid),
        ];
        let f = calculate_forecast(&txns, -50_000.0, day(1, 1));
        assert_eq!(f.runway_months, Runway::Months(0.0));
        assert_eq!(f.runway_end_date.as_deref(), Some("January 1, 2026"));
    }

    #[test]
    fn test_runway_end_date_present_for_huge_runway() {
        let txns = vec![tx("AWS", "Hosting", 0.0001, TxType::Out, Category::Software)];
        let f = calculate_forecast(&txns, 1e15, day(1, 1));
        assert!(matches!(f.runway_months, Runway::Months(m) if m > 1e18));
        assert_eq!(f.runway_end_date, Some(long_date(NaiveDate::MAX)));
    }

    #[test]
    fn test_runway_rounds_to_one_decimal() {
        let txns = vec![tx("Landlord", "Rent", 3_000.0, TxType::Out, Category::Rent).with_status(TxStatus::Paid)];
        // effective = 13_000 - 3_000 = 10_000; 10_000 / 3_000 = 3.333..
        let f = calculate_forecast(&txns, 13_000.0, day(1, 1));
        assert_eq!(f.runway_months.months(), Some(3.3));
    }

    #[test]
    fn test_crunch_date_settled_vs_pending() {
        let today = day(3, 10);
        let txns = vec![
            Transaction::new(day(3, 9), "Vendor", "", 10_000.0, TxType::Out, Category::Uncategorized)
                .with_status(TxStatus::Paid),
            Transaction::new(day(3, 11), "Vendor", "", 10_000.0, TxType::Out, Category::Uncategorized),
        ];
        let f = calculate_forecast(&txns, 15_000.0, today);
        assert_eq!(f.crunch_date, Some(day(3, 11)));
    }

    #[test]
    fn test_past_pending_is_excluded_from_crunch() {
        let today = day(3, 10);
        let txns = vec![Transaction::new(day(3, 1), "Vendor", "", 99_999.0, TxType::Out, Category::Uncategorized)];
        let f = calculate_forecast(&txns, 10.0, today);
        assert_eq!(f.crunch_date, None);
    }

    #[test]
    fn test_serialized_shape() {
        let f = calculate_forecast(&[], 1.0, day(1, 1));
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["runwayMonths"], "Infinity");
        assert!(v["runwayEndDate"].is_null());
        assert!(v["crunchDate"].is_null());
        assert_eq!(v["chartData"][0]["date"], "2026-01-01");
    }
}
