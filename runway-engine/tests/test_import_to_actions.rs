use chrono::{NaiveDate, TimeZone, Utc};
use runway_core::{Category, Region, TxStatus};
use runway_engine::{action_link, calculate_forecast, generate_actions};
use runway_ingest::{normalize, normalize_at};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

/// Demo export through the normalizer, then forecast + actions.
#[tokio::test]
async fn test_demo_export_end_to_end() {
    let csv = std::fs::read_to_string(fixture("demo_ledger.csv")).unwrap();
    let txns = normalize(&csv, Region::India, NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()).await.unwrap();
    assert_eq!(txns.len(), 4);
    assert!(txns.iter().all(|t| t.status == TxStatus::Pending));
    assert_eq!(txns[0].category, Category::Payroll);

    let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
    let forecast = calculate_forecast(&txns, 300_000.0, today);
    assert_eq!(forecast.crunch_date, NaiveDate::from_ymd_opt(2026, 2, 1));

    let actions = generate_actions(&txns, 300_000.0, Region::India, today);
    let titles: Vec<_> = actions.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["CASH CRUNCH ALERT", "Collect Payment", "Delay Payment"]);

    for a in &actions {
        assert!(action_link(a).starts_with("https://wa.me/?text="));
    }
}

/// US register: signed amounts, retainer income, email channel.
#[test]
fn test_us_register_end_to_end() {
    let csv = "\
Date,Name,Memo/Description,Amount
03/01/2026,WeWork,Office lease,-4000
03/02/2026,Adobe,Creative Cloud subscription,-60
03/03/2026,Acme Corp,Monthly retainer,2500
03/04/2026,Jane Doe,Legal consultant,-1200
";
    let now = Utc.with_ymd_and_hms(2026, 2, 20, 12, 0, 0).unwrap();
    let txns = normalize_at(csv, Region::UnitedStates, now.date_naive(), now).unwrap();
    let cats: Vec<_> = txns.iter().map(|t| t.category).collect();
    assert_eq!(
        cats,
        vec![Category::Rent, Category::Software, Category::Revenue, Category::Contractors]
    );

    let today = now.date_naive();
    let forecast = calculate_forecast(&txns, 10_000.0, today);
    assert_eq!(forecast.monthly_burn, 4_060.0);
    assert_eq!(forecast.monthly_inflow, 2_500.0);
    assert_eq!(forecast.net_burn, 1_560.0);
    assert_eq!(forecast.crunch_date, None);

    let actions = generate_actions(&txns, 10_000.0, Region::UnitedStates, today);
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].contact_name, "Acme Corp");
    assert_eq!(actions[1].contact_name, "WeWork");
    assert!(action_link(&actions[1]).starts_with("mailto:?subject=Payment%20Action%3A%20Delay%20Payment"));
}

/// An undated bill imported late evening UTC lands on the user's local today
/// and still counts as upcoming.
#[test]
fn test_undated_import_uses_local_today() {
    let now = Utc.with_ymd_and_hms(2026, 1, 31, 20, 0, 0).unwrap();
    let today = runway_core::time::date_in(now, "Asia/Kolkata").unwrap();
    let txns = normalize_at("Payee,Amount,Type\nLandlord,1000,OUT\n", Region::India, today, now).unwrap();

    let forecast = calculate_forecast(&txns, 0.0, today);
    assert_eq!(forecast.crunch_date, NaiveDate::from_ymd_opt(2026, 2, 1));

    let actions = generate_actions(&txns, 0.0, Region::India, today);
    assert_eq!(actions[0].title, "CASH CRUNCH ALERT");
    assert!(actions.iter().any(|a| a.contact_name == "Landlord"));
}
