//! CSV text to a uniform transaction list.
//!
//! Each row picks its layout independently: app-native if it carries a Payee or
//! Category value, otherwise the region's accounting export. Sparse rows still
//! produce a transaction; only a CSV-level failure rejects the import.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use runway_core::{classify_entry, Region, Transaction};

use crate::parse::DateParser;
use crate::parsers::{accounting, app_native};
use crate::types::{Layout, RawRow};

/// Normalize a CSV export. Rows without a readable date fall back to `today`,
/// which the caller resolves in the user's timezone.
pub async fn normalize(csv_text: &str, region: Region, today: NaiveDate) -> Result<Vec<Transaction>> {
    normalize_at(csv_text, region, today, Utc::now())
}

/// Synchronous core of [`normalize`]. `now` only stamps the generated ids.
pub fn normalize_at(
    csv_text: &str,
    region: Region,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<Vec<Transaction>> {
    let profile = region.profile();
    let dates = DateParser::new(profile.day_order)?;
    let stamp = now.timestamp_millis();

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(csv_text.as_bytes());
    let headers = rdr.headers().context("reading CSV header")?.clone();

    let mut out = Vec::new();
    let mut native_rows = 0usize;

    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("reading CSV row {}", idx + 1))?;
        let row = RawRow::new(&headers, &record);

        let (layout, mapped) = if app_native::detect(&row) {
            (Layout::AppNative, app_native::map_row(&row))
        } else {
            (Layout::Accounting, accounting::map_row(&row, &profile.csv_columns))
        };
        if layout == Layout::AppNative {
            native_rows += 1;
        }

        let date = match mapped.date.as_deref() {
            Some(raw) => dates.parse(raw).unwrap_or_else(|| {
                log::warn!("row {idx}: unrecognised date {raw:?}, using {today}");
                today
            }),
            None => today,
        };

        let category = mapped
            .category
            .unwrap_or_else(|| classify_entry(&mapped.payee, &mapped.description, mapped.tx_type));

        out.push(Transaction {
            id: Some(format!("csv-{idx}-{stamp}")),
            date,
            payee: mapped.payee,
            description: mapped.description,
            amount: mapped.amount,
            tx_type: mapped.tx_type,
            category,
            status: mapped.status,
        });
    }

    log::debug!(
        "normalized {} rows for region {region} ({native_rows} app-native, {} accounting)",
        out.len(),
        out.len() - native_rows
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use runway_core::{Category, TxStatus, TxType};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 20, 10, 0, 0).unwrap()
    }

    fn today() -> NaiveDate {
        day(2026, 1, 20)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_app_native_round_trip() {
        let csv = "\
Payee,Description,Amount,Type,Date,Category,Status
Team Payroll,Monthly Salaries,\"1,100,000\",OUT,2026-02-01,Payroll & Team,PENDING
Client Alpha,Pending Invoice,2500000,IN,2026-02-15,Sales / Revenue,PENDING
AWS,Hosting,-25000,OUT,2026-02-05,Cloud Stuff,PAID
";
        let txns = normalize_at(csv, Region::India, today(), now()).unwrap();
        assert_eq!(txns.len(), 3);

        assert_eq!(txns[0].amount, 1_100_000.0);
        assert_eq!(txns[0].category, Category::Payroll);
        assert_eq!(txns[0].date, day(2026, 2, 1));

        assert_eq!(txns[1].tx_type, TxType::In);
        assert_eq!(txns[1].category, Category::Revenue);

        // Not a taxonomy label: auto-classified from "AWS Hosting".
        assert_eq!(txns[2].category, Category::Software);
        assert_eq!(txns[2].amount, 25_000.0);
        assert_eq!(txns[2].status, TxStatus::Paid);
    }

    #[test]
    fn test_ids_combine_row_index_and_clock() {
        let csv = "Payee,Amount\nA,1\nB,2\n";
        let txns = normalize_at(csv, Region::UnitedStates, today(), now()).unwrap();
        let stamp = now().timestamp_millis();
        assert_eq!(txns[0].id, Some(format!("csv-0-{stamp}")));
        assert_eq!(txns[1].id, Some(format!("csv-1-{stamp}")));
    }

    #[test]
    fn test_india_accounting_export() {
        let csv = "\
Date,Particulars,Party Name,Vch Type,Amount
1-Apr-2026,Sales A/c,Acme Traders,Receipt,\"1,20,000\"
05/04/2026,Office Rent,,Payment,45000
";
        let txns = normalize_at(csv, Region::India, today(), now()).unwrap();
        assert_eq!(txns.len(), 2);

        assert_eq!(txns[0].payee, "Acme Traders");
        assert_eq!(txns[0].tx_type, TxType::In);
        assert_eq!(txns[0].category, Category::Revenue);
        assert_eq!(txns[0].date, day(2026, 4, 1));

        assert_eq!(txns[1].payee, "Office Rent");
        assert_eq!(txns[1].tx_type, TxType::Out);
        assert_eq!(txns[1].category, Category::Rent);
        assert_eq!(txns[1].date, day(2026, 4, 5));
        assert_eq!(txns[1].status, TxStatus::Pending);
    }

    #[test]
    fn test_us_accounting_export() {
        let csv = "\
Date,Name,Memo/Description,Amount
02/05/2026,Adobe,Creative Cloud,-54.99
02/06/2026,Acme Corp,Monthly retainer,\"3,000.00\"
";
        let txns = normalize_at(csv, Region::UnitedStates, today(), now()).unwrap();
        assert_eq!(txns[0].tx_type, TxType::Out);
        assert_eq!(txns[0].amount, 54.99);
        assert_eq!(txns[0].category, Category::Software);
        assert_eq!(txns[0].date, day(2026, 2, 5));

        assert_eq!(txns[1].tx_type, TxType::In);
        assert_eq!(txns[1].amount, 3_000.0);
    }

    #[test]
    fn test_sparse_rows_degrade_to_defaults() {
        let csv = "Date,Name,Amount\n,,\nnot-a-date,,x\n";
        let txns = normalize_at(csv, Region::UnitedStates, today(), now()).unwrap();
        assert_eq!(txns.len(), 2);
        for t in &txns {
            assert_eq!(t.payee, "Unknown");
            assert_eq!(t.amount, 0.0);
            assert_eq!(t.tx_type, TxType::Out);
            assert_eq!(t.category, Category::Uncategorized);
            assert_eq!(t.date, day(2026, 1, 20));
        }
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let csv = "Payee,Description,Amount,Type\nUber,,120\n";
        let txns = normalize_at(csv, Region::UnitedStates, today(), now()).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].category, Category::Travel);
        assert_eq!(txns[0].tx_type, TxType::Out);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(normalize_at("", Region::India, today(), now()).unwrap().is_empty());
        assert!(normalize_at("Payee,Amount\n", Region::India, today(), now()).unwrap().is_empty());
    }

    #[test]
    fn test_undated_rows_take_callers_today_not_utc() {
        // 20:00 UTC on Jan 31 is already Feb 1 in Kolkata.
        let now = Utc.with_ymd_and_hms(2026, 1, 31, 20, 0, 0).unwrap();
        let local = runway_core::time::date_in(now, "Asia/Kolkata").unwrap();
        assert_eq!(local, day(2026, 2, 1));

        let txns = normalize_at("Payee,Amount,Type\nLandlord,1000,OUT\n", Region::India, local, now).unwrap();
        assert_eq!(txns[0].date, day(2026, 2, 1));
        assert_eq!(txns[0].status, TxStatus::Pending);
    }

    #[tokio::test]
    async fn test_async_normalize() {
        let csv = "Payee,Amount,Type\nClient Beta,500,IN\n";
        let txns = normalize(csv, Region::UnitedStates, today()).await.unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].category, Category::Revenue);
    }
}
