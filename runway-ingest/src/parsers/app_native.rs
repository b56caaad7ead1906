//! The app's own CSV export.
//!
//!   Payee,Description,Amount,Type,Date,Category,Status
//!   AWS,Hosting,"25,000",OUT,2026-02-05,Software & Subscriptions,PENDING

use runway_core::{Category, TxStatus, TxType};

use crate::parse::parse_amount;
use crate::types::{MappedRow, RawRow};

/// A row is app-native when it carries a Payee or a Category value.
pub fn detect(row: &RawRow) -> bool {
    row.get("Payee").is_some() || row.get("Category").is_some()
}

pub fn map_row(row: &RawRow) -> MappedRow {
    let tx_type = match row.get("Type") {
        Some(t) if t.eq_ignore_ascii_case("IN") => TxType::In,
        _ => TxType::Out,
    };
    let status = match row.get("Status") {
        Some(s) if s.eq_ignore_ascii_case("PAID") => TxStatus::Paid,
        _ => TxStatus::Pending,
    };

    MappedRow {
        payee: row.get("Payee").unwrap_or("Unknown").to_string(),
        description: row.get("Description").unwrap_or("").to_string(),
        amount: parse_amount(row.get("Amount").unwrap_or("")).abs(),
        tx_type,
        date: row.get("Date").map(str::to_string),
        category: row.get("Category").and_then(Category::from_label),
        status,
    }
}
