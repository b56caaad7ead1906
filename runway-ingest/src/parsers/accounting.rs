//! Regional accounting exports, read through the region's [`ColumnMap`].
//!
//! India (Tally-style day book):
//!   Date,Particulars,Party Name,Vch Type,Amount
//!   1-Apr-2026,Sales A/c,Acme Traders,Receipt,"1,20,000"
//!
//! US (QuickBooks-style register):
//!   Date,Name,Memo/Description,Amount
//!   02/05/2026,Adobe,Creative Cloud,-54.99

use runway_core::{ColumnMap, DirectionRule, TxStatus, TxType};

use crate::parse::parse_amount;
use crate::types::{MappedRow, RawRow};

pub fn map_row(row: &RawRow, columns: &ColumnMap) -> MappedRow {
    let payee = columns
        .payee
        .iter()
        .find_map(|col| row.get(col))
        .unwrap_or("Unknown");
    let raw_amount = parse_amount(row.get(columns.amount).unwrap_or(""));

    let tx_type = match columns.direction {
        DirectionRule::ColumnContains { column, marker } => {
            if row.get(column).is_some_and(|v| v.contains(marker)) {
                TxType::In
            } else {
                TxType::Out
            }
        }
        DirectionRule::SignedAmount => {
            if raw_amount > 0.0 {
                TxType::In
            } else {
                TxType::Out
            }
        }
    };

    MappedRow {
        payee: payee.to_string(),
        description: row.get(columns.description).unwrap_or("").to_string(),
        amount: raw_amount.abs(),
        tx_type,
        date: row.get(columns.date).map(str::to_string),
        category: None,
        status: TxStatus::Pending,
    }
}
