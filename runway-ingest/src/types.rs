use csv::StringRecord;
use runway_core::{Category, TxStatus, TxType};

/// Which source layout a row was read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// The app's own export: Payee/Description/Amount/Type/Date/Category/Status.
    AppNative,
    /// Region accounting export described by the region's column map.
    Accounting,
}

/// Header-addressed view of one CSV record.
///
/// Lookups are exact and case-sensitive. An empty cell reads as absent.
pub struct RawRow<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl<'a> RawRow<'a> {
    pub fn new(headers: &'a StringRecord, record: &'a StringRecord) -> Self {
        Self { headers, record }
    }

    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.record.get(idx).filter(|v| !v.is_empty())
    }
}

/// A row after layout-specific mapping, before date resolution and classification.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedRow {
    pub payee: String,
    pub description: String,
    /// Magnitude.
    pub amount: f64,
    pub tx_type: TxType,
    pub date: Option<String>,
    /// Set only when the source supplied a taxonomy label.
    pub category: Option<Category>,
    pub status: TxStatus,
}
