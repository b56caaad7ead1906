//! runway-ingest: CSV ledger normalization across app-native and regional accounting layouts.

pub mod normalize;
pub mod parse;
pub mod parsers;
pub mod types;

pub use normalize::{normalize, normalize_at};
pub use parse::{parse_amount, DateParser};
pub use types::{Layout, MappedRow, RawRow};
