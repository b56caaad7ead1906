//! runway-core: ledger types, category taxonomy, region profiles and the keyword classifier.

pub mod category;
pub mod classifier;
pub mod ledger;
pub mod money;
pub mod region;
pub mod store;
pub mod time;
pub mod transaction;

pub use category::{Category, CategoryRules};
pub use classifier::{classify, classify_entry};
pub use region::{ActionChannel, ColumnMap, DayOrder, DirectionRule, Region, RegionProfile};
pub use store::{MemoryStore, Snapshot, SnapshotStore};
pub use transaction::{Transaction, TxStatus, TxType};
