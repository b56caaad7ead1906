//! Persisted state boundary. The engine never touches storage; callers load a
//! [`Snapshot`] through a [`SnapshotStore`], compute, and save the new list back.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::region::Region;
use crate::transaction::Transaction;

/// Everything a user's dashboard is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub region: Region,
}

pub trait SnapshotStore {
    fn load(&self, key: &str) -> Result<Option<Snapshot>>;
    fn save(&self, key: &str, snapshot: &Snapshot) -> Result<()>;
}

/// In-process store, keyed by user.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, Snapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Snapshot>> {
        let map = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("snapshot store lock poisoned"))?;
        Ok(map.get(key).cloned())
    }

    fn save(&self, key: &str, snapshot: &Snapshot) -> Result<()> {
        let mut map = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("snapshot store lock poisoned"))?;
        map.insert(key.to_string(), snapshot.clone());
        Ok(())
    }
}
