use anyhow::{Context, Result};
use runway_core::{Snapshot, SnapshotStore};
use std::fs;
use std::path::{Path, PathBuf};

pub fn runway_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".runway"))
}

pub fn ensure_runway_home() -> Result<PathBuf> {
    let dir = runway_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// One pretty-printed JSON file per user key.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `~/.runway/snapshots`
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(ensure_runway_home()?.join("snapshots")))
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '-' | '_') { c } else { '_' })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Snapshot>> {
        let p = self.path_for(key);
        if !p.exists() {
            return Ok(None);
        }
        let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
        let snap = serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
        Ok(Some(snap))
    }

    fn save(&self, key: &str, snapshot: &Snapshot) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| format!("create {}", self.dir.display()))?;
        let p = self.path_for(key);
        let json = serde_json::to_string_pretty(snapshot)?;
        write_atomic(&p, &json)?;
        log::info!("saved {} transactions to {}", snapshot.transactions.len(), p.display());
        Ok(())
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}
