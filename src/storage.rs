use crate::models::{DailyRecord, Goal};
use crate::stats::parse_date;
use crate::store::RecordStore;
use serde::{Serialize, de::DeserializeOwned};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub const DATA_DIR_ENV: &str = "CUT_TRACKER_DATA_DIR";

/// One independently persisted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Days,
    Goal,
    ActiveDate,
}

impl Slot {
    pub fn key(self) -> &'static str {
        match self {
            Slot::Days => "cut.days",
            Slot::Goal => "cut.goal",
            Slot::ActiveDate => "cut.activeDate",
        }
    }
}

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        return PathBuf::from(path);
    }

    PathBuf::from("data")
}

/// Key-value blob storage backed by one JSON file per slot.
#[derive(Debug, Clone)]
pub struct BlobStore {
    dir: PathBuf,
}

impl BlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, slot: Slot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.key()))
    }

    /// `None` when the slot was never written or cannot be parsed.
    pub async fn read<T: DeserializeOwned>(&self, slot: Slot) -> Option<T> {
        let path = self.path(slot);
        match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => Some(value),
                Err(err) => {
                    error!("failed to parse {}: {err}", path.display());
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read {}: {err}", path.display());
                None
            }
        }
    }

    /// Rewrites the whole slot. Failures are logged and dropped.
    pub async fn write<T: Serialize + ?Sized>(&self, slot: Slot, value: &T) {
        let path = self.path(slot);
        let payload = match serde_json::to_vec_pretty(value) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("failed to encode {}: {err}", slot.key());
                return;
            }
        };
        if let Err(err) = fs::write(&path, payload).await {
            warn!("failed to write {}: {err}", path.display());
        }
    }

    pub async fn remove(&self, slot: Slot) {
        let path = self.path(slot);
        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => warn!("failed to remove {}: {err}", path.display()),
        }
    }
}

/// Reads all three slots once and builds the store, falling back to
/// defaults for anything missing or corrupt.
pub async fn load_store(blob: &BlobStore, today: &str) -> RecordStore {
    let days = blob.read::<Vec<DailyRecord>>(Slot::Days).await;
    let goal = blob.read::<Goal>(Slot::Goal).await;
    let active_date = blob
        .read::<String>(Slot::ActiveDate)
        .await
        .filter(|date| match parse_date(date) {
            Ok(_) => true,
            Err(err) => {
                warn!("ignoring stored active date: {err}");
                false
            }
        });

    let mut store = RecordStore::restore(days, goal, active_date, today);
    if store.ensure_active_record() {
        persist_days(blob, &store).await;
    }
    store
}

pub async fn persist_days(blob: &BlobStore, store: &RecordStore) {
    blob.write(Slot::Days, store.days()).await;
}

pub async fn persist_goal(blob: &BlobStore, store: &RecordStore) {
    blob.write(Slot::Goal, store.goal()).await;
}

pub async fn persist_active_date(blob: &BlobStore, store: &RecordStore) {
    blob.write(Slot::ActiveDate, store.active_date()).await;
}

/// Drops the persisted day collection, then writes the store's current days.
pub async fn clear_days(blob: &BlobStore, store: &RecordStore) {
    blob.remove(Slot::Days).await;
    persist_days(blob, store).await;
}
