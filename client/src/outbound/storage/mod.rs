//! Snapshot store adapters.
//!
//! [`FileSnapshotStore`] keeps one JSON document on disk, written
//! atomically through a temporary file so a crash mid-write never leaves a
//! truncated snapshot behind. [`MemorySnapshotStore`] backs tests and
//! embedders that do not want durable state.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::store::{SnapshotError, SnapshotStore, StoreSnapshot};

/// File name used for the snapshot inside the configured directory.
pub const SNAPSHOT_FILE_NAME: &str = "roadtrip-planner.json";

/// Snapshot store backed by a single JSON file.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Build a store writing `roadtrip-planner.json` inside `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(SNAPSHOT_FILE_NAME),
        }
    }

    /// Location of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomically(&self, payload: &[u8]) -> Result<(), SnapshotError> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| SnapshotError::io("snapshot path has no parent directory"))?;
        fs::create_dir_all(parent)
            .map_err(|error| SnapshotError::io(format!("creating {}: {error}", parent.display())))?;
        let mut temp = tempfile::NamedTempFile::new_in(parent)
            .map_err(|error| SnapshotError::io(format!("creating temporary file: {error}")))?;
        temp.write_all(payload)
            .map_err(|error| SnapshotError::io(format!("writing snapshot: {error}")))?;
        temp.persist(&self.path).map_err(|error| {
            SnapshotError::io(format!("replacing {}: {error}", self.path.display()))
        })?;
        Ok(())
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), SnapshotError> {
        let payload = serde_json::to_vec_pretty(snapshot)
            .map_err(|error| SnapshotError::serialization(error.to_string()))?;
        self.write_atomically(&payload)?;
        debug!(path = %self.path.display(), "snapshot written");
        Ok(())
    }

    fn load(&self) -> Option<StoreSnapshot> {
        let payload = match fs::read(&self.path) {
            Ok(payload) => payload,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                warn!(path = %self.path.display(), error = %error, "snapshot unreadable");
                return None;
            }
        };
        match serde_json::from_slice(&payload) {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                // A corrupt snapshot is discarded rather than propagated;
                // the store starts empty and overwrites it on next commit.
                warn!(path = %self.path.display(), error = %error, "snapshot corrupt, ignoring");
                None
            }
        }
    }
}

/// In-memory snapshot store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySnapshotStore {
    snapshot: Mutex<Option<StoreSnapshot>>,
}

impl MemorySnapshotStore {
    /// Build an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial snapshot.
    #[must_use]
    pub fn seeded(snapshot: StoreSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
        }
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), SnapshotError> {
        *self.snapshot.lock() = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Option<StoreSnapshot> {
        self.snapshot.lock().clone()
    }
}
