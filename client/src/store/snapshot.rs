//! Snapshot contract between the store and durable local storage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::destinations::DestinationsState;
use super::pois::PoisState;
use super::routes::RoutesState;
use super::trips::TripsState;

/// Serialised copy of the four domain slices.
///
/// The root loading/error slice is deliberately absent: transient UI flags
/// are not state worth restoring.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Trips slice.
    pub trips: TripsState,
    /// Destinations slice.
    pub destinations: DestinationsState,
    /// Routes slice.
    pub routes: RoutesState,
    /// POIs slice.
    pub pois: PoisState,
}

/// Failures raised by snapshot sinks.
///
/// These are never surfaced to the user: the store logs them and carries on
/// with its in-memory state intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The snapshot could not be serialised.
    #[error("snapshot serialisation failed: {message}")]
    Serialization { message: String },
    /// The snapshot could not be written (quota, permissions, disk).
    #[error("snapshot write failed: {message}")]
    Io { message: String },
}

impl SnapshotError {
    /// Helper for serialisation failures.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Helper for write failures.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

/// Durable storage port for store snapshots.
///
/// `load` treats absence and corruption alike: both are "no prior state".
pub trait SnapshotStore: Send + Sync {
    /// Persist a snapshot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] when the snapshot cannot be serialised
    /// or written; callers log and continue.
    fn save(&self, snapshot: &StoreSnapshot) -> Result<(), SnapshotError>;

    /// Load the previous snapshot, or `None` when there is none worth
    /// restoring.
    fn load(&self) -> Option<StoreSnapshot>;
}
