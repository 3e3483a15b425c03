//! Headless road-trip planning client.
//!
//! The crate is organised as a small hexagon. [`domain`] holds the entities,
//! the derived-view utilities, and the ports that driven adapters implement.
//! [`outbound`] contains the reqwest-backed REST adapters and the snapshot
//! store that mirrors state to disk. [`store`] is the driving side: a state
//! container whose asynchronous actions bracket every backend call with the
//! shared loading/error flags and commit results into per-resource slices.
//!
//! Nothing in here renders anything: map widgets and views consume the
//! coordinate pairs, marker descriptors, and formatted strings this crate
//! produces.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod store;

pub use config::ClientConfig;
pub use domain::ports::ApiError;
pub use outbound::http::ApiClient;
pub use outbound::storage::{FileSnapshotStore, MemorySnapshotStore};
pub use store::{HttpStore, SnapshotStore, Store, StoreSnapshot};
