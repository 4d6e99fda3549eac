//! Storage layer: the sink the ingestion pipeline writes entities through.

pub mod memory;

pub use memory::MemoryStore;

use crate::models::{Activity, TrackPoint, User};

/// Entity kind names as constants.
pub mod kinds {
    pub const USER: &str = "user";
    pub const ACTIVITY: &str = "activity";
    pub const TRACKPOINT: &str = "trackpoint";
}

/// Identifier echoed by the store for an inserted activity.
pub type ActivityId = i64;

/// Identifier echoed by the store for an inserted trackpoint.
pub type TrackPointId = i64;

/// Errors surfaced by a storage sink.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Insert into '{kind}' failed: {message}")]
    Insert { kind: &'static str, message: String },
}

/// Sink the ingestion pipeline persists entities through.
///
/// Implementations must echo identifiers consistently: an ID returned by an
/// insert is immediately usable as a foreign key in a subsequent insert.
/// When an [`Activity`] arrives with `id` already set, the sink must store
/// and echo that ID rather than assigning its own.
pub trait StorageSink {
    /// Insert one user record, echoing its natural key.
    fn insert_user(&mut self, user: &User) -> Result<String, StoreError>;

    /// Insert one activity record, echoing its identifier.
    fn insert_activity(&mut self, activity: &Activity) -> Result<ActivityId, StoreError>;

    /// Bulk-insert trackpoints, echoing generated identifiers in input order.
    fn insert_trackpoints(&mut self, points: &[TrackPoint]) -> Result<Vec<TrackPointId>, StoreError>;
}
