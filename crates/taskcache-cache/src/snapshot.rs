//! Encoding of the cached task collection.
//!
//! The snapshot is a JSON array of task objects, in store order. JSON keeps
//! the value readable with `redis-cli GET tasks`.

use taskcache_models::Task;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to encode task snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode task snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}

pub fn encode(tasks: &[Task]) -> Result<Vec<u8>, SnapshotError> {
    serde_json::to_vec(tasks).map_err(SnapshotError::Encode)
}

pub fn decode(bytes: &[u8]) -> Result<Vec<Task>, SnapshotError> {
    serde_json::from_slice(bytes).map_err(SnapshotError::Decode)
}
