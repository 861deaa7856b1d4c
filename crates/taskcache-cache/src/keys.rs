//! Cache key names.

use crate::CacheConfig;

/// Keys for task data.
pub mod tasks {
    use super::*;

    /// Unprefixed key of the whole-collection snapshot.
    pub const COLLECTION: &str = "tasks";

    /// Key for the cached task list, honoring the configured prefix.
    pub fn collection(config: &CacheConfig) -> String {
        config.prefixed_key(COLLECTION)
    }
}
