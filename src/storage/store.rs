//! Key-value store trait

use crate::storage::StorageResult;

/// Synchronous string-keyed persistence
///
/// The contract is deliberately small: opaque string blobs under string
/// keys, no transactions, no schema versioning. The history list is
/// always written back as one unit, so read-modify-write races cannot
/// occur in the single-threaded screen model.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    /// Returns Ok(None) if the key is absent
    fn get_string(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_string(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
