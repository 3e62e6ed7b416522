//! Serialization of the saved-location history blob
//!
//! The whole history is encoded as one JSON array under a fixed key.
//! Decoding validates against the `SavedLocation` schema; callers that
//! load at startup map any decode failure to an empty history, because
//! the history is non-critical cached data.

use crate::core::{SavedLocation, HISTORY_STORAGE_KEY};
use crate::storage::{KeyValueStore, StorageError, StorageResult};
use log::warn;

/// Encode the full history list to its JSON blob form
pub fn encode_history(history: &[SavedLocation]) -> StorageResult<String> {
    serde_json::to_string(history).map_err(|e| StorageError::EncodeFailure {
        details: e.to_string(),
    })
}

/// Decode a stored blob back into the history list
pub fn decode_history(blob: &str) -> StorageResult<Vec<SavedLocation>> {
    serde_json::from_str(blob).map_err(|e| StorageError::Corrupt {
        key: HISTORY_STORAGE_KEY.to_string(),
        details: e.to_string(),
    })
}

/// Load the history from the store, absorbing corruption.
///
/// An absent key or a malformed blob both yield an empty list; corruption
/// is logged but deliberately not surfaced to the caller.
pub fn load_history(store: &dyn KeyValueStore) -> Vec<SavedLocation> {
    let blob = match store.get_string(HISTORY_STORAGE_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("history read failed, starting empty: {}", e);
            return Vec::new();
        }
    };

    match decode_history(&blob) {
        Ok(history) => history,
        Err(e) => {
            warn!("history blob unreadable, starting empty: {}", e);
            Vec::new()
        }
    }
}

/// Write the full history list back to the store
pub fn store_history(
    store: &mut dyn KeyValueStore,
    history: &[SavedLocation],
) -> StorageResult<()> {
    let blob = encode_history(history)?;
    store.set_string(HISTORY_STORAGE_KEY, &blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coordinate;
    use crate::storage::InMemoryStore;

    fn sample_history() -> Vec<SavedLocation> {
        vec![
            SavedLocation {
                id: 1,
                name: "first".to_string(),
                coordinate: Coordinate::new(39.91, 116.40),
                saved_at: "2026-08-28 09:00:00".to_string(),
            },
            SavedLocation {
                id: 2,
                name: "second".to_string(),
                coordinate: Coordinate::new(31.23, 121.47),
                saved_at: "2026-08-28 09:05:00".to_string(),
            },
        ]
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let history = sample_history();
        let blob = encode_history(&history).unwrap();
        let decoded = decode_history(&blob).unwrap();
        assert_eq!(decoded, history);
    }

    #[test]
    fn test_store_then_load() {
        let mut store = InMemoryStore::new();
        let history = sample_history();

        store_history(&mut store, &history).unwrap();
        assert!(store.contains_key(HISTORY_STORAGE_KEY));
        assert_eq!(load_history(&store), history);
    }

    #[test]
    fn test_absent_key_loads_empty() {
        let store = InMemoryStore::new();
        assert!(load_history(&store).is_empty());
    }

    #[test]
    fn test_non_json_blob_loads_empty() {
        let store = InMemoryStore::new().with_value(HISTORY_STORAGE_KEY, "not json at all");
        assert!(load_history(&store).is_empty());
    }

    #[test]
    fn test_schema_violation_loads_empty() {
        // Valid JSON, wrong shape
        let store =
            InMemoryStore::new().with_value(HISTORY_STORAGE_KEY, r#"[{"id": "not-a-number"}]"#);
        assert!(load_history(&store).is_empty());
    }

    #[test]
    fn test_decode_reports_corruption_reason() {
        let result = decode_history("{broken");
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }
}
