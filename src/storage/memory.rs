//! In-memory store for testing and development

use crate::storage::{KeyValueStore, StorageError, StorageResult};
use std::collections::HashMap;

/// HashMap-backed store with controllable write failures
pub struct InMemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
    write_count: u32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            fail_writes: false,
            write_count: 0,
        }
    }

    /// Seed a value at construction time
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent write fail
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes since creation
    pub fn write_count(&self) -> u32 {
        self.write_count
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get_string(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::WriteFailure {
                key: key.to_string(),
                details: "simulated write failure".to_string(),
            });
        }

        self.values.insert(key.to_string(), value.to_string());
        self.write_count += 1;
        Ok(())
    }
}
