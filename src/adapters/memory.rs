//! In-memory storage for tests and throwaway sessions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::ports::storage::{Storage, StorageError};

/// A `HashMap` behind a mutex, with a switch that makes writes fail.
///
/// The failure switch simulates a full quota so callers can exercise
/// their divergence handling.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-populated with one key.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .lock()
            .expect("memory storage lock poisoned")
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Makes every subsequent `set` fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Direct read that bypasses the port, for assertions.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("memory storage lock poisoned").get(key).cloned()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|e| format!("storage lock poisoned: {e}"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(format!("quota exceeded writing `{key}`").into());
        }
        let mut entries =
            self.entries.lock().map_err(|e| format!("storage lock poisoned: {e}"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn failing_writes_leave_previous_value() {
        let storage = MemoryStorage::with_entry("k", "old");
        storage.fail_writes(true);
        assert!(storage.set("k", "new").is_err());
        assert_eq!(storage.peek("k").as_deref(), Some("old"));

        storage.fail_writes(false);
        storage.set("k", "new").unwrap();
        assert_eq!(storage.peek("k").as_deref(), Some("new"));
    }
}
