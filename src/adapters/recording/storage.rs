//! Recording adapter for the `Storage` port.

use serde::Serialize;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::ports::storage::{Storage, StorageError};

/// Records every read and write on the wrapped storage.
pub struct RecordingStorage {
    inner: Box<dyn Storage>,
    recorder: SharedRecorder,
}

impl RecordingStorage {
    /// Wraps `inner`, appending to `recorder`.
    pub fn new(inner: Box<dyn Storage>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct KeyInput<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct SetInput<'a> {
    key: &'a str,
    value: &'a str,
}

impl Storage for RecordingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let result = self.inner.get(key);
        record_result(&self.recorder, "storage", "get", &KeyInput { key }, &result);
        result
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let result = self.inner.set(key, value);
        record_result(&self.recorder, "storage", "set", &SetInput { key, value }, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStorage;
    use crate::cassette::recorder::CassetteRecorder;
    use crate::cassette::format::Cassette;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[test]
    fn records_reads_writes_and_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "storage")));

        let inner = MemoryStorage::new();
        inner.fail_writes(true);
        let storage = RecordingStorage::new(Box::new(inner), Arc::clone(&recorder));
        assert_eq!(storage.get("k").unwrap(), None);
        assert!(storage.set("k", "v").is_err());
        drop(storage);

        Arc::try_unwrap(recorder).unwrap().into_inner().unwrap().finish().unwrap();
        let cassette = Cassette::load(&path).unwrap();

        assert_eq!(cassette.interactions[0].method, "get");
        assert_eq!(cassette.interactions[0].input, json!({"key": "k"}));
        assert_eq!(cassette.interactions[0].output, json!({"ok": null}));
        assert_eq!(cassette.interactions[1].method, "set");
        assert!(cassette.interactions[1].output.get("err").is_some());
    }
}
