//! Replaying adapter for the `Storage` port.

use std::sync::Mutex;

use serde_json::Value;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::storage::{Storage, StorageError};

/// Serves recorded storage results. Writes are not applied anywhere; the
/// recorded outcome (success or the recorded error) is returned instead.
pub struct ReplayingStorage {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingStorage {
    /// Creates storage backed by `replayer`.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

/// Decodes `{"ok": v}` / `{"err": msg}`.
fn extract_result<T: serde::de::DeserializeOwned>(
    output: Value,
    context: &str,
) -> Result<T, StorageError> {
    if let Some(err) = output.get("err") {
        return Err(err.as_str().unwrap_or("unknown error").to_string().into());
    }
    let value = match output {
        Value::Object(mut map) if map.contains_key("ok") => map.remove("ok").unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(value).map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}

impl Storage for ReplayingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        extract_result(next_output(&self.replayer, "storage", "get"), "storage::get")
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        extract_result(next_output(&self.replayer, "storage", "set"), "storage::set")
    }
}
