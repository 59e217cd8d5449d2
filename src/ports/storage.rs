//! Storage port for the durable key-value mirror.

/// Error type returned by storage adapters.
pub type StorageError = Box<dyn std::error::Error + Send + Sync>;

/// String key-value storage, the shape of a browser's local storage.
///
/// Values are whole documents; each `set` replaces the previous value.
pub trait Storage: Send + Sync {
    /// Reads the value under `key`, or `None` if the key was never set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, quota).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: Storage + ?Sized> Storage for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
