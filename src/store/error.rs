//! Task store error type.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::task::ValidationError;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Everything a store operation can report.
#[derive(Debug)]
pub enum StoreError {
    /// Input rejected; nothing changed.
    Validation(ValidationError),
    /// No task with this ID; nothing changed.
    NotFound(String),
    /// The in-memory change was applied but the snapshot could not be
    /// written. Memory and storage differ until the next successful write.
    Persist(String),
    /// The stored snapshot could not be parsed.
    Corrupt(String),
    /// The stored snapshot could not be read.
    Storage(String),
    /// The ID generator kept producing IDs already in use.
    DuplicateId(String),
}

impl StoreError {
    /// True for errors where the in-memory list still changed.
    #[must_use]
    pub fn mutation_applied(&self) -> bool {
        matches!(self, Self::Persist(_))
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Persist(message) => {
                write!(f, "change applied in memory but not saved: {message}")
            }
            Self::Corrupt(message) => write!(f, "stored tasks are unreadable: {message}"),
            Self::Storage(message) => write!(f, "failed to read stored tasks: {message}"),
            Self::DuplicateId(message) => write!(f, "could not allocate a task id: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_)
            | Self::Persist(_)
            | Self::Corrupt(_)
            | Self::Storage(_)
            | Self::DuplicateId(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
