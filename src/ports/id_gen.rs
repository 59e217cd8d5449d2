//! ID generator port for task identifiers.

/// Produces opaque task identifiers.
///
/// Implementations must never hand out the same value twice for the
/// lifetime of a store. Tests substitute a predictable sequence.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    fn next_id(&self) -> String;
}
