//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the task store and something
//! outside the process (time, IDs, durable storage). Implementations live
//! in `src/adapters/`.

pub mod clock;
pub mod id_gen;
pub mod storage;

pub use clock::Clock;
pub use id_gen::IdGenerator;
pub use storage::{Storage, StorageError};
