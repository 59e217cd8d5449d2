//! Adapters implementing the port traits.
//!
//! - `live`: system clock, UUIDs, files on disk.
//! - `memory` and `fixed`: deterministic stand-ins for tests.
//! - `recording` and `replaying`: cassette wrappers for record/replay.

pub mod fixed;
pub mod live;
pub mod memory;
pub mod recording;
pub mod replaying;
