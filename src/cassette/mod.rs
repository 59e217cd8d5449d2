//! Cassettes: YAML transcripts of port interactions.
//!
//! A recording session wraps live adapters and writes one cassette per
//! port; replaying adapters serve those transcripts back in order so a
//! store session can be reproduced exactly.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
