//! Live adapters for real external interactions.

pub mod clock;
pub mod id_gen;
pub mod storage;
