//! Replaying adapters that serve recorded interactions back.
//!
//! Replay is test tooling: a mismatch between what the code asks for and
//! what the cassette holds is a bug in the test, so these adapters panic
//! instead of returning errors.

pub mod clock;
pub mod id_gen;
pub mod storage;

pub use clock::ReplayingClock;
pub use id_gen::ReplayingIdGenerator;
pub use storage::ReplayingStorage;

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;

/// Pulls the next recorded output for `port::method`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}
