//! Recording adapters: delegate to an inner port and log each call.

pub mod clock;
pub mod id_gen;
pub mod storage;

pub use clock::RecordingClock;
pub use id_gen::RecordingIdGenerator;
pub use storage::RecordingStorage;

use log::warn;
use serde::Serialize;
use serde_json::{json, Value};

use crate::cassette::session::SharedRecorder;

fn to_json<T: Serialize>(value: &T, port: &str, method: &str) -> Option<Value> {
    serde_json::to_value(value)
        .map_err(|e| warn!("event=cassette_record status=skipped port={port} method={method} error={e}"))
        .ok()
}

fn push(recorder: &SharedRecorder, port: &str, method: &str, input: Value, output: Value) {
    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input, output),
        Err(_) => warn!("event=cassette_record status=skipped port={port} reason=lock_poisoned"),
    }
}

/// Records an infallible call.
pub(crate) fn record_interaction<I, O>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let (Some(input), Some(output)) =
        (to_json(input, port, method), to_json(output, port, method))
    else {
        return;
    };
    push(recorder, port, method, input, output);
}

/// Records a fallible call as `{"ok": value}` or `{"err": message}`.
pub(crate) fn record_result<T, E, I>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let Some(input) = to_json(input, port, method) else {
        return;
    };
    let output = match result {
        Ok(value) => match to_json(value, port, method) {
            Some(inner) => json!({ "ok": inner }),
            None => return,
        },
        Err(e) => json!({ "err": e.to_string() }),
    };
    push(recorder, port, method, input, output);
}
