//! Replaying adapter for the `Clock` port.

use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::clock::Clock;

/// Serves recorded `now()` and `today()` readings in order.
pub struct ReplayingClock {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClock {
    /// Creates a clock backed by `replayer`.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> DateTime<Utc> {
        let output = next_output(&self.replayer, "clock", "now");
        serde_json::from_value(output).expect("clock::now: recorded value is not a timestamp")
    }

    fn today(&self) -> NaiveDate {
        let output = next_output(&self.replayer, "clock", "today");
        serde_json::from_value(output).expect("clock::today: recorded value is not a date")
    }
}
