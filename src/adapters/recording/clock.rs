//! Recording adapter for the `Clock` port.

use chrono::{DateTime, NaiveDate, Utc};

use super::record_interaction;
use crate::cassette::session::SharedRecorder;
use crate::ports::Clock;

/// Records every `now()` and `today()` reading of the wrapped clock.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    recorder: SharedRecorder,
}

impl RecordingClock {
    /// Wraps `inner`, appending to `recorder`.
    pub fn new(inner: Box<dyn Clock>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl Clock for RecordingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.inner.now();
        record_interaction(&self.recorder, "clock", "now", &(), &now);
        now
    }

    fn today(&self) -> NaiveDate {
        let today = self.inner.today();
        record_interaction(&self.recorder, "clock", "today", &(), &today);
        today
    }
}
