//! Clock port for obtaining the current time.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Provides the current time.
///
/// Abstracting time access allows deterministic replay by substituting
/// a fixed or recorded clock during tests and cassette playback.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar date in the local time zone.
    ///
    /// Due dates are plain calendar dates, so "today" is what the user's
    /// wall calendar says rather than the UTC date.
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

impl<T: Clock + ?Sized> Clock for std::sync::Arc<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
