//! Time source for draft defaults and "today" in the dashboard metrics.
//!
//! Dates are rendered in UTC.

use chrono::{DateTime, Utc};

/// Format of calendar-date fields (`2024-08-15`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of date-time fields, truncated to the minute (`2024-08-23T09:00`)
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Today's calendar date as `YYYY-MM-DD`
    fn today(&self) -> String {
        self.now().format(DATE_FORMAT).to_string()
    }

    /// Current time as `YYYY-MM-DDTHH:MM`
    fn now_to_minute(&self) -> String {
        self.now().format(DATE_TIME_FORMAT).to_string()
    }
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant, for tests and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
