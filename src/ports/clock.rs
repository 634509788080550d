//! Clock port.
//!
//! Supplies "now" in the caller's local time zone. Statistics compare
//! calendar dates, so the offset matters as much as the instant.

use chrono::{DateTime, FixedOffset};

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}
