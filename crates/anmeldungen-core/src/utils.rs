//! Utility functions for anmeldungen-core

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Report timestamps are in local time of the department
pub const REPORT_TIMEZONE: Tz = chrono_tz::Europe::Berlin;

/// Current time in [`REPORT_TIMEZONE`]
pub fn berlin_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&REPORT_TIMEZONE)
}
