use chrono::{DateTime, Utc};

/// Wall-clock time of day, e.g. `14:05:09`.
#[must_use]
pub fn format_time(value: DateTime<Utc>) -> String {
    value.format("%H:%M:%S").to_string()
}
