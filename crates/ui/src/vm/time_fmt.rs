use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// `2023년 11월 14일 22:13`: month, day and hour unpadded, minutes padded.
#[must_use]
pub fn format_session_date<Tz: TimeZone>(value: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    value.format("%Y년 %-m월 %-d일 %-H:%M").to_string()
}

/// Seconds as a short number: `2.3`, or `4` when there is no fraction.
#[must_use]
pub fn format_seconds(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{seconds:.0}")
    } else {
        format!("{seconds:.1}")
    }
}
