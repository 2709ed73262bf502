//! Elapsed-time and access-date formatting for login-activity nodes.

use chrono::{DateTime, TimeDelta, Utc};

use aula_sdk::host::StringResolver;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const YEAR: i64 = 365 * DAY;

/// Render an elapsed duration as its two most significant units, e.g.
/// `3 days 4 hours`. Durations under a second render as `now`.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds().max(0);
    if total < 1 {
        return "now".to_string();
    }

    let units = [
        (total / YEAR, "year"),
        (total % YEAR / DAY, "day"),
        (total % DAY / HOUR, "hour"),
        (total % HOUR / MINUTE, "min"),
        (total % MINUTE, "sec"),
    ];

    let mut parts = Vec::with_capacity(2);
    for (count, unit) in units {
        if count == 0 {
            continue;
        }
        parts.push(match count {
            1 => format!("1 {unit}"),
            n => format!("{n} {unit}s"),
        });
        if parts.len() == 2 {
            break;
        }
    }
    parts.join(" ")
}

/// Render an access timestamp as a dated string with the elapsed time in
/// parentheses, or the localized "never" when no access was recorded.
pub fn access_date_string(
    access: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    strings: &dyn StringResolver,
) -> String {
    match access {
        Some(when) => format!(
            "{} ({})",
            when.format("%-d %B %Y, %-I:%M %p"),
            format_elapsed(now - when)
        ),
        None => strings.resolve("never", "core"),
    }
}
