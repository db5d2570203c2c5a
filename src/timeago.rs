//! Human-relative date formatting ("3 hours ago").
//!
//! Buckets a publish-to-now interval into the largest sensible unit with
//! rounded division and a floor of one: under an hour counts minutes, under
//! a day hours, under a week days, under thirty days weeks, under a year
//! months, then years. Callers pass "now" explicitly, which keeps every
//! composer a pure function of its inputs.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

fn rounded(diff: i64, unit: i64) -> i64 {
    ((diff + unit / 2) / unit).max(1)
}

/// Format the interval between `published` and `now` as `"N unit"`.
///
/// A future `published` clamps to the minimum ("1 min") rather than
/// erroring; callers append their own suffix (see [`time_ago`]).
pub fn human_interval(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - published).num_seconds().max(0);

    let (n, singular, plural) = if diff < HOUR {
        (rounded(diff, MINUTE), "min", "mins")
    } else if diff < DAY {
        (rounded(diff, HOUR), "hour", "hours")
    } else if diff < WEEK {
        (rounded(diff, DAY), "day", "days")
    } else if diff < MONTH {
        (rounded(diff, WEEK), "week", "weeks")
    } else if diff < YEAR {
        (rounded(diff, MONTH), "month", "months")
    } else {
        (rounded(diff, YEAR), "year", "years")
    };

    let unit = if n == 1 { singular } else { plural };
    format!("{n} {unit}")
}

/// Format a publish timestamp as `"N unit {suffix}"`, e.g. `"3 hours ago"`.
pub fn time_ago(published: DateTime<Utc>, now: DateTime<Utc>, suffix: &str) -> String {
    format!("{} {suffix}", human_interval(published, now))
}
