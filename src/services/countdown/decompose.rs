//! Calendar-aware decomposition of a (now, target) pair into whole months
//! plus a day/hour/minute/second remainder.

use chrono::{DateTime, Datelike, Local};

use super::models::TimeBreakdown;
use crate::utils::date::add_months;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Whole months between `now` and `target`, together with `now` advanced
/// by that many months (the start of the sub-month remainder).
///
/// The naive year/month difference overshoots whenever `target`'s
/// day-of-month or time-of-day falls earlier than `now`'s, so the count is
/// corrected downward until the advanced instant no longer exceeds
/// `target`. The naive count is an upper bound, so the loop terminates
/// after at most a couple of iterations.
pub fn months_and_remainder(
    now: DateTime<Local>,
    target: DateTime<Local>,
) -> (u32, DateTime<Local>) {
    let mut months =
        (target.year() - now.year()) * 12 + (target.month() as i32 - now.month() as i32);
    let mut candidate = add_months(now, months);

    while candidate > target {
        months -= 1;
        candidate = add_months(now, months);
    }

    (months.max(0) as u32, candidate)
}

/// Split the span from `now` to `target` into calendar months plus days,
/// hours, minutes and seconds. Defined for `target > now`; the driver
/// handles the reached-target case before calling.
pub fn decompose(now: DateTime<Local>, target: DateTime<Local>) -> TimeBreakdown {
    let (months, remainder_start) = months_and_remainder(now, target);

    let mut left = target.timestamp_millis() - remainder_start.timestamp_millis();

    let days = left / MS_PER_DAY;
    left -= days * MS_PER_DAY;

    let hours = left / MS_PER_HOUR;
    left -= hours * MS_PER_HOUR;

    let minutes = left / MS_PER_MINUTE;
    left -= minutes * MS_PER_MINUTE;

    let seconds = left / MS_PER_SECOND;

    TimeBreakdown {
        months,
        days: days as u32,
        hours: hours as u32,
        minutes: minutes as u32,
        seconds: seconds as u32,
    }
}
