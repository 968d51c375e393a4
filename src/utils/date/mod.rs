// Calendar month arithmetic
//
// Advancing by calendar months keeps the day-of-month and time-of-day.
// When the destination month is shorter than the source day-of-month, the
// excess days spill into the following month: 2025-01-31 + 1 month is
// 2025-03-03 (and 2024-01-31, leap year, is 2024-03-02). The correction
// loop in the decomposer and the "+N months" target construction both
// depend on this exact rollover, so chrono's clamping `Months` addition
// is not used here.

use chrono::{
    DateTime, Datelike, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone,
};

/// Advance `instant` by `months` whole calendar months, spilling an
/// out-of-range day-of-month into the following month.
pub fn add_months(instant: DateTime<Local>, months: i32) -> DateTime<Local> {
    let naive = instant.naive_local();
    let total = naive.year() as i64 * 12 + naive.month0() as i64 + months as i64;
    let year = total.div_euclid(12) as i32;
    let month = total.rem_euclid(12) as u32 + 1;

    // Walking from the first of the destination month lets day 29-31
    // overflow into the next month instead of clamping.
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| naive.date() + Duration::days(30 * months as i64));
    let date = first + Duration::days(naive.day() as i64 - 1);

    resolve_local(date.and_time(naive.time()))
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

/// Re-attach a month-shifted wall-clock time to the local zone. An
/// ambiguous time resolves to the earlier instant; a time inside a DST gap
/// slides forward one hour to the other side of the gap.
fn resolve_local(naive: NaiveDateTime) -> DateTime<Local> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => Local
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .expect("wall-clock time one hour past a DST gap must exist"),
    }
}
