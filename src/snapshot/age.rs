use std::sync::OnceLock;

use time::format_description::FormatItem;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Timestamp layout embedded in time-bucketed index names, e.g.
/// `2015-10-10t14:30:00.000z`.
fn name_format() -> &'static [FormatItem<'static>] {
    static FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FORMAT.get_or_init(|| {
        time::format_description::parse(
            "[year]-[month]-[day]t[hour]:[minute]:[second].[subsecond digits:3]z",
        )
        .expect("valid time format")
    })
}

/// Whole days between `now` and the timestamp carried in a time-bucketed
/// index name. Names that do not match the pattern, or that match but do
/// not denote a real calendar instant, yield `-1`. The timestamp is read
/// as UTC and the day count floors, so a bucket from earlier today is `0`,
/// one from this moment yesterday is `1`, and a bucket stamped in the
/// future lands at `-1` like an unparseable name.
pub fn index_age_days(name: &str, now: OffsetDateTime) -> i64 {
    let Ok(stamp) = PrimitiveDateTime::parse(name, name_format()) else {
        return -1;
    };
    // floor on the full precision; whole-second truncation would round a
    // sub-second-future bucket up to day zero
    const NANOS_PER_DAY: i128 = 86_400 * 1_000_000_000;
    let delta = now - stamp.assume_utc();
    delta.whole_nanoseconds().div_euclid(NANOS_PER_DAY) as i64
}

#[cfg(test)]
#[path = "../tests/snapshot/age_tests.rs"]
mod tests;
