use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone};
use serde::{Deserialize, Serialize};

/// How a duration is added to a start time in a zone with daylight saving
/// changes.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Clock {
    /// Each shift moves the local wall clock time. A time that falls in a
    /// gap moves forward by the size of the gap, and an ambiguous time takes
    /// its earlier occurrence.
    #[default]
    WallClock,
    /// Each shift is exact elapsed time.
    Absolute,
}

impl Clock {
    pub fn advance<Tz: TimeZone>(
        self,
        start: &DateTime<Tz>,
        shifts: &[Duration],
    ) -> DateTime<Tz> {
        match self {
            Clock::WallClock => shifts.iter().fold(start.clone(), |current, shift| {
                let tz = current.timezone();
                resolve_local(&tz, current.naive_local() + *shift)
            }),
            Clock::Absolute => shifts
                .iter()
                .fold(start.clone(), |current, shift| current + *shift),
        }
    }
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => {
            let day = Duration::hours(24);
            let before = utc_offset_seconds(tz, local - day);
            let after = utc_offset_seconds(tz, local + day);
            let shifted = local + Duration::seconds(i64::from(after - before));

            tz.from_local_datetime(&shifted).earliest().unwrap_or_else(|| {
                tz.from_utc_datetime(&(local - Duration::seconds(i64::from(before))))
            })
        }
    }
}

fn utc_offset_seconds<Tz: TimeZone>(tz: &Tz, around: NaiveDateTime) -> i32 {
    tz.offset_from_utc_datetime(&around).fix().local_minus_utc()
}
