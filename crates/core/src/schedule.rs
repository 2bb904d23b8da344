//! Weekly export slot and next-fire computation.

use chrono::{DateTime, Datelike as _, LocalResult, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Weekday};

use crate::{DEFAULT_EXPORT_HOUR, DEFAULT_EXPORT_MINUTE};

/// A fixed weekday and wall-clock time at which the report export fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSchedule {
    weekday: Weekday,
    time: NaiveTime,
}

impl Default for ExportSchedule {
    fn default() -> Self {
        Self {
            weekday: Weekday::Sun,
            time: NaiveTime::from_hms_opt(DEFAULT_EXPORT_HOUR, DEFAULT_EXPORT_MINUTE, 0)
                .unwrap_or_default(),
        }
    }
}

impl ExportSchedule {
    /// Returns `None` when `hour`/`minute` do not form a valid time of day.
    pub fn new(weekday: Weekday, hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| Self { weekday, time })
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// First slot strictly after `now`, in `now`'s timezone.
    pub fn next_after<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateTime<Tz> {
        let local_now = now.naive_local();
        let days_ahead = (7 + self.weekday.num_days_from_monday()
            - local_now.weekday().num_days_from_monday())
            % 7;
        let mut candidate = NaiveDateTime::new(local_now.date(), self.time)
            + TimeDelta::days(i64::from(days_ahead));
        if candidate <= local_now {
            candidate += TimeDelta::days(7);
        }
        resolve_local(&now.timezone(), candidate)
    }
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Slot falls in a DST gap: fire an hour later on the wall clock.
        LocalResult::None => tz
            .from_local_datetime(&(naive + TimeDelta::hours(1)))
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
    }
}

impl std::fmt::Display for ExportSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.weekday, self.time.format("%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_default_is_sunday_2300() {
        let s = ExportSchedule::default();
        assert_eq!(s.weekday(), Weekday::Sun);
        assert_eq!(s.time(), NaiveTime::from_hms_opt(23, 0, 0).unwrap());
    }

    #[test]
    fn test_next_after_midweek() {
        // 2024-01-03 is a Wednesday.
        let next = ExportSchedule::default().next_after(&at(2024, 1, 3, 9, 30));
        assert_eq!(next, at(2024, 1, 7, 23, 0));
    }

    #[test]
    fn test_next_after_same_day_before_slot() {
        let next = ExportSchedule::default().next_after(&at(2024, 1, 7, 22, 59));
        assert_eq!(next, at(2024, 1, 7, 23, 0));
    }

    #[test]
    fn test_next_after_exactly_on_slot_moves_a_week() {
        let next = ExportSchedule::default().next_after(&at(2024, 1, 7, 23, 0));
        assert_eq!(next, at(2024, 1, 14, 23, 0));
    }

    #[test]
    fn test_next_after_monday_slot_from_sunday() {
        let schedule = ExportSchedule::new(Weekday::Mon, 6, 15).unwrap();
        let next = schedule.next_after(&at(2024, 1, 7, 23, 30));
        assert_eq!(next, at(2024, 1, 8, 6, 15));
    }

    #[test]
    fn test_invalid_time_rejected() {
        assert!(ExportSchedule::new(Weekday::Sun, 24, 0).is_none());
        assert!(ExportSchedule::new(Weekday::Sun, 23, 60).is_none());
    }
}
