//! Day-level activity and streaks.
//!
//! Messages are bucketed by the calendar day of their timestamp. Active days
//! are then scanned in order and grouped into runs of consecutive days.
//!
//! Run lengths follow a fixed arithmetic: a run closed because the next
//! active day is not adjacent gets `(end - start).days`, while the last run
//! gets `(end - start).days + 1`.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::{StatContext, StatValue, top};
use crate::Message;
use crate::error::{ChatstatsError, Result};

/// Message count of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// A run of consecutive active days.
///
/// Ordered by length, then start date, then end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Streak {
    pub length: i64,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Result of the `activity` stat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    /// Every active day, ascending by date
    pub activity_per_day: Vec<DayCount>,
    pub num_active_days: usize,
    /// Busiest days, descending by count then date
    pub most_active_days: Vec<DayCount>,
    pub longest_streak: Streak,
}

/// Counts messages per calendar day.
pub fn messages_per_day(messages: &[Message]) -> BTreeMap<NaiveDate, usize> {
    let mut per_day = BTreeMap::new();
    for message in messages {
        *per_day.entry(message.date()).or_insert(0) += 1;
    }
    per_day
}

/// Splits ascending `dates` into runs of consecutive days.
///
/// Returns an empty list for empty input.
pub fn group_adjacent_dates(dates: &[NaiveDate]) -> Vec<Streak> {
    let Some((&first, rest)) = dates.split_first() else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let mut start = first;
    let mut previous = first;

    for &date in rest {
        if previous.checked_add_days(Days::new(1)) != Some(date) {
            runs.push(Streak {
                length: (previous - start).num_days(),
                start,
                end: previous,
            });
            start = date;
        }
        previous = date;
    }

    runs.push(Streak {
        length: (previous - start).num_days() + 1,
        start,
        end: previous,
    });

    runs
}

/// Computes per-day activity, the busiest days and the longest streak.
pub fn activity(messages: &[Message], top_limit: usize) -> Result<Activity> {
    let per_day = messages_per_day(messages);

    let dates: Vec<NaiveDate> = per_day.keys().copied().collect();
    let longest_streak = group_adjacent_dates(&dates)
        .into_iter()
        .max()
        .ok_or_else(|| ChatstatsError::empty_messages("activity"))?;

    let most_active_days = top(per_day.iter().map(|(&date, &count)| (count, date)), top_limit)
        .into_iter()
        .map(|(count, date)| DayCount { date, count })
        .collect();

    let activity_per_day: Vec<DayCount> = per_day
        .into_iter()
        .map(|(date, count)| DayCount { date, count })
        .collect();

    Ok(Activity {
        num_active_days: activity_per_day.len(),
        activity_per_day,
        most_active_days,
        longest_streak,
    })
}

pub(super) fn activity_stat(messages: &[Message], ctx: &StatContext<'_>) -> Result<StatValue> {
    activity(messages, ctx.config.top_limit).map(StatValue::Activity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;
    use chrono::{TimeZone, Utc};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn msg_on(y: i32, m: u32, day: u32, hour: u32) -> Message {
        let ts = Utc.with_ymd_and_hms(y, m, day, hour, 0, 0).unwrap();
        Message::new("[..] Alice: hi", "hi", ts, User::new("Alice"))
    }

    #[test]
    fn test_group_adjacent_dates_with_gap() {
        let runs = group_adjacent_dates(&[d(2021, 1, 1), d(2021, 1, 2), d(2021, 1, 4)]);
        assert_eq!(
            runs,
            [
                Streak { length: 1, start: d(2021, 1, 1), end: d(2021, 1, 2) },
                Streak { length: 1, start: d(2021, 1, 4), end: d(2021, 1, 4) },
            ]
        );
        assert_eq!(
            runs.into_iter().max(),
            Some(Streak { length: 1, start: d(2021, 1, 4), end: d(2021, 1, 4) })
        );
    }

    #[test]
    fn test_group_adjacent_dates_single_run() {
        let runs = group_adjacent_dates(&[d(2021, 1, 30), d(2021, 1, 31), d(2021, 2, 1)]);
        assert_eq!(
            runs,
            [Streak { length: 3, start: d(2021, 1, 30), end: d(2021, 2, 1) }]
        );
    }

    #[test]
    fn test_isolated_non_final_day_has_zero_length() {
        let runs = group_adjacent_dates(&[d(2021, 1, 1), d(2021, 1, 3)]);
        assert_eq!(runs[0].length, 0);
        assert_eq!(runs[1].length, 1);
    }

    #[test]
    fn test_group_adjacent_dates_empty() {
        assert!(group_adjacent_dates(&[]).is_empty());
    }

    #[test]
    fn test_activity_buckets_and_top_days() {
        let messages = vec![
            msg_on(2021, 1, 1, 9),
            msg_on(2021, 1, 1, 23),
            msg_on(2021, 1, 2, 10),
            msg_on(2021, 1, 4, 10),
            msg_on(2021, 1, 4, 11),
            msg_on(2021, 1, 5, 8),
        ];

        let activity = activity(&messages, 3).unwrap();
        assert_eq!(activity.num_active_days, 4);
        assert_eq!(
            activity.activity_per_day,
            [
                DayCount { date: d(2021, 1, 1), count: 2 },
                DayCount { date: d(2021, 1, 2), count: 1 },
                DayCount { date: d(2021, 1, 4), count: 2 },
                DayCount { date: d(2021, 1, 5), count: 1 },
            ]
        );
        // Ties on count go to the later date
        assert_eq!(
            activity.most_active_days,
            [
                DayCount { date: d(2021, 1, 4), count: 2 },
                DayCount { date: d(2021, 1, 1), count: 2 },
                DayCount { date: d(2021, 1, 5), count: 1 },
            ]
        );
        assert_eq!(
            activity.longest_streak,
            Streak { length: 2, start: d(2021, 1, 4), end: d(2021, 1, 5) }
        );
    }

    #[test]
    fn test_activity_empty_is_error() {
        let err = activity(&[], 3).unwrap_err();
        assert!(err.is_empty_messages());
    }
}
