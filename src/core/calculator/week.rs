//! Week bucketing and per-week hour totals.
//!
//! Weeks run Monday 00:00:00 through Sunday 23:59:59 in the reference
//! timezone. Buckets are recomputed from the raw event log on every call;
//! nothing here keeps state or touches storage.

use super::hours::Hours;
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use crate::models::clock_kind::ClockKind;
use crate::utils::time::{self, to_reference};
use chrono::{DateTime, Datelike, Days, NaiveDate, TimeDelta, Utc};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Identifies one Monday–Sunday span. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    start: NaiveDate,
    end: NaiveDate,
}

impl WeekKey {
    /// The week containing `date`. Sunday is the last day of its week.
    pub fn containing(date: NaiveDate) -> Self {
        let back = u64::from(date.weekday().num_days_from_monday());
        let start = date - Days::new(back);
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Accepts either a canonical key (`YYYY-MM-DD/YYYY-MM-DD`) or any single
/// date, which selects the week containing it.
impl FromStr for WeekKey {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let s = s.trim();

        let Some((start, end)) = s.split_once('/') else {
            let date = time::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
            return Ok(WeekKey::containing(date));
        };

        let start = time::parse_date(start).ok_or_else(|| AppError::InvalidWeek(s.to_string()))?;
        let end = time::parse_date(end).ok_or_else(|| AppError::InvalidWeek(s.to_string()))?;
        let key = WeekKey::containing(start);

        if key.start != start || key.end != end {
            return Err(AppError::InvalidWeek(format!(
                "{s} is not a Monday–Sunday span"
            )));
        }

        Ok(key)
    }
}

/// Week key of an instant, evaluated in the reference timezone.
pub fn assign_week(ts: DateTime<Utc>) -> WeekKey {
    WeekKey::containing(to_reference(ts).date_naive())
}

/// Week key of an event, if it carries a timestamp.
pub fn week_of(event: &ClockEvent) -> Option<WeekKey> {
    event.time.map(assign_week)
}

/// Bucket events by week, keeping input order inside each bucket.
/// Events without a timestamp are left out.
pub fn group_by_week<'a, I>(events: I) -> BTreeMap<WeekKey, Vec<&'a ClockEvent>>
where
    I: IntoIterator<Item = &'a ClockEvent>,
{
    let mut grouped: BTreeMap<WeekKey, Vec<&'a ClockEvent>> = BTreeMap::new();

    for ev in events {
        match week_of(ev) {
            Some(key) => grouped.entry(key).or_default().push(ev),
            None => log::debug!("skipping event #{} without timestamp", ev.id),
        }
    }

    grouped
}

/// Sum of `second - first` over the positional pairs (0,1), (2,3), …
///
/// Pairing is by position only; kinds are not inspected. A trailing unpaired
/// event adds nothing and negative spans are kept as they are. When a week
/// starts with a clock-out whose clock-in fell in the previous week, every
/// pair in that week is shifted by one; see [`pairing_misaligned`].
pub fn total_duration<E: Borrow<ClockEvent>>(events: &[E]) -> Hours {
    let total = events
        .chunks_exact(2)
        .filter_map(|pair| match (pair[0].borrow().time, pair[1].borrow().time) {
            (Some(clock_in), Some(clock_out)) => Some(clock_out - clock_in),
            _ => None,
        })
        .fold(TimeDelta::zero(), |acc, d| acc + d);

    Hours::from_duration(total)
}

/// True when positional pairing does not line up as (Clock In, Clock Out):
/// the totals for such a sequence are computed against the wrong partners.
pub fn pairing_misaligned<E: Borrow<ClockEvent>>(events: &[E]) -> bool {
    events.iter().enumerate().any(|(i, ev)| {
        let expected = if i % 2 == 0 {
            ClockKind::ClockIn
        } else {
            ClockKind::ClockOut
        };
        ev.borrow().kind != expected
    })
}

/// True when the sequence ends with a clock-in that has no partner.
pub fn has_open_clock_in<E: Borrow<ClockEvent>>(events: &[E]) -> bool {
    events.len() % 2 == 1 && events.last().is_some_and(|ev| ev.borrow().kind.is_in())
}

/// Split events into (in `key`'s week, everything else), order preserved.
pub fn partition_week(events: Vec<ClockEvent>, key: &WeekKey) -> (Vec<ClockEvent>, Vec<ClockEvent>) {
    events
        .into_iter()
        .partition(|ev| week_of(ev).as_ref() == Some(key))
}

/// Drop every event of `key`'s week. Events without a timestamp are kept.
pub fn delete_week(events: Vec<ClockEvent>, key: &WeekKey) -> Vec<ClockEvent> {
    partition_week(events, key).1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_local_datetime;

    fn at(s: &str) -> DateTime<Utc> {
        parse_local_datetime(s).unwrap()
    }

    fn cin(s: &str) -> ClockEvent {
        ClockEvent::clock_in(at(s), "Depot")
    }

    fn cout(s: &str) -> ClockEvent {
        ClockEvent::clock_out(at(s), Some("Depot".into()))
    }

    fn untimed(kind: ClockKind) -> ClockEvent {
        let mut ev = ClockEvent::new(kind, at("2024-06-03 09:00"), None);
        ev.time = None;
        ev
    }

    #[test]
    fn monday_and_sunday_share_a_week() {
        let mon = assign_week(at("2024-06-03 09:00"));
        let sun = assign_week(at("2024-06-09 17:00"));
        let next = assign_week(at("2024-06-10 09:00"));

        assert_eq!(mon, sun);
        assert_ne!(sun, next);
        assert_eq!(mon.to_string(), "2024-06-03/2024-06-09");
        assert_eq!(next.to_string(), "2024-06-10/2024-06-16");
    }

    #[test]
    fn every_day_of_a_week_maps_to_the_same_key() {
        let key = assign_week(at("2024-06-03 00:00"));
        for day in 3..=9 {
            for hm in ["00:00", "12:30", "23:59:59"] {
                let ts = at(&format!("2024-06-{day:02} {hm}"));
                assert_eq!(assign_week(ts), key, "day {day} {hm}");
            }
        }
    }

    #[test]
    fn week_boundary_is_midnight_in_reference_zone() {
        let last = assign_week(at("2024-06-09 23:59:59"));
        let first = assign_week(at("2024-06-10 00:00"));
        assert_ne!(last, first);
        assert!(last < first);

        // Monday 03:00 UTC is still Sunday evening in Los Angeles
        let utc = time::parse_event_time("2024-06-10T03:00:00Z").unwrap();
        assert_eq!(assign_week(utc), last);
    }

    #[test]
    fn weeks_across_year_end() {
        let key = assign_week(at("2025-01-01 10:00"));
        assert_eq!(key.start(), NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
        assert_eq!(key.end(), NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert_eq!(assign_week(at("2024-12-31 10:00")), key);
    }

    #[test]
    fn parses_keys_and_dates() {
        let key: WeekKey = "2024-06-03/2024-06-09".parse().unwrap();
        assert_eq!(key, assign_week(at("2024-06-05 12:00")));

        let from_date: WeekKey = "2024-06-09".parse().unwrap();
        assert_eq!(from_date, key);

        assert!(matches!(
            "2024-06-04/2024-06-10".parse::<WeekKey>(),
            Err(AppError::InvalidWeek(_))
        ));
        assert!(matches!(
            "last week".parse::<WeekKey>(),
            Err(AppError::InvalidDate(_))
        ));
    }

    #[test]
    fn group_partitions_input_and_keeps_order() {
        let events = vec![
            cin("2024-06-10 09:00"),
            cin("2024-06-03 09:00"),
            untimed(ClockKind::ClockOut),
            cout("2024-06-10 17:00"),
            cout("2024-06-03 17:00"),
        ];

        let grouped = group_by_week(&events);
        assert_eq!(grouped.len(), 2);

        let weeks: Vec<_> = grouped.keys().map(|k| k.to_string()).collect();
        assert_eq!(weeks, ["2024-06-03/2024-06-09", "2024-06-10/2024-06-16"]);

        let first = &grouped[&assign_week(at("2024-06-03 09:00"))];
        assert_eq!(first, &vec![&events[1], &events[4]]);
        let second = &grouped[&assign_week(at("2024-06-10 09:00"))];
        assert_eq!(second, &vec![&events[0], &events[3]]);

        let bucketed: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(bucketed, 4);
    }

    #[test]
    fn eight_hour_shift() {
        let events = [cin("2024-06-03 09:00"), cout("2024-06-03 17:00")];
        assert_eq!(total_duration(&events).to_string(), "8.00");
    }

    #[test]
    fn empty_total_is_zero() {
        let events: [ClockEvent; 0] = [];
        assert_eq!(total_duration(&events).to_string(), "0.00");
    }

    #[test]
    fn trailing_clock_in_is_ignored() {
        let events = [
            cin("2024-06-03 09:00"),
            cout("2024-06-03 12:30"),
            cin("2024-06-03 13:00"),
        ];
        assert_eq!(total_duration(&events).to_string(), "3.50");
        assert!(has_open_clock_in(&events));
        assert!(!pairing_misaligned(&events));
    }

    #[test]
    fn negative_spans_are_not_clamped() {
        let events = [
            cin("2024-06-03 09:00"),
            cout("2024-06-03 17:00"),
            cin("2024-06-04 17:00"),
            cout("2024-06-04 15:30"),
        ];
        assert_eq!(total_duration(&events).to_string(), "6.50");

        let backwards = [cin("2024-06-04 17:00"), cout("2024-06-04 09:00")];
        assert_eq!(total_duration(&backwards).to_string(), "-8.00");
    }

    #[test]
    fn overnight_shift_split_by_week_boundary_pairs_positionally() {
        let events = vec![
            cin("2024-06-09 22:00"),
            cout("2024-06-10 02:00"),
            cin("2024-06-10 09:00"),
            cout("2024-06-10 17:00"),
        ];

        let grouped = group_by_week(&events);
        let weeks: Vec<_> = grouped.values().collect();

        // first week: lone clock-in, counted as zero
        assert_eq!(total_duration(weeks[0]).to_string(), "0.00");
        assert!(has_open_clock_in(weeks[0]));

        // second week pairs (out 02:00, in 09:00) and drops the last out
        assert_eq!(total_duration(weeks[1]).to_string(), "7.00");
        assert!(pairing_misaligned(weeks[1]));
        assert!(!has_open_clock_in(weeks[1]));
    }

    #[test]
    fn delete_week_keeps_other_weeks_and_untimed_events() {
        let events = vec![
            cin("2024-06-03 09:00"),
            cout("2024-06-03 17:00"),
            untimed(ClockKind::ClockIn),
            cin("2024-06-10 09:00"),
            cout("2024-06-10 17:00"),
        ];
        let key = assign_week(at("2024-06-05 00:00"));

        let remaining = delete_week(events.clone(), &key);
        assert_eq!(remaining, events[2..].to_vec());

        let (removed, kept) = partition_week(events.clone(), &key);
        assert_eq!(removed, events[..2].to_vec());
        assert_eq!(kept, remaining);
    }

    #[test]
    fn delete_unknown_week_is_identity() {
        let events = vec![cin("2024-06-03 09:00"), cout("2024-06-03 17:00")];
        let key: WeekKey = "2023-01-02/2023-01-08".parse().unwrap();
        assert_eq!(delete_week(events.clone(), &key), events);
    }
}
