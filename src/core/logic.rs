use crate::core::calculator::hours::Hours;
use crate::core::calculator::week;
use crate::models::{clock_event::ClockEvent, week_summary::WeekSummary};

pub struct Core;

impl Core {
    /// One summary per week that has at least one timestamped event,
    /// oldest week first.
    pub fn build_weekly_summaries(events: &[ClockEvent]) -> Vec<WeekSummary> {
        week::group_by_week(events)
            .into_iter()
            .map(|(key, bucket)| WeekSummary {
                key,
                total: week::total_duration(&bucket),
                misaligned: week::pairing_misaligned(&bucket),
                open_clock_in: week::has_open_clock_in(&bucket),
                events: bucket.into_iter().cloned().collect(),
            })
            .collect()
    }

    pub fn grand_total(summaries: &[WeekSummary]) -> Hours {
        summaries
            .iter()
            .fold(Hours::ZERO, |acc, summary| acc + summary.total)
    }
}
