//! Weekly aggregation for the progress chart.
//!
//! Buckets by **due date**, not completion date: a task finished late still
//! counts toward its scheduled day, because no completion timestamp is
//! modeled. Known approximation, kept as observed behavior.

use chrono::{Datelike, Days, NaiveDate};

use crate::model::task::{Task, TaskStatus};

/// Short Spanish weekday labels, Monday first, matching the chart locale.
const DAY_LABELS: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];

/// Per-day counts for one chart bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTally {
    pub date: NaiveDate,
    /// Short weekday label (`lun`..`dom`).
    pub label: &'static str,
    pub completed: u32,
    pub pending: u32,
    pub total: u32,
}

/// Monday of the week containing `date`.
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Tallies the seven days from `week_start` (Monday) through Sunday.
///
/// Per day: `total` counts tasks due that day, `completed` the subset with
/// completed status, and `pending = total - completed`.
pub fn weekly_aggregate(tasks: &[Task], week_start: NaiveDate) -> Vec<DayTally> {
    (0..7u64)
        .filter_map(|offset| week_start.checked_add_days(Days::new(offset)))
        .map(|day| {
            let mut total = 0u32;
            let mut completed = 0u32;
            for task in tasks {
                if task.due_date != Some(day) {
                    continue;
                }
                total += 1;
                if task.status == TaskStatus::Completed {
                    completed += 1;
                }
            }
            DayTally {
                date: day,
                label: DAY_LABELS[day.weekday().num_days_from_monday() as usize],
                completed,
                pending: total - completed,
                total,
            }
        })
        .collect()
}

/// Share of completed tasks over the whole collection, rounded to a whole
/// percent. Defined as `0` for an empty collection.
pub fn global_completion_rate(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Completed)
        .count();
    ((completed as f64 / tasks.len() as f64) * 100.0).round() as u8
}
