//! Daily board views: date/division/search filtering and section columns.
//!
//! # Invariants
//! - Filtering is an exact due-date match; there is no range logic.
//! - Source order is preserved everywhere (stable views).
//! - Every task resolves to a column; unresolvable sections land in
//!   `General`.

use chrono::NaiveDate;

use crate::model::section::GENERAL_SECTION;
use crate::model::task::{Division, Task, TaskStatus};

/// Tasks due on `date` within `division`, optionally narrowed by a
/// case-insensitive title substring. Blank `search` matches everything.
/// Tasks without a due date never match.
pub fn filter_board<'a>(
    tasks: &'a [Task],
    date: NaiveDate,
    division: Division,
    search: &str,
) -> Vec<&'a Task> {
    let needle = search.trim().to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            task.due_date == Some(date)
                && task.division == division
                && (needle.is_empty() || task.title.to_lowercase().contains(&needle))
        })
        .collect()
}

/// One board column: a section's tasks split into open and done lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionColumn<'a> {
    pub name: String,
    /// Tasks with `status != completed`, source order.
    pub pending: Vec<&'a Task>,
    /// Tasks with `status == completed`, source order.
    pub completed: Vec<&'a Task>,
}

/// Partitions already-filtered tasks into per-section columns.
///
/// Columns come out as `General` first, then `sections` in registry order
/// (stray `General` entries in the list are skipped). A task whose section
/// matches no column is bucketed under `General`; with duplicate section
/// names the first matching column wins.
pub fn group_by_section<'a>(tasks: &[&'a Task], sections: &[String]) -> Vec<SectionColumn<'a>> {
    let mut columns: Vec<SectionColumn<'a>> = Vec::with_capacity(sections.len() + 1);
    columns.push(SectionColumn {
        name: GENERAL_SECTION.to_string(),
        ..SectionColumn::default()
    });
    for name in sections {
        if name == GENERAL_SECTION {
            continue;
        }
        columns.push(SectionColumn {
            name: name.clone(),
            ..SectionColumn::default()
        });
    }

    for &task in tasks {
        let slot = columns
            .iter()
            .position(|column| column.name == task.section)
            .unwrap_or(0);
        if task.status == TaskStatus::Completed {
            columns[slot].completed.push(task);
        } else {
            columns[slot].pending.push(task);
        }
    }

    columns
}
