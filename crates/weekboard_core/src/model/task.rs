//! Task record and its input models.
//!
//! # Responsibility
//! - Define the persisted `Task` shape and its enums.
//! - Provide draft/patch input models for create and merge-update flows.
//!
//! # Invariants
//! - `id` and `created_at` are generated once and never rewritten.
//! - `due_date` carries no time component; it is a plain calendar date
//!   interpreted in local time (never UTC-shifted).
//! - Creation always starts at `TaskStatus::Pending`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use super::section::general_section_name;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Top-level grouping every task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    /// Legacy payloads without a division land here.
    #[default]
    Personal,
    Work,
}

impl Display for Division {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Personal => write!(f, "personal"),
            Self::Work => write!(f, "work"),
        }
    }
}

/// Display urgency of a task. Has no scheduling effect in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Task lifecycle state.
///
/// Transitions are unordered: any state may move to any other. Only creation
/// is constrained (always `Pending`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// Persisted task record.
///
/// Serialized field names keep the original camelCase storage shape
/// (`dueDate`, `createdAt`, `originalDate`) so existing payloads load as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub division: Division,
    /// Either the `General` sentinel or a registered section of `division`.
    #[serde(default = "general_section_name")]
    pub section: String,
    /// `None` means "no due date"; such tasks never appear in date-scoped views.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    pub status: TaskStatus,
    /// Free text, not a reference into the people registry.
    #[serde(default)]
    pub assignees: String,
    pub created_at: DateTime<Utc>,
    /// Due date captured by the first move-to-tomorrow; never overwritten.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_date: Option<NaiveDate>,
}

/// Caller-supplied fields for task creation.
///
/// `id`, `created_at` and the effective status are store-generated. A
/// `status` slot exists only so callers forwarding raw form input do not have
/// to strip it; the store discards it and always starts at `Pending`.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub division: Division,
    /// Blank resolves to `General`.
    pub section: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    /// Ignored by the store; see [`TaskDraft`] docs.
    pub status: Option<TaskStatus>,
    pub assignees: String,
}

impl TaskDraft {
    /// Minimal draft used by quick-add flows: title only, everything else
    /// defaulted.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Merge patch for `update_task`.
///
/// `None` leaves the corresponding field unchanged. `id` and `created_at`
/// are not patchable. Clearing an already-set due date is not supported.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub division: Option<Division>,
    pub section: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub assignees: Option<String>,
}
