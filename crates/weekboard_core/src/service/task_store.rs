//! Task and section store.
//!
//! # Responsibility
//! - Hold the authoritative task collection and section registry.
//! - Apply every mutation (CRUD, section lifecycle, date moves) and persist
//!   the affected collections afterwards.
//!
//! # Invariants
//! - Creation always starts at `Pending`, whatever the draft carried.
//! - No task ever references a deleted section: `delete_section` rewrites
//!   affected tasks to `General` and persists both collections in one step.
//! - `original_date` is first-write-wins; repeated moves keep the earliest
//!   captured due date.
//! - Not-found ids on update/delete/move are silent no-ops.

use chrono::{Days, Local, NaiveDate};
use log::{debug, info, warn};
use uuid::Uuid;

use crate::model::section::{SectionRegistry, GENERAL_SECTION};
use crate::model::task::{Division, Task, TaskDraft, TaskId, TaskPatch, TaskStatus};
use crate::model::ValidationError;
use crate::store::adapter::DurableStore;
use crate::store::kv::KvBackend;

/// Storage key for the task collection.
pub const TASKS_KEY: &str = "tasks";
/// Storage key for the section registry.
pub const SECTIONS_KEY: &str = "subsections";

/// Owned task/section state with write-through persistence.
///
/// Constructed once at process start and passed by reference to consumers;
/// all writes funnel through its methods.
pub struct TaskStore<B: KvBackend> {
    store: DurableStore<B>,
    tasks: Vec<Task>,
    sections: SectionRegistry,
}

impl<B: KvBackend> TaskStore<B> {
    /// Loads persisted state, seeding the section registry on first run.
    ///
    /// Malformed or missing payloads degrade to the defaults; opening never
    /// fails.
    pub fn open(backend: B) -> Self {
        let store = DurableStore::new(backend);
        let tasks: Vec<Task> = store.read(TASKS_KEY, Vec::new());
        let sections: SectionRegistry = store.read(SECTIONS_KEY, SectionRegistry::seeded());
        info!(
            "event=task_store_open module=service status=ok tasks={} sections_personal={} sections_work={}",
            tasks.len(),
            sections.personal.len(),
            sections.work.len()
        );
        Self {
            store,
            tasks,
            sections,
        }
    }

    /// Current task collection, insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// User-defined section names of one division (excludes `General`).
    pub fn sections(&self, division: Division) -> &[String] {
        self.sections.names(division)
    }

    /// Full section registry snapshot.
    pub fn registry(&self) -> &SectionRegistry {
        &self.sections
    }

    /// Creates a task from a draft and persists the collection.
    ///
    /// Generates `id` and `created_at`; the effective status is always
    /// `Pending` regardless of any status carried by the draft. A blank
    /// section resolves to `General`; a section name unknown to the draft's
    /// division is rejected.
    ///
    /// # Errors
    /// - `ValidationError::EmptyTitle` for a blank title.
    /// - `ValidationError::UnknownSection` for an unregistered section.
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<Task, ValidationError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let section = if draft.section.trim().is_empty() {
            GENERAL_SECTION.to_string()
        } else {
            draft.section
        };
        if !self.sections.contains(draft.division, &section) {
            return Err(ValidationError::UnknownSection {
                division: draft.division,
                section,
            });
        }

        let task = Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: draft.description,
            division: draft.division,
            section,
            due_date: draft.due_date,
            priority: draft.priority,
            status: TaskStatus::Pending,
            assignees: draft.assignees,
            created_at: chrono::Utc::now(),
            original_date: None,
        };

        debug!(
            "event=task_add module=service status=ok task_id={} division={}",
            task.id, task.division
        );
        self.tasks.push(task.clone());
        self.persist_tasks();
        Ok(task)
    }

    /// Merges `patch` into the task matching `id` and persists.
    ///
    /// Silent no-op when `id` is unknown. `id` and `created_at` are never
    /// rewritten. A blank patched title is ignored rather than applied, and a
    /// patched section that does not resolve in the task's (possibly also
    /// patched) division falls back to `General` so the section invariant
    /// holds.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) {
        let registry = &self.sections;
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_update module=service status=noop task_id={id} reason=not_found");
            return;
        };

        if let Some(title) = patch.title {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                debug!(
                    "event=task_update module=service status=skip_field task_id={id} field=title reason=empty"
                );
            } else {
                task.title = trimmed.to_string();
            }
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(division) = patch.division {
            task.division = division;
        }
        if let Some(section) = patch.section {
            task.section = section;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        if let Some(assignees) = patch.assignees {
            task.assignees = assignees;
        }

        if !registry.contains(task.division, &task.section) {
            debug!(
                "event=task_update module=service status=section_fallback task_id={id} section={}",
                task.section
            );
            task.section = GENERAL_SECTION.to_string();
        }

        self.persist_tasks();
    }

    /// Hard-deletes the task matching `id`. Silent no-op when unknown.
    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_delete module=service status=noop task_id={id} reason=not_found");
            return;
        }
        self.persist_tasks();
    }

    /// Appends a section name to a division and persists the registry.
    ///
    /// Duplicates are permitted (a display concern, not a correctness one).
    /// Blank names and the reserved `General` name are ignored.
    pub fn add_section(&mut self, division: Division, name: impl Into<String>) {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed == GENERAL_SECTION {
            debug!(
                "event=section_add module=service status=noop division={division} reason=reserved_or_blank"
            );
            return;
        }
        self.sections.add(division, trimmed);
        self.persist_sections();
    }

    /// Removes a section and reassigns its tasks to `General`.
    ///
    /// Registry removal and task reassignment are applied together and
    /// persisted as one step, so no reader ever observes a task pointing at a
    /// deleted section. Deleting `General` is a guarded no-op.
    pub fn delete_section(&mut self, division: Division, name: &str) {
        if name == GENERAL_SECTION {
            warn!(
                "event=section_delete module=service status=noop division={division} reason=general_is_reserved"
            );
            return;
        }

        let removed = self.sections.remove(division, name);
        let mut reassigned = 0usize;
        for task in &mut self.tasks {
            if task.division == division && task.section == name {
                task.section = GENERAL_SECTION.to_string();
                reassigned += 1;
            }
        }

        if !removed && reassigned == 0 {
            debug!(
                "event=section_delete module=service status=noop division={division} reason=not_found"
            );
            return;
        }

        info!(
            "event=section_delete module=service status=ok division={division} reassigned={reassigned}"
        );
        self.persist_tasks();
        self.persist_sections();
    }

    /// Reschedules a task to tomorrow (local time).
    ///
    /// Captures `original_date` from the current due date only when not
    /// already set, then forces the status back to `Pending` unless the task
    /// is `Completed`. Silent no-op when `id` is unknown.
    pub fn move_task_to_tomorrow(&mut self, id: TaskId) {
        self.move_task_to_tomorrow_on(id, local_today());
    }

    /// Deterministic variant of [`Self::move_task_to_tomorrow`] with an
    /// explicit "today".
    pub fn move_task_to_tomorrow_on(&mut self, id: TaskId, today: NaiveDate) {
        let Some(tomorrow) = today.checked_add_days(Days::new(1)) else {
            warn!("event=task_move module=service status=noop task_id={id} reason=date_overflow");
            return;
        };
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_move module=service status=noop task_id={id} reason=not_found");
            return;
        };

        if task.original_date.is_none() {
            task.original_date = task.due_date;
        }
        task.due_date = Some(tomorrow);
        if task.status != TaskStatus::Completed {
            // Deliberate policy: rescheduling re-surfaces an in-progress task.
            task.status = TaskStatus::Pending;
        }

        self.persist_tasks();
    }

    /// Reschedules a task to today (local time). Status and `original_date`
    /// are left untouched. Silent no-op when `id` is unknown.
    pub fn move_task_to_today(&mut self, id: TaskId) {
        self.move_task_to_today_on(id, local_today());
    }

    /// Deterministic variant of [`Self::move_task_to_today`] with an explicit
    /// "today".
    pub fn move_task_to_today_on(&mut self, id: TaskId, today: NaiveDate) {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_move module=service status=noop task_id={id} reason=not_found");
            return;
        };

        task.due_date = Some(today);
        self.persist_tasks();
    }

    fn persist_tasks(&self) {
        self.store.write(TASKS_KEY, &self.tasks);
    }

    fn persist_sections(&self) {
        self.store.write(SECTIONS_KEY, &self.sections);
    }
}

/// Today as a plain calendar date in the machine's local timezone.
fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
