//! Core domain logic for Weekboard, a local-first personal/work task board.
//! This crate is the single source of truth for task, section and people
//! invariants; presentation layers consume it and never mutate state
//! directly.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod views;

pub use logging::{default_log_level, init_logging};
pub use model::person::{Person, PersonId, DEFAULT_ROLE};
pub use model::section::{SectionRegistry, GENERAL_SECTION};
pub use model::task::{Division, Priority, Task, TaskDraft, TaskId, TaskPatch, TaskStatus};
pub use model::ValidationError;
pub use service::people::{PeopleRegistry, PEOPLE_KEY};
pub use service::task_store::{TaskStore, SECTIONS_KEY, TASKS_KEY};
pub use store::{open_kv, open_kv_in_memory, DurableStore, KvBackend, MemoryKv, SqliteKv};
pub use store::{StoreError, StoreResult};
pub use views::board::{filter_board, group_by_section, SectionColumn};
pub use views::weekly::{global_completion_rate, week_start_for, weekly_aggregate, DayTally};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
