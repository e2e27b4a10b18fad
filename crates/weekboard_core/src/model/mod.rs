//! Domain model for the task board.
//!
//! # Responsibility
//! - Define the canonical task/section/person records persisted by the store.
//! - Keep field semantics (defaults, serialized names) in one place.
//!
//! # Invariants
//! - Every record is identified by a stable `Uuid` generated at creation.
//! - A task's `section` is either the `General` sentinel or a registered
//!   section name of its division.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod person;
pub mod section;
pub mod task;

/// Input rejected before it reaches the store.
///
/// Surfaced synchronously so the caller can re-prompt; never logged as a
/// store failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Task title was empty or whitespace-only.
    EmptyTitle,
    /// Person name was empty or whitespace-only.
    EmptyName,
    /// Section name is neither `General` nor registered for the division.
    UnknownSection {
        division: task::Division,
        section: String,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::EmptyName => write!(f, "person name cannot be empty"),
            Self::UnknownSection { division, section } => write!(
                f,
                "section `{section}` is not registered for division `{division}`"
            ),
        }
    }
}

impl Error for ValidationError {}
