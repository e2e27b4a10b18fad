//! Section registry per division.
//!
//! # Responsibility
//! - Hold the ordered, user-defined section names for each division.
//! - Define the implicit `General` sentinel section.
//!
//! # Invariants
//! - `General` is never stored in the registry and never deletable.
//! - Order is display order; insertion order is preserved.
//! - The registry itself does not deduplicate names (a UI concern).

use serde::{Deserialize, Serialize};

use super::task::Division;

/// Implicit section available in every division.
pub const GENERAL_SECTION: &str = "General";

/// Serde default for a task's `section` field.
pub(crate) fn general_section_name() -> String {
    GENERAL_SECTION.to_string()
}

/// Ordered section names per division, persisted under the `subsections` key
/// as `{ "personal": [...], "work": [...] }`.
///
/// `Default` is the empty registry; first-run seeding goes through
/// [`SectionRegistry::seeded`] so a stored payload with a missing division
/// list stays empty instead of silently regaining the seeds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionRegistry {
    #[serde(default)]
    pub personal: Vec<String>,
    #[serde(default)]
    pub work: Vec<String>,
}

impl SectionRegistry {
    /// First-run registry contents.
    pub fn seeded() -> Self {
        Self {
            personal: Vec::from(["Casa", "Salud", "Finanzas", "Personal"].map(String::from)),
            work: Vec::from(["Proyectos", "Reuniones", "Tareas", "Seguimiento"].map(String::from)),
        }
    }

    /// Section names of one division, display order.
    pub fn names(&self, division: Division) -> &[String] {
        match division {
            Division::Personal => &self.personal,
            Division::Work => &self.work,
        }
    }

    fn names_mut(&mut self, division: Division) -> &mut Vec<String> {
        match division {
            Division::Personal => &mut self.personal,
            Division::Work => &mut self.work,
        }
    }

    /// Whether `name` resolves within `division`. `General` always does.
    pub fn contains(&self, division: Division, name: &str) -> bool {
        name == GENERAL_SECTION || self.names(division).iter().any(|entry| entry == name)
    }

    /// Appends `name` to the division's list. No deduplication.
    pub fn add(&mut self, division: Division, name: impl Into<String>) {
        self.names_mut(division).push(name.into());
    }

    /// Removes every occurrence of `name` from the division's list.
    ///
    /// Returns whether anything was removed. Callers own the task
    /// reassignment that must accompany a removal.
    pub fn remove(&mut self, division: Division, name: &str) -> bool {
        let list = self.names_mut(division);
        let before = list.len();
        list.retain(|entry| entry != name);
        list.len() != before
    }
}
