//! Person record for the people registry.
//!
//! People are referenced from tasks only through the free-text `assignees`
//! field; there is no foreign key and no referential integrity to uphold.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a person.
pub type PersonId = Uuid;

/// Role assigned when the caller leaves it blank.
pub const DEFAULT_ROLE: &str = "Operario";

/// Team member entry. Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}
