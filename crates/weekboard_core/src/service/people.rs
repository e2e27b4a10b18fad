//! People registry.
//!
//! # Responsibility
//! - Hold the team-member list and persist it after every mutation.
//!
//! # Invariants
//! - Insertion order is preserved; names are not unique.
//! - A blank role defaults to the `Operario` placeholder.

use log::debug;
use uuid::Uuid;

use crate::model::person::{Person, PersonId, DEFAULT_ROLE};
use crate::model::ValidationError;
use crate::store::adapter::DurableStore;
use crate::store::kv::KvBackend;

/// Storage key for the people collection.
pub const PEOPLE_KEY: &str = "people";

/// Owned people state with write-through persistence.
pub struct PeopleRegistry<B: KvBackend> {
    store: DurableStore<B>,
    people: Vec<Person>,
}

impl<B: KvBackend> PeopleRegistry<B> {
    /// Loads persisted people; missing or malformed payloads yield an empty
    /// list. Opening never fails.
    pub fn open(backend: B) -> Self {
        let store = DurableStore::new(backend);
        let people: Vec<Person> = store.read(PEOPLE_KEY, Vec::new());
        Self { store, people }
    }

    /// Current people list, insertion order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Adds a person and persists the list.
    ///
    /// A blank `role` defaults to [`DEFAULT_ROLE`].
    ///
    /// # Errors
    /// - `ValidationError::EmptyName` for a blank name.
    pub fn add_person(&mut self, name: &str, role: &str) -> Result<Person, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let role = role.trim();
        let person = Person {
            id: Uuid::new_v4(),
            name: name.to_string(),
            role: if role.is_empty() {
                DEFAULT_ROLE.to_string()
            } else {
                role.to_string()
            },
        };

        self.people.push(person.clone());
        self.store.write(PEOPLE_KEY, &self.people);
        Ok(person)
    }

    /// Removes the person matching `id`. Silent no-op when unknown.
    pub fn remove_person(&mut self, id: PersonId) {
        let before = self.people.len();
        self.people.retain(|person| person.id != id);
        if self.people.len() == before {
            debug!("event=person_remove module=service status=noop person_id={id} reason=not_found");
            return;
        }
        self.store.write(PEOPLE_KEY, &self.people);
    }
}
