use uuid::Uuid;
use weekboard_core::{
    open_kv_in_memory, PeopleRegistry, SqliteKv, ValidationError, DEFAULT_ROLE,
};

#[test]
fn add_person_defaults_blank_role_to_placeholder() {
    let conn = open_kv_in_memory().expect("store should open");
    let mut registry = PeopleRegistry::open(SqliteKv::new(&conn));

    let person = registry
        .add_person("María", "  ")
        .expect("add should succeed");
    assert_eq!(person.role, DEFAULT_ROLE);

    let supervisor = registry
        .add_person("Jorge", "Supervisor")
        .expect("add should succeed");
    assert_eq!(supervisor.role, "Supervisor");
}

#[test]
fn add_person_rejects_blank_name() {
    let conn = open_kv_in_memory().expect("store should open");
    let mut registry = PeopleRegistry::open(SqliteKv::new(&conn));

    let err = registry
        .add_person("   ", "Operario")
        .expect_err("blank name must be rejected");
    assert_eq!(err, ValidationError::EmptyName);
    assert!(registry.people().is_empty());
}

#[test]
fn names_are_not_unique_and_order_is_preserved() {
    let conn = open_kv_in_memory().expect("store should open");
    let mut registry = PeopleRegistry::open(SqliteKv::new(&conn));

    registry.add_person("Ana", "").expect("add should succeed");
    registry.add_person("Ana", "").expect("add should succeed");
    registry.add_person("Luis", "").expect("add should succeed");

    let names: Vec<&str> = registry
        .people()
        .iter()
        .map(|person| person.name.as_str())
        .collect();
    assert_eq!(names, ["Ana", "Ana", "Luis"]);
}

#[test]
fn remove_person_is_a_silent_noop_for_unknown_ids() {
    let conn = open_kv_in_memory().expect("store should open");
    let mut registry = PeopleRegistry::open(SqliteKv::new(&conn));

    let person = registry
        .add_person("Carla", "")
        .expect("add should succeed");

    registry.remove_person(Uuid::new_v4());
    assert_eq!(registry.people().len(), 1);

    registry.remove_person(person.id);
    assert!(registry.people().is_empty());
}

#[test]
fn people_survive_a_registry_reload() {
    let conn = open_kv_in_memory().expect("store should open");

    let person = {
        let mut registry = PeopleRegistry::open(SqliteKv::new(&conn));
        registry
            .add_person("Pedro", "Encargado")
            .expect("add should succeed")
    };

    let reloaded = PeopleRegistry::open(SqliteKv::new(&conn));
    assert_eq!(reloaded.people(), std::slice::from_ref(&person));
}
