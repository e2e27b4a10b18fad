use chrono::NaiveDate;
use uuid::Uuid;
use weekboard_core::{
    open_kv_in_memory, Division, Priority, SqliteKv, TaskDraft, TaskPatch, TaskStatus, TaskStore,
    ValidationError, GENERAL_SECTION,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn add_task_forces_pending_regardless_of_supplied_status() {
    let conn = open_kv_in_memory().expect("store should open");
    let mut store = TaskStore::open(SqliteKv::new(&conn));

    let draft = TaskDraft {
        title: "Llamar al banco".to_string(),
        division: Division::Personal,
        section: "Finanzas".to_string(),
        status: Some(TaskStatus::Completed),
        ..TaskDraft::default()
    };
    let task = store.add_task(draft).expect("add should succeed");

    assert_eq!(task.status, TaskStatus::Pending);
    assert!(task.original_date.is_none());
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].id, task.id);
}

#[test]
fn add_task_rejects_blank_title() {
    let conn = open_kv_in_memory().expect("store should open");
    let mut store = TaskStore::open(SqliteKv::new(&conn));

    let err = store
        .add_task(TaskDraft::titled("   "))
        .expect_err("blank title must be rejected");
    assert_eq!(err, ValidationError::EmptyTitle);
    assert!(store.tasks().is_empty());
}

#[test]
fn add_task_rejects_unknown_section_and_defaults_blank_to_general() {
    let conn = open_kv_in_memory().expect("store should open");
    let mut store = TaskStore::open(SqliteKv::new(&conn));

    let err = store
        .add_task(TaskDraft {
            title: "Revisar contrato".to_string(),
            division: Division::Work,
            section: "Inventada".to_string(),
            ..TaskDraft::default()
        })
        .expect_err("unknown section must be rejected");
    assert!(matches!(err, ValidationError::UnknownSection { .. }));

    let task = store
        .add_task(TaskDraft::titled("Sin sección"))
        .expect("blank section should resolve to General");
    assert_eq!(task.section, GENERAL_SECTION);
}

#[test]
fn update_task_merges_only_supplied_fields() {
    let conn = open_kv_in_memory().expect("store should open");
    let mut store = TaskStore::open(SqliteKv::new(&conn));

    let task = store
        .add_task(TaskDraft {
            title: "Comprar pintura".to_string(),
            description: "blanca, 4L".to_string(),
            division: Division::Personal,
            section: "Casa".to_string(),
            due_date: Some(date(2024, 6, 10)),
            ..TaskDraft::default()
        })
        .expect("add should succeed");

    store.update_task(
        task.id,
        TaskPatch {
            status: Some(TaskStatus::InProgress),
            priority: Some(Priority::High),
            ..TaskPatch::default()
        },
    );

    let updated = &store.tasks()[0];
    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(updated.priority, Priority::High);
    // Untouched fields survive the merge.
    assert_eq!(updated.title, "Comprar pintura");
    assert_eq!(updated.description, "blanca, 4L");
    assert_eq!(updated.due_date, Some(date(2024, 6, 10)));
    assert_eq!(updated.id, task.id);
    assert_eq!(updated.created_at, task.created_at);
}

#[test]
fn update_task_ignores_blank_title_patch() {
    let conn = open_kv_in_memory().expect("store should open");
    let mut store = TaskStore::open(SqliteKv::new(&conn));

    let task = store
        .add_task(TaskDraft::titled("Regar plantas"))
        .expect("add should succeed");

    store.update_task(
        task.id,
        TaskPatch {
            title: Some("  ".to_string()),
            ..TaskPatch::default()
        },
    );
    assert_eq!(store.tasks()[0].title, "Regar plantas");
}

#[test]
fn update_and_delete_unknown_id_are_silent_noops() {
    let conn = open_kv_in_memory().expect("store should open");
    let mut store = TaskStore::open(SqliteKv::new(&conn));

    store
        .add_task(TaskDraft::titled("Única"))
        .expect("add should succeed");

    let ghost = Uuid::new_v4();
    store.update_task(
        ghost,
        TaskPatch {
            title: Some("renombrada".to_string()),
            ..TaskPatch::default()
        },
    );
    store.delete_task(ghost);

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].title, "Única");
}

#[test]
fn delete_task_removes_only_the_matching_task() {
    let conn = open_kv_in_memory().expect("store should open");
    let mut store = TaskStore::open(SqliteKv::new(&conn));

    let first = store
        .add_task(TaskDraft::titled("primera"))
        .expect("add should succeed");
    let second = store
        .add_task(TaskDraft::titled("segunda"))
        .expect("add should succeed");

    store.delete_task(first.id);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].id, second.id);
}

#[test]
fn reopening_the_store_reloads_persisted_tasks() {
    let conn = open_kv_in_memory().expect("store should open");

    let task = {
        let mut store = TaskStore::open(SqliteKv::new(&conn));
        store
            .add_task(TaskDraft {
                title: "Persistida".to_string(),
                division: Division::Work,
                section: "Proyectos".to_string(),
                due_date: Some(date(2024, 6, 11)),
                ..TaskDraft::default()
            })
            .expect("add should succeed")
    };

    let reloaded = TaskStore::open(SqliteKv::new(&conn));
    assert_eq!(reloaded.tasks(), std::slice::from_ref(&task));
}
