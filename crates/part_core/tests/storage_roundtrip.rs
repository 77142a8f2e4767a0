use chrono::NaiveDate;
use part_core::{
    JsonFileStorage, MemoryStorage, Organizer, ProjectDraft, ProjectStatus, ReferenceDraft,
    TaskDraft,
};

#[test]
fn file_roundtrip_preserves_content_order_and_date_types() {
    let dir = tempfile::tempdir().unwrap();

    let (projects, tasks) = {
        let storage = JsonFileStorage::open(dir.path()).unwrap();
        let mut organizer = Organizer::open(storage);
        organizer.add_project(ProjectDraft {
            title: "Alpha".to_string(),
            status: ProjectStatus::OnHold,
            deadline: NaiveDate::from_ymd_opt(2026, 12, 24),
            ..ProjectDraft::default()
        });
        organizer.add_project(ProjectDraft {
            title: "Beta".to_string(),
            ..ProjectDraft::default()
        });
        organizer.add_task(TaskDraft {
            title: "ship it".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 12, 1),
            ..TaskDraft::default()
        });
        (organizer.projects().to_vec(), organizer.tasks().to_vec())
    };

    let reopened = Organizer::open(JsonFileStorage::open(dir.path()).unwrap());
    assert_eq!(reopened.projects(), projects.as_slice());
    assert_eq!(reopened.tasks(), tasks.as_slice());
    // Dates come back as date values, not strings.
    assert_eq!(
        reopened.projects()[0].deadline,
        NaiveDate::from_ymd_opt(2026, 12, 24)
    );
}

#[test]
fn missing_files_load_as_empty_collections() {
    let dir = tempfile::tempdir().unwrap();
    let organizer = Organizer::open(JsonFileStorage::open(dir.path()).unwrap());

    assert!(organizer.projects().is_empty());
    assert!(organizer.areas().is_empty());
    assert!(organizer.references().is_empty());
    assert!(organizer.tasks().is_empty());
    assert!(organizer.task_groups().is_empty());
}

#[test]
fn corrupt_payload_loads_as_empty_and_is_overwritten_on_next_save() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("projects.json"), "{ this is not json").unwrap();

    let mut organizer = Organizer::open(JsonFileStorage::open(dir.path()).unwrap());
    assert!(organizer.projects().is_empty());

    organizer.add_project(ProjectDraft {
        title: "Fresh start".to_string(),
        ..ProjectDraft::default()
    });

    let reopened = Organizer::open(JsonFileStorage::open(dir.path()).unwrap());
    assert_eq!(reopened.projects().len(), 1);
    assert_eq!(reopened.projects()[0].title, "Fresh start");
}

#[test]
fn failed_write_is_absorbed_and_memory_state_stays_authoritative() {
    let dir = tempfile::tempdir().unwrap();
    // A directory squatting on the collection's file path makes every write
    // to `projects.json` fail.
    std::fs::create_dir(dir.path().join("projects.json")).unwrap();

    let mut organizer = Organizer::open(JsonFileStorage::open(dir.path()).unwrap());
    let project = organizer.add_project(ProjectDraft {
        title: "Unpersistable".to_string(),
        ..ProjectDraft::default()
    });

    // The caller sees a successful mutation despite the failed save.
    assert_eq!(organizer.projects(), &[project]);
}

#[test]
fn payload_uses_the_original_camel_case_layout_with_iso_dates() {
    let storage = MemoryStorage::new();
    let mut organizer = Organizer::open(storage.clone());
    organizer.add_project(ProjectDraft {
        title: "Layout check".to_string(),
        status: ProjectStatus::OnHold,
        deadline: NaiveDate::from_ymd_opt(2026, 3, 1),
        ..ProjectDraft::default()
    });

    let payload = storage.payload("projects").unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    let record = &value.as_array().unwrap()[0];

    assert_eq!(record["status"], "on-hold");
    assert_eq!(record["deadline"], "2026-03-01");
    assert!(record["createdAt"].as_str().unwrap().contains('T'));
    assert!(record.get("customFields").is_some());
    assert!(record.get("custom_fields").is_none());
}

#[test]
fn task_payload_keeps_null_project_id_and_omits_absent_optionals() {
    let storage = MemoryStorage::new();
    let mut organizer = Organizer::open(storage.clone());
    organizer.add_task(TaskDraft {
        title: "standalone".to_string(),
        ..TaskDraft::default()
    });

    let payload = storage.payload("tasks").unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    let record = &value.as_array().unwrap()[0];

    // projectId is a required nullable field; groupId and dueDate are
    // omitted entirely when unset, as the source app's JSON was.
    assert!(record["projectId"].is_null());
    assert!(record.get("groupId").is_none());
    assert!(record.get("dueDate").is_none());
}

#[test]
fn collections_live_under_one_key_each() {
    let storage = MemoryStorage::new();
    let mut organizer = Organizer::open(storage.clone());
    organizer.add_reference(ReferenceDraft {
        title: "Some talk".to_string(),
        ..ReferenceDraft::default()
    });

    assert!(storage.payload("references").is_some());
    assert!(storage.payload("projects").is_none());
    assert!(storage.payload("tasks").is_none());
}
