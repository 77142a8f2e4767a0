use part_core::{
    AreaDraft, CustomField, CustomFieldKind, MemoryStorage, Organizer, ProjectDraft, ProjectPatch,
    ReferenceDraft, TaskGroupDraft, TaskGroupPatch,
};

fn open_empty() -> Organizer<MemoryStorage> {
    Organizer::open(MemoryStorage::new())
}

#[test]
fn tags_deduplicate_preserving_first_occurrence_order() {
    let mut organizer = open_empty();
    let project = organizer.add_project(ProjectDraft {
        title: "Tagged".to_string(),
        tags: vec![
            "deep".to_string(),
            "urgent".to_string(),
            "deep".to_string(),
            "home".to_string(),
            "urgent".to_string(),
        ],
        ..ProjectDraft::default()
    });
    assert_eq!(project.tags, ["deep", "urgent", "home"]);
}

#[test]
fn goal_lists_deduplicate_like_tags() {
    let mut organizer = open_empty();
    let area = organizer.add_area(AreaDraft {
        title: "Fitness".to_string(),
        goals: vec![
            "run 5k".to_string(),
            "stretch daily".to_string(),
            "run 5k".to_string(),
        ],
        ..AreaDraft::default()
    });
    assert_eq!(area.goals, ["run 5k", "stretch daily"]);
}

#[test]
fn patched_tag_lists_are_deduplicated_too() {
    let mut organizer = open_empty();
    let project = organizer.add_project(ProjectDraft {
        title: "Tagged".to_string(),
        ..ProjectDraft::default()
    });

    organizer.update_project(
        project.id,
        ProjectPatch {
            tags: Some(vec!["a".to_string(), "a".to_string(), "b".to_string()]),
            ..ProjectPatch::default()
        },
    );

    assert_eq!(organizer.projects()[0].tags, ["a", "b"]);
}

#[test]
fn task_group_mutation_does_not_restamp() {
    let storage = MemoryStorage::new();
    let mut organizer = Organizer::open(storage.clone());
    let group = organizer.add_task_group(TaskGroupDraft {
        name: "Inbox".to_string(),
        color: "#888888".to_string(),
    });

    organizer.update_task_group(
        group.id,
        TaskGroupPatch {
            name: Some("Triage".to_string()),
            ..TaskGroupPatch::default()
        },
    );

    let updated = &organizer.task_groups()[0];
    assert_eq!(updated.name, "Triage");
    assert_eq!(updated.created_at, group.created_at);

    // The persisted record carries no mutation timestamp at all.
    let payload = storage.payload("task-groups").unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    let record = &value.as_array().unwrap()[0];
    assert!(record.get("updatedAt").is_none());
    assert!(record.get("createdAt").is_some());
}

#[test]
fn custom_field_value_stays_text_whatever_the_declared_kind() {
    let storage = MemoryStorage::new();
    let mut organizer = Organizer::open(storage.clone());
    organizer.add_reference(ReferenceDraft {
        title: "Field guide".to_string(),
        custom_fields: vec![CustomField::new(
            "Pages",
            "not-a-number",
            CustomFieldKind::Number,
        )],
        ..ReferenceDraft::default()
    });

    let reopened = Organizer::open(storage);
    let field = &reopened.references()[0].custom_fields[0];
    assert_eq!(field.value, "not-a-number");
    assert_eq!(field.kind, CustomFieldKind::Number);
}

#[test]
fn select_options_round_trip_with_their_parent() {
    let storage = MemoryStorage::new();
    let mut organizer = Organizer::open(storage.clone());
    let mut field = CustomField::new("Shelf", "A", CustomFieldKind::Select);
    field.options = Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]);
    organizer.add_reference(ReferenceDraft {
        title: "Catalogued".to_string(),
        custom_fields: vec![field.clone()],
        ..ReferenceDraft::default()
    });

    let reopened = Organizer::open(storage);
    assert_eq!(reopened.references()[0].custom_fields, [field]);
}

#[test]
fn archiving_hides_nothing_from_the_store_itself() {
    let mut organizer = open_empty();
    let project = organizer.add_project(ProjectDraft {
        title: "Old glory".to_string(),
        ..ProjectDraft::default()
    });

    organizer.update_project(
        project.id,
        ProjectPatch {
            archived: Some(true),
            ..ProjectPatch::default()
        },
    );

    // Archival is a visibility flag for the presentation layer; the record
    // stays in the collection snapshot.
    assert_eq!(organizer.projects().len(), 1);
    assert!(organizer.projects()[0].archived);
}
