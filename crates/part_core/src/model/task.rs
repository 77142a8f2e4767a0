//! Task entity: the one kind holding weak references to other kinds.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::custom_field::CustomField;
use crate::model::{dedup_preserving_order, EntityId, Priority};
use crate::store::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Weak reference to a project. Relation only, not ownership: the id is
    /// not checked for existence at write time and the task outlives the
    /// project it names. Kept valid by the detach-on-delete rule.
    #[serde(default)]
    pub project_id: Option<EntityId>,
    /// Weak reference to a task group, same contract as `project_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<EntityId>,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Free-text effort estimate ("2h", "an afternoon").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    pub tags: Vec<String>,
    pub custom_fields: Vec<CustomField>,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new task.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub project_id: Option<EntityId>,
    pub group_id: Option<EntityId>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub estimated_time: Option<String>,
    pub tags: Vec<String>,
    pub custom_fields: Vec<CustomField>,
    pub archived: bool,
}

/// Partial overwrite for `EntityStore::update`.
///
/// `Some(None)` on `project_id`/`group_id` detaches the task; this is the
/// same write the integrity rules issue when a referent is deleted.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub project_id: Option<Option<EntityId>>,
    pub group_id: Option<Option<EntityId>>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub estimated_time: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub custom_fields: Option<Vec<CustomField>>,
    pub archived: Option<bool>,
}

impl Entity for Task {
    const COLLECTION: &'static str = "tasks";
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    fn from_draft(draft: TaskDraft, id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
            project_id: draft.project_id,
            group_id: draft.group_id,
            priority: draft.priority,
            due_date: draft.due_date,
            estimated_time: draft.estimated_time,
            tags: dedup_preserving_order(draft.tags),
            custom_fields: draft.custom_fields,
            archived: draft.archived,
            created_at: now,
            updated_at: now,
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(project_id) = patch.project_id {
            self.project_id = project_id;
        }
        if let Some(group_id) = patch.group_id {
            self.group_id = group_id;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(estimated_time) = patch.estimated_time {
            self.estimated_time = estimated_time;
        }
        if let Some(tags) = patch.tags {
            self.tags = dedup_preserving_order(tags);
        }
        if let Some(custom_fields) = patch.custom_fields {
            self.custom_fields = custom_fields;
        }
        if let Some(archived) = patch.archived {
            self.archived = archived;
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
