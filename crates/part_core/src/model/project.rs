//! Project entity: an outcome with a deadline and a status arc.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::custom_field::CustomField;
use crate::model::{dedup_preserving_order, EntityId, Priority};
use crate::store::Entity;

/// Where a project sits in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub custom_fields: Vec<CustomField>,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new project.
///
/// The store stamps `id`, `created_at` and `updated_at`; everything else is
/// taken as given. Title validation is a form concern, not a store concern.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub custom_fields: Vec<CustomField>,
    pub archived: bool,
}

/// Partial overwrite for `EntityStore::update`.
///
/// `None` leaves a field untouched; for nullable fields, `Some(None)` clears
/// the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub deadline: Option<Option<NaiveDate>>,
    pub priority: Option<Priority>,
    pub tags: Option<Vec<String>>,
    pub custom_fields: Option<Vec<CustomField>>,
    pub archived: Option<bool>,
}

impl Entity for Project {
    const COLLECTION: &'static str = "projects";
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    fn from_draft(draft: ProjectDraft, id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            deadline: draft.deadline,
            priority: draft.priority,
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

    fn apply_patch(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
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
