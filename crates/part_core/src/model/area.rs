//! Area entity: an ongoing sphere of responsibility, never "done".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::custom_field::CustomField;
use crate::model::{dedup_preserving_order, EntityId};
use crate::store::Entity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// The hat worn in this area ("parent", "maintainer", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub status: AreaStatus,
    pub goals: Vec<String>,
    pub custom_fields: Vec<CustomField>,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new area.
#[derive(Debug, Clone, Default)]
pub struct AreaDraft {
    pub title: String,
    pub description: String,
    pub role: Option<String>,
    pub status: AreaStatus,
    pub goals: Vec<String>,
    pub custom_fields: Vec<CustomField>,
    pub archived: bool,
}

/// Partial overwrite for `EntityStore::update`.
#[derive(Debug, Clone, Default)]
pub struct AreaPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub role: Option<Option<String>>,
    pub status: Option<AreaStatus>,
    pub goals: Option<Vec<String>>,
    pub custom_fields: Option<Vec<CustomField>>,
    pub archived: Option<bool>,
}

impl Entity for Area {
    const COLLECTION: &'static str = "areas";
    type Draft = AreaDraft;
    type Patch = AreaPatch;

    fn from_draft(draft: AreaDraft, id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            role: draft.role,
            status: draft.status,
            goals: dedup_preserving_order(draft.goals),
            custom_fields: draft.custom_fields,
            archived: draft.archived,
            created_at: now,
            updated_at: now,
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn apply_patch(&mut self, patch: AreaPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(goals) = patch.goals {
            self.goals = dedup_preserving_order(goals);
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
