//! Task group entity: a named, colored bucket tasks can point at.
//!
//! Groups carry no `updated_at` and no `archived` flag. The asymmetry is
//! inherited from the source design: renaming or recoloring a group does not
//! restamp it. Do not copy this shape for new kinds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::EntityId;
use crate::store::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGroup {
    pub id: EntityId,
    pub name: String,
    /// Display hint for the presentation layer, stored verbatim.
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new task group.
#[derive(Debug, Clone, Default)]
pub struct TaskGroupDraft {
    pub name: String,
    pub color: String,
}

/// Partial overwrite for `EntityStore::update`.
#[derive(Debug, Clone, Default)]
pub struct TaskGroupPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl Entity for TaskGroup {
    const COLLECTION: &'static str = "task-groups";
    type Draft = TaskGroupDraft;
    type Patch = TaskGroupPatch;

    fn from_draft(draft: TaskGroupDraft, id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            created_at: now,
        }
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn apply_patch(&mut self, patch: TaskGroupPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }

    // No mutation timestamp on this kind.
    fn touch(&mut self, _now: DateTime<Utc>) {}
}
