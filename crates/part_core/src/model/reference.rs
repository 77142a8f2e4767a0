//! Reference entity: external material worth keeping a pointer to.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::custom_field::CustomField;
use crate::model::{dedup_preserving_order, EntityId};
use crate::store::Entity;

/// Medium of the referenced material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Book,
    Video,
    Article,
    Course,
    Podcast,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ReferenceKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Unvalidated caller-side scale; any JSON number round-trips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_accessed: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub custom_fields: Vec<CustomField>,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new reference.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDraft {
    pub title: String,
    pub description: String,
    pub kind: ReferenceKind,
    pub url: String,
    pub author: Option<String>,
    pub rating: Option<f64>,
    pub date_accessed: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub custom_fields: Vec<CustomField>,
    pub archived: bool,
}

/// Partial overwrite for `EntityStore::update`.
#[derive(Debug, Clone, Default)]
pub struct ReferencePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<ReferenceKind>,
    pub url: Option<String>,
    pub author: Option<Option<String>>,
    pub rating: Option<Option<f64>>,
    pub date_accessed: Option<Option<NaiveDate>>,
    pub tags: Option<Vec<String>>,
    pub custom_fields: Option<Vec<CustomField>>,
    pub archived: Option<bool>,
}

impl Entity for Reference {
    const COLLECTION: &'static str = "references";
    type Draft = ReferenceDraft;
    type Patch = ReferencePatch;

    fn from_draft(draft: ReferenceDraft, id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            kind: draft.kind,
            url: draft.url,
            author: draft.author,
            rating: draft.rating,
            date_accessed: draft.date_accessed,
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

    fn apply_patch(&mut self, patch: ReferencePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(date_accessed) = patch.date_accessed {
            self.date_accessed = date_accessed;
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
