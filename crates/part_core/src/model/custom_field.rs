//! User-defined field attached to any top-level entity.

use serde::{Deserialize, Serialize};

use crate::model::EntityId;

/// Declared rendering kind for a custom field.
///
/// Advisory only: the form layer picks an input widget from it, but
/// `CustomField::value` is stored as text and never validated against the
/// declared kind. Preserved as-is from the source design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomFieldKind {
    Text,
    Number,
    Date,
    Select,
}

/// Caller-constructed extra field carried inside its parent record.
///
/// Custom fields travel with the parent through add/patch; they have no
/// collection of their own and the store assigns them no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub id: EntityId,
    pub label: String,
    /// Always text, even when `kind` is `Number` or `Date`.
    pub value: String,
    #[serde(rename = "type")]
    pub kind: CustomFieldKind,
    /// Choices offered when `kind` is `Select`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl CustomField {
    /// Creates a field with a fresh id and no select options.
    pub fn new(label: impl Into<String>, value: impl Into<String>, kind: CustomFieldKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            label: label.into(),
            value: value.into(),
            kind,
            options: None,
        }
    }
}
