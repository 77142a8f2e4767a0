//! Domain model for the organizer's five entity kinds.
//!
//! # Responsibility
//! - Define the canonical record shapes for Projects, Areas, References,
//!   Tasks and Task Groups, plus the draft/patch types used by the store.
//! - Keep the serialized layout byte-compatible with the persisted JSON
//!   collections (camelCase keys, ISO-8601 dates).
//!
//! # Invariants
//! - Every record is identified by a stable `EntityId`.
//! - Tag and goal lists never hold duplicates and keep insertion order.
//! - `CustomField::value` is stored as text regardless of its declared kind.

use uuid::Uuid;

pub mod area;
pub mod custom_field;
pub mod project;
pub mod reference;
pub mod task;
pub mod task_group;

/// Stable identifier for every stored record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = Uuid;

/// Shared priority scale for projects and tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Drops repeated values, keeping the first occurrence of each.
///
/// Tag and goal lists are sets in behavior but lists in storage; insertion
/// order is meaningful to the presentation layer and must survive.
pub(crate) fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
