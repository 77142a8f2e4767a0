//! Entity store layer: in-memory collections mirrored to storage.
//!
//! # Responsibility
//! - Define the `Entity` contract every stored kind implements.
//! - Own CRUD, id assignment and timestamping for one collection per kind.
//!
//! # Invariants
//! - The in-memory collection is authoritative; storage is a mirror updated
//!   synchronously on every mutation.
//! - Collection order is insertion order; the store never sorts.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::EntityId;

mod entity_store;

pub use entity_store::EntityStore;

/// Record kind managed by an `EntityStore`.
///
/// Implementations decide what "partial overwrite" and "restamp" mean for
/// their shape; the store stays generic over those decisions.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Storage key of this kind's collection.
    const COLLECTION: &'static str;

    /// Caller-supplied creation fields: everything except id and timestamps,
    /// which the store assigns.
    type Draft;

    /// Partial overwrite applied by `EntityStore::update`. Absent fields are
    /// left untouched.
    type Patch;

    fn from_draft(draft: Self::Draft, id: EntityId, now: DateTime<Utc>) -> Self;

    fn id(&self) -> EntityId;

    fn apply_patch(&mut self, patch: Self::Patch);

    /// Refreshes the mutation timestamp. Kinds without one ignore the call.
    fn touch(&mut self, now: DateTime<Utc>);
}
