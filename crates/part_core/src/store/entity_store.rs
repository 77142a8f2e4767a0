//! Generic store for one entity collection.
//!
//! # Responsibility
//! - Apply add/update/remove against the in-memory collection and mirror
//!   every change to the adapter before returning.
//! - Keep not-found mutations silent no-ops instead of errors.
//!
//! # Invariants
//! - Ids are assigned here, never by callers, and are unique per collection.
//! - A new record's `created_at` equals its `updated_at`.
//! - Observers reading `list()` after a mutation returns see state that was
//!   already handed to the adapter (modulo absorbed adapter failures).

use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use super::Entity;
use crate::model::EntityId;
use crate::storage::{self, StorageAdapter};

/// Authoritative in-memory collection of one entity kind.
pub struct EntityStore<T: Entity, S: StorageAdapter> {
    adapter: S,
    records: Vec<T>,
}

impl<T: Entity, S: StorageAdapter> EntityStore<T, S> {
    /// Loads the persisted collection through the adapter.
    ///
    /// Missing or corrupt payloads load as empty per the adapter contract,
    /// so opening never fails.
    pub fn open(adapter: S) -> Self {
        let records: Vec<T> = storage::load_collection(&adapter, T::COLLECTION);
        info!(
            "event=store_open module=store status=ok key={} records={}",
            T::COLLECTION,
            records.len()
        );
        Self { adapter, records }
    }

    /// Creates a record from caller-supplied fields.
    ///
    /// Assigns a fresh id, stamps `created_at = updated_at = now`, appends to
    /// the end of the collection and persists. The input is accepted as
    /// given; field validation belongs to the form layer.
    pub fn add(&mut self, draft: T::Draft) -> T {
        let record = T::from_draft(draft, Uuid::new_v4(), Utc::now());
        self.records.push(record.clone());
        self.persist();
        debug!(
            "event=store_add module=store status=ok key={} id={}",
            T::COLLECTION,
            record.id()
        );
        record
    }

    /// Shallow-merges `patch` into the record with `id` and restamps it.
    ///
    /// An unknown id is a silent no-op, not an error.
    pub fn update(&mut self, id: EntityId, patch: T::Patch) {
        let Some(record) = self.records.iter_mut().find(|record| record.id() == id) else {
            debug!(
                "event=store_update module=store status=noop key={} id={id}",
                T::COLLECTION
            );
            return;
        };
        record.apply_patch(patch);
        record.touch(Utc::now());
        self.persist();
        debug!(
            "event=store_update module=store status=ok key={} id={id}",
            T::COLLECTION
        );
    }

    /// Excises the record with `id` and persists.
    ///
    /// An unknown id is a silent no-op; cross-entity cleanup is wired one
    /// layer up, not here.
    pub fn remove(&mut self, id: EntityId) {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.records.len() == before {
            debug!(
                "event=store_remove module=store status=noop key={} id={id}",
                T::COLLECTION
            );
            return;
        }
        self.persist();
        debug!(
            "event=store_remove module=store status=ok key={} id={id}",
            T::COLLECTION
        );
    }

    /// Current collection snapshot in insertion order.
    ///
    /// Archived records are included; visibility filtering is a presentation
    /// concern.
    pub fn list(&self) -> &[T] {
        &self.records
    }

    /// Corrective pass used by the integrity rules.
    ///
    /// Visits every record; those for which `detach` returns true are
    /// restamped as a normal `update` would be. Persists at most once, after
    /// the whole pass, so no partially corrected state is ever written.
    /// Returns the number of corrected records.
    pub(crate) fn detach_all(&mut self, mut detach: impl FnMut(&mut T) -> bool) -> usize {
        let now = Utc::now();
        let mut corrected = 0;
        for record in &mut self.records {
            if detach(record) {
                record.touch(now);
                corrected += 1;
            }
        }
        if corrected > 0 {
            self.persist();
        }
        corrected
    }

    fn persist(&self) {
        storage::save_collection(&self.adapter, T::COLLECTION, &self.records);
    }
}
