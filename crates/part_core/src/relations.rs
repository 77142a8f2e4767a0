//! Referential integrity rules for weak references.
//!
//! # Responsibility
//! - Keep id-valued weak references valid after their referent is deleted,
//!   by nulling them out (cascade-to-null, never cascade-delete).
//!
//! # Invariants
//! - A detach pass visits every matching record before the deletion that
//!   triggered it is considered complete.
//! - Detached records are restamped exactly as a normal update would be.
//! - Every weak-reference relation goes through `detach_weak_refs`; no
//!   relation gets bespoke cascade code.

use log::info;

use crate::model::EntityId;
use crate::storage::StorageAdapter;
use crate::store::{Entity, EntityStore};

/// Clears every weak reference to `referent` held in `store`.
///
/// `field` projects the nullable reference slot out of a record. The pass
/// runs over the whole collection and persists at most once, so callers
/// never observe a partially detached collection. Returns how many records
/// were detached.
pub fn detach_weak_refs<T, S, F>(store: &mut EntityStore<T, S>, referent: EntityId, field: F) -> usize
where
    T: Entity,
    S: StorageAdapter,
    F: Fn(&mut T) -> &mut Option<EntityId>,
{
    let detached = store.detach_all(|record| {
        let slot = field(record);
        if *slot == Some(referent) {
            *slot = None;
            true
        } else {
            false
        }
    });

    if detached > 0 {
        info!(
            "event=cascade_detach module=relations status=ok key={} referent={referent} detached={detached}",
            T::COLLECTION
        );
    }
    detached
}
