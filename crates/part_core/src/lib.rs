//! Core entity store for the PART organizer (Projects, Areas, References,
//! Tasks). This crate is the single source of truth for persistence and
//! referential-integrity invariants; presentation layers call in and render
//! whatever comes back.

pub mod logging;
pub mod model;
pub mod organizer;
pub mod relations;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::area::{Area, AreaDraft, AreaPatch, AreaStatus};
pub use model::custom_field::{CustomField, CustomFieldKind};
pub use model::project::{Project, ProjectDraft, ProjectPatch, ProjectStatus};
pub use model::reference::{Reference, ReferenceDraft, ReferenceKind, ReferencePatch};
pub use model::task::{Task, TaskDraft, TaskPatch};
pub use model::task_group::{TaskGroup, TaskGroupDraft, TaskGroupPatch};
pub use model::{EntityId, Priority};
pub use organizer::Organizer;
pub use storage::{JsonFileStorage, MemoryStorage, StorageAdapter, StorageError};
pub use store::{Entity, EntityStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
