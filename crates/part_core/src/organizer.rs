//! Organizer facade: the five entity stores plus their cascade wiring.
//!
//! # Responsibility
//! - Own one `EntityStore` per entity kind over a shared storage adapter.
//! - Route entity-deleting mutations through the integrity rules before
//!   they return to the caller.
//!
//! # Invariants
//! - Operations run synchronously, in program order, one at a time; there is
//!   no suspension mid-mutation.
//! - Removing a referent and detaching its referrers complete as one call;
//!   no caller observes the state in between.

use crate::model::area::{Area, AreaDraft, AreaPatch};
use crate::model::project::{Project, ProjectDraft, ProjectPatch};
use crate::model::reference::{Reference, ReferenceDraft, ReferencePatch};
use crate::model::task::{Task, TaskDraft, TaskPatch};
use crate::model::task_group::{TaskGroup, TaskGroupDraft, TaskGroupPatch};
use crate::model::EntityId;
use crate::relations::detach_weak_refs;
use crate::storage::StorageAdapter;
use crate::store::EntityStore;

/// The whole persistent state of one organizer, loaded once at open and
/// mirrored to storage on every mutation.
pub struct Organizer<S: StorageAdapter + Clone> {
    projects: EntityStore<Project, S>,
    areas: EntityStore<Area, S>,
    references: EntityStore<Reference, S>,
    tasks: EntityStore<Task, S>,
    task_groups: EntityStore<TaskGroup, S>,
}

impl<S: StorageAdapter + Clone> Organizer<S> {
    /// Loads all five collections from clones of `adapter`.
    pub fn open(adapter: S) -> Self {
        Self {
            projects: EntityStore::open(adapter.clone()),
            areas: EntityStore::open(adapter.clone()),
            references: EntityStore::open(adapter.clone()),
            tasks: EntityStore::open(adapter.clone()),
            task_groups: EntityStore::open(adapter),
        }
    }

    // Projects

    pub fn add_project(&mut self, draft: ProjectDraft) -> Project {
        self.projects.add(draft)
    }

    pub fn update_project(&mut self, id: EntityId, patch: ProjectPatch) {
        self.projects.update(id, patch);
    }

    /// Removes a project and detaches every task referencing it.
    ///
    /// The detach pass finishes before this returns: afterwards no task
    /// carries the removed id, and tasks that never referenced it are
    /// untouched.
    pub fn remove_project(&mut self, id: EntityId) {
        self.projects.remove(id);
        detach_weak_refs(&mut self.tasks, id, |task: &mut Task| &mut task.project_id);
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.list()
    }

    // Areas

    pub fn add_area(&mut self, draft: AreaDraft) -> Area {
        self.areas.add(draft)
    }

    pub fn update_area(&mut self, id: EntityId, patch: AreaPatch) {
        self.areas.update(id, patch);
    }

    pub fn remove_area(&mut self, id: EntityId) {
        self.areas.remove(id);
    }

    pub fn areas(&self) -> &[Area] {
        self.areas.list()
    }

    // References

    pub fn add_reference(&mut self, draft: ReferenceDraft) -> Reference {
        self.references.add(draft)
    }

    pub fn update_reference(&mut self, id: EntityId, patch: ReferencePatch) {
        self.references.update(id, patch);
    }

    pub fn remove_reference(&mut self, id: EntityId) {
        self.references.remove(id);
    }

    pub fn references(&self) -> &[Reference] {
        self.references.list()
    }

    // Tasks

    pub fn add_task(&mut self, draft: TaskDraft) -> Task {
        self.tasks.add(draft)
    }

    pub fn update_task(&mut self, id: EntityId, patch: TaskPatch) {
        self.tasks.update(id, patch);
    }

    pub fn remove_task(&mut self, id: EntityId) {
        self.tasks.remove(id);
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.list()
    }

    // Task groups

    pub fn add_task_group(&mut self, draft: TaskGroupDraft) -> TaskGroup {
        self.task_groups.add(draft)
    }

    pub fn update_task_group(&mut self, id: EntityId, patch: TaskGroupPatch) {
        self.task_groups.update(id, patch);
    }

    /// Removes a group and detaches every task referencing it, through the
    /// same mechanism as `remove_project`.
    pub fn remove_task_group(&mut self, id: EntityId) {
        self.task_groups.remove(id);
        detach_weak_refs(&mut self.tasks, id, |task: &mut Task| &mut task.group_id);
    }

    pub fn task_groups(&self) -> &[TaskGroup] {
        self.task_groups.list()
    }
}
