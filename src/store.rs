//! Project Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. This is the
//! caller side of the list: it owns the flat project list and applies the
//! list's callbacks to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Project;
use crate::tree::descendant_ids;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Flat project list in display order
    pub projects: Vec<Project>,
}

impl AppState {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

pub fn projects_signal(store: AppStore) -> Signal<Vec<Project>> {
    Signal::derive(move || store.projects().get())
}

// ========================
// List Mutations
// ========================

/// Replace the project with the same id; unknown ids are ignored
pub fn apply_update(projects: &mut [Project], updated: Project) -> bool {
    match projects.iter_mut().find(|p| p.id == updated.id) {
        Some(project) => {
            *project = updated;
            true
        }
        None => false,
    }
}

/// Remove a project together with everything below it
pub fn apply_remove(projects: &mut Vec<Project>, id: &str) -> usize {
    let mut doomed = descendant_ids(projects, id);
    doomed.push(id.to_string());
    let before = projects.len();
    projects.retain(|p| !doomed.contains(&p.id));
    before - projects.len()
}

/// Flip `archived`; returns the new value
pub fn apply_archive(projects: &mut [Project], id: &str) -> Option<bool> {
    projects.iter_mut().find(|p| p.id == id).map(|project| {
        project.archived = !project.archived;
        project.archived
    })
}

/// Set a new parent. Does not check for cycles.
pub fn apply_parent(projects: &mut [Project], id: &str, parent: Option<String>) -> bool {
    match projects.iter_mut().find(|p| p.id == id) {
        Some(project) => {
            project.parent = parent;
            true
        }
        None => false,
    }
}

// ========================
// Store Helper Functions
// ========================

pub fn store_update_project(store: &AppStore, updated: Project) {
    let id = updated.id.clone();
    if !apply_update(&mut store.projects().write(), updated) {
        log::warn!("update for unknown project {}", id);
    }
}

pub fn store_remove_project(store: &AppStore, id: &str) {
    let removed = apply_remove(&mut store.projects().write(), id);
    log::debug!("removed project {} ({} entries)", id, removed);
}

pub fn store_archive_project(store: &AppStore, id: &str) {
    match apply_archive(&mut store.projects().write(), id) {
        Some(archived) => log::debug!("project {} archived={}", id, archived),
        None => log::warn!("archive for unknown project {}", id),
    }
}

pub fn store_change_parent(store: &AppStore, project: &Project, parent: Option<String>) {
    log::debug!("project {} moves under {:?}", project.id, parent);
    if !apply_parent(&mut store.projects().write(), &project.id, parent) {
        log::warn!("re-parent for unknown project {}", project.id);
    }
}
