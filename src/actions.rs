//! Project Actions
//!
//! The four callbacks a caller hands to the list. All of them are fire and
//! forget: the list never waits on them, and any failure has to come back as
//! new data on the caller's next render.

use leptos::prelude::*;

use crate::models::Project;

#[derive(Clone, Copy)]
pub struct ProjectActions {
    /// Full project copy with the edited field replaced (called per keystroke)
    pub on_update_project: Callback<Project>,
    /// Project id
    pub on_remove_project: Callback<String>,
    /// Project id; toggles archived
    pub on_archive_project: Callback<String>,
    /// (project, new parent id or None for root)
    pub on_change_parent: Callback<(Project, Option<String>)>,
}

#[cfg(test)]
impl ProjectActions {
    /// Callbacks that ignore their input
    pub(crate) fn noop() -> Self {
        Self {
            on_update_project: Callback::new(|_: Project| {}),
            on_remove_project: Callback::new(|_: String| {}),
            on_archive_project: Callback::new(|_: String| {}),
            on_change_parent: Callback::new(|_: (Project, Option<String>)| {}),
        }
    }
}
