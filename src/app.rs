//! Project Tree App
//!
//! Owns the project store, wires the list callbacks to it and keeps the list
//! in localStorage.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::ProjectActions;
use crate::components::TreeListView;
use crate::config::AppConfig;
use crate::context::{ListSettings, ProjectDirectory};
use crate::host;
use crate::models::Project;
use crate::store::{
    self, store_archive_project, store_change_parent, store_remove_project, store_update_project, AppState,
};
use crate::tree::build_tree;
use crate::viewport::provide_viewport;

#[component]
pub fn App(config: AppConfig, projects: Vec<Project>) -> impl IntoView {
    let store = Store::new(AppState::new(projects));

    provide_viewport(config.breakpoints);
    provide_context(ListSettings { indent_px: config.indent_px });

    let projects = store::projects_signal(store);
    provide_context(ProjectDirectory { projects });

    let tree = Signal::derive(move || build_tree(&projects.get()));

    let actions = ProjectActions {
        on_update_project: Callback::new(move |project: Project| store_update_project(&store, project)),
        on_remove_project: Callback::new(move |id: String| store_remove_project(&store, &id)),
        on_archive_project: Callback::new(move |id: String| store_archive_project(&store, &id)),
        on_change_parent: Callback::new(move |(project, parent): (Project, Option<String>)| {
            store_change_parent(&store, &project, parent)
        }),
    };

    // Rename fires per keystroke, so writes wait for a quiet period.
    // Replacing the pending Timeout drops (cancels) the previous one.
    let pending_save: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let storage_key = config.storage_key.clone();
    let debounce_ms = config.persist_debounce_ms;
    Effect::new(move |_| {
        let snapshot = projects.get();
        let storage_key = storage_key.clone();
        let timeout = Timeout::new(debounce_ms, move || {
            match host::save_projects(&storage_key, &snapshot) {
                Ok(()) => log::debug!("saved {} projects", snapshot.len()),
                Err(err) => log::warn!("could not save projects: {}", err),
            }
        });
        pending_save.borrow_mut().replace(timeout);
    });

    view! {
        <main class="projects-page">
            <h1>"Projects"</h1>

            <TreeListView projects=tree actions=actions />

            <p class="project-count">{move || format!("{} projects", projects.get().len())}</p>
        </main>
    }
}
