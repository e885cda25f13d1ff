//! Recursive List View Component
//!
//! Renders one row per project at the current level, then each project's
//! children one level deeper. An empty child list ends the recursion; there
//! is no depth limit.

use leptos::prelude::*;

use crate::actions::ProjectActions;
use crate::components::ProjectRow;
use crate::models::ProjectTree;

#[component]
pub fn RecursiveListView(
    #[prop(into)] projects: Signal<Vec<ProjectTree>>,
    level: usize,
    actions: ProjectActions,
) -> impl IntoView {
    view! {
        <For
            each=move || projects.get()
            // Keyed by id only so a rename keeps the row (and its input focus)
            key=|node| node.project.id.clone()
            children=move |node| {
                let id = node.project.id.clone();
                let fallback = node.project.clone();

                // Latest version of this node from the parent's list
                let current = Memo::new(move |_| {
                    projects.with(|nodes| nodes.iter().find(|n| n.project.id == id).cloned())
                });
                let project = Signal::derive(move || {
                    current.get().map(|n| n.project).unwrap_or_else(|| fallback.clone())
                });
                let children = Signal::derive(move || {
                    current.get().map(|n| n.children).unwrap_or_default()
                });

                view! {
                    <ProjectRow project=project level=level actions=actions />
                    {view! {
                        <RecursiveListView projects=children level=level + 1 actions=actions />
                    }.into_any()}
                }
            }
        />
    }
}
