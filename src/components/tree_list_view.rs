//! Tree List View Component
//!
//! Project table: a header row on desktop widths, then the recursive body.

use leptos::prelude::*;

use crate::actions::ProjectActions;
use crate::components::RecursiveListView;
use crate::context::{provide_directory_fallback, use_extensions};
use crate::models::ProjectTree;
use crate::registry::{SlotProps, HEADER_NAME_SLOT, HEADER_PARENT_SLOT};
use crate::viewport::{use_viewport, DESKTOP_LAYOUT};

/// Editable project tree
///
/// An empty `projects` list renders an empty body.
#[component]
pub fn TreeListView(
    #[prop(into)] projects: Signal<Vec<ProjectTree>>,
    actions: ProjectActions,
) -> impl IntoView {
    let viewport = use_viewport();
    let extensions = use_extensions();
    provide_directory_fallback(projects);

    // Only the slot contents follow the project list; the header row itself
    // is rebuilt on breakpoint changes alone
    let slot = move |name: &'static str| {
        let extensions = extensions.clone();
        move || {
            let props = SlotProps::Header { projects: projects.get(), actions };
            extensions.0.render(name, &props)
        }
    };

    let header = move || {
        viewport.matches(DESKTOP_LAYOUT).then(|| {
            view! {
                <thead>
                    <tr>
                        <th>"Name"</th>
                        {slot(HEADER_NAME_SLOT)}
                        <th class="five wide">"Parent"</th>
                        {slot(HEADER_PARENT_SLOT)}
                        <th class="one wide" colspan="2"></th>
                    </tr>
                </thead>
            }
        })
    };

    view! {
        <table class="ui table project-list">
            {header}
            <tbody>
                <RecursiveListView projects=projects level=0 actions=actions />
            </tbody>
        </table>
    }
}
