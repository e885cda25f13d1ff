//! Application Context
//!
//! Shared values provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::models::{Project, ProjectTree};
use crate::registry::ExtensionRegistry;
use crate::tree::projects_in;

/// Row presentation settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListSettings {
    /// Left indent per nesting level, in px
    pub indent_px: u32,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self { indent_px: 24 }
    }
}

/// Every known project, for the parent typeahead
#[derive(Clone, Copy)]
pub struct ProjectDirectory {
    pub projects: Signal<Vec<Project>>,
}

/// Slot renderers registered by the host page
#[derive(Clone, Default)]
pub struct Extensions(pub Arc<ExtensionRegistry<AnyView>>);

pub fn use_list_settings() -> ListSettings {
    use_context::<ListSettings>().unwrap_or_default()
}

/// Projects offered as parents (empty when nobody provided a directory)
pub fn use_project_directory() -> Signal<Vec<Project>> {
    use_context::<ProjectDirectory>()
        .map(|directory| directory.projects)
        .unwrap_or_else(|| Signal::derive(Vec::new))
}

/// Offer the list's own projects as parents unless the caller provided a directory
pub fn provide_directory_fallback(projects: Signal<Vec<ProjectTree>>) {
    if use_context::<ProjectDirectory>().is_none() {
        provide_context(ProjectDirectory {
            projects: Signal::derive(move || projects.with(|nodes| projects_in(nodes))),
        });
    }
}

/// Registered slot renderers (an empty registry when none were provided)
pub fn use_extensions() -> Extensions {
    use_context::<Extensions>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn make_tree() -> Vec<ProjectTree> {
        vec![ProjectTree {
            project: Project::new("1", "Root", None),
            children: vec![ProjectTree::leaf(Project::new("2", "Child", Some("1")))],
        }]
    }

    #[test]
    fn test_directory_falls_back_to_list_projects() {
        Owner::new().with(|| {
            assert!(use_project_directory().get_untracked().is_empty());

            let tree = RwSignal::new(make_tree());
            provide_directory_fallback(tree.into());

            let ids: Vec<String> = use_project_directory().get_untracked().into_iter().map(|p| p.id).collect();
            assert_eq!(ids, vec!["1", "2"]);
        });
    }

    #[test]
    fn test_directory_from_caller_wins() {
        Owner::new().with(|| {
            let everything = vec![Project::new("1", "Root", None), Project::new("9", "Elsewhere", None)];
            provide_context(ProjectDirectory { projects: Signal::derive(move || everything.clone()) });

            let tree = RwSignal::new(make_tree());
            provide_directory_fallback(tree.into());

            assert_eq!(use_project_directory().get_untracked().len(), 2);
            assert_eq!(use_project_directory().get_untracked()[1].id, "9");
        });
    }
}
