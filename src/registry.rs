//! Extension Slots
//!
//! Lookup table of renderers keyed by slot name. Slots nobody registered
//! render nothing.

use std::collections::HashMap;
use std::sync::Arc;

use crate::actions::ProjectActions;
use crate::models::{Project, ProjectTree};

pub const HEADER_NAME_SLOT: &str = "projects.tableheader.name";
pub const HEADER_PARENT_SLOT: &str = "projects.tableheader.parent";
pub const ROW_NAME_SLOT: &str = "projects.tablerow.name";
pub const ROW_PARENT_SLOT: &str = "projects.tablerow.parent";

/// Props handed to a slot renderer: whatever the host component received
#[derive(Clone)]
pub enum SlotProps {
    Header {
        projects: Vec<ProjectTree>,
        actions: ProjectActions,
    },
    Row {
        project: Project,
        level: usize,
        is_mobile: bool,
        actions: ProjectActions,
    },
}

type Renderer<V> = Arc<dyn Fn(&SlotProps) -> Option<V> + Send + Sync>;

pub struct ExtensionRegistry<V> {
    renderers: HashMap<String, Renderer<V>>,
}

impl<V> Default for ExtensionRegistry<V> {
    fn default() -> Self {
        Self { renderers: HashMap::new() }
    }
}

impl<V> ExtensionRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the renderer for a slot
    pub fn register<F>(&mut self, slot: impl Into<String>, renderer: F)
    where
        F: Fn(&SlotProps) -> Option<V> + Send + Sync + 'static,
    {
        self.renderers.insert(slot.into(), Arc::new(renderer));
    }

    pub fn render(&self, slot: &str, props: &SlotProps) -> Option<V> {
        self.renderers.get(slot).and_then(|renderer| renderer(props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn header_props(count: usize) -> SlotProps {
        SlotProps::Header {
            projects: (0..count)
                .map(|i| ProjectTree::leaf(Project::new(i.to_string(), "P", None)))
                .collect(),
            actions: ProjectActions::noop(),
        }
    }

    #[test]
    fn test_unregistered_slot_renders_nothing() {
        Owner::new().with(|| {
            let registry = ExtensionRegistry::<String>::new();
            assert_eq!(registry.render(HEADER_NAME_SLOT, &header_props(1)), None);
        });
    }

    #[test]
    fn test_registered_slot_receives_props() {
        Owner::new().with(|| {
            let mut registry = ExtensionRegistry::new();
            registry.register(HEADER_PARENT_SLOT, |props: &SlotProps| match props {
                SlotProps::Header { projects, .. } => Some(format!("{} roots", projects.len())),
                SlotProps::Row { .. } => None,
            });

            assert_eq!(registry.render(HEADER_PARENT_SLOT, &header_props(3)), Some("3 roots".to_string()));
            // Other slots stay empty
            assert_eq!(registry.render(HEADER_NAME_SLOT, &header_props(3)), None);
        });
    }

    #[test]
    fn test_row_slot_sees_layout_flag() {
        Owner::new().with(|| {
            let mut registry = ExtensionRegistry::new();
            registry.register(ROW_NAME_SLOT, |props: &SlotProps| match props {
                SlotProps::Row { project, level, is_mobile, .. } => {
                    Some(format!("{}@{}:{}", project.id, level, is_mobile))
                }
                SlotProps::Header { .. } => None,
            });

            let props = SlotProps::Row {
                project: Project::new("7", "Seven", None),
                level: 2,
                is_mobile: true,
                actions: ProjectActions::noop(),
            };
            assert_eq!(registry.render(ROW_NAME_SLOT, &props), Some("7@2:true".to_string()));
        });
    }

    #[test]
    fn test_register_replaces() {
        Owner::new().with(|| {
            let mut registry = ExtensionRegistry::new();
            registry.register(HEADER_NAME_SLOT, |_: &SlotProps| Some("old"));
            registry.register(HEADER_NAME_SLOT, |_: &SlotProps| Some("new"));
            assert_eq!(registry.render(HEADER_NAME_SLOT, &header_props(0)), Some("new"));
        });
    }

    #[test]
    fn test_renderer_may_decline() {
        Owner::new().with(|| {
            let mut registry = ExtensionRegistry::<&str>::new();
            registry.register(ROW_NAME_SLOT, |_: &SlotProps| None);
            assert_eq!(registry.render(ROW_NAME_SLOT, &header_props(0)), None);
        });
    }
}
