//! Tree Utilities
//!
//! Grouping the flat project list into trees and walking them back out.
//!
//! No cycle detection happens here. `build_tree` only reaches projects that
//! hang off a root, so projects on a parent cycle (or under a parent id that
//! is not in the list) are simply not part of the result.

use crate::models::{Project, ProjectTree, Row};
use std::collections::HashMap;

/// Group a flat project list by `parent`, keeping source order among siblings
pub fn build_tree(projects: &[Project]) -> Vec<ProjectTree> {
    let mut children_map: HashMap<Option<&str>, Vec<&Project>> = HashMap::new();
    for project in projects {
        children_map.entry(project.parent.as_deref()).or_default().push(project);
    }

    fn collect<'a>(
        parent: Option<&'a str>,
        children_map: &HashMap<Option<&'a str>, Vec<&'a Project>>,
    ) -> Vec<ProjectTree> {
        children_map
            .get(&parent)
            .map(|children| {
                children
                    .iter()
                    .map(|project| ProjectTree {
                        project: (*project).clone(),
                        children: collect(Some(project.id.as_str()), children_map),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    collect(None, &children_map)
}

/// Flatten trees into rows in display order (pre-order DFS)
///
/// Each node becomes one row at `level`; its children follow at `level + 1`.
/// An empty child list is the only place the recursion stops.
pub fn flatten(nodes: &[ProjectTree], level: usize) -> Vec<Row> {
    nodes
        .iter()
        .flat_map(|node| {
            std::iter::once(Row { project: node.project.clone(), level })
                .chain(flatten(&node.children, level + 1))
        })
        .collect()
}

/// Every project in the trees, in display order
pub fn projects_in(nodes: &[ProjectTree]) -> Vec<Project> {
    flatten(nodes, 0).into_iter().map(|row| row.project).collect()
}

/// Ids of every project below `id` in the flat list
pub fn descendant_ids(projects: &[Project], id: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut frontier = vec![id.to_string()];
    while let Some(parent) = frontier.pop() {
        for project in projects {
            if project.parent.as_deref() == Some(parent.as_str()) && !found.contains(&project.id) && project.id != id {
                found.push(project.id.clone());
                frontier.push(project.id.clone());
            }
        }
    }
    found
}
