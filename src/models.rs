//! Frontend Models
//!
//! Project data as handed to the list by its owner.

use serde::{Deserialize, Serialize};

/// Project data structure (owned by the caller's data store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Id of the containing project (None = root)
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent: parent.map(str::to_string),
            archived: false,
        }
    }
}

/// A project together with its resolved children, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTree {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default)]
    pub children: Vec<ProjectTree>,
}

impl ProjectTree {
    pub fn leaf(project: Project) -> Self {
        Self { project, children: Vec::new() }
    }
}

/// One rendered row: a project and its nesting level (0 = root)
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub project: Project,
    pub level: usize,
}
