//! Application Configuration
//!
//! Every field has a default, so a partial (or missing) host config is fine.

use serde::{Deserialize, Serialize};

use crate::viewport::Breakpoints;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub breakpoints: Breakpoints,
    /// Left indent per nesting level, in px
    pub indent_px: u32,
    /// `log` level filter name ("error" .. "trace", or "off")
    pub log_level: String,
    /// localStorage key for the project list
    pub storage_key: String,
    /// Quiet period before the project list is written back to storage
    pub persist_debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            indent_px: 24,
            log_level: "info".to_string(),
            storage_key: "project-tree-ui.projects".to_string(),
            persist_debounce_ms: 500,
        }
    }
}
