//! UI Components
//!
//! Leptos components for the project list.

mod confirm_dialog;
mod parent_selector;
mod project_row;
mod recursive_list_view;
mod tree_list_view;

pub use confirm_dialog::ConfirmDialog;
pub use parent_selector::{fuzzy_match, parent_options, ParentOption, ParentSelector};
pub use project_row::ProjectRow;
pub use recursive_list_view::RecursiveListView;
pub use tree_list_view::TreeListView;
