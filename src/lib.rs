//! Project Tree Frontend
//!
//! Editable, nested project list for Leptos (CSR). Embedders render
//! [`components::TreeListView`] with a [`actions::ProjectActions`] bundle and
//! provide a [`viewport::Viewport`]; [`app::App`] is the standalone page.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod confirm;
pub mod context;
pub mod error;
pub mod host;
pub mod logging;
pub mod models;
pub mod registry;
pub mod store;
pub mod tree;
pub mod viewport;
