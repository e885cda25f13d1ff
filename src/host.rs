//! Host Page Bridge
//!
//! Reads configuration and seed data from window globals and keeps the
//! project list in localStorage.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::models::Project;

/// `window.__PROJECT_TREE_CONFIG__`: partial `AppConfig` object
pub const CONFIG_GLOBAL: &str = "__PROJECT_TREE_CONFIG__";
/// `window.__PROJECT_SEED__`: array of projects used when storage is empty
pub const SEED_GLOBAL: &str = "__PROJECT_SEED__";

fn read_global(name: &str) -> Option<JsValue> {
    let target: JsValue = window().into();
    let value = js_sys::Reflect::get(&target, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

pub fn load_config() -> AppResult<AppConfig> {
    match read_global(CONFIG_GLOBAL) {
        Some(value) => serde_wasm_bindgen::from_value(value).map_err(|e| AppError::Config(e.to_string())),
        None => Ok(AppConfig::default()),
    }
}

/// Stored projects first, then the page seed, then nothing
pub fn load_projects(storage_key: &str) -> AppResult<Vec<Project>> {
    match read_stored(storage_key) {
        Ok(Some(projects)) => return Ok(projects),
        Ok(None) => {}
        Err(err) => log::warn!("ignoring stored projects: {}", err),
    }
    match read_global(SEED_GLOBAL) {
        Some(value) => serde_wasm_bindgen::from_value(value).map_err(|e| AppError::Seed(e.to_string())),
        None => Ok(Vec::new()),
    }
}

fn local_storage() -> AppResult<web_sys::Storage> {
    window()
        .local_storage()
        .map_err(|e| AppError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| AppError::Storage("localStorage is disabled".to_string()))
}

fn read_stored(storage_key: &str) -> AppResult<Option<Vec<Project>>> {
    let raw = local_storage()?
        .get_item(storage_key)
        .map_err(|e| AppError::Storage(format!("{:?}", e)))?;
    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_projects(storage_key: &str, projects: &[Project]) -> AppResult<()> {
    let raw = serde_json::to_string(projects)?;
    local_storage()?
        .set_item(storage_key, &raw)
        .map_err(|e| AppError::Storage(format!("{:?}", e)))
}
