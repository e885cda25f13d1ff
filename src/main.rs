//! Project Tree Frontend Entry Point

use leptos::prelude::*;
use project_tree_ui::app::App;
use project_tree_ui::{host, logging};

fn main() {
    console_error_panic_hook::set_once();

    // Logger level comes from the config, so report config errors afterwards
    let loaded = host::load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(&config.log_level);
    if let Err(err) = loaded {
        log::warn!("{}; using default configuration", err);
    }

    let projects = host::load_projects(&config.storage_key).unwrap_or_else(|err| {
        log::warn!("{}; starting with an empty list", err);
        Vec::new()
    });
    log::info!("mounting project list with {} projects", projects.len());

    mount_to_body(move || view! { <App config=config projects=projects /> });
}
