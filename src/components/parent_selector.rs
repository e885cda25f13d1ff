//! Parent Selector Component
//!
//! Typeahead for picking a project's parent, with fuzzy search over all
//! known projects plus a "No parent" choice.

use leptos::prelude::*;

use crate::context::use_project_directory;
use crate::models::Project;

pub const NO_PARENT_LABEL: &str = "No parent";
const MAX_SUGGESTIONS: usize = 6;

/// Simple fuzzy match: query chars appear in order in the target (case-insensitive)
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let target = target.to_lowercase();
    let mut remaining = target.chars();
    query
        .to_lowercase()
        .chars()
        .all(|wanted| remaining.any(|c| c == wanted))
}

/// One selectable suggestion (id None = move to root)
#[derive(Debug, Clone, PartialEq)]
pub struct ParentOption {
    pub id: Option<String>,
    pub label: String,
}

/// Suggestions for the current query, "No parent" first when it matches
///
/// Every project is offered, including the one being edited and its
/// descendants; keeping the hierarchy acyclic is up to the caller.
pub fn parent_options(projects: &[Project], query: &str) -> Vec<ParentOption> {
    let query = query.trim();
    let no_parent = (query.is_empty() || fuzzy_match(query, NO_PARENT_LABEL)).then(|| ParentOption {
        id: None,
        label: NO_PARENT_LABEL.to_string(),
    });

    no_parent
        .into_iter()
        .chain(
            projects
                .iter()
                .filter(|p| query.is_empty() || fuzzy_match(query, &p.name))
                .map(|p| ParentOption { id: Some(p.id.clone()), label: p.name.clone() }),
        )
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Parent typeahead bound to a project's `parent`
///
/// Props:
/// - value: current parent id (None = root)
/// - on_change: called with the chosen parent id
#[component]
pub fn ParentSelector(
    #[prop(into)] value: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<Option<String>>,
) -> impl IntoView {
    let directory = use_project_directory();

    let (query, set_query) = signal(String::new());
    let (editing, set_editing) = signal(false);
    let (selected_idx, set_selected_idx) = signal(0usize);

    let suggestions = Memo::new(move |_| parent_options(&directory.get(), &query.get()));

    // Name shown while not typing
    let current_name = move || {
        value
            .get()
            .and_then(|id| directory.get().into_iter().find(|p| p.id == id))
            .map(|p| p.name)
            .unwrap_or_default()
    };

    let select = move |option: ParentOption| {
        set_editing.set(false);
        set_query.set(String::new());
        set_selected_idx.set(0);
        on_change.run(option.id);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        match key.as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < suggestions.with(|s| s.len()) {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel > 0 {
                    set_selected_idx.set(sel - 1);
                }
            }
            "Enter" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if let Some(option) = suggestions.with(|s| s.get(sel).cloned()) {
                    select(option);
                }
            }
            "Escape" => {
                set_editing.set(false);
                set_query.set(String::new());
            }
            _ => {}
        }
    };

    view! {
        <div class="parent-selector">
            <input
                type="text"
                placeholder=NO_PARENT_LABEL
                autocomplete="off"
                prop:value=move || if editing.get() { query.get() } else { current_name() }
                on:focus=move |_| {
                    set_query.set(String::new());
                    set_selected_idx.set(0);
                    set_editing.set(true);
                }
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    set_selected_idx.set(0);
                    set_editing.set(true);
                }
                on:keydown=on_keydown
                on:blur=move |_| set_editing.set(false)
            />

            <Show when=move || editing.get()>
                <div class="autocomplete-list">
                    {move || {
                        let selected = selected_idx.get();
                        suggestions.get().into_iter().enumerate().map(|(i, option)| {
                            let label = option.label.clone();
                            let class = if i == selected { "autocomplete-item selected" } else { "autocomplete-item" };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    // mousedown fires before the input's blur
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        select(option.clone());
                                    }
                                >
                                    {label}
                                </button>
                            }
                        }).collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
