//! Project Row Component
//!
//! One editable project in the list: rename field, parent typeahead,
//! archive and remove buttons (each behind a confirmation dialog) and the two
//! row extension slots.

use leptos::prelude::*;

use crate::actions::ProjectActions;
use crate::components::{ConfirmDialog, ParentSelector};
use crate::confirm::{self, ConfirmEffect, ConfirmEvent, ConfirmState, REMOVE_PROMPT};
use crate::context::{use_extensions, use_list_settings};
use crate::models::Project;
use crate::registry::{SlotProps, ROW_NAME_SLOT, ROW_PARENT_SLOT};
use crate::viewport::use_viewport;

/// Copy of `project` with only the name replaced
pub fn renamed(project: &Project, name: String) -> Project {
    Project { name, ..project.clone() }
}

/// Left padding for a row at `level`; saturates instead of overflowing
pub fn indent_px(level: usize, per_level: u32) -> u32 {
    u32::try_from(level).unwrap_or(u32::MAX).saturating_mul(per_level)
}

/// A row's confirmation state wired to its project and callbacks
#[derive(Clone, Copy)]
pub struct RowConfirm {
    pub state: RwSignal<ConfirmState>,
    project: Signal<Project>,
    actions: ProjectActions,
}

impl RowConfirm {
    pub fn new(project: Signal<Project>, actions: ProjectActions) -> Self {
        Self { state: RwSignal::new(ConfirmState::None), project, actions }
    }

    /// Apply the event and fire the callback a confirm resolves to
    pub fn dispatch(&self, event: ConfirmEvent) {
        let (next, effect) = confirm::transition(self.state.get_untracked(), event);
        self.state.set(next);
        if let Some(effect) = effect {
            let id = self.project.get_untracked().id;
            match effect {
                ConfirmEffect::Remove => self.actions.on_remove_project.run(id),
                ConfirmEffect::Archive => self.actions.on_archive_project.run(id),
            }
        }
    }
}

/// A single project row
///
/// Under the tablet breakpoint the row is laid out as a stacked card with
/// labels and text buttons; above it, as a compact table row with icon
/// buttons and tooltips.
#[component]
pub fn ProjectRow(
    #[prop(into)] project: Signal<Project>,
    level: usize,
    actions: ProjectActions,
) -> impl IntoView {
    let viewport = use_viewport();
    let extensions = use_extensions();
    let settings = use_list_settings();

    let row_confirm = RowConfirm::new(project, actions);
    let confirm_state = row_confirm.state;
    let dispatch = move |event: ConfirmEvent| row_confirm.dispatch(event);

    let prompt = Memo::new(move |_| confirm::prompt(confirm_state.get(), project.get().archived));

    let name_input = move || {
        view! {
            <input
                type="text"
                class="project-list__name"
                prop:value=move || project.get().name
                on:input=move |ev| {
                    // Unbuffered: every keystroke goes to the caller
                    actions.on_update_project.run(renamed(&project.get_untracked(), event_target_value(&ev)));
                }
            />
        }
    };

    let archive_label = move || confirm::archive_label(project.get().archived);

    let row_class = move || {
        if project.get().archived {
            "project-list__item project-list__item--archived ui form"
        } else {
            "project-list__item ui form"
        }
    };

    let slot = move |name: &'static str| {
        let extensions = extensions.clone();
        move || {
            let props = SlotProps::Row {
                project: project.get(),
                level,
                is_mobile: viewport.is_mobile(),
                actions,
            };
            extensions.0.render(name, &props)
        }
    };

    view! {
        <tr class=row_class data-project-id=move || project.get().id data-level=level.to_string()>
            <td
                class=format!("project-list__level-{} field", level)
                style=format!("padding-left: {}px;", indent_px(level, settings.indent_px))
            >
                {move || if viewport.is_mobile() {
                    view! {
                        <label>"Project name"</label>
                        {name_input()}
                    }.into_any()
                } else {
                    view! {
                        <div class="project-list__item-container">
                            <div class="project-list__spacer"></div>
                            <span class="project-list__caret">"▸"</span>
                            {name_input()}
                        </div>
                    }.into_any()
                }}
            </td>
            {slot(ROW_NAME_SLOT)}
            <td class="field">
                <Show when=move || viewport.is_mobile()>
                    <label>"Parent project"</label>
                </Show>
                <ParentSelector
                    value=Signal::derive(move || project.get().parent)
                    on_change=Callback::new(move |parent: Option<String>| {
                        actions.on_change_parent.run((project.get_untracked(), parent));
                    })
                />
            </td>
            {slot(ROW_PARENT_SLOT)}
            <td class="project-list__action">
                <button
                    class="ui icon button archive-btn"
                    title=move || (!viewport.is_mobile()).then(archive_label)
                    on:click=move |_| dispatch(ConfirmEvent::ClickArchive)
                >
                    <span class="icon">"▣"</span>
                    <Show when=move || viewport.is_mobile()>
                        <span class="button-text">{archive_label}</span>
                    </Show>
                </button>
            </td>
            <td class="project-list__action">
                <button
                    class="ui icon button remove-btn"
                    title=move || (!viewport.is_mobile()).then_some(REMOVE_PROMPT.button_text)
                    on:click=move |_| dispatch(ConfirmEvent::ClickRemove)
                >
                    <span class="icon">"×"</span>
                    <Show when=move || viewport.is_mobile()>
                        <span class="button-text">{REMOVE_PROMPT.button_text}</span>
                    </Show>
                </button>
                <ConfirmDialog
                    open=Signal::derive(move || confirm_state.get().is_open())
                    content=Signal::derive(move || prompt.get().map(|p| p.text.to_string()).unwrap_or_default())
                    confirm_button=Signal::derive(move || prompt.get().map(|p| p.button_text.to_string()).unwrap_or_default())
                    on_confirm=Callback::new(move |_: ()| dispatch(ConfirmEvent::Confirm))
                    on_cancel=Callback::new(move |_: ()| dispatch(ConfirmEvent::Cancel))
                />
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::{Arc, Mutex};

    /// Actions that record every id passed to remove/archive
    fn recording_actions(log: Arc<Mutex<Vec<String>>>) -> ProjectActions {
        let removed = log.clone();
        let archived = log;
        ProjectActions {
            on_update_project: Callback::new(|_: Project| {}),
            on_remove_project: Callback::new(move |id: String| removed.lock().unwrap().push(format!("remove {}", id))),
            on_archive_project: Callback::new(move |id: String| archived.lock().unwrap().push(format!("archive {}", id))),
            on_change_parent: Callback::new(|_: (Project, Option<String>)| {}),
        }
    }

    fn fixed(project: Project) -> Signal<Project> {
        Signal::derive(move || project.clone())
    }

    #[test]
    fn test_renamed_changes_only_name() {
        let mut project = Project::new("1", "Root", Some("0"));
        project.archived = true;

        let updated = renamed(&project, "Roo".to_string());
        assert_eq!(updated.name, "Roo");
        assert_eq!(updated, Project { name: "Roo".to_string(), ..project.clone() });
        assert_eq!(project.name, "Root");
    }

    #[test]
    fn test_each_keystroke_reports_once() {
        Owner::new().with(|| {
            let seen = Arc::new(Mutex::new(Vec::new()));
            let sink = seen.clone();
            let on_update = Callback::new(move |p: Project| sink.lock().unwrap().push(p));

            let project = Project::new("1", "R", None);
            for typed in ["Ro", "Roo", "Root"] {
                on_update.run(renamed(&project, typed.to_string()));
            }

            let seen = seen.lock().unwrap();
            let names: Vec<&str> = seen.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, vec!["Ro", "Roo", "Root"]);
            assert!(seen.iter().all(|p| p.id == "1" && p.parent.is_none() && !p.archived));
        });
    }

    #[test]
    fn test_archive_confirm_fires_once() {
        Owner::new().with(|| {
            let log = Arc::new(Mutex::new(Vec::new()));
            let row = RowConfirm::new(fixed(Project::new("1", "Root", None)), recording_actions(log.clone()));

            row.dispatch(ConfirmEvent::ClickArchive);
            row.dispatch(ConfirmEvent::Confirm);
            assert_eq!(*log.lock().unwrap(), vec!["archive 1".to_string()]);
            assert_eq!(row.state.get_untracked(), ConfirmState::None);

            row.dispatch(ConfirmEvent::ClickArchive);
            row.dispatch(ConfirmEvent::Cancel);
            assert_eq!(log.lock().unwrap().len(), 1);
        });
    }

    #[test]
    fn test_rows_confirm_independently() {
        Owner::new().with(|| {
            let log = Arc::new(Mutex::new(Vec::new()));
            let actions = recording_actions(log.clone());
            let row_a = RowConfirm::new(fixed(Project::new("a", "A", None)), actions);
            let row_b = RowConfirm::new(fixed(Project::new("b", "B", None)), actions);

            row_a.dispatch(ConfirmEvent::ClickArchive);
            row_b.dispatch(ConfirmEvent::ClickRemove);
            row_a.dispatch(ConfirmEvent::Confirm);

            assert_eq!(*log.lock().unwrap(), vec!["archive a".to_string()]);
            assert_eq!(row_a.state.get_untracked(), ConfirmState::None);
            assert_eq!(row_b.state.get_untracked(), ConfirmState::PendingRemove);

            row_b.dispatch(ConfirmEvent::Confirm);
            assert_eq!(*log.lock().unwrap(), vec!["archive a".to_string(), "remove b".to_string()]);
        });
    }

    #[test]
    fn test_indent_saturates() {
        assert_eq!(indent_px(0, 24), 0);
        assert_eq!(indent_px(3, 24), 72);
        assert_eq!(indent_px(2, u32::MAX), u32::MAX);
    }
}
