//! Confirm Dialog Component
//!
//! Small modal with a prompt and confirm/cancel buttons.

use leptos::prelude::*;

/// Modal confirmation dialog
///
/// Clicking the dimmed backdrop counts as cancel.
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `content` - Prompt text
/// * `confirm_button` - Label of the confirm button
/// * `on_confirm` / `on_cancel` - Button callbacks
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] content: Signal<String>,
    #[prop(into)] confirm_button: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div
                class="confirm-dimmer"
                on:click=move |_| on_cancel.run(())
            >
                <div
                    class="confirm-dialog confirm-dialog--mini"
                    role="dialog"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div class="confirm-dialog__content">{move || content.get()}</div>
                    <div class="confirm-dialog__actions">
                        <button
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_cancel.run(());
                            }
                        >
                            "Cancel"
                        </button>
                        <button
                            class="confirm-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_confirm.run(());
                            }
                        >
                            {move || confirm_button.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
