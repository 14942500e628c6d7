//! Modal confirmation for destructive actions.

use leptos::prelude::*;

/// Blocking yes/no dialog. The backdrop and the cancel button both reject;
/// only the explicit confirm button proceeds.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <h2 class="dialog__title">{title}</h2>
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="button button--ghost" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="button button--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
