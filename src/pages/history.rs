//! History page: the authenticated archive of past analyses.
//!
//! SYSTEM CONTEXT
//! ==============
//! List and selection semantics live in `state::history`; this page wires
//! them to the API and the confirm dialog. Unauthenticated visitors are
//! bounced to the login page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::report_panel::ReportPanel;
use crate::net::types::DetectionRecord;
use crate::state::auth::AuthState;
use crate::state::history::HistoryState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{state_tone, tone_class};

/// Record list plus detail report, with per-record delete.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let history = RwSignal::new(HistoryState::default());
    let error = RwSignal::new(String::new());
    let confirm_delete = RwSignal::new(None::<i64>);

    let load = Callback::new(move |()| {
        if history.get_untracked().loading {
            return;
        }
        history.update(|state| state.loading = true);
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_detection_history().await {
                Ok(records) => history.update(|state| state.apply_loaded(records)),
                Err(err) => {
                    history.update(|state| state.loading = false);
                    error.set(err.user_message("Could not load your analysis history."));
                }
            }
        });
    });

    // Load once as soon as auth confirms a session.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        if !auth.get().logged_in {
            return;
        }
        requested.set(true);
        load.run(());
    });

    let on_select = Callback::new(move |id: i64| {
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_detection_detail(id).await {
                Ok(detail) => history.update(|state| state.select(detail)),
                Err(err) => error.set(err.user_message("Could not load the detail report.")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let request_delete = Callback::new(move |id: i64| confirm_delete.set(Some(id)));
    let cancel_delete = Callback::new(move |()| confirm_delete.set(None));

    let confirm_delete_now = Callback::new(move |()| {
        let Some(id) = confirm_delete.get_untracked() else {
            return;
        };
        confirm_delete.set(None);
        let mut proceed = false;
        history.update(|state| proceed = state.begin_delete(id));
        if !proceed {
            return;
        }
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_detection_history(id).await {
                Ok(()) => history.update(|state| {
                    state.finish_delete(id);
                    state.remove_record(id);
                }),
                Err(err) => {
                    history.update(|state| state.finish_delete(id));
                    error.set(err.user_message("Could not delete the history entry."));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        history.update(|state| state.finish_delete(id));
    });

    view! {
        <section class="history">
            <div class="history__header">
                <div>
                    <p class="eyebrow">"Personal Archive"</p>
                    <h1>"My Analysis History"</h1>
                    <p class="muted">"Pick a record to review and manage its detail report."</p>
                </div>
                <div class="history__count">
                    <p class="eyebrow">"Total Records"</p>
                    <p class="history__count-value">{move || history.get().records.len()}</p>
                </div>
            </div>

            <div class="history__layout">
                <aside class="history__list">
                    <button
                        class="button"
                        on:click=move |_| load.run(())
                        disabled=move || history.get().loading
                    >
                        {move || if history.get().loading { "Loading..." } else { "Refresh" }}
                    </button>
                    <Show when=move || history.get().records.is_empty() && !history.get().loading>
                        <p class="muted history__empty">"No saved analysis records."</p>
                    </Show>
                    <ul class="history__items">
                        <For
                            each=move || history.get().records
                            key=|record| record.id
                            children=move |record: DetectionRecord| {
                                let id = record.id;
                                let badge_class =
                                    format!("state-badge {}", tone_class(state_tone(&record.state)));
                                let is_active = move || {
                                    history.get().selected.as_ref().is_some_and(|s| s.id == id)
                                };
                                let is_deleting = move || history.get().is_deleting(id);
                                view! {
                                    <li class="history-item" class:history-item--active=is_active>
                                        <button
                                            class="history-item__select"
                                            on:click=move |_| on_select.run(id)
                                        >
                                            <span class="history-item__title">"Analysis result"</span>
                                            <span class=badge_class>{record.state.clone()}</span>
                                            <span class="history-item__label muted">
                                                {record.label_name.clone()}
                                            </span>
                                        </button>
                                        <button
                                            class="history-item__delete"
                                            disabled=is_deleting
                                            on:click=move |_| request_delete.run(id)
                                        >
                                            {move || if is_deleting() { "Deleting..." } else { "Delete" }}
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </aside>

                <article class="history__detail">
                    <Show
                        when=move || history.get().selected.is_some()
                        fallback=|| {
                            view! {
                                <p class="muted">
                                    "Select a record on the left to open its detail report."
                                </p>
                            }
                        }
                    >
                        {move || {
                            history
                                .get()
                                .selected
                                .map(|record| {
                                    let id = record.id;
                                    let deleting = history.get().is_deleting(id);
                                    view! {
                                        <div class="history-detail">
                                            <div class="history-detail__header">
                                                <div>
                                                    <p class="eyebrow">"Report"</p>
                                                    <h2>"Analysis Detail"</h2>
                                                </div>
                                                <button
                                                    class="button button--ghost"
                                                    disabled=deleting
                                                    on:click=move |_| request_delete.run(id)
                                                >
                                                    {if deleting { "Deleting..." } else { "Delete" }}
                                                </button>
                                            </div>
                                            <ReportPanel record=record/>
                                        </div>
                                    }
                                })
                        }}
                    </Show>
                    <Show when=move || !error.get().is_empty()>
                        <p class="notice notice--error">{move || error.get()}</p>
                    </Show>
                </article>
            </div>

            <Show when=move || confirm_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete analysis record"
                    message="Delete this analysis record? This cannot be undone."
                    confirm_label="Delete"
                    on_confirm=confirm_delete_now
                    on_cancel=cancel_delete
                />
            </Show>
        </section>
    }
}
