//! Dashboard page listing the signed-in user's monitoring tasks.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the task list once auth
//! resolves and re-polls it so status chips and last-run times stay fresh.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::task_card::TaskCard;
use crate::state::auth::AuthState;
use crate::state::tasks::TasksState;
use crate::util::auth::install_unauth_redirect;

#[cfg(feature = "hydrate")]
const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);

/// Summary line above the task grid.
#[must_use]
pub fn task_count_label(total: usize, failing: usize) -> String {
    let noun = if total == 1 { "task" } else { "tasks" };
    if failing == 0 {
        format!("{total} {noun}")
    } else {
        format!("{total} {noun}, {failing} failing")
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tasks = expect_context::<RwSignal<TasksState>>();
    install_unauth_redirect(auth, use_navigate());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !auth.with(AuthState::is_signed_in) {
            return;
        }
        requested.set(true);
        refresh_tasks(tasks);
    });

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(POLL_INTERVAL).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if !auth.with_untracked(AuthState::is_signed_in) {
                    continue;
                }
                refresh_tasks(tasks);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let summary = move || {
        tasks.with(|s| {
            let failing = s.items.iter().filter(|t| t.needs_attention()).count();
            task_count_label(s.items.len(), failing)
        })
    };

    view! {
        <Show
            when=move || auth.with(|a| !a.loading && a.is_signed_in())
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Tasks"</h1>
                    <span class="dashboard-page__summary">{summary}</span>
                    <button
                        class="btn dashboard-page__refresh"
                        disabled=move || tasks.get().loading
                        on:click=move |_| refresh_tasks(tasks)
                    >
                        "Refresh"
                    </button>
                </header>
                <Show when=move || tasks.get().error.is_some()>
                    <p class="dashboard-page__error">{move || tasks.get().error.unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || tasks.get().loaded
                    fallback=move || view! { <p>"Loading tasks..."</p> }
                >
                    <Show
                        when=move || !tasks.get().items.is_empty()
                        fallback=move || {
                            view! {
                                <p class="dashboard-page__empty">
                                    "No tasks yet. Create one from the API or CLI to start monitoring a page."
                                </p>
                            }
                        }
                    >
                        <div class="dashboard-page__cards">
                            {move || {
                                tasks
                                    .get()
                                    .sorted_items()
                                    .into_iter()
                                    .map(|task| view! { <TaskCard task=task/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}

fn refresh_tasks(tasks: RwSignal<TasksState>) {
    if tasks.with_untracked(|s| s.loading) {
        return;
    }
    tasks.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_tasks().await;
        if let Err(e) = &result {
            log::warn!("task list refresh failed: {e}");
        }
        tasks.update(|s| s.apply(result));
    });
}
