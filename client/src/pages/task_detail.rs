//! Task detail page: task header plus its execution history comparison.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routed at `/tasks/:id`. The task and its executions are fetched on entry
//! and on manual refresh; the comparison itself is derived by the
//! `executions` crate every time the history signal changes.

#[cfg(test)]
#[path = "task_detail_test.rs"]
mod task_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::execution_history::ExecutionHistory;
use crate::components::task_card::{last_run_label, status_class, status_label};
use crate::net::types::Task;
use crate::state::auth::AuthState;
use crate::state::history::{ExecutionHistoryState, HistoryDisplay};
use crate::util::auth::install_unauth_redirect;
use crate::util::time::viewer_offset;

/// Header badge text for the number of highlighted fields.
#[must_use]
pub fn changed_fields_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 field changed".to_owned()),
        n => Some(format!("{n} fields changed")),
    }
}

#[component]
pub fn TaskDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let task_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
    let task = RwSignal::new(None::<Result<Task, String>>);
    let history = RwSignal::new(ExecutionHistoryState::default());
    let offset = viewer_offset();

    Effect::new(move || {
        let id = task_id.get();
        if id.is_empty() || !auth.with(AuthState::is_signed_in) {
            return;
        }
        load_task(id, task, history);
    });

    let display = Signal::derive(move || history.with(|h| h.display(offset)));
    let changed = move || match display.get() {
        HistoryDisplay::Ready(ready) => changed_fields_label(ready.changed_field_count()),
        HistoryDisplay::Loading | HistoryDisplay::Failed(_) => None,
    };
    let on_refresh = move |_| {
        let id = task_id.get_untracked();
        if !id.is_empty() {
            load_task(id, task, history);
        }
    };

    view! {
        <div class="task-detail-page">
            <a class="task-detail-page__back" href="/">"← All tasks"</a>
            {move || match task.get() {
                None => view! { <p>"Loading task..."</p> }.into_any(),
                Some(Err(e)) => {
                    view! { <p class="task-detail-page__error">{e}</p> }.into_any()
                }
                Some(Ok(t)) => view! { <TaskHeader task=t offset=offset/> }.into_any(),
            }}
            <header class="task-detail-page__history-header">
                <h2>"Execution history"</h2>
                {move || changed().map(|label| view! { <span class="task-detail-page__changed">{label}</span> })}
                <button
                    class="btn task-detail-page__refresh"
                    disabled=move || history.with(ExecutionHistoryState::is_refreshing)
                    on:click=on_refresh
                >
                    "Refresh"
                </button>
            </header>
            <ExecutionHistory display=display/>
        </div>
    }
}

#[component]
fn TaskHeader(task: Task, offset: time::UtcOffset) -> impl IntoView {
    let chip_class = format!("task-card__status {}", status_class(task.status));
    let last_run = last_run_label(task.last_run_at.as_deref(), offset);
    view! {
        <header class="task-detail-page__header">
            <h1>{task.name}</h1>
            <span class=chip_class>{status_label(task.status)}</span>
            <a class="task-detail-page__url" href=task.url.clone() target="_blank" rel="noopener noreferrer">
                {task.url.clone()}
            </a>
            {task.condition.map(|c| view! { <p class="task-detail-page__condition">{c}</p> })}
            <p class="task-detail-page__meta">{task.schedule}" · "{last_run}</p>
        </header>
    }
}

/// Fetch the task and its history for `task_id`. Both responses are dropped
/// if another load started in the meantime.
fn load_task(task_id: String, task: RwSignal<Option<Result<Task, String>>>, history: RwSignal<ExecutionHistoryState>) {
    if history.with_untracked(|h| h.task_id.as_deref() != Some(task_id.as_str())) {
        task.set(None);
    }
    let mut seq = 0;
    history.update(|h| seq = h.begin(&task_id));

    #[cfg(feature = "hydrate")]
    {
        let header_id = task_id.clone();
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_task(&header_id).await;
            if history.with_untracked(|h| h.is_current(seq)) {
                task.set(Some(fetched));
            } else {
                log::debug!("dropped stale task response for {header_id}");
            }
        });
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_executions(&task_id).await;
            if let Err(e) = &result {
                log::warn!("execution history for task {task_id} failed: {e}");
            }
            history.update(|h| {
                if !h.finish(seq, result) {
                    log::debug!("dropped stale execution history response for task {task_id}");
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (task_id, task, seq);
}
