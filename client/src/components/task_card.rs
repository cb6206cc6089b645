//! Dashboard card for a single monitoring task.

#[cfg(test)]
#[path = "task_card_test.rs"]
mod task_card_test;

use executions::format_timestamp;
use leptos::prelude::*;
use time::UtcOffset;

use crate::net::types::{Task, TaskStatus};

/// Short status chip text.
#[must_use]
pub fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Active => "Active",
        TaskStatus::Paused => "Paused",
        TaskStatus::Failing => "Failing",
        TaskStatus::Unknown => "Unknown",
    }
}

/// CSS modifier for the status chip.
#[must_use]
pub fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Active => "task-card__status--active",
        TaskStatus::Paused => "task-card__status--paused",
        TaskStatus::Failing => "task-card__status--failing",
        TaskStatus::Unknown => "task-card__status--unknown",
    }
}

/// "Last run" line for a card.
#[must_use]
pub fn last_run_label(last_run_at: Option<&str>, offset: UtcOffset) -> String {
    match last_run_at {
        Some(raw) if !raw.trim().is_empty() => format!("Last run {}", format_timestamp(raw, offset)),
        _ => "Never run".to_owned(),
    }
}

/// A clickable card linking to the task's detail page.
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let href = format!("/tasks/{}", task.id);
    let last_run = last_run_label(task.last_run_at.as_deref(), crate::util::time::viewer_offset());
    let chip_class = format!("task-card__status {}", status_class(task.status));
    let attention = task.needs_attention();

    view! {
        <a class="task-card" class:task-card--attention=attention href=href>
            <span class="task-card__header">
                <span class="task-card__name">{task.name}</span>
                <span class=chip_class>{status_label(task.status)}</span>
            </span>
            <span class="task-card__url">{task.url}</span>
            {task.condition.map(|c| view! { <span class="task-card__condition">{c}</span> })}
            {task.last_change_summary.map(|s| view! { <span class="task-card__summary">{s}</span> })}
            <span class="task-card__meta">
                <span>{task.schedule}</span>
                <span>{last_run}</span>
            </span>
        </a>
    }
}
