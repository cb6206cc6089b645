//! Execution-history comparison view for one task.
//!
//! DESIGN
//! ======
//! Rendering is a pure projection of [`HistoryDisplay`]. Filtering, neighbour
//! selection, and per-field change flags all happen in the `executions`
//! crate before anything reaches this module.

use executions::{HistoryEntry, PREVIOUS_STATE_LABEL, StateComparison};
use leptos::prelude::*;

use crate::components::state_table::{StateRow, StateTable};
use crate::state::history::HistoryDisplay;

/// Message shown when no execution is relevant.
pub const EMPTY_HISTORY_MESSAGE: &str = "No changes detected yet.";

#[component]
pub fn ExecutionHistory(#[prop(into)] display: Signal<HistoryDisplay>) -> impl IntoView {
    view! {
        <section class="execution-history">
            {move || match display.get() {
                HistoryDisplay::Loading => {
                    view! { <p class="execution-history__status">"Loading history..."</p> }.into_any()
                }
                HistoryDisplay::Failed(e) => {
                    view! {
                        <p class="execution-history__status execution-history__status--error">
                            {e}
                        </p>
                    }
                        .into_any()
                }
                HistoryDisplay::Ready(history) if history.is_empty() => {
                    view! { <p class="execution-history__empty">{EMPTY_HISTORY_MESSAGE}</p> }.into_any()
                }
                HistoryDisplay::Ready(history) => {
                    let entries = history.entries().to_vec();
                    view! {
                        <ol class="execution-history__list">
                            <For
                                each=move || entries.clone()
                                key=|entry| entry.id.clone()
                                children=|entry| view! { <HistoryEntryBlock entry=entry/> }
                            />
                        </ol>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn HistoryEntryBlock(entry: HistoryEntry) -> impl IntoView {
    let HistoryEntry { header, summary, comparison, answer, .. } = entry;
    let badge = header.badge();
    let met = header.condition_met;
    view! {
        <li class="history-entry" class:history-entry--met=met>
            <div class="history-entry__header">
                <time class="history-entry__time">{header.started_at}</time>
                {badge.map(|badge| view! { <span class="history-entry__badge">{badge}</span> })}
            </div>
            {summary.map(|s| view! { <p class="history-entry__summary">{s}</p> })}
            {comparison.map(|c| view! { <StateCompare comparison=c/> })}
            {answer.map(|a| view! { <p class="history-entry__answer">{a}</p> })}
        </li>
    }
}

#[component]
fn StateCompare(comparison: StateComparison) -> impl IntoView {
    let current_title = comparison.current_label.as_str();
    let current_rows: Vec<StateRow> = comparison.current.iter().map(StateRow::from).collect();
    let previous = comparison
        .previous
        .map(|fields| fields.iter().map(StateRow::from).collect::<Vec<_>>());
    let two_column = previous.is_some();

    view! {
        <div class="state-compare" class:state-compare--split=two_column>
            {previous.map(|rows| view! { <StateTable title=PREVIOUS_STATE_LABEL rows=rows/> })}
            <StateTable title=current_title rows=current_rows/>
        </div>
    }
}
