//! Key/value table used on both sides of a state comparison.

#[cfg(test)]
#[path = "state_table_test.rs"]
mod state_table_test;

use executions::{FieldDiff, StateField};
use leptos::prelude::*;

/// One rendered row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateRow {
    pub key: String,
    pub display: String,
    pub changed: bool,
}

impl From<&FieldDiff> for StateRow {
    fn from(field: &FieldDiff) -> Self {
        Self { key: field.key.clone(), display: field.display(), changed: field.changed }
    }
}

impl From<&StateField> for StateRow {
    fn from(field: &StateField) -> Self {
        Self { key: field.key.clone(), display: field.display(), changed: false }
    }
}

#[component]
pub fn StateTable(title: &'static str, rows: Vec<StateRow>) -> impl IntoView {
    view! {
        <div class="state-table">
            <h4 class="state-table__title">{title}</h4>
            <table>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr class="state-table__row" class:state-table__row--changed=row.changed>
                                    <th scope="row" class="state-table__key">{row.key}</th>
                                    <td class="state-table__value">{row.display}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
