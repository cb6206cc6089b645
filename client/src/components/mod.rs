//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and the execution-history comparison while
//! reading shared state from Leptos context providers.

pub mod execution_history;
pub mod navbar;
pub mod state_table;
pub mod task_card;
