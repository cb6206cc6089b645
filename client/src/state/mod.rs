//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `tasks`, `history`) so individual
//! pages and components can depend on small focused models.

pub mod auth;
pub mod history;
pub mod tasks;
