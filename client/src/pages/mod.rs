//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod changelog;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod task_detail;
pub mod waitlist;
