//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps same-origin `/api` calls and `types` defines the JSON schema
//! shared with the monitoring backend.

pub mod api;
pub mod types;
