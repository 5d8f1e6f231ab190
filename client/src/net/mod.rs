//! Networking modules for the outreach REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles transport and per-endpoint calls, `reports` the statistics
//! endpoints, `error` the shared failure type and `types` the wire schema.

pub mod api;
pub mod error;
pub mod reports;
pub mod types;
