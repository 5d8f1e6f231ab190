//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome, list scaffolding and entity
//! dialogs while reading/writing shared state from Leptos context providers.

pub mod channel_checkboxes;
pub mod charts;
pub mod dialog;
pub mod feedback;
pub mod layout;
pub mod list_page;
pub mod location_selector;
pub mod map;
pub mod modals;
pub mod push_listener;
pub mod toast;
