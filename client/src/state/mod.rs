//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `listing`, `location`, forms, etc.)
//! so components depend on small focused models. Everything here is plain
//! Rust with no browser calls beyond `util::storage`, and is tested natively.

pub mod channels;
pub mod forms;
pub mod listing;
pub mod location;
pub mod notifications;
pub mod reports;
pub mod session;
pub mod ui;
pub mod visit_queue;
