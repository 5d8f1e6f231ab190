//! User-facing outcome reporting: toasts plus session expiry.
//!
//! Handles are captured synchronously while the component is being built so
//! they can be used from spawned futures, which run outside the reactive
//! owner.

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Copyable handle to the toast stack and the session.
#[derive(Clone, Copy)]
pub struct Feedback {
    ui: RwSignal<UiState>,
    session: RwSignal<SessionState>,
}

impl Feedback {
    /// Grab the app-level signals from context.
    pub fn expect() -> Self {
        Self { ui: expect_context(), session: expect_context() }
    }

    pub fn success(self, message: impl Into<String>) {
        self.ui.update(|u| {
            u.success(message);
        });
    }

    pub fn info(self, message: impl Into<String>) {
        self.ui.update(|u| {
            u.info(message);
        });
    }

    /// Error toast for a client-side problem (validation, geolocation).
    pub fn warn(self, message: impl Into<String>) {
        self.ui.update(|u| {
            u.error(message);
        });
    }

    /// Log a failed backend call and toast its message. A 401/403 also ends
    /// the session, which sends the user back to `/login`.
    pub fn api_error(self, context: &str, error: &ApiError) {
        log::error!("{context}: {error}");
        self.ui.update(|u| {
            u.error(error.user_message());
        });
        if error.is_unauthorized() {
            self.session.update(SessionState::logout);
        }
    }
}
