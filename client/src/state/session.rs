//! Authenticated session of the current dashboard user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is provided at the app root. Route guards
//! read it to redirect anonymous visitors, forms read it for the acting user
//! id, and the header reads it for the greeting. Every mutation goes through
//! `login`, `update_user` or `logout`, which also keep localStorage in sync.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{LoginResponse, User};
use crate::util::storage;

/// Session user plus a loading flag covering the pre-hydration window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// Initial state before the browser session has been read.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Read the persisted session (browser only).
    #[must_use]
    pub fn restore() -> Self {
        Self { user: storage::load_json::<User>(storage::USER_KEY), loading: false }
    }

    /// Install a fresh login and persist it.
    pub fn login(&mut self, response: LoginResponse) {
        storage::save_json(storage::USER_KEY, &response.user);
        match response.token.as_deref() {
            Some(token) => storage::save_string(storage::TOKEN_KEY, token),
            None => storage::remove(storage::TOKEN_KEY),
        }
        log::info!("session started for user {}", response.user.id);
        self.user = Some(response.user);
        self.loading = false;
    }

    /// Replace the session user, e.g. after a profile edit.
    pub fn update_user(&mut self, user: User) {
        storage::save_json(storage::USER_KEY, &user);
        self.user = Some(user);
    }

    /// Drop the session and its persisted copy.
    pub fn logout(&mut self) {
        storage::remove(storage::USER_KEY);
        storage::remove(storage::TOKEN_KEY);
        self.user = None;
        self.loading = false;
    }

    /// Id of the acting user; `None` when anonymous or unidentified.
    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id).filter(|id| *id > 0)
    }

    /// Greeting name for the header.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| if u.first_name.trim().is_empty() { u.full_name() } else { u.first_name.trim().to_owned() })
            .unwrap_or_default()
    }

    /// `true` once loading finished without a user.
    #[must_use]
    pub fn should_redirect(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}

/// Remember-me credentials for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RememberedLogin {
    pub dni: String,
    pub password: String,
}

impl RememberedLogin {
    /// Both values must be present to count as remembered.
    #[must_use]
    pub fn load() -> Option<Self> {
        let dni = storage::load_string(storage::REMEMBERED_DNI_KEY)?;
        let password = storage::load_string(storage::REMEMBERED_PASSWORD_KEY)?;
        Some(Self { dni, password })
    }

    /// Store or forget the credentials after a successful login.
    pub fn apply(remember: bool, dni: &str, password: &str) {
        if remember {
            storage::save_string(storage::REMEMBERED_DNI_KEY, dni);
            storage::save_string(storage::REMEMBERED_PASSWORD_KEY, password);
        } else {
            storage::remove(storage::REMEMBERED_DNI_KEY);
            storage::remove(storage::REMEMBERED_PASSWORD_KEY);
        }
    }
}
