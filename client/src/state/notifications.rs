//! Foreground push notification model.
//!
//! SYSTEM CONTEXT
//! ==============
//! `util::push` owns the Firebase SDK handles; this module owns every
//! decision around them so it can be tested without a browser:
//!
//! - whether to prompt for notification permission (once per session, only
//!   while the browser still reports `default`);
//! - which owners hold a live `onMessage` subscription, so a page that
//!   re-mounts never registers a second listener;
//! - how an incoming message becomes a toast and an optional OS notification.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::collections::BTreeSet;

use crate::net::types::PushMessage;

/// Route opened when a push toast or OS notification is clicked.
pub const ALERTS_ROUTE: &str = "/alertas";

/// Title used when a message carries none.
pub const DEFAULT_TITLE: &str = "Nueva Alerta";

/// Browser notification permission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Permission {
    #[default]
    Default,
    Granted,
    Denied,
    /// No Notification API (SSR or an unsupported browser).
    Unsupported,
}

impl Permission {
    /// Parse `Notification.permission`.
    #[must_use]
    pub fn from_browser(value: &str) -> Self {
        match value {
            "granted" => Self::Granted,
            "denied" => Self::Denied,
            "default" => Self::Default,
            _ => Self::Unsupported,
        }
    }
}

/// What the UI should do with one foreground message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushEffect {
    pub title: String,
    pub body: String,
    /// Show an OS-level notification in addition to the toast.
    pub system_notification: bool,
    pub link: &'static str,
}

impl PushEffect {
    /// Toast text: `"title: body"`, or just the title without a body.
    #[must_use]
    pub fn toast_text(&self) -> String {
        if self.body.is_empty() { self.title.clone() } else { format!("{}: {}", self.title, self.body) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub permission: Permission,
    requested: bool,
    subscribers: BTreeSet<String>,
    /// Messages received in this session.
    pub received: u64,
}

impl NotificationState {
    #[must_use]
    pub fn new(permission: Permission) -> Self {
        Self { permission, ..Self::default() }
    }

    /// `true` exactly once per session while the permission is undecided.
    pub fn take_permission_request(&mut self) -> bool {
        if self.requested || self.permission != Permission::Default {
            return false;
        }
        self.requested = true;
        true
    }

    /// Record the user's answer to the permission prompt.
    pub fn permission_resolved(&mut self, permission: Permission) {
        self.permission = permission;
        if permission == Permission::Denied {
            log::info!("notification permission denied; not asking again");
        }
    }

    /// Claim the foreground subscription for `owner`. Returns `false` when
    /// the owner already holds one.
    pub fn subscribe(&mut self, owner: &str) -> bool {
        self.subscribers.insert(owner.to_owned())
    }

    /// Release `owner`'s subscription. Returns `false` if it held none.
    pub fn unsubscribe(&mut self, owner: &str) -> bool {
        self.subscribers.remove(owner)
    }

    #[must_use]
    pub fn is_subscribed(&self, owner: &str) -> bool {
        self.subscribers.contains(owner)
    }

    /// Turn an incoming message into its UI effect.
    pub fn on_message(&mut self, message: &PushMessage) -> PushEffect {
        self.received += 1;
        let (title, body) = message
            .title_and_body()
            .unwrap_or_else(|| (DEFAULT_TITLE.to_owned(), String::new()));
        let title = if title.trim().is_empty() { DEFAULT_TITLE.to_owned() } else { title };
        PushEffect {
            title,
            body,
            system_notification: self.permission == Permission::Granted,
            link: ALERTS_ROUTE,
        }
    }
}
