//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route applies the same anonymous-visitor redirect, and the
//! public login/register pages bounce signed-in users back to the home page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/";

/// Where a page should send the visitor, if anywhere.
#[must_use]
pub fn redirect_target(session: &SessionState, protected: bool) -> Option<&'static str> {
    if session.loading {
        return None;
    }
    match (protected, session.user.is_some()) {
        (true, false) => Some(LOGIN_ROUTE),
        (false, true) => Some(HOME_ROUTE),
        _ => None,
    }
}

fn install_redirect<F>(session: RwSignal<SessionState>, protected: bool, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(&session.get(), protected) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Redirect to `/login` whenever the session has loaded without a user.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(session, true, navigate);
}

/// Redirect signed-in users away from the public auth pages.
pub fn install_authed_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(session, false, navigate);
}
