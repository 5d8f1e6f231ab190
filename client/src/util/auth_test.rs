use super::*;
use crate::net::types::User;

fn signed_in() -> SessionState {
    SessionState { user: Some(User { id: 1, ..User::default() }), loading: false }
}

#[test]
fn protected_route_redirects_anonymous_visitor() {
    let state = SessionState { user: None, loading: false };
    assert_eq!(redirect_target(&state, true), Some(LOGIN_ROUTE));
}

#[test]
fn no_redirect_while_loading() {
    assert_eq!(redirect_target(&SessionState::pending(), true), None);
    assert_eq!(redirect_target(&SessionState::pending(), false), None);
}

#[test]
fn protected_route_keeps_signed_in_user() {
    assert_eq!(redirect_target(&signed_in(), true), None);
}

#[test]
fn public_auth_pages_bounce_signed_in_user_home() {
    assert_eq!(redirect_target(&signed_in(), false), Some(HOME_ROUTE));
    assert_eq!(redirect_target(&SessionState::default(), false), None);
}
