use super::*;

fn user(id: i64, first: &str) -> User {
    User { id, first_name: first.to_owned(), last_name_p: "Huamán".to_owned(), ..User::default() }
}

#[test]
fn pending_session_does_not_redirect() {
    assert!(!SessionState::pending().should_redirect());
}

#[test]
fn restored_anonymous_session_redirects() {
    // No browser storage in native tests.
    let state = SessionState::restore();
    assert!(state.user.is_none());
    assert!(state.should_redirect());
}

#[test]
fn login_installs_user_and_clears_loading() {
    let mut state = SessionState::pending();
    state.login(LoginResponse { user: user(5, "Carmen"), token: Some("t".into()) });
    assert!(!state.loading);
    assert_eq!(state.user_id(), Some(5));
    assert_eq!(state.display_name(), "Carmen");
    assert!(!state.should_redirect());
}

#[test]
fn update_user_replaces_session_user() {
    let mut state = SessionState::pending();
    state.login(LoginResponse { user: user(5, "Carmen"), token: None });
    state.update_user(user(5, "Carmela"));
    assert_eq!(state.display_name(), "Carmela");
}

#[test]
fn logout_clears_user() {
    let mut state = SessionState::pending();
    state.login(LoginResponse { user: user(5, "Carmen"), token: None });
    state.logout();
    assert!(state.user.is_none());
    assert!(state.should_redirect());
    assert_eq!(state.display_name(), "");
}

#[test]
fn zero_id_is_not_an_identified_user() {
    let state = SessionState { user: Some(user(0, "X")), loading: false };
    assert_eq!(state.user_id(), None);
}

#[test]
fn display_name_falls_back_to_full_name() {
    let state = SessionState { user: Some(user(1, "  ")), loading: false };
    assert_eq!(state.display_name(), "Huamán");
}

#[test]
fn remembered_login_absent_outside_browser() {
    RememberedLogin::apply(true, "12345678", "secret");
    assert_eq!(RememberedLogin::load(), None);
}
