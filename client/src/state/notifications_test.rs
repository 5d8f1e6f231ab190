use std::collections::BTreeMap;

use super::*;
use crate::net::types::PushNotification;

fn message(title: Option<&str>, body: Option<&str>) -> PushMessage {
    PushMessage {
        notification: Some(PushNotification { title: title.map(str::to_owned), body: body.map(str::to_owned) }),
        data: None,
    }
}

// =============================================================
// Permission
// =============================================================

#[test]
fn permission_is_requested_once_while_default() {
    let mut state = NotificationState::new(Permission::Default);
    assert!(state.take_permission_request());
    assert!(!state.take_permission_request());
}

#[test]
fn denied_or_granted_is_never_prompted() {
    assert!(!NotificationState::new(Permission::Denied).take_permission_request());
    assert!(!NotificationState::new(Permission::Granted).take_permission_request());
    assert!(!NotificationState::new(Permission::Unsupported).take_permission_request());
}

#[test]
fn denial_after_prompt_is_not_retried() {
    let mut state = NotificationState::new(Permission::Default);
    assert!(state.take_permission_request());
    state.permission_resolved(Permission::Denied);
    assert!(!state.take_permission_request());
}

#[test]
fn browser_permission_strings() {
    assert_eq!(Permission::from_browser("granted"), Permission::Granted);
    assert_eq!(Permission::from_browser("denied"), Permission::Denied);
    assert_eq!(Permission::from_browser("default"), Permission::Default);
    assert_eq!(Permission::from_browser(""), Permission::Unsupported);
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn remount_does_not_duplicate_listener() {
    let mut state = NotificationState::default();
    assert!(state.subscribe("alerts-page"));
    assert!(!state.subscribe("alerts-page"));
    assert!(state.unsubscribe("alerts-page"));
    assert!(!state.is_subscribed("alerts-page"));
    assert!(state.subscribe("alerts-page"));
}

#[test]
fn owners_are_independent() {
    let mut state = NotificationState::default();
    assert!(state.subscribe("layout"));
    assert!(state.subscribe("alerts-page"));
    assert!(state.unsubscribe("layout"));
    assert!(state.is_subscribed("alerts-page"));
    assert!(!state.unsubscribe("layout"));
}

// =============================================================
// Messages
// =============================================================

#[test]
fn message_becomes_toast_and_os_notification_when_granted() {
    let mut state = NotificationState::new(Permission::Granted);
    let effect = state.on_message(&message(Some("Vacuna"), Some("Mañana 9am")));
    assert_eq!(effect.toast_text(), "Vacuna: Mañana 9am");
    assert!(effect.system_notification);
    assert_eq!(effect.link, ALERTS_ROUTE);
    assert_eq!(state.received, 1);
}

#[test]
fn no_os_notification_without_permission() {
    let mut state = NotificationState::new(Permission::Denied);
    assert!(!state.on_message(&message(Some("x"), None)).system_notification);
}

#[test]
fn missing_title_uses_default() {
    let mut state = NotificationState::default();
    let effect = state.on_message(&PushMessage::default());
    assert_eq!(effect.toast_text(), DEFAULT_TITLE);
    let effect = state.on_message(&message(Some("  "), Some("cuerpo")));
    assert_eq!(effect.title, DEFAULT_TITLE);
}

#[test]
fn data_only_message_uses_data_fields() {
    let mut data = BTreeMap::new();
    data.insert("title".to_owned(), "Control".to_owned());
    data.insert("body".to_owned(), "Hoy".to_owned());
    let mut state = NotificationState::default();
    let effect = state.on_message(&PushMessage { notification: None, data: Some(data) });
    assert_eq!(effect.toast_text(), "Control: Hoy");
}
