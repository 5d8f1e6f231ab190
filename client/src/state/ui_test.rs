use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_expanded_light_and_quiet() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_collapsed);
    assert!(state.toasts.is_empty());
}

#[test]
fn toggle_sidebar_flips() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_collapsed);
    state.toggle_sidebar();
    assert!(!state.sidebar_collapsed);
}

// =============================================================
// Toasts
// =============================================================

#[test]
fn toast_ids_are_unique_and_dismissable() {
    let mut state = UiState::default();
    let a = state.success("Guardado");
    let b = state.error("Falló");
    assert_ne!(a, b);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
}

#[test]
fn toast_queue_drops_oldest_beyond_cap() {
    let mut state = UiState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.info(format!("m{i}"));
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].message, "m2");
}

#[test]
fn toast_link_is_kept() {
    let mut state = UiState::default();
    state.push_toast(ToastKind::Info, "Nueva alerta", Some("/alertas".into()));
    assert_eq!(state.toasts[0].link.as_deref(), Some("/alertas"));
    assert_eq!(ToastKind::Info.css_class(), "toast toast--info");
}
