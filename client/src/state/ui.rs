//! Local UI chrome state (sidebar, theme, toasts).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`session`,
//! listings) so pages can raise feedback without owning any rendering.
//! Toasts are a bounded queue; the oldest is dropped once the cap is hit.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Toasts kept on screen at once.
pub const MAX_TOASTS: usize = 5;

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    /// Route opened when the toast is clicked.
    pub link: Option<String>,
}

/// UI state for the sidebar, theme and toast stack.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl UiState {
    /// Queue a toast and return its id.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>, link: Option<String>) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast { id, kind, message: message.into(), link });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push_toast(ToastKind::Success, message, None)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push_toast(ToastKind::Error, message, None)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push_toast(ToastKind::Info, message, None)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}
