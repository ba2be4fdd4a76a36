//! Global Application State
//!
//! Reactive state management using Leptos signals. All page-level
//! visibility (active view, open modals, toast stack) lives in a plain
//! [`UiState`] value behind one signal, so the transition rules stay
//! testable without a rendering surface.

use leptos::*;

use crate::state::session::{self, Role, Session};

/// Default lifetime of a toast before it expires on its own.
pub const TOAST_DURATION_MS: u32 = 4000;

/// Full-page views. Exactly one is visible at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveView {
    Homepage,
    UserDashboard,
    AdminDashboard,
}

impl ActiveView {
    /// Resolve a view by its element-style name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "homepage-view" => Some(ActiveView::Homepage),
            "user-dashboard" => Some(ActiveView::UserDashboard),
            "admin-dashboard" => Some(ActiveView::AdminDashboard),
            _ => None,
        }
    }
}

/// Named overlays. More than one can be open at a time; closing always
/// collapses the whole set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalId {
    UserLogin,
    AdminLogin,
    Register,
    SecondFactor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A single stacked notification. Each toast owns its expiry timer.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
}

/// Everything the presenter needs to decide what is on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub view: ActiveView,
    pub open_modals: Vec<ModalId>,
    pub toasts: Vec<Toast>,
    next_toast: u32,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            view: ActiveView::Homepage,
            open_modals: Vec::new(),
            toasts: Vec::new(),
            next_toast: 0,
        }
    }
}

impl UiState {
    /// Switch to the named view. Returns `false` when the name did not
    /// resolve and the homepage was shown instead, so the screen is
    /// never left blank.
    pub fn show_view(&mut self, name: &str) -> bool {
        match ActiveView::from_name(name) {
            Some(view) => {
                self.view = view;
                true
            }
            None => {
                self.view = ActiveView::Homepage;
                false
            }
        }
    }

    /// Reveal one overlay without touching the others.
    pub fn show_modal(&mut self, modal: ModalId) {
        if !self.open_modals.contains(&modal) {
            self.open_modals.push(modal);
        }
    }

    pub fn close_modals(&mut self) {
        self.open_modals.clear();
    }

    pub fn is_modal_open(&self, modal: ModalId) -> bool {
        self.open_modals.contains(&modal)
    }

    /// Append a toast and hand back its id for later dismissal.
    pub fn push_toast(&mut self, message: &str, severity: Severity) -> u32 {
        let id = self.next_toast;
        self.next_toast += 1;
        self.toasts.push(Toast {
            id,
            message: message.to_string(),
            severity,
        });
        id
    }

    /// No-op for ids that already expired or were dismissed by hand.
    pub fn dismiss_toast(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Global application state provided to all components.
#[derive(Clone, Copy)]
pub struct GlobalState {
    pub ui: RwSignal<UiState>,
    /// The established session, mirrored from persisted storage.
    pub session: RwSignal<Option<Session>>,
}

/// Provide global state to the component tree. The persisted session
/// is read exactly once, here.
pub fn provide_global_state() {
    let state = GlobalState {
        ui: create_rw_signal(UiState::default()),
        session: create_rw_signal(session::load()),
    };
    provide_context(state);
}

impl GlobalState {
    /// Show the named view, falling back to the homepage with a
    /// diagnostic when the name is unknown.
    pub fn show_view(&self, name: &str) {
        let resolved = self.ui.try_update(|ui| ui.show_view(name));
        if resolved == Some(false) {
            web_sys::console::error_1(
                &format!("View \"{name}\" not found, falling back to homepage.").into(),
            );
        }
    }

    pub fn show_dashboard(&self, role: Role) {
        match role {
            Role::Admin => self.show_view("admin-dashboard"),
            Role::User => self.show_view("user-dashboard"),
        }
    }

    pub fn show_modal(&self, modal: ModalId) {
        self.ui.update(|ui| ui.show_modal(modal));
    }

    pub fn close_modals(&self) {
        self.ui.update(|ui| ui.close_modals());
    }

    /// Show a transient notification with the default duration.
    pub fn notify(&self, message: &str, severity: Severity) {
        self.notify_for(message, severity, TOAST_DURATION_MS);
    }

    /// Show a transient notification that expires after `duration_ms`
    /// unless dismissed by hand first.
    pub fn notify_for(&self, message: &str, severity: Severity, duration_ms: u32) {
        let Some(id) = self.ui.try_update(|ui| ui.push_toast(message, severity)) else {
            return;
        };
        let ui = self.ui;
        gloo_timers::callback::Timeout::new(duration_ms, move || {
            let _ = ui.try_update(|u| u.dismiss_toast(id));
        })
        .forget();
    }

    pub fn dismiss_toast(&self, id: u32) {
        self.ui.update(|ui| ui.dismiss_toast(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_view_switches_exactly_one() {
        let mut ui = UiState::default();
        assert!(ui.show_view("user-dashboard"));
        assert_eq!(ui.view, ActiveView::UserDashboard);
        assert!(ui.show_view("admin-dashboard"));
        assert_eq!(ui.view, ActiveView::AdminDashboard);
    }

    #[test]
    fn test_unknown_view_falls_back_to_homepage() {
        let mut ui = UiState::default();
        ui.show_view("admin-dashboard");
        assert!(!ui.show_view("reports-view"));
        assert_eq!(ui.view, ActiveView::Homepage);
    }

    #[test]
    fn test_show_modal_is_additive_and_deduplicated() {
        let mut ui = UiState::default();
        ui.show_modal(ModalId::UserLogin);
        ui.show_modal(ModalId::SecondFactor);
        ui.show_modal(ModalId::UserLogin);
        assert_eq!(ui.open_modals, vec![ModalId::UserLogin, ModalId::SecondFactor]);
    }

    #[test]
    fn test_close_modals_is_idempotent() {
        let mut ui = UiState::default();
        ui.show_modal(ModalId::Register);
        ui.close_modals();
        assert!(ui.open_modals.is_empty());
        ui.close_modals();
        assert!(ui.open_modals.is_empty());
    }

    #[test]
    fn test_toasts_stack_and_dismiss_independently() {
        let mut ui = UiState::default();
        let first = ui.push_toast("saved", Severity::Success);
        let second = ui.push_toast("failed", Severity::Error);
        assert_ne!(first, second);
        assert_eq!(ui.toasts.len(), 2);

        ui.dismiss_toast(first);
        assert_eq!(ui.toasts.len(), 1);
        assert_eq!(ui.toasts[0].id, second);

        // Expiry of an already-dismissed toast changes nothing.
        ui.dismiss_toast(first);
        assert_eq!(ui.toasts.len(), 1);
    }
}
