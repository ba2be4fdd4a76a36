//! App Root Component
//!
//! Bootstraps the session, decides the initial view, and mounts the
//! page switcher plus the overlay hosts.

use leptos::*;

use crate::auth::provide_auth_flow;
use crate::components::{AuthModals, ToastStack};
use crate::pages::{AdminDashboard, Home, UserDashboard};
use crate::state::global::{provide_global_state, ActiveView, GlobalState};
use crate::state::session::Role;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    provide_auth_flow(state);

    // Pick the initial view from the persisted session, read once at
    // startup: no token means the homepage.
    match state.session.get_untracked() {
        Some(session) if session.role == Role::Admin => state.show_view("admin-dashboard"),
        Some(_) => state.show_view("user-dashboard"),
        None => state.show_view("homepage-view"),
    }

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            // Exactly one view is mounted at a time
            {move || match state.ui.with(|ui| ui.view) {
                ActiveView::Homepage => view! { <Home /> }.into_view(),
                ActiveView::UserDashboard => view! { <UserDashboard /> }.into_view(),
                ActiveView::AdminDashboard => view! { <AdminDashboard /> }.into_view(),
            }}

            // Overlays
            <AuthModals />

            // Toast notifications
            <ToastStack />
        </div>
    }
}
