//! UI Components
//!
//! Reusable Leptos components for the banking front-end.

pub mod auth_forms;
pub mod chatbot;
pub mod loading;
pub mod modal;
pub mod nav;
pub mod toast;

pub use auth_forms::AuthModals;
pub use chatbot::Chatbot;
pub use loading::Loading;
pub use modal::Modal;
pub use nav::SidebarNav;
pub use toast::ToastStack;
