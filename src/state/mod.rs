//! State Management
//!
//! Global presenter state and the persisted session slot.

pub mod global;
pub mod session;

pub use global::{provide_global_state, ActiveView, GlobalState, ModalId, Severity, UiState};
pub use session::{Role, Session};
