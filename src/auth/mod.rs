//! Authentication
//!
//! Login, registration, and second-factor verification flows.

pub mod flow;

pub use flow::{provide_auth_flow, AuthFlow, AuthStage};
