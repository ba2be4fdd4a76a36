//! Authentication Flow
//!
//! One context object drives the whole session lifecycle:
//! `Anonymous -> AwaitingSecondFactor -> Authenticated(role)`. The
//! pending verification identifier lives inside the stage itself, so
//! there is no hidden cross-call state to leak between attempts.

use leptos::*;
use serde_json::{json, Value};

use crate::api::client as api;
use crate::state::global::{GlobalState, ModalId, Severity};
use crate::state::session::{self, Role, Session};

const VERIFICATION_REQUIRED: &str = "Verification code is required.";

/// Where the session currently stands.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthStage {
    Anonymous,
    /// Password step accepted; holding the opaque identifier until the
    /// one-time code is submitted or the flow is abandoned.
    AwaitingSecondFactor { user_id: Value },
    Authenticated(Role),
}

/// Authentication context provided to the component tree.
#[derive(Clone, Copy)]
pub struct AuthFlow {
    pub stage: RwSignal<AuthStage>,
    state: GlobalState,
}

pub fn provide_auth_flow(state: GlobalState) {
    provide_context(AuthFlow::new(state));
}

impl AuthFlow {
    /// A persisted session means the password and code steps already
    /// happened in an earlier page load.
    pub fn new(state: GlobalState) -> Self {
        let stage = match state.session.get_untracked() {
            Some(session) => AuthStage::Authenticated(session.role),
            None => AuthStage::Anonymous,
        };
        Self {
            stage: create_rw_signal(stage),
            state,
        }
    }

    /// Password step of the user login. Success opens the second-factor
    /// modal; no session exists yet.
    pub async fn login_user(&self, username: &str, password: &str) {
        match api::login(username, password).await {
            Ok(user_id) => {
                self.stage.set(AuthStage::AwaitingSecondFactor { user_id });
                self.state.close_modals();
                self.state.show_modal(ModalId::SecondFactor);
            }
            Err(message) => self.state.notify(&message, Severity::Error),
        }
    }

    /// Admin login establishes the session in one step.
    pub async fn login_admin(&self, username: &str, password: &str) {
        match api::admin_login(username, password).await {
            Ok(issued) => {
                let greeting = format!("Welcome, {}!", issued.username);
                self.establish(issued, Role::Admin);
                self.state.notify(&greeting, Severity::Success);
            }
            Err(message) => self.state.notify(&message, Severity::Error),
        }
    }

    /// Registration is a side path: it never changes the session stage.
    pub async fn register(&self, username: &str, email: &str, password: &str) {
        match api::register(username, email, password).await {
            Ok(()) => {
                self.state
                    .notify("Registration successful! Please log in.", Severity::Success);
                self.state.close_modals();
                self.state.show_modal(ModalId::UserLogin);
            }
            Err(message) => self.state.notify(&message, Severity::Error),
        }
    }

    /// Code step of the user login. Rejects locally, without touching
    /// the network, when there is no code or no pending identifier.
    pub async fn verify_second_factor(&self, code: &str) {
        let body = match second_factor_request(code, &self.stage.get_untracked()) {
            Ok(body) => body,
            Err(message) => {
                self.state.notify(message, Severity::Error);
                return;
            }
        };

        match api::verify_login(&body).await {
            Ok(issued) => {
                let greeting = format!("Welcome back, {}!", issued.username);
                self.establish(issued, Role::User);
                self.state.notify(&greeting, Severity::Success);
            }
            Err(message) => self.state.notify(&message, Severity::Error),
        }
    }

    /// Full reset from any stage; any pending second-factor state is
    /// discarded along with the persisted session.
    pub fn logout(&self) {
        session::terminate();
    }

    /// Persist the issued token, advance the stage, and hand off to the
    /// role's dashboard. Consumes any pending verification state.
    fn establish(&self, issued: api::SessionIssued, role: Role) {
        let session = Session {
            token: issued.token,
            username: issued.username,
            role,
        };
        session::store(&session);
        self.state.session.set(Some(session));
        self.stage.set(AuthStage::Authenticated(role));
        self.state.close_modals();
        self.state.show_dashboard(role);
    }
}

/// Build the verification request body, or reject before any network
/// traffic happens.
fn second_factor_request(code: &str, stage: &AuthStage) -> Result<Value, &'static str> {
    let AuthStage::AwaitingSecondFactor { user_id } = stage else {
        return Err(VERIFICATION_REQUIRED);
    };
    if code.trim().is_empty() {
        return Err(VERIFICATION_REQUIRED);
    }
    Ok(json!({ "user_id": user_id, "code": code }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_code_never_builds_a_request() {
        let stage = AuthStage::AwaitingSecondFactor { user_id: json!(42) };
        assert_eq!(second_factor_request("", &stage), Err(VERIFICATION_REQUIRED));
        assert_eq!(second_factor_request("   ", &stage), Err(VERIFICATION_REQUIRED));
    }

    #[test]
    fn test_missing_pending_identifier_never_builds_a_request() {
        assert_eq!(
            second_factor_request("000000", &AuthStage::Anonymous),
            Err(VERIFICATION_REQUIRED)
        );
        assert_eq!(
            second_factor_request("000000", &AuthStage::Authenticated(Role::User)),
            Err(VERIFICATION_REQUIRED)
        );
    }

    #[test]
    fn test_request_round_trips_the_opaque_identifier() {
        let stage = AuthStage::AwaitingSecondFactor { user_id: json!(42) };
        let body = second_factor_request("000000", &stage).unwrap();
        assert_eq!(body, json!({ "user_id": 42, "code": "000000" }));

        // Identifiers issued as strings stay strings.
        let stage = AuthStage::AwaitingSecondFactor {
            user_id: json!("66f0c2"),
        };
        let body = second_factor_request("123456", &stage).unwrap();
        assert_eq!(body, json!({ "user_id": "66f0c2", "code": "123456" }));
    }
}
