//! HTTP API Gateway
//!
//! A single wrapper around all backend calls. It attaches the session
//! token, normalizes every response into a uniform outcome callers can
//! branch on, and converts transport faults into an error message
//! instead of letting them propagate. Tabular (CSV) responses are
//! passed through as raw text for download handling.

use serde_json::{json, Value};

use crate::state::session;

/// All endpoints are served under this prefix.
pub const API_BASE: &str = "/api";

/// Uniform message for any transport-level or parse fault.
pub const NETWORK_ERROR: &str = "Network or server error.";

/// Surfaced when a tabular response arrives with a non-success status.
pub const DOWNLOAD_FAILED: &str = "Failed to download file";

/// The one endpoint whose 401 must not tear the session down.
const LOGIN_ENDPOINT: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// Response body after classification.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Json(Value),
    /// Raw CSV text, treated as a file download rather than data.
    Tabular(String),
}

/// What every gateway call resolves to. `ok` mirrors HTTP success;
/// callers branch on it plus [`Outcome::message`], never on error
/// types.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub ok: bool,
    pub payload: Payload,
}

impl Outcome {
    fn network_failure() -> Self {
        Self {
            ok: false,
            payload: Payload::Json(json!({ "message": NETWORK_ERROR })),
        }
    }

    /// Human-readable failure message supplied by the server, or the
    /// uniform network error when none is present.
    pub fn message(&self) -> String {
        match &self.payload {
            Payload::Json(data) => data
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(NETWORK_ERROR)
                .to_string(),
            Payload::Tabular(_) => NETWORK_ERROR.to_string(),
        }
    }
}

fn is_tabular(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("text/csv"))
}

/// Map a raw response onto the uniform outcome. A body that is neither
/// CSV nor valid JSON counts as a transport fault.
fn classify(status: u16, content_type: Option<&str>, body: &str) -> Outcome {
    let ok = (200..300).contains(&status);
    if is_tabular(content_type) {
        if ok {
            Outcome {
                ok: true,
                payload: Payload::Tabular(body.to_string()),
            }
        } else {
            Outcome {
                ok: false,
                payload: Payload::Json(json!({ "message": DOWNLOAD_FAILED })),
            }
        }
    } else {
        match serde_json::from_str(body) {
            Ok(data) => Outcome {
                ok,
                payload: Payload::Json(data),
            },
            Err(_) => Outcome::network_failure(),
        }
    }
}

/// An unauthorized status invalidates the session everywhere except on
/// the login call itself, where it just means bad credentials.
fn forces_teardown(status: u16, endpoint: &str) -> bool {
    status == 401 && endpoint != LOGIN_ENDPOINT
}

/// Issue a request against the backend. Never panics and never returns
/// an error: every failure mode collapses into `ok: false` plus a
/// message.
pub async fn request(endpoint: &str, method: HttpMethod, body: Option<&Value>) -> Outcome {
    use gloo_net::http::Request;

    let url = format!("{API_BASE}{endpoint}");
    let builder = match method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Put => Request::put(&url),
    };
    let builder = match session::token() {
        Some(token) => builder.header("x-access-token", &token),
        None => builder,
    };

    let sent = match body {
        Some(payload) => match builder.json(payload) {
            Ok(request) => request.send().await,
            Err(_) => return Outcome::network_failure(),
        },
        None => builder.send().await,
    };

    let response = match sent {
        Ok(response) => response,
        Err(error) => {
            web_sys::console::error_1(
                &format!("API request error on {endpoint}: {error}").into(),
            );
            return Outcome::network_failure();
        }
    };

    let status = response.status();
    let content_type = response.headers().get("content-type");
    let text = match response.text().await {
        Ok(text) => text,
        Err(_) => return Outcome::network_failure(),
    };

    let outcome = classify(status, content_type.as_deref(), &text);
    if forces_teardown(status, endpoint) {
        session::terminate();
    }
    outcome
}

/// Unwrap a JSON outcome, turning failures into their message.
fn json_result(outcome: Outcome) -> Result<Value, String> {
    if !outcome.ok {
        return Err(outcome.message());
    }
    match outcome.payload {
        Payload::Json(data) => Ok(data),
        Payload::Tabular(_) => Err(NETWORK_ERROR.to_string()),
    }
}

fn parse<T: serde::de::DeserializeOwned>(data: Value) -> Result<T, String> {
    serde_json::from_value(data).map_err(|_| NETWORK_ERROR.to_string())
}

// ============ Response Types ============

/// Token grant from the admin login and verification endpoints.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SessionIssued {
    pub token: String,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Account {
    pub account_number: String,
    pub balance: f64,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Transaction {
    pub from_account: String,
    pub to_account: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Biller {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
}

/// Per-category spending totals, parallel label/amount arrays.
#[derive(Clone, Debug, PartialEq, Default, serde::Deserialize)]
pub struct SpendingInsights {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ManagedUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub status: String,
    #[serde(default)]
    pub last_login: Option<String>,
}

// ============ Endpoint Wrappers ============

/// First login step. A success hands back an opaque identifier for the
/// second-factor exchange; no session is established yet.
pub async fn login(username: &str, password: &str) -> Result<Value, String> {
    let body = json!({ "username": username, "password": password });
    let data = json_result(request("/login", HttpMethod::Post, Some(&body)).await)?;
    data.get("user_id")
        .cloned()
        .ok_or_else(|| NETWORK_ERROR.to_string())
}

/// Admin login issues a session directly, with no second factor.
pub async fn admin_login(username: &str, password: &str) -> Result<SessionIssued, String> {
    let body = json!({ "username": username, "password": password });
    parse(json_result(request("/admin/login", HttpMethod::Post, Some(&body)).await)?)
}

pub async fn register(username: &str, email: &str, password: &str) -> Result<(), String> {
    let body = json!({ "username": username, "email": email, "password": password });
    json_result(request("/register", HttpMethod::Post, Some(&body)).await)?;
    Ok(())
}

/// Second login step. `body` is prepared by the authentication flow so
/// the opaque identifier round-trips untouched.
pub async fn verify_login(body: &Value) -> Result<SessionIssued, String> {
    parse(json_result(request("/login/verify", HttpMethod::Post, Some(body)).await)?)
}

pub async fn chatbot_reply(message: &str) -> Result<String, String> {
    let body = json!({ "message": message });
    let data = json_result(request("/chatbot", HttpMethod::Post, Some(&body)).await)?;
    data.get("reply")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| NETWORK_ERROR.to_string())
}

pub async fn fetch_account() -> Result<Account, String> {
    let data = json_result(request("/account", HttpMethod::Get, None).await)?;
    parse(data.get("account").cloned().unwrap_or(Value::Null))
}

pub async fn fetch_transactions() -> Result<Vec<Transaction>, String> {
    let data = json_result(request("/transactions", HttpMethod::Get, None).await)?;
    parse(data.get("transactions").cloned().unwrap_or(Value::Null))
}

/// Returns the server's confirmation message.
pub async fn create_transfer(
    to_account_number: &str,
    amount: f64,
    description: &str,
) -> Result<String, String> {
    let body = json!({
        "to_account_number": to_account_number,
        "amount": amount,
        "description": description,
    });
    let data = json_result(request("/transactions", HttpMethod::Post, Some(&body)).await)?;
    Ok(message_of(&data, "Transfer successful"))
}

pub async fn fetch_billers() -> Result<Vec<Biller>, String> {
    let data = json_result(request("/billers", HttpMethod::Get, None).await)?;
    parse(data.get("billers").cloned().unwrap_or(Value::Null))
}

pub async fn pay_bill(biller_id: &str, amount: f64) -> Result<String, String> {
    let body = json!({ "biller_id": biller_id, "amount": amount });
    let data = json_result(request("/bill-payment", HttpMethod::Post, Some(&body)).await)?;
    Ok(message_of(&data, "Bill paid successfully"))
}

pub async fn fetch_insights() -> Result<SpendingInsights, String> {
    parse(json_result(request("/insights", HttpMethod::Get, None).await)?)
}

pub async fn fetch_all_transactions() -> Result<Vec<Transaction>, String> {
    let data = json_result(request("/admin/transactions", HttpMethod::Get, None).await)?;
    parse(data.get("transactions").cloned().unwrap_or(Value::Null))
}

pub async fn fetch_users() -> Result<Vec<ManagedUser>, String> {
    let data = json_result(request("/admin/users", HttpMethod::Get, None).await)?;
    parse(data.get("users").cloned().unwrap_or(Value::Null))
}

pub async fn set_user_status(user_id: &str, status: &str) -> Result<String, String> {
    let body = json!({ "status": status });
    let endpoint = format!("/admin/users/{user_id}/status");
    let data = json_result(request(&endpoint, HttpMethod::Put, Some(&body)).await)?;
    Ok(message_of(&data, "User status updated"))
}

/// Download the all-transactions report as raw CSV text.
pub async fn download_transactions_report() -> Result<String, String> {
    let outcome = request("/reports/transactions.csv", HttpMethod::Get, None).await;
    if !outcome.ok {
        return Err(outcome.message());
    }
    match outcome.payload {
        Payload::Tabular(text) => Ok(text),
        Payload::Json(_) => Err(DOWNLOAD_FAILED.to_string()),
    }
}

fn message_of(data: &Value, fallback: &str) -> String {
    data.get("message")
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_json_success() {
        let outcome = classify(200, Some("application/json"), r#"{"user_id": 42}"#);
        assert!(outcome.ok);
        assert_eq!(outcome.payload, Payload::Json(json!({ "user_id": 42 })));
    }

    #[test]
    fn test_classify_json_failure_keeps_server_message() {
        let outcome = classify(
            403,
            Some("application/json"),
            r#"{"message": "Your account has been suspended"}"#,
        );
        assert!(!outcome.ok);
        assert_eq!(outcome.message(), "Your account has been suspended");
    }

    #[test]
    fn test_classify_csv_success_is_tabular_text() {
        let outcome = classify(200, Some("text/csv; charset=utf-8"), "a,b\n1,2\n");
        assert!(outcome.ok);
        assert_eq!(outcome.payload, Payload::Tabular("a,b\n1,2\n".to_string()));
    }

    #[test]
    fn test_classify_csv_failure_surfaces_no_body() {
        let outcome = classify(500, Some("text/csv"), "internal error");
        assert!(!outcome.ok);
        assert_eq!(outcome.message(), DOWNLOAD_FAILED);
        assert!(matches!(outcome.payload, Payload::Json(_)));
    }

    #[test]
    fn test_classify_malformed_body_is_network_failure() {
        let outcome = classify(200, Some("text/html"), "<html>gateway timeout</html>");
        assert!(!outcome.ok);
        assert_eq!(outcome.message(), NETWORK_ERROR);
    }

    #[test]
    fn test_unauthorized_teardown_exempts_login_only() {
        assert!(forces_teardown(401, "/account"));
        assert!(forces_teardown(401, "/admin/login"));
        assert!(forces_teardown(401, "/login/verify"));
        assert!(!forces_teardown(401, "/login"));
        assert!(!forces_teardown(403, "/account"));
    }

    #[test]
    fn test_missing_message_falls_back_to_network_error() {
        let outcome = classify(400, Some("application/json"), "{}");
        assert_eq!(outcome.message(), NETWORK_ERROR);
    }
}
