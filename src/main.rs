//! SmartBank
//!
//! Single-page online banking front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Login with two-factor verification, plus an admin sign-in path
//! - Role-based dashboards loaded from named content templates
//! - Transfers, bill payment, and spending insights
//! - SmartBot chat assistant
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that
//! compiles to WebAssembly and talks to the banking API over HTTP. The
//! backend owns all authentication and money-movement semantics; this
//! crate owns session bootstrapping, view switching, and content
//! loading.

use leptos::*;

mod api;
mod app;
mod auth;
mod components;
mod content;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
