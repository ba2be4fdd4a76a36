//! Homepage View
//!
//! Entry view for anonymous visitors: product pitch plus the buttons
//! that open the authentication modals.

use leptos::*;

use crate::state::global::{GlobalState, ModalId};

/// Homepage component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center px-4">
            <div class="text-6xl mb-4">"🏦"</div>
            <h1 class="text-4xl font-bold mb-2">"SmartBank"</h1>
            <p class="text-gray-400 mb-8 max-w-md">
                "Banking that keeps up with you. Check balances, move money, "
                "and pay bills from one place."
            </p>

            <div class="flex flex-wrap items-center justify-center gap-3">
                <button
                    on:click=move |_| state.show_modal(ModalId::UserLogin)
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-medium transition-colors"
                >
                    "Sign In"
                </button>
                <button
                    on:click=move |_| state.show_modal(ModalId::Register)
                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    "Open an Account"
                </button>
                <button
                    on:click=move |_| state.show_modal(ModalId::AdminLogin)
                    class="px-6 py-3 text-gray-400 hover:text-white transition-colors"
                >
                    "Staff Portal"
                </button>
            </div>

            <div class="grid md:grid-cols-3 gap-6 mt-16 max-w-3xl text-left">
                <div class="bg-gray-800 rounded-xl p-6">
                    <div class="text-3xl mb-2">"🔒"</div>
                    <h3 class="font-medium mb-1">"Two-factor sign-in"</h3>
                    <p class="text-sm text-gray-400">
                        "Every login is confirmed with a one-time code."
                    </p>
                </div>
                <div class="bg-gray-800 rounded-xl p-6">
                    <div class="text-3xl mb-2">"💸"</div>
                    <h3 class="font-medium mb-1">"Instant transfers"</h3>
                    <p class="text-sm text-gray-400">
                        "Send money to any account number in seconds."
                    </p>
                </div>
                <div class="bg-gray-800 rounded-xl p-6">
                    <div class="text-3xl mb-2">"🤖"</div>
                    <h3 class="font-medium mb-1">"SmartBot"</h3>
                    <p class="text-sm text-gray-400">
                        "An assistant that knows its way around your account."
                    </p>
                </div>
            </div>
        </div>
    }
}
