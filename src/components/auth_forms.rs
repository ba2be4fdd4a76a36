//! Authentication Modals
//!
//! Login, admin login, registration, and second-factor forms. Each
//! form hands its fields to the authentication flow and lets the flow
//! drive modals, toasts, and view changes.

use leptos::*;

use crate::auth::AuthFlow;
use crate::components::modal::Modal;
use crate::state::global::{GlobalState, ModalId};

/// All four authentication overlays, mounted once at the root.
#[component]
pub fn AuthModals() -> impl IntoView {
    view! {
        <UserLoginModal />
        <AdminLoginModal />
        <RegisterModal />
        <SecondFactorModal />
    }
}

#[component]
fn UserLoginModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let flow = use_context::<AuthFlow>().expect("AuthFlow not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();
        set_submitting.set(true);
        spawn_local(async move {
            flow.login_user(&username, &password).await;
            set_submitting.set(false);
        });
    };

    let open_register = move |_| {
        state.close_modals();
        state.show_modal(ModalId::Register);
    };

    view! {
        <Modal id=ModalId::UserLogin title="Sign In">
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <p class="text-sm text-gray-400 mt-4 text-center">
                "Don't have an account? "
                <button on:click=open_register class="text-primary-400 hover:underline">
                    "Register"
                </button>
            </p>
        </Modal>
    }
}

#[component]
fn AdminLoginModal() -> impl IntoView {
    let flow = use_context::<AuthFlow>().expect("AuthFlow not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();
        set_submitting.set(true);
        spawn_local(async move {
            flow.login_admin(&username, &password).await;
            set_submitting.set(false);
        });
    };

    view! {
        <Modal id=ModalId::AdminLogin title="Administrator Sign In">
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Admin username"</label>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </Modal>
    }
}

#[component]
fn RegisterModal() -> impl IntoView {
    let flow = use_context::<AuthFlow>().expect("AuthFlow not found");

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let email = email.get();
        let password = password.get();
        spawn_local(async move {
            flow.register(&username, &email, &password).await;
        });
    };

    view! {
        <Modal id=ModalId::Register title="Open an Account">
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    "Create Account"
                </button>
            </form>
        </Modal>
    }
}

#[component]
fn SecondFactorModal() -> impl IntoView {
    let flow = use_context::<AuthFlow>().expect("AuthFlow not found");

    let (code, set_code) = create_signal(String::new());
    let (verifying, set_verifying) = create_signal(false);

    let on_verify = move |_| {
        let code = code.get();
        set_verifying.set(true);
        spawn_local(async move {
            flow.verify_second_factor(&code).await;
            set_verifying.set(false);
        });
    };

    view! {
        <Modal id=ModalId::SecondFactor title="Two-Factor Verification">
            <p class="text-sm text-gray-400 mb-4">
                "Enter the one-time code we sent to your registered device."
            </p>
            <input
                type="text"
                placeholder="6-digit code"
                prop:value=move || code.get()
                on:input=move |ev| set_code.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-center tracking-widest
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <button
                on:click=on_verify
                disabled=move || verifying.get()
                class="w-full mt-4 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg py-3 font-semibold transition-colors"
            >
                {move || if verifying.get() { "Verifying..." } else { "Verify" }}
            </button>
        </Modal>
    }
}
