//! Admin Dashboard Page
//!
//! Role view for bank staff: all-transactions overview, customer
//! management, and report downloads.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api::client as api;
use crate::auth::AuthFlow;
use crate::components::loading::{ListSkeleton, Loading};
use crate::components::nav::{NavEntry, SidebarNav};
use crate::content::{ContentBus, ContentLoader, RegionContent, Section};
use crate::pages::user_dashboard::TransactionList;
use crate::state::global::{GlobalState, Severity};

const ADMIN_SECTIONS: &[NavEntry] = &[
    ("Overview", "admin-dashboard-content"),
    ("Manage Users", "manage-users-content"),
    ("Reports", "reports-content"),
];

const DEFAULT_SECTION: &str = "admin-dashboard-content";

/// Admin dashboard component
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let flow = use_context::<AuthFlow>().expect("AuthFlow not found");

    let display_name = state
        .session
        .get_untracked()
        .map(|session| session.username)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Administrator".to_string());

    let bus = ContentBus::new();
    let loader = ContentLoader::new("admin-main-content", bus.clone());
    let region = loader.region;

    let dashboard = view! {
        <div class="flex min-h-screen">
            <aside class="w-64 bg-gray-800 p-6 flex flex-col">
                <div class="mb-8">
                    <div class="text-xl font-bold">"🏦 SmartBank"</div>
                    <div class="text-sm text-gray-400 mt-1">{display_name} " · staff"</div>
                </div>

                <SidebarNav entries=ADMIN_SECTIONS loader=loader.clone() bus=bus />

                <button
                    on:click=move |_| flow.logout()
                    class="mt-auto px-4 py-2 text-left text-gray-400 hover:text-white
                           hover:bg-gray-700 rounded-lg transition-colors"
                >
                    "Log Out"
                </button>
            </aside>

            <main class="flex-1 p-8">
                {move || match region.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(RegionContent::Missing(_)) => view! {
                        <p class="text-red-500">"Error: Could not load content for this view."</p>
                    }.into_view(),
                    Some(RegionContent::Section(section)) => render_section(section),
                }}
            </main>
        </div>
    };

    loader.load(DEFAULT_SECTION);

    dashboard
}

fn render_section(section: Section) -> View {
    match section {
        Section::AdminOverview => view! { <AdminOverviewSection /> }.into_view(),
        Section::ManageUsers => view! { <ManageUsersSection /> }.into_view(),
        Section::Reports => view! { <ReportsSection /> }.into_view(),
        _ => view! {
            <p class="text-red-500">"Error: Could not load content for this view."</p>
        }
        .into_view(),
    }
}

/// Every transaction across the bank, newest first.
#[component]
fn AdminOverviewSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (transactions, set_transactions) = create_signal(None::<Vec<api::Transaction>>);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_all_transactions().await {
                Ok(list) => set_transactions.set(Some(list)),
                Err(message) => {
                    state.notify(&message, Severity::Error);
                    set_transactions.set(Some(Vec::new()));
                }
            }
        });
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Overview"</h1>
                <p class="text-gray-400 mt-1">"All customer transactions"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <TransactionList transactions />
            </section>
        </div>
    }
}

/// Customer list with suspend/activate controls.
#[component]
fn ManageUsersSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (users, set_users) = create_signal(None::<Vec<api::ManagedUser>>);
    let (reload, set_reload) = create_signal(0u32);

    create_effect(move |_| {
        reload.get();
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(list) => set_users.set(Some(list)),
                Err(message) => {
                    state.notify(&message, Severity::Error);
                    set_users.set(Some(Vec::new()));
                }
            }
        });
    });

    let set_status = move |user_id: String, status: &'static str| {
        spawn_local(async move {
            match api::set_user_status(&user_id, status).await {
                Ok(message) => {
                    state.notify(&message, Severity::Success);
                    set_reload.update(|n| *n += 1);
                }
                Err(message) => state.notify(&message, Severity::Error),
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Manage Users"</h1>
                <p class="text-gray-400 mt-1">"Suspend or reactivate customer access"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                {move || match users.get() {
                    None => view! { <ListSkeleton /> }.into_view(),
                    Some(list) if list.is_empty() => view! {
                        <p class="text-gray-400 text-sm">"No customers registered"</p>
                    }.into_view(),
                    Some(list) => list.into_iter().map(|user| {
                        let suspended = user.status == "suspended";
                        let id = user.id.clone();
                        view! {
                            <div class="flex items-center justify-between py-3 border-b border-gray-700 last:border-0">
                                <div>
                                    <div class="font-medium">{user.username}</div>
                                    <div class="text-sm text-gray-400">{user.email}</div>
                                </div>
                                <div class="flex items-center space-x-3">
                                    <span class=if suspended {
                                        "text-sm text-red-400"
                                    } else {
                                        "text-sm text-green-400"
                                    }>
                                        {user.status}
                                    </span>
                                    <button
                                        on:click=move |_| {
                                            let next = if suspended { "active" } else { "suspended" };
                                            set_status(id.clone(), next);
                                        }
                                        class="px-3 py-1 bg-gray-700 hover:bg-gray-600
                                               rounded text-sm transition-colors"
                                    >
                                        {if suspended { "Reactivate" } else { "Suspend" }}
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect_view(),
                }}
            </section>
        </div>
    }
}

/// Tabular report downloads.
#[component]
fn ReportsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (downloading, set_downloading) = create_signal(false);

    let download = move |_| {
        set_downloading.set(true);
        spawn_local(async move {
            match api::download_transactions_report().await {
                Ok(csv) => {
                    save_text_file(&csv, "transactions-report.csv");
                    state.notify("Report downloaded", Severity::Success);
                }
                Err(message) => state.notify(&message, Severity::Error),
            }
            set_downloading.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Reports"</h1>
                <p class="text-gray-400 mt-1">"Export bank-wide data"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 max-w-lg">
                <div class="flex items-center justify-between p-4 bg-gray-700 rounded-lg">
                    <div>
                        <h3 class="font-medium">"Transactions Report"</h3>
                        <p class="text-sm text-gray-400">"All transactions as CSV"</p>
                    </div>
                    <button
                        on:click=download
                        disabled=move || downloading.get()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if downloading.get() { "Downloading..." } else { "Download" }}
                    </button>
                </div>
            </section>
        </div>
    }
}

/// Hand raw text to the browser as a file download.
fn save_text_file(data: &str, filename: &str) {
    if let Some(window) = web_sys::window() {
        let blob = web_sys::Blob::new_with_str_sequence(
            &js_sys::Array::of1(&data.into()),
        ).ok();

        if let Some(blob) = blob {
            let url = web_sys::Url::create_object_url_with_blob(&blob).ok();
            if let Some(url) = url {
                let document = window.document().unwrap();
                let a = document.create_element("a").unwrap();
                let _ = a.set_attribute("href", &url);
                let _ = a.set_attribute("download", filename);
                let _ = a.dyn_ref::<web_sys::HtmlElement>().unwrap().click();
                let _ = web_sys::Url::revoke_object_url(&url);
            }
        }
    }
}
