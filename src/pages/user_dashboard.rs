//! User Dashboard Page
//!
//! Role view for signed-in customers: sidebar navigation over the
//! content sections, the account holder's name, and the chatbot
//! widget.

use leptos::*;

use crate::api::client as api;
use crate::auth::AuthFlow;
use crate::components::chatbot::Chatbot;
use crate::components::loading::{ListSkeleton, Loading};
use crate::components::nav::{NavEntry, SidebarNav};
use crate::content::{ContentBus, ContentLoader, RegionContent, Section};
use crate::state::global::{GlobalState, Severity};

const USER_SECTIONS: &[NavEntry] = &[
    ("Overview", "user-dashboard-content"),
    ("Transfers", "transfers-content"),
    ("Bill Pay", "bill-pay-content"),
    ("Insights", "insights-content"),
];

const DEFAULT_SECTION: &str = "user-dashboard-content";

/// User dashboard component
#[component]
pub fn UserDashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let flow = use_context::<AuthFlow>().expect("AuthFlow not found");

    let display_name = state
        .session
        .get_untracked()
        .map(|session| session.username)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "User".to_string());

    let bus = ContentBus::new();
    let loader = ContentLoader::new("user-main-content", bus.clone());
    let region = loader.region;

    let dashboard = view! {
        <div class="flex min-h-screen">
            <aside class="w-64 bg-gray-800 p-6 flex flex-col">
                <div class="mb-8">
                    <div class="text-xl font-bold">"🏦 SmartBank"</div>
                    <div class="text-sm text-gray-400 mt-1">{display_name}</div>
                </div>

                <SidebarNav entries=USER_SECTIONS loader=loader.clone() bus=bus />

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

            <Chatbot />
        </div>
    };

    // The default section loads after the sidebar has subscribed, so
    // the initial load marks its entry active too.
    loader.load(DEFAULT_SECTION);

    dashboard
}

fn render_section(section: Section) -> View {
    match section {
        Section::AccountOverview => view! { <AccountOverviewSection /> }.into_view(),
        Section::Transfers => view! { <TransfersSection /> }.into_view(),
        Section::BillPay => view! { <BillPaySection /> }.into_view(),
        Section::Insights => view! { <InsightsSection /> }.into_view(),
        _ => view! {
            <p class="text-red-500">"Error: Could not load content for this view."</p>
        }
        .into_view(),
    }
}

/// Account summary, the default landing section.
#[component]
fn AccountOverviewSection() -> impl IntoView {
    let (account, set_account) = create_signal(None::<api::Account>);
    let (error, set_error) = create_signal(None::<String>);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_account().await {
                Ok(fetched) => set_account.set(Some(fetched)),
                Err(message) => set_error.set(Some(message)),
            }
        });
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Overview"</h1>
                <p class="text-gray-400 mt-1">"Your account at a glance"</p>
            </div>

            {move || {
                if let Some(message) = error.get() {
                    view! { <p class="text-red-500">{message}</p> }.into_view()
                } else if let Some(account) = account.get() {
                    view! {
                        <div class="bg-gray-800 rounded-xl p-6 max-w-md">
                            <div class="text-sm text-gray-400 capitalize">
                                {account.kind} " account"
                            </div>
                            <div class="font-mono mt-1">{account.account_number}</div>
                            <div class="text-4xl font-bold mt-4">
                                {format!("${:.2}", account.balance)}
                            </div>
                            <div class="text-sm text-gray-400 mt-1">"Available balance"</div>
                        </div>
                    }.into_view()
                } else {
                    view! { <Loading /> }.into_view()
                }
            }}
        </div>
    }
}

/// Transaction history plus the transfer form.
#[component]
fn TransfersSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (transactions, set_transactions) = create_signal(None::<Vec<api::Transaction>>);
    let (reload, set_reload) = create_signal(0u32);

    create_effect(move |_| {
        reload.get();
        spawn_local(async move {
            match api::fetch_transactions().await {
                Ok(list) => set_transactions.set(Some(list)),
                Err(message) => {
                    state.notify(&message, Severity::Error);
                    set_transactions.set(Some(Vec::new()));
                }
            }
        });
    });

    let (to_account, set_to_account) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Ok(parsed_amount) = amount.get().parse::<f64>() else {
            state.notify("Enter a valid amount.", Severity::Error);
            return;
        };
        let recipient = to_account.get();
        let note = description.get();

        set_sending.set(true);
        spawn_local(async move {
            match api::create_transfer(&recipient, parsed_amount, &note).await {
                Ok(message) => {
                    state.notify(&message, Severity::Success);
                    set_to_account.set(String::new());
                    set_amount.set(String::new());
                    set_description.set(String::new());
                    set_reload.update(|n| *n += 1);
                }
                Err(message) => state.notify(&message, Severity::Error),
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Transfers"</h1>
                <p class="text-gray-400 mt-1">"Send money and review your history"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 max-w-lg">
                <h2 class="text-xl font-semibold mb-4">"New Transfer"</h2>
                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Recipient account number"</label>
                        <input
                            type="text"
                            placeholder="ACC123456789"
                            prop:value=move || to_account.get()
                            on:input=move |ev| set_to_account.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Amount"</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                        <input
                            type="text"
                            placeholder="Rent, dinner, ..."
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || sending.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if sending.get() { "Sending..." } else { "Send Money" }}
                    </button>
                </form>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Recent Transactions"</h2>
                <TransactionList transactions />
            </section>
        </div>
    }
}

/// Shared transaction table, also used on the admin overview.
#[component]
pub fn TransactionList(
    transactions: ReadSignal<Option<Vec<api::Transaction>>>,
) -> impl IntoView {
    view! {
        {move || match transactions.get() {
            None => view! { <ListSkeleton /> }.into_view(),
            Some(list) if list.is_empty() => view! {
                <p class="text-gray-400 text-sm">"No transactions yet"</p>
            }.into_view(),
            Some(list) => list.into_iter().map(|tx| {
                let date = tx.timestamp.split('T').next().unwrap_or_default().to_string();
                view! {
                    <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                        <div>
                            <div class="font-medium">{tx.description}</div>
                            <div class="text-sm text-gray-400">
                                {date} " · " {tx.kind} " · " {tx.from_account} " → " {tx.to_account}
                            </div>
                        </div>
                        <span class="font-semibold">{format!("${:.2}", tx.amount)}</span>
                    </div>
                }
            }).collect_view(),
        }}
    }
}

/// Biller list and payment form.
#[component]
fn BillPaySection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (billers, set_billers) = create_signal(Vec::<api::Biller>::new());
    let (selected, set_selected) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (paying, set_paying) = create_signal(false);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_billers().await {
                Ok(list) => {
                    if let Some(first) = list.first() {
                        set_selected.set(first.id.clone());
                    }
                    set_billers.set(list);
                }
                Err(message) => state.notify(&message, Severity::Error),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Ok(parsed_amount) = amount.get().parse::<f64>() else {
            state.notify("Enter a valid amount.", Severity::Error);
            return;
        };
        let biller_id = selected.get();
        if biller_id.is_empty() {
            state.notify("Choose a biller first.", Severity::Error);
            return;
        }

        set_paying.set(true);
        spawn_local(async move {
            match api::pay_bill(&biller_id, parsed_amount).await {
                Ok(message) => {
                    state.notify(&message, Severity::Success);
                    set_amount.set(String::new());
                }
                Err(message) => state.notify(&message, Severity::Error),
            }
            set_paying.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Bill Pay"</h1>
                <p class="text-gray-400 mt-1">"Pay registered billers from your account"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 max-w-lg">
                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Biller"</label>
                        <select
                            on:change=move |ev| set_selected.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            {move || billers.get().into_iter().map(|biller| view! {
                                <option value=biller.id.clone()>
                                    {format!("{} ({})", biller.name, biller.category)}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Amount"</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || paying.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if paying.get() { "Paying..." } else { "Pay Bill" }}
                    </button>
                </form>
            </section>
        </div>
    }
}

/// Spending totals by category.
#[component]
fn InsightsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (insights, set_insights) = create_signal(None::<api::SpendingInsights>);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_insights().await {
                Ok(fetched) => set_insights.set(Some(fetched)),
                Err(message) => {
                    state.notify(&message, Severity::Error);
                    set_insights.set(Some(api::SpendingInsights::default()));
                }
            }
        });
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Insights"</h1>
                <p class="text-gray-400 mt-1">"Where your money went"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 max-w-lg">
                {move || match insights.get() {
                    None => view! { <ListSkeleton /> }.into_view(),
                    Some(data) => {
                        let max = data.data.iter().cloned().fold(0.0_f64, f64::max);
                        if data.labels.is_empty() {
                            view! {
                                <p class="text-gray-400 text-sm">"No spending recorded yet"</p>
                            }.into_view()
                        } else {
                            data.labels.iter().zip(data.data.iter()).map(|(label, total)| {
                                let percent = if max > 0.0 { total / max * 100.0 } else { 0.0 };
                                view! {
                                    <div class="py-2">
                                        <div class="flex justify-between text-sm mb-1">
                                            <span>{label.clone()}</span>
                                            <span class="font-semibold">{format!("${total:.2}")}</span>
                                        </div>
                                        <div class="bg-gray-700 rounded h-2">
                                            <div
                                                class="bg-primary-600 rounded h-2"
                                                style=format!("width: {percent:.0}%")
                                            />
                                        </div>
                                    </div>
                                }
                            }).collect_view()
                        }
                    }
                }}
            </section>
        </div>
    }
}
