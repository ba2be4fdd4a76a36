//! Sidebar Navigation Component
//!
//! Dashboard navigation wired through the content loader. The active
//! entry is marked in response to load announcements on the content
//! bus, so the initial default load highlights its entry the same way
//! a click does.

use leptos::*;

use crate::content::{ContentBus, ContentLoaded, ContentLoader};

/// One sidebar entry: label plus the content view it loads.
pub type NavEntry = (&'static str, &'static str);

/// Sidebar navigation for a dashboard content region.
#[component]
pub fn SidebarNav(
    entries: &'static [NavEntry],
    loader: ContentLoader,
    bus: ContentBus,
) -> impl IntoView {
    let (active, set_active) = create_signal(String::new());
    bus.subscribe(move |event: &ContentLoaded| set_active.set(event.view_id.clone()));

    view! {
        <nav class="space-y-1">
            {entries.iter().map(|&(label, view_id)| {
                let loader = loader.clone();
                view! {
                    <a
                        href="#"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            loader.load(view_id);
                        }
                        class=move || {
                            let base = "block px-4 py-2 rounded-lg transition-colors";
                            if active.get() == view_id {
                                format!("{base} bg-gray-700 text-white")
                            } else {
                                format!("{base} text-gray-300 hover:text-white hover:bg-gray-700")
                            }
                        }
                    >
                        {label}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
