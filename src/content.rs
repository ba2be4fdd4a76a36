//! Dashboard Content Loading
//!
//! Dashboards fill their main region from named content templates. A
//! navigation entry carries a view id like `transfers-content`; the
//! loader strips the `-content` suffix, resolves the template in a
//! typed registry, swaps the region over, and announces the load on a
//! subscription bus so listeners can attach behavior afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

/// Every content template the dashboards can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    // User sections
    AccountOverview,
    Transfers,
    BillPay,
    Insights,
    // Admin sections
    AdminOverview,
    ManageUsers,
    Reports,
}

impl Section {
    const ALL: [Section; 7] = [
        Section::AccountOverview,
        Section::Transfers,
        Section::BillPay,
        Section::Insights,
        Section::AdminOverview,
        Section::ManageUsers,
        Section::Reports,
    ];

    /// Template name, as referenced by navigation view ids.
    pub fn template_name(&self) -> &'static str {
        match self {
            Section::AccountOverview => "user-dashboard",
            Section::Transfers => "transfers",
            Section::BillPay => "bill-pay",
            Section::Insights => "insights",
            Section::AdminOverview => "admin-dashboard",
            Section::ManageUsers => "manage-users",
            Section::Reports => "reports",
        }
    }
}

/// Resolve a `<name>-content` view id against the template registry.
pub fn resolve(view_id: &str) -> Option<Section> {
    let name = view_id.strip_suffix("-content").unwrap_or(view_id);
    Section::ALL
        .into_iter()
        .find(|section| section.template_name() == name)
}

/// Announcement published after a region swaps its content.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentLoaded {
    pub view_id: String,
    pub container: String,
}

type Subscriber = Box<dyn Fn(&ContentLoaded)>;

/// Typed subscription bus for load announcements. Subscribers register
/// during dashboard setup; publishing must not re-enter `subscribe`.
#[derive(Clone, Default)]
pub struct ContentBus {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl ContentBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&ContentLoaded) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(listener));
    }

    pub fn publish(&self, event: &ContentLoaded) {
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(event);
        }
    }
}

/// What a dashboard content region currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum RegionContent {
    Section(Section),
    /// The view id that failed to resolve; rendered as an inline error
    /// placeholder instead of a blank region.
    Missing(String),
}

/// Drives one dashboard content region.
#[derive(Clone)]
pub struct ContentLoader {
    container: &'static str,
    pub region: RwSignal<Option<RegionContent>>,
    bus: ContentBus,
}

impl ContentLoader {
    pub fn new(container: &'static str, bus: ContentBus) -> Self {
        Self {
            container,
            region: create_rw_signal(None),
            bus,
        }
    }

    /// Load the named content view into this region. Returns `false`
    /// when the template could not be resolved and the error
    /// placeholder was shown instead; callers have no failure path to
    /// handle beyond that.
    pub fn load(&self, view_id: &str) -> bool {
        match resolve(view_id) {
            Some(section) => {
                self.region.set(Some(RegionContent::Section(section)));
                self.bus.publish(&ContentLoaded {
                    view_id: view_id.to_string(),
                    container: self.container.to_string(),
                });
                true
            }
            None => {
                web_sys::console::error_1(
                    &format!("Template or container not found for view: {view_id}").into(),
                );
                self.region.set(Some(RegionContent::Missing(view_id.to_string())));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_strips_content_suffix() {
        assert_eq!(resolve("user-dashboard-content"), Some(Section::AccountOverview));
        assert_eq!(resolve("transfers-content"), Some(Section::Transfers));
        assert_eq!(resolve("manage-users-content"), Some(Section::ManageUsers));
    }

    #[test]
    fn test_resolve_accepts_bare_template_name() {
        assert_eq!(resolve("insights"), Some(Section::Insights));
    }

    #[test]
    fn test_resolve_unknown_view() {
        assert_eq!(resolve("loans-content"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_bus_delivers_to_every_subscriber() {
        let bus = ContentBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["nav", "audit"] {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |event: &ContentLoaded| {
                seen.borrow_mut().push(format!("{tag}:{}", event.view_id));
            });
        }

        bus.publish(&ContentLoaded {
            view_id: "transfers-content".to_string(),
            container: "user-main-content".to_string(),
        });

        assert_eq!(
            *seen.borrow(),
            vec!["nav:transfers-content", "audit:transfers-content"]
        );
    }
}
