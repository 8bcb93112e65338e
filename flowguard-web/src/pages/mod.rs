//! One component per route.

mod about;
mod alerts;
mod analytics;
mod contact;
mod dashboard;
mod event_map;
mod landing;
mod login;
mod signup;

pub use about::AboutView;
pub use alerts::AlertsView;
pub use analytics::AnalyticsView;
pub use contact::ContactView;
pub use dashboard::DashboardView;
pub use event_map::EventMapView;
pub use landing::LandingView;
pub use login::LoginView;
pub use signup::SignupView;

use dioxus::prelude::*;
use fg_pages::PageContext;
use fg_ui::state::page_context;
use std::cell::RefCell;
use std::rc::Rc;

pub type Mounted<P> = Result<Rc<RefCell<P>>, String>;

/// Mount a page container for the lifetime of the calling component.
///
/// The container is created on first render and dropped with the
/// component, which cancels its timers. The component re-renders whenever
/// the container reports a change; input handlers that change it call
/// [`bump`] on the returned revision.
pub fn use_page<P: 'static>(
    mount: impl FnOnce(&PageContext) -> anyhow::Result<P>,
) -> (Mounted<P>, Signal<u64>) {
    let revision = use_signal(|| 0u64);
    let page = use_hook(move || {
        mount(&page_context(revision))
            .map(|p| Rc::new(RefCell::new(p)))
            .map_err(|e| {
                log::error!("[FlowGuard] page failed to mount: {:#}", e);
                e.to_string()
            })
    });
    // Subscribe this component to the container's notifications.
    let _ = revision();
    (page, revision)
}

pub fn bump(mut revision: Signal<u64>) {
    *revision.write() += 1;
}

/// Shared panel chrome.
#[component]
pub fn Panel(title: String, children: Element) -> Element {
    rsx! {
        section {
            style: "margin: 12px 0; padding: 16px; border-radius: 12px; background: #111827; border: 1px solid #1f2937;",
            h2 {
                style: "margin: 0 0 12px 0; font-size: 18px; color: #e5e7eb;",
                "{title}"
            }
            {children}
        }
    }
}
