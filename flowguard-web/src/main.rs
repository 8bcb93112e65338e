//! FlowGuard stormwater monitoring demo
//!
//! Marketing pages plus a demo dashboard driven by mock data.
//!
//! Flow:
//! 1. On mount: hydrate the session from `localStorage` and resolve the
//!    route in the address bar through the guard.
//! 2. Every gated page redirects to the login page without a session.
//! 3. Each page mounts its own state container (seeded mock data plus its
//!    refresh timer) and drops it on unmount, which stops the timer.

mod pages;

use dioxus::prelude::*;
use fg_session::routes::Route;
use fg_ui::components::{LoadingSpinner, Navbar};
use fg_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("flowguard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Runs once; hydrate only peeks at the signals it writes.
    use_effect(move || state.hydrate());

    if (state.loading)() {
        return rsx! {
            LoadingSpinner { label: "Restoring session...".to_string() }
        };
    }

    let user = state.user.read().clone();
    let route = (state.route)().guard(user.as_ref());

    rsx! {
        div {
            style: "min-height: 100vh; background: #030712; color: #f9fafb; font-family: system-ui, -apple-system, sans-serif;",
            if user.is_some() && !route.is_public() {
                Navbar {}
            }
            main {
                style: "max-width: 1200px; margin: 0 auto; padding: 16px;",
                {
                    match route {
                        Route::Landing => rsx! { pages::LandingView {} },
                        Route::About => rsx! { pages::AboutView {} },
                        Route::Dashboard => rsx! { pages::DashboardView {} },
                        Route::EventMap => rsx! { pages::EventMapView {} },
                        Route::Analytics => rsx! { pages::AnalyticsView {} },
                        Route::Alerts => rsx! { pages::AlertsView {} },
                        Route::Contact => rsx! { pages::ContactView {} },
                        Route::Login => rsx! { pages::LoginView {} },
                        Route::Signup => rsx! { pages::SignupView {} },
                    }
                }
            }
        }
    }
}
