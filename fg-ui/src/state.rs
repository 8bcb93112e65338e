//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the session and the current route into a single struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use crate::storage::LocalStorageStore;
use crate::timers::BrowserScheduler;
use dioxus::prelude::*;
use fg_pages::PageContext;
use fg_runtime::SystemClock;
use fg_session::credentials::DemoCredentials;
use fg_session::routes::Route;
use fg_session::{SessionStore, User};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;

pub type AppSession = SessionStore<LocalStorageStore, DemoCredentials>;

/// Shared application state for the FlowGuard web app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The session store, shared with the login page
    pub session: Signal<Rc<RefCell<AppSession>>>,
    /// Mirror of the session's current user, for rendering
    pub user: Signal<Option<User>>,
    /// Route being shown (already passed through the guard)
    pub route: Signal<Route>,
    /// True until the session has hydrated
    pub loading: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        let session = SessionStore::new(LocalStorageStore, DemoCredentials::default());
        Self {
            session: Signal::new(Rc::new(RefCell::new(session))),
            user: Signal::new(None),
            route: Signal::new(Route::Landing),
            loading: Signal::new(true),
        }
    }

    /// Pick up a persisted session and resolve the route in the address bar.
    ///
    /// Reads go through `peek` so an effect calling this does not subscribe
    /// to the signals it writes.
    pub fn hydrate(&mut self) {
        let session = self.session.peek().clone();
        session.borrow_mut().hydrate();
        self.sync_user();
        self.loading.set(false);

        let requested = current_path()
            .and_then(|p| Route::from_path(&p))
            .unwrap_or(Route::Landing);
        self.navigate(requested);
    }

    /// Copy the session's user into the render signal.
    pub fn sync_user(&mut self) {
        let user = self.session.peek().borrow().current_user().cloned();
        self.user.set(user);
    }

    /// Show `to`, or the login page when `to` is gated and nobody is
    /// signed in.
    pub fn navigate(&mut self, to: Route) {
        let landed = to.guard(self.user.peek().as_ref());
        if landed != to {
            log::info!("[FlowGuard] router: {} requires a session, showing {}", to, landed);
        }
        push_path(landed.path());
        self.route.set(landed);
    }

    pub fn logout(&mut self) {
        self.session.peek().borrow_mut().logout();
        self.sync_user();
        self.navigate(Route::Login);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// A page context whose notifications bump `revision`, re-rendering every
/// component that reads it.
pub fn page_context(revision: Signal<u64>) -> PageContext {
    PageContext::new(Rc::new(BrowserScheduler), Rc::new(SystemClock)).with_notify(move || {
        let mut revision = revision;
        *revision.write() += 1;
    })
}

/// Entropy-seeded generator for a page's mock data.
pub fn page_rng() -> Box<dyn RngCore> {
    Box::new(StdRng::from_entropy())
}

fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

fn push_path(path: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if current_path().as_deref() != Some(path) {
        if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)) {
            log::warn!("[FlowGuard] router: pushState failed: {:?}", e);
        }
    }
}
