//! Login form with simulated network latency.

use fg_runtime::DelayedTask;
use fg_session::credentials::CredentialVerifier;
use fg_session::storage::KeyValueStore;
use fg_session::SessionStore;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::PageContext;

/// Shown for any rejected attempt; unknown email and wrong password look
/// the same.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginStatus {
    #[default]
    Idle,
    Submitting,
    Failed,
    SignedIn,
}

pub struct LoginPage {
    ctx: PageContext,
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    status: Rc<Cell<LoginStatus>>,
    pending: Option<DelayedTask>,
}

impl LoginPage {
    pub fn mount(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            email: String::new(),
            password: String::new(),
            remember_me: false,
            status: Rc::new(Cell::new(LoginStatus::Idle)),
            pending: None,
        }
    }

    pub fn status(&self) -> LoginStatus {
        self.status.get()
    }

    pub fn error(&self) -> Option<&'static str> {
        (self.status() == LoginStatus::Failed).then_some(LOGIN_FAILED_MESSAGE)
    }

    pub fn is_submitting(&self) -> bool {
        self.status() == LoginStatus::Submitting
    }

    /// Start a sign-in attempt against `session`.
    ///
    /// The credential check runs after the configured latency, whatever the
    /// outcome. A second submit while one is in flight is ignored and
    /// returns false. If the page is dropped first, the attempt never runs.
    pub fn submit<S, V>(&mut self, session: &Rc<RefCell<SessionStore<S, V>>>) -> bool
    where
        S: KeyValueStore + 'static,
        V: CredentialVerifier + 'static,
    {
        if self.pending.as_ref().is_some_and(DelayedTask::is_pending) {
            return false;
        }
        self.status.set(LoginStatus::Submitting);

        let session = session.clone();
        let status = self.status.clone();
        let clock = self.ctx.clock.clone();
        let notify = self.ctx.notify.clone();
        let (email, password) = (self.email.clone(), self.password.clone());

        self.pending = Some(DelayedTask::schedule(
            self.ctx.scheduler.as_ref(),
            self.ctx.config.login_latency(),
            move || {
                let ok = session.borrow_mut().login(&email, &password, clock.now());
                status.set(if ok { LoginStatus::SignedIn } else { LoginStatus::Failed });
                notify();
            },
        ));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::harness;
    use fg_session::credentials::DemoCredentials;
    use fg_session::storage::MemoryStore;
    use fg_session::{Role, TOKEN_KEY};
    use std::time::Duration;

    type Session = Rc<RefCell<SessionStore<MemoryStore, DemoCredentials>>>;

    fn session() -> (MemoryStore, Session) {
        let storage = MemoryStore::new();
        let store = SessionStore::restore(storage.clone(), DemoCredentials::default());
        (storage, Rc::new(RefCell::new(store)))
    }

    #[test]
    fn sign_in_completes_after_latency() {
        let h = harness();
        let (storage, session) = session();
        let mut page = LoginPage::mount(&h.ctx);
        page.email = "demo@flowguard.ai".to_string();
        page.password = "demo123".to_string();

        assert!(page.submit(&session));
        assert!(!page.submit(&session));
        h.scheduler.advance(Duration::from_millis(999));
        assert!(page.is_submitting());
        assert!(!session.borrow().is_authenticated());

        h.scheduler.advance(Duration::from_millis(1));
        assert_eq!(page.status(), LoginStatus::SignedIn);
        assert_eq!(session.borrow().current_user().unwrap().role, Role::Admin);
        assert!(storage.get(TOKEN_KEY).is_some());
        assert_eq!(h.notified.get(), 1);
    }

    #[test]
    fn rejected_attempt_shows_message_and_can_retry() {
        let h = harness();
        let (_, session) = session();
        let mut page = LoginPage::mount(&h.ctx);
        page.email = "demo@flowguard.ai".to_string();
        page.password = "wrongpass".to_string();
        page.submit(&session);
        h.scheduler.advance(Duration::from_secs(1));
        assert_eq!(page.error(), Some(LOGIN_FAILED_MESSAGE));
        assert!(!session.borrow().is_authenticated());

        page.password = "demo123".to_string();
        assert!(page.submit(&session));
        assert_eq!(page.error(), None);
        h.scheduler.advance(Duration::from_secs(1));
        assert!(session.borrow().is_authenticated());
    }

    #[test]
    fn dropped_page_never_signs_in() {
        let h = harness();
        let (storage, session) = session();
        let mut page = LoginPage::mount(&h.ctx);
        page.email = "staff@municipality.gov".to_string();
        page.password = "staff123".to_string();
        page.submit(&session);
        drop(page);

        h.scheduler.advance(Duration::from_secs(5));
        assert!(!session.borrow().is_authenticated());
        assert!(storage.is_empty());
        assert_eq!(h.notified.get(), 0);
    }
}
