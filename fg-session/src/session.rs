//! The authenticated-user store.

use crate::credentials::CredentialVerifier;
use crate::storage::KeyValueStore;
use crate::user::User;
use chrono::{DateTime, Utc};

/// Storage key of the JSON-serialized user record.
pub const USER_KEY: &str = "flowguard_user";

/// Storage key of the opaque session token.
pub const TOKEN_KEY: &str = "flowguard_token";

/// Tokens are this prefix followed by the login time in epoch millis.
pub const TOKEN_PREFIX: &str = "fake-jwt-token-";

/// Holds the single current user and keeps it in step with storage.
///
/// Both storage keys are written together on login and removed together on
/// logout or on a failed hydration.
pub struct SessionStore<S, V> {
    storage: S,
    verifier: V,
    user: Option<User>,
    loading: bool,
}

impl<S: KeyValueStore, V: CredentialVerifier> SessionStore<S, V> {
    /// A store that has not hydrated yet; `is_loading()` is true.
    pub fn new(storage: S, verifier: V) -> Self {
        Self {
            storage,
            verifier,
            user: None,
            loading: true,
        }
    }

    /// Create and immediately hydrate.
    pub fn restore(storage: S, verifier: V) -> Self {
        let mut store = Self::new(storage, verifier);
        store.hydrate();
        store
    }

    /// Pick up a persisted session.
    ///
    /// A session needs both keys and a user record that parses. Anything
    /// else purges both keys and leaves the store unauthenticated. Never
    /// fails; clears the loading flag when done.
    pub fn hydrate(&mut self) {
        let stored_user = self.storage.get(USER_KEY);
        let stored_token = self.storage.get(TOKEN_KEY);

        match (stored_user, stored_token) {
            (Some(raw), Some(_)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    log::info!("[FlowGuard] session: restored session for {}", user.email);
                    self.user = Some(user);
                }
                Err(e) => {
                    log::warn!("[FlowGuard] session: discarding unreadable user record: {}", e);
                    self.purge();
                }
            },
            (None, None) => {}
            _ => {
                log::warn!("[FlowGuard] session: found only one of the session keys, purging");
                self.purge();
            }
        }
        self.loading = false;
    }

    /// Verify credentials and, on success, persist and adopt the session.
    ///
    /// Returns false without touching any state when verification fails.
    /// A storage failure while persisting also reports false and leaves the
    /// store unauthenticated. The simulated network latency is applied by
    /// the caller before this runs.
    pub fn login(&mut self, email: &str, password: &str, now: DateTime<Utc>) -> bool {
        let Some(user) = self.verifier.verify(email, password) else {
            log::info!("[FlowGuard] session: login rejected");
            return false;
        };

        if let Err(e) = self.persist(&user, now) {
            log::warn!("[FlowGuard] session: could not persist session: {}", e);
            self.purge();
            return false;
        }

        log::info!("[FlowGuard] session: {} signed in as {}", user.email, user.role);
        self.user = Some(user);
        true
    }

    /// Drop the session from memory and storage. Unconditional.
    pub fn logout(&mut self) {
        self.purge();
        self.user = None;
        log::info!("[FlowGuard] session: signed out");
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True until the first hydration finishes.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The persisted token, if any.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self, user: &User, now: DateTime<Utc>) -> anyhow::Result<()> {
        let record = serde_json::to_string(user)?;
        let token = format!("{}{}", TOKEN_PREFIX, fg_utils::dates::epoch_millis(&now));
        self.storage.set(USER_KEY, &record)?;
        self.storage.set(TOKEN_KEY, &token)?;
        Ok(())
    }

    fn purge(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("[FlowGuard] session: could not remove {}: {}", key, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::DemoCredentials;
    use crate::storage::MemoryStore;
    use crate::user::Role;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_717_243_200_000).unwrap()
    }

    fn fresh() -> (MemoryStore, SessionStore<MemoryStore, DemoCredentials>) {
        let storage = MemoryStore::new();
        let store = SessionStore::restore(storage.clone(), DemoCredentials::default());
        (storage, store)
    }

    /// Storage that accepts reads and removals but refuses writes.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("quota exceeded")
        }

        fn remove(&self, key: &str) -> anyhow::Result<()> {
            self.0.remove(key)
        }
    }

    #[test]
    fn new_store_is_loading_until_hydrated() {
        let mut store = SessionStore::new(MemoryStore::new(), DemoCredentials::default());
        assert!(store.is_loading());
        store.hydrate();
        assert!(!store.is_loading());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn demo_login_yields_admin() {
        let (storage, mut store) = fresh();
        assert!(store.login("demo@flowguard.ai", "demo123", at()));

        let user = store.current_user().unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.name, "System Administrator");
        assert_eq!(user.organization, "Municipal Water Management");
        assert_eq!(user.email, "demo@flowguard.ai");

        assert_eq!(
            storage.get(TOKEN_KEY).as_deref(),
            Some("fake-jwt-token-1717243200000")
        );
        let persisted: User = serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(&persisted, user);
    }

    #[test]
    fn wrong_password_leaves_state_unchanged() {
        let (storage, mut store) = fresh();
        assert!(!store.login("demo@flowguard.ai", "wrongpass", at()));
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn failed_login_keeps_existing_session() {
        let (_, mut store) = fresh();
        assert!(store.login("staff@municipality.gov", "staff123", at()));
        assert!(!store.login("admin@municipality.gov", "bad", at()));
        assert_eq!(store.current_user().unwrap().role, Role::Staff);
    }

    #[test]
    fn logout_clears_keys_and_restart_is_unauthenticated() {
        let (storage, mut store) = fresh();
        assert!(store.login("demo@flowguard.ai", "demo123", at()));
        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(USER_KEY), None);
        assert_eq!(storage.get(TOKEN_KEY), None);

        let restarted = SessionStore::restore(storage, DemoCredentials::default());
        assert!(!restarted.is_authenticated());
    }

    #[test]
    fn restart_restores_persisted_user() {
        let (storage, mut store) = fresh();
        assert!(store.login("admin@municipality.gov", "admin123", at()));
        let restarted = SessionStore::restore(storage, DemoCredentials::default());
        assert_eq!(restarted.current_user(), store.current_user());
        assert!(restarted.token().unwrap().starts_with(TOKEN_PREFIX));
    }

    #[test]
    fn unreadable_user_record_is_purged() {
        let storage = MemoryStore::new();
        storage.set(USER_KEY, "{not json").unwrap();
        storage.set(TOKEN_KEY, "fake-jwt-token-1").unwrap();
        let store = SessionStore::restore(storage.clone(), DemoCredentials::default());
        assert!(!store.is_authenticated());
        assert!(!store.is_loading());
        assert!(storage.is_empty());
    }

    #[test]
    fn lone_key_is_purged() {
        let storage = MemoryStore::new();
        storage.set(TOKEN_KEY, "fake-jwt-token-1").unwrap();
        let store = SessionStore::restore(storage.clone(), DemoCredentials::default());
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());

        let user = r#"{"id":"1","email":"a@b.c","name":"Staff Member","role":"staff","organization":"x"}"#;
        storage.set(USER_KEY, user).unwrap();
        let store = SessionStore::restore(storage.clone(), DemoCredentials::default());
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn storage_failure_reports_false() {
        let mut store = SessionStore::restore(ReadOnlyStore(MemoryStore::new()), DemoCredentials::default());
        assert!(!store.login("demo@flowguard.ai", "demo123", at()));
        assert!(!store.is_authenticated());
        assert!(store.storage().0.is_empty());
    }
}
