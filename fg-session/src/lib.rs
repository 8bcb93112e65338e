//! Session store and route guard for the FlowGuard demo.
//!
//! # Architecture
//!
//! - [`storage::KeyValueStore`] abstracts the durable string key-value store
//!   (browser `localStorage`, a JSON file for the CLI, or memory in tests).
//! - [`credentials::CredentialVerifier`] turns an email/password pair into a
//!   [`User`]; the fixed demo table is one implementation.
//! - [`SessionStore`] owns the current user, persists it under two keys and
//!   hydrates it back on start.
//! - [`routes::Route`] is the route table and its guard.
//!
//! # Usage
//!
//! ```rust
//! use chrono::Utc;
//! use fg_session::credentials::DemoCredentials;
//! use fg_session::storage::MemoryStore;
//! use fg_session::SessionStore;
//!
//! let storage = MemoryStore::new();
//! let mut session = SessionStore::restore(storage.clone(), DemoCredentials::default());
//! assert!(session.login("demo@flowguard.ai", "demo123", Utc::now()));
//!
//! // A fresh store over the same storage picks the session back up.
//! let restarted = SessionStore::restore(storage, DemoCredentials::default());
//! assert!(restarted.is_authenticated());
//! ```

pub mod credentials;
pub mod routes;
mod session;
pub mod storage;
pub mod user;

pub use session::{SessionStore, TOKEN_KEY, TOKEN_PREFIX, USER_KEY};
pub use user::{Role, User};
