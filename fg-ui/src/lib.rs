//! Shared Dioxus components and browser bindings for the FlowGuard web app.
//!
//! This crate provides:
//! - `storage`: `localStorage`-backed key-value store for the session
//! - `timers`: a `Scheduler` on top of `setInterval`/`setTimeout`
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `components`: reusable RSX components (cards, badges, charts, selectors)

pub mod components;
pub mod state;
pub mod storage;
pub mod timers;
