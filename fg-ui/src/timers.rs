//! Browser timers behind the `Scheduler` trait.
//!
//! Each task owns its `Closure`; the release hook clears the browser timer
//! and drops the closure, so a cancelled task frees its JS callback.

use fg_runtime::{CancelToken, Scheduler, TaskHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

fn millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

impl Scheduler for BrowserScheduler {
    fn every(&self, period: Duration, mut task: Box<dyn FnMut()>) -> TaskHandle {
        let token = CancelToken::new();
        let Some(window) = web_sys::window() else {
            log::warn!("[FlowGuard] timers: no window, interval not started");
            token.cancel();
            return TaskHandle::from_token(token);
        };

        let guard = token.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if !guard.is_cancelled() {
                task();
            }
        });
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(period),
            )
            .unwrap_or_else(|e| {
                log::warn!("[FlowGuard] timers: setInterval failed: {:?}", e);
                0
            });

        TaskHandle::new(token, move || {
            window.clear_interval_with_handle(id);
            drop(callback);
        })
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let token = CancelToken::new();
        let Some(window) = web_sys::window() else {
            log::warn!("[FlowGuard] timers: no window, timeout not started");
            token.cancel();
            return TaskHandle::from_token(token);
        };

        // The callback is FnMut for the browser; take the task out on first run.
        let slot = Rc::new(RefCell::new(Some(task)));
        let guard = token.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if guard.is_cancelled() {
                return;
            }
            let task = slot.borrow_mut().take();
            if let Some(task) = task {
                task();
            }
        });
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(delay),
            )
            .unwrap_or_else(|e| {
                log::warn!("[FlowGuard] timers: setTimeout failed: {:?}", e);
                0
            });

        TaskHandle::new(token, move || {
            window.clear_timeout_with_handle(id);
            drop(callback);
        })
    }
}
