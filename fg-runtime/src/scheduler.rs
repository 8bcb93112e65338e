use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Shared cancellation flag checked by a task before every run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Ownership of one scheduled task.
///
/// Cancelling (explicitly or by dropping the handle) sets the task's token
/// and runs the backend's release hook exactly once.
pub struct TaskHandle {
    token: CancelToken,
    release: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    /// `release` frees backend resources (a timer id, a join handle).
    pub fn new(token: CancelToken, release: impl FnOnce() + 'static) -> Self {
        Self {
            token,
            release: Some(Box::new(release)),
        }
    }

    /// A handle with nothing to release beyond the token.
    pub fn from_token(token: CancelToken) -> Self {
        Self {
            token,
            release: None,
        }
    }

    pub fn cancel(&mut self) {
        self.token.cancel();
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Single-threaded cooperative scheduler.
///
/// Tasks run to completion one at a time and never overlap. A cancelled
/// task never runs again, even if its deadline has already passed.
pub trait Scheduler {
    /// Run `task` every `period`, first after one full period.
    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle;

    /// Run `task` once after `delay`.
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle;
}

impl<T: Scheduler + ?Sized> Scheduler for Rc<T> {
    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle {
        (**self).every(period, task)
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        (**self).after(delay, task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_handle_cancels_and_releases_once() {
        let released = Rc::new(Cell::new(0));
        let token = CancelToken::new();
        {
            let released = released.clone();
            let mut handle = TaskHandle::new(token.clone(), move || released.set(released.get() + 1));
            handle.cancel();
            assert!(handle.is_cancelled());
        }
        assert!(token.is_cancelled());
        assert_eq!(released.get(), 1);
    }
}
