//! Account request form.

use fg_core::forms::{SignupError, SignupForm};
use fg_runtime::DelayedTask;
use std::cell::Cell;
use std::rc::Rc;

use crate::PageContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

pub struct SignupPage {
    ctx: PageContext,
    pub form: SignupForm,
    error: Option<SignupError>,
    status: Rc<Cell<SignupStatus>>,
    pending: Option<DelayedTask>,
}

impl SignupPage {
    pub fn mount(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            form: SignupForm::default(),
            error: None,
            status: Rc::default(),
            pending: None,
        }
    }

    pub fn status(&self) -> SignupStatus {
        self.status.get()
    }

    /// The first failing check of the last submit.
    pub fn error(&self) -> Option<SignupError> {
        self.error
    }

    /// Validate, then submit the request after the configured latency.
    pub fn submit(&mut self) -> bool {
        let in_flight = self.pending.as_ref().is_some_and(DelayedTask::is_pending);
        if in_flight || self.status() == SignupStatus::Submitted {
            return false;
        }
        if let Err(e) = self.form.validate() {
            self.error = Some(e);
            return false;
        }
        self.error = None;
        self.status.set(SignupStatus::Submitting);
        log::info!("[FlowGuard] signup: request from {}", self.form.email);

        let status = self.status.clone();
        let notify = self.ctx.notify.clone();
        self.pending = Some(DelayedTask::schedule(
            self.ctx.scheduler.as_ref(),
            self.ctx.config.signup_latency(),
            move || {
                status.set(SignupStatus::Submitted);
                notify();
            },
        ));
        true
    }
}
