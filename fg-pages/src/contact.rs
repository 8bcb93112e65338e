//! Contact form: inline validation, a simulated send, then a success
//! banner that clears itself.

use fg_core::forms::{ContactErrors, ContactField, ContactForm};
use fg_runtime::DelayedTask;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::PageContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Editing,
    Submitting,
    Sent,
}

#[derive(Default)]
struct ContactState {
    form: ContactForm,
    errors: ContactErrors,
    status: ContactStatus,
}

pub struct ContactPage {
    ctx: PageContext,
    state: Rc<RefCell<ContactState>>,
    /// The in-flight send, then the pending reset. Dropping the page
    /// drops whichever is outstanding.
    pending: Rc<RefCell<Option<DelayedTask>>>,
}

impl ContactPage {
    pub fn mount(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            state: Rc::default(),
            pending: Rc::default(),
        }
    }

    pub fn form(&self) -> Ref<'_, ContactForm> {
        Ref::map(self.state.borrow(), |s| &s.form)
    }

    pub fn errors(&self) -> ContactErrors {
        self.state.borrow().errors
    }

    pub fn status(&self) -> ContactStatus {
        self.state.borrow().status
    }

    /// Edit a field; this clears that field's error only.
    pub fn edit(&mut self, field: ContactField, value: &str) {
        let mut state = self.state.borrow_mut();
        *state.form.field_mut(field) = value.to_string();
        state.errors.clear(field);
    }

    /// Validate and, when clean, start the simulated send.
    ///
    /// Returns false when validation failed (errors are then visible) or a
    /// send is already in flight.
    pub fn submit(&mut self) -> bool {
        {
            let mut state = self.state.borrow_mut();
            if state.status == ContactStatus::Submitting {
                return false;
            }
            match state.form.validate() {
                Ok(()) => {
                    state.errors = ContactErrors::default();
                    state.status = ContactStatus::Submitting;
                }
                Err(errors) => {
                    state.errors = errors;
                    return false;
                }
            }
        }

        let state = self.state.clone();
        let pending = Rc::downgrade(&self.pending);
        let scheduler = self.ctx.scheduler.clone();
        let notify = self.ctx.notify.clone();
        let reset_after = self.ctx.config.contact_reset();

        let send = DelayedTask::schedule(
            self.ctx.scheduler.as_ref(),
            self.ctx.config.contact_latency(),
            move || {
                state.borrow_mut().status = ContactStatus::Sent;
                log::info!("[FlowGuard] contact: message sent");
                notify();

                let Some(pending) = pending.upgrade() else {
                    return;
                };
                let reset = DelayedTask::schedule(scheduler.as_ref(), reset_after, move || {
                    *state.borrow_mut() = ContactState::default();
                    notify();
                });
                *pending.borrow_mut() = Some(reset);
            },
        );
        *self.pending.borrow_mut() = Some(send);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::harness;
    use fg_core::forms::ContactFieldError;
    use std::time::Duration;

    fn filled(page: &mut ContactPage) {
        page.edit(ContactField::Name, "Ada Lovelace");
        page.edit(ContactField::Email, "ada@city.gov");
        page.edit(ContactField::Company, "City of Springfield");
        page.edit(ContactField::Message, "Please schedule a demo for our team.");
    }

    #[test]
    fn invalid_form_is_not_sent() {
        let h = harness();
        let mut page = ContactPage::mount(&h.ctx);
        page.edit(ContactField::Email, "nope");
        assert!(!page.submit());
        assert_eq!(page.status(), ContactStatus::Editing);
        assert_eq!(page.errors().email, Some(ContactFieldError::EmailInvalid));
        assert_eq!(h.scheduler.pending(), 0);

        page.edit(ContactField::Email, "ada@city.gov");
        assert_eq!(page.errors().email, None);
        assert_eq!(page.errors().name, Some(ContactFieldError::NameRequired));
    }

    #[test]
    fn send_then_reset() {
        let h = harness();
        let mut page = ContactPage::mount(&h.ctx);
        filled(&mut page);
        assert!(page.submit());
        assert!(!page.submit());
        assert_eq!(page.status(), ContactStatus::Submitting);

        h.scheduler.advance(Duration::from_millis(1500));
        assert_eq!(page.status(), ContactStatus::Sent);
        assert_eq!(page.form().name, "Ada Lovelace");

        h.scheduler.advance(Duration::from_millis(4999));
        assert_eq!(page.status(), ContactStatus::Sent);
        h.scheduler.advance(Duration::from_millis(1));
        assert_eq!(page.status(), ContactStatus::Editing);
        assert_eq!(*page.form(), ContactForm::default());
        assert_eq!(h.notified.get(), 2);
    }

    #[test]
    fn dropping_page_cancels_send_and_reset() {
        let h = harness();
        let mut page = ContactPage::mount(&h.ctx);
        filled(&mut page);
        page.submit();
        drop(page);
        h.scheduler.advance(Duration::from_secs(10));
        assert_eq!(h.notified.get(), 0);

        let mut page = ContactPage::mount(&h.ctx);
        filled(&mut page);
        page.submit();
        h.scheduler.advance(Duration::from_millis(1500));
        drop(page);
        assert_eq!(h.scheduler.pending(), 0);
        h.scheduler.advance(Duration::from_secs(10));
        assert_eq!(h.notified.get(), 1);
    }
}
