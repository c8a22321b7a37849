//! Contact page form: validation, local submission, success banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing leaves the browser. A valid submission is handed to a
//! [`ContactSink`]; the site ships [`LogSink`], and a backend integration
//! would add its own sink here without touching the validation rules.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::rc::Rc;

use crate::config::BehaviorConfig;
use crate::state::form::{
    EMAIL_INVALID, FieldRule, MESSAGE_REQUIRED, NAME_REQUIRED, ValidatedField, is_present, is_valid_email, trim_input,
    validate,
};
use crate::util::scheduler::{Disposer, SharedScheduler, TaskHandle};

/// A validated field that the form can also clear after a submission.
pub trait FormControl: ValidatedField {
    fn reset(&self);
}

pub trait SuccessBanner {
    fn set_visible(&self, visible: bool);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Receives submissions that passed validation.
pub trait ContactSink {
    fn submit(&self, submission: &ContactSubmission);
}

/// Local-only sink: records the submission in the console log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn submit(&self, submission: &ContactSubmission) {
        leptos::logging::log!("contact form is valid; submitting locally for {}", submission.email);
    }
}

pub struct ContactBindings {
    pub name: Rc<dyn FormControl>,
    pub email: Rc<dyn FormControl>,
    pub message: Rc<dyn FormControl>,
    pub success: Rc<dyn SuccessBanner>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

pub struct ContactForm {
    bindings: ContactBindings,
    sink: Rc<dyn ContactSink>,
    scheduler: SharedScheduler,
    config: BehaviorConfig,
    alive: TaskHandle,
}

impl ContactForm {
    /// Returns `None` when the page has no contact form.
    pub fn init(
        bindings: Option<ContactBindings>,
        sink: Rc<dyn ContactSink>,
        scheduler: SharedScheduler,
        config: BehaviorConfig,
    ) -> Option<(Rc<Self>, Disposer)> {
        let bindings = bindings?;
        let alive = TaskHandle::new();
        let form = Rc::new(Self { bindings, sink, scheduler, config, alive: alive.clone() });
        Some((form, Disposer::from_handle(alive)))
    }

    /// Validate all fields. On success submit, reset the fields, and show the
    /// success banner until `success_banner_duration` elapses.
    pub fn submit(&self) -> SubmitOutcome {
        let b = &self.bindings;
        let rules = [
            FieldRule::new(&*b.name, is_present, NAME_REQUIRED),
            FieldRule::new(&*b.email, is_valid_email, EMAIL_INVALID),
            FieldRule::new(&*b.message, is_present, MESSAGE_REQUIRED),
        ];
        if !validate(&rules) {
            return SubmitOutcome::Rejected;
        }

        let submission = ContactSubmission {
            name: trim_input(&b.name.value()).to_owned(),
            email: trim_input(&b.email.value()).to_owned(),
            message: trim_input(&b.message.value()).to_owned(),
        };
        self.sink.submit(&submission);

        b.success.set_visible(true);
        b.name.reset();
        b.email.reset();
        b.message.reset();

        let banner = Rc::clone(&b.success);
        let alive = self.alive.clone();
        let _ = self.scheduler.after(
            self.config.success_banner_duration,
            Box::new(move || {
                if !alive.is_cancelled() {
                    banner.set_visible(false);
                }
            }),
        );
        SubmitOutcome::Accepted
    }
}
