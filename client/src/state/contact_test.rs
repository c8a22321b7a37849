use super::*;
use crate::util::scheduler::ManualClock;
use std::cell::{Cell, RefCell};
use std::time::Duration;

#[derive(Default)]
struct FakeControl {
    value: RefCell<String>,
    error: RefCell<Option<String>>,
}

impl FakeControl {
    fn with(value: &str) -> Rc<Self> {
        let control = Self::default();
        *control.value.borrow_mut() = value.to_owned();
        Rc::new(control)
    }
}

impl ValidatedField for FakeControl {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn show_error(&self, message: &str) {
        *self.error.borrow_mut() = Some(message.to_owned());
    }

    fn clear_error(&self) {
        *self.error.borrow_mut() = None;
    }
}

impl FormControl for FakeControl {
    fn reset(&self) {
        self.value.borrow_mut().clear();
    }
}

#[derive(Default)]
struct FakeBanner {
    visible: Cell<bool>,
}

impl SuccessBanner for FakeBanner {
    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

#[derive(Default)]
struct CollectingSink {
    received: RefCell<Vec<ContactSubmission>>,
}

impl ContactSink for CollectingSink {
    fn submit(&self, submission: &ContactSubmission) {
        self.received.borrow_mut().push(submission.clone());
    }
}

struct Harness {
    clock: ManualClock,
    name: Rc<FakeControl>,
    email: Rc<FakeControl>,
    message: Rc<FakeControl>,
    banner: Rc<FakeBanner>,
    sink: Rc<CollectingSink>,
    form: Rc<ContactForm>,
    disposer: Disposer,
}

fn harness(name: &str, email: &str, message: &str) -> Harness {
    let clock = ManualClock::new();
    let (name, email, message) = (FakeControl::with(name), FakeControl::with(email), FakeControl::with(message));
    let banner = Rc::new(FakeBanner::default());
    let sink = Rc::new(CollectingSink::default());
    let bindings = ContactBindings {
        name: name.clone(),
        email: email.clone(),
        message: message.clone(),
        success: banner.clone(),
    };
    let (form, disposer) = ContactForm::init(Some(bindings), sink.clone(), clock.shared(), BehaviorConfig::default()).unwrap();
    Harness { clock, name, email, message, banner, sink, form, disposer }
}

#[test]
fn missing_form_is_a_noop() {
    let clock = ManualClock::new();
    assert!(ContactForm::init(None, Rc::new(LogSink), clock.shared(), BehaviorConfig::default()).is_none());
}

#[test]
fn invalid_form_has_no_side_effects() {
    let h = harness("", "bad-email", "hi");

    assert_eq!(h.form.submit(), SubmitOutcome::Rejected);
    assert!(h.sink.received.borrow().is_empty());
    assert!(!h.banner.visible.get());
    assert_eq!(h.message.value(), "hi");
    assert_eq!(h.name.error.borrow().as_deref(), Some(NAME_REQUIRED));
    assert_eq!(h.email.error.borrow().as_deref(), Some(EMAIL_INVALID));
    assert_eq!(h.clock.pending(), 0);
}

#[test]
fn valid_form_submits_trimmed_values_and_resets() {
    let h = harness(" Ada ", "ada@example.com", "hello\n");

    assert_eq!(h.form.submit(), SubmitOutcome::Accepted);
    assert_eq!(
        *h.sink.received.borrow(),
        vec![ContactSubmission { name: "Ada".into(), email: "ada@example.com".into(), message: "hello".into() }]
    );
    assert!(h.name.value().is_empty());
    assert!(h.email.value().is_empty());
    assert!(h.message.value().is_empty());
}

#[test]
fn success_banner_hides_after_delay() {
    let h = harness("Ada", "ada@example.com", "hello");

    h.form.submit();
    assert!(h.banner.visible.get());
    h.clock.advance(Duration::from_millis(4999));
    assert!(h.banner.visible.get());
    h.clock.advance(Duration::from_millis(1));
    assert!(!h.banner.visible.get());
}

#[test]
fn annotations_persist_until_revalidated() {
    let h = harness("", "ada@example.com", "hello");

    h.form.submit();
    h.clock.advance(Duration::from_secs(30));
    assert_eq!(h.name.error.borrow().as_deref(), Some(NAME_REQUIRED));

    *h.name.value.borrow_mut() = "Ada".into();
    assert_eq!(h.form.submit(), SubmitOutcome::Accepted);
    assert_eq!(*h.name.error.borrow(), None);
}

#[test]
fn disposed_form_leaves_banner_alone() {
    let h = harness("Ada", "ada@example.com", "hello");

    h.form.submit();
    h.disposer.dispose();
    h.clock.advance(Duration::from_secs(10));
    assert!(h.banner.visible.get());
}
