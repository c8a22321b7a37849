use super::*;
use crate::state::responder::{FALLBACK_REPLY, GREETING, PRICING};
use crate::util::scheduler::ManualClock;
use std::time::Duration;

#[derive(Default)]
struct FakeWindow {
    rendered: RefCell<Vec<ChatTurn>>,
    input_clears: Cell<usize>,
    open: Cell<bool>,
}

impl ChatSurface for FakeWindow {
    fn append(&self, turn: &ChatTurn) {
        self.rendered.borrow_mut().push(turn.clone());
    }

    fn clear_input(&self) {
        self.input_clears.set(self.input_clears.get() + 1);
    }

    fn set_open(&self, open: bool) {
        self.open.set(open);
    }
}

fn session() -> (ManualClock, Rc<FakeWindow>, Rc<ChatSession>, Disposer) {
    let clock = ManualClock::new();
    let window = Rc::new(FakeWindow::default());
    let (session, disposer) =
        ChatSession::init(Some(window.clone()), Responder::default(), clock.shared(), BehaviorConfig::default()).unwrap();
    (clock, window, session, disposer)
}

// =============================================================
// Transcript
// =============================================================

#[test]
fn transcript_numbers_turns_in_order() {
    let mut transcript = Transcript::default();
    transcript.push(Sender::User, "hi");
    transcript.push(Sender::Bot, "hello");
    let seqs: Vec<_> = transcript.turns().iter().map(|t| t.seq).collect();
    assert_eq!(seqs, vec![0, 1]);
    assert_eq!(transcript.last().map(|t| t.sender), Some(Sender::Bot));
}

#[test]
fn sender_classes_match_bubbles() {
    assert_eq!(Sender::User.class(), "user");
    assert_eq!(Sender::Bot.class(), "bot");
}

// =============================================================
// ChatSession
// =============================================================

#[test]
fn missing_widget_is_a_noop() {
    let clock = ManualClock::new();
    assert!(ChatSession::init(None, Responder::default(), clock.shared(), BehaviorConfig::default()).is_none());
}

#[test]
fn user_turn_is_immediate_and_reply_is_delayed() {
    let (clock, window, session, _disposer) = session();

    assert!(session.send("  How much does it cost?  "));
    assert_eq!(window.input_clears.get(), 1);
    assert_eq!(session.transcript().len(), 1);
    assert_eq!(window.rendered.borrow()[0].text, "How much does it cost?");
    assert_eq!(window.rendered.borrow()[0].sender, Sender::User);

    clock.advance(Duration::from_millis(499));
    assert_eq!(session.transcript().len(), 1);

    clock.advance(Duration::from_millis(1));
    let transcript = session.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.last().map(|t| t.text.as_str()), Some(PRICING.reply));
    assert_eq!(window.rendered.borrow().len(), 2);
}

#[test]
fn blank_input_is_ignored() {
    let (clock, window, session, _disposer) = session();

    assert!(!session.send(""));
    assert!(!session.send("   \t"));
    assert!(!session.send("\u{feff} "));
    clock.advance(Duration::from_secs(1));
    assert!(session.transcript().is_empty());
    assert_eq!(window.input_clears.get(), 0);
}

#[test]
fn rapid_messages_keep_arrival_order() {
    let (clock, _window, session, _disposer) = session();

    session.send("hello");
    clock.advance(Duration::from_millis(100));
    session.send("asdf1234");
    clock.advance(Duration::from_secs(1));

    let texts: Vec<_> = session.transcript().turns().iter().map(|t| (t.sender, t.text.clone())).collect();
    assert_eq!(
        texts,
        vec![
            (Sender::User, "hello".to_owned()),
            (Sender::User, "asdf1234".to_owned()),
            (Sender::Bot, GREETING.reply.to_owned()),
            (Sender::Bot, FALLBACK_REPLY.to_owned()),
        ]
    );
}

#[test]
fn every_turn_reaches_the_window_once_in_transcript_order() {
    let (clock, window, session, _disposer) = session();

    session.send("hi");
    session.send("price?");
    clock.advance(Duration::from_millis(250));
    session.send("bye");
    clock.advance(Duration::from_secs(1));

    let rendered = window.rendered.borrow();
    assert_eq!(*rendered, session.transcript().turns());
    assert_eq!(rendered.iter().map(|t| t.seq).collect::<Vec<_>>(), (0..6).collect::<Vec<_>>());
    assert_eq!(rendered.last().map(|t| t.sender), Some(Sender::Bot));
}

#[test]
fn close_and_reopen_keeps_transcript() {
    let (clock, window, session, _disposer) = session();

    assert!(session.toggle_open());
    assert!(window.open.get());
    session.send("bye");
    clock.advance(Duration::from_secs(1));

    session.close();
    assert!(!session.is_open());
    assert!(!window.open.get());
    assert!(session.toggle_open());
    assert_eq!(session.transcript().len(), 2);
}

#[test]
fn toggle_flips_between_open_and_closed() {
    let (_clock, _window, session, _disposer) = session();
    assert!(session.toggle_open());
    assert!(!session.toggle_open());
    assert!(!session.is_open());
}

#[test]
fn disposed_session_drops_pending_reply() {
    let (clock, _window, session, disposer) = session();

    session.send("hello");
    disposer.dispose();
    clock.advance(Duration::from_secs(1));
    assert_eq!(session.transcript().len(), 1);
}
