//! Chat widget session: transcript, window visibility, delayed bot replies.
//!
//! The transcript is append-only for the life of the page. Opening and
//! closing the window only changes visibility, so a reopened window shows
//! everything said so far.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::BehaviorConfig;
use crate::state::form::trim_input;
use crate::state::responder::Responder;
use crate::util::scheduler::{Disposer, SharedScheduler, TaskHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS modifier for the message bubble.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    /// Position in the transcript; stable key for rendering.
    pub seq: usize,
    pub sender: Sender,
    pub text: String,
}

/// Append-only list of turns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> &ChatTurn {
        let seq = self.turns.len();
        self.turns.push(ChatTurn { seq, sender, text: text.into() });
        &self.turns[seq]
    }

    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }
}

/// Chat window markup.
pub trait ChatSurface {
    /// Render a new turn and scroll it into view.
    fn append(&self, turn: &ChatTurn);
    fn clear_input(&self);
    fn set_open(&self, open: bool);
}

pub struct ChatSession {
    transcript: RefCell<Transcript>,
    open: Cell<bool>,
    responder: Responder,
    surface: Rc<dyn ChatSurface>,
    scheduler: SharedScheduler,
    config: BehaviorConfig,
    alive: TaskHandle,
}

impl ChatSession {
    /// Returns `None` when the page has no chat widget.
    pub fn init(
        surface: Option<Rc<dyn ChatSurface>>,
        responder: Responder,
        scheduler: SharedScheduler,
        config: BehaviorConfig,
    ) -> Option<(Rc<Self>, Disposer)> {
        let surface = surface?;
        let alive = TaskHandle::new();
        let session = Rc::new(Self {
            transcript: RefCell::new(Transcript::default()),
            open: Cell::new(false),
            responder,
            surface,
            scheduler,
            config,
            alive: alive.clone(),
        });
        Some((session, Disposer::from_handle(alive)))
    }

    /// Send the visitor's message. Blank input is ignored and returns
    /// `false`; otherwise the user turn is appended now and the bot reply
    /// after `chat_reply_delay`.
    pub fn send(self: &Rc<Self>, input: &str) -> bool {
        let text = trim_input(input);
        if text.is_empty() {
            return false;
        }

        self.append(Sender::User, text);
        self.surface.clear_input();

        let asked = text.to_owned();
        let session = Rc::clone(self);
        let _ = self.scheduler.after(
            self.config.chat_reply_delay,
            Box::new(move || {
                if !session.alive.is_cancelled() {
                    let reply = session.responder.respond(&asked);
                    session.append(Sender::Bot, reply);
                }
            }),
        );
        true
    }

    fn append(&self, sender: Sender, text: &str) {
        let turn = self.transcript.borrow_mut().push(sender, text).clone();
        self.surface.append(&turn);
    }

    /// Chat icon: flip between open and closed.
    pub fn toggle_open(&self) -> bool {
        let open = !self.open.get();
        self.set_open(open);
        open
    }

    /// Close button.
    pub fn close(&self) {
        self.set_open(false);
    }

    fn set_open(&self, open: bool) {
        self.open.set(open);
        self.surface.set_open(open);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    #[must_use]
    pub fn transcript(&self) -> Transcript {
        self.transcript.borrow().clone()
    }
}
