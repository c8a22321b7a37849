//! Floating support chat: icon, window, transcript, and input row.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::BehaviorConfig;
use crate::state::chat::{ChatSession, ChatSurface, ChatTurn};
use crate::state::responder::Responder;
use crate::util::scheduler::BrowserScheduler;

/// Enter sends, except while an IME composition is being confirmed.
fn sends_on_key(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}

#[derive(Clone, Copy)]
struct SignalChat {
    turns: RwSignal<Vec<ChatTurn>>,
    input: RwSignal<String>,
    open: RwSignal<bool>,
}

impl ChatSurface for SignalChat {
    fn append(&self, turn: &ChatTurn) {
        self.turns.update(|turns| turns.push(turn.clone()));
    }

    fn clear_input(&self) {
        self.input.set(String::new());
    }

    fn set_open(&self, open: bool) {
        self.open.set(open);
    }
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let surface = SignalChat {
        turns: RwSignal::new(Vec::new()),
        input: RwSignal::new(String::new()),
        open: RwSignal::new(false),
    };
    let session = StoredValue::new_local(None::<Rc<ChatSession>>);
    let body_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        if session.with_value(Option::is_some) {
            return;
        }
        let started = ChatSession::init(
            Some(Rc::new(surface)),
            Responder::default(),
            BrowserScheduler::shared(),
            BehaviorConfig::default(),
        );
        if let Some((chat, disposer)) = started {
            session.set_value(Some(chat));
            on_cleanup(move || disposer.dispose());
        }
    });

    Effect::new(move || {
        let _ = surface.turns.with(Vec::len);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = body_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = surface.input.get_untracked();
        session.with_value(|s| {
            if let Some(s) = s {
                s.send(&text);
            }
        });
    };

    let on_toggle = move |_| {
        session.with_value(|s| {
            if let Some(s) = s {
                s.toggle_open();
            }
        });
    };

    let on_close = move |_| {
        session.with_value(|s| {
            if let Some(s) = s {
                s.close();
            }
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if sends_on_key(&ev.key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-widget">
            <button id="chat-icon" class="chat-icon" title="Chat with us" on:click=on_toggle>
                "💬"
            </button>
            <div id="chat-window" class="chat-window" class:open=move || surface.open.get()>
                <div class="chat-window__header">
                    <span>"SikshaConnect Assistant"</span>
                    <button id="close-chat" class="chat-window__close" on:click=on_close>
                        "×"
                    </button>
                </div>
                <div id="chat-body" class="chat-window__body" node_ref=body_ref>
                    <For
                        each=move || surface.turns.get()
                        key=|turn| turn.seq
                        children=move |turn| {
                            view! {
                                <div class=format!("chat-message {}", turn.sender.class())>{turn.text}</div>
                            }
                        }
                    />
                </div>
                <div class="chat-window__input-row">
                    <input
                        id="chat-input"
                        type="text"
                        placeholder="Type a message..."
                        prop:value=move || surface.input.get()
                        on:input=move |ev| surface.input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button id="send-chat-btn" class="btn btn--primary" on:click=move |_| do_send()>
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}
