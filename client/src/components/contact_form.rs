//! Contact page form bound to signals.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::BehaviorConfig;
use crate::state::contact::{ContactBindings, ContactForm as FormController, FormControl, LogSink, SuccessBanner};
use crate::state::form::ValidatedField;
use crate::util::scheduler::BrowserScheduler;

#[derive(Clone, Copy)]
struct SignalField {
    value: RwSignal<String>,
    error: RwSignal<Option<String>>,
}

impl SignalField {
    fn new() -> Self {
        Self { value: RwSignal::new(String::new()), error: RwSignal::new(None) }
    }
}

impl ValidatedField for SignalField {
    fn value(&self) -> String {
        self.value.get_untracked()
    }

    fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_owned()));
    }

    fn clear_error(&self) {
        self.error.set(None);
    }
}

impl FormControl for SignalField {
    fn reset(&self) {
        self.value.set(String::new());
    }
}

#[derive(Clone, Copy)]
struct SignalBanner(RwSignal<bool>);

impl SuccessBanner for SignalBanner {
    fn set_visible(&self, visible: bool) {
        self.0.set(visible);
    }
}

fn group_class(field: SignalField) -> impl Fn() -> &'static str + Copy {
    move || if field.error.with(Option::is_some) { "form-group error" } else { "form-group" }
}

fn error_text(field: SignalField) -> impl Fn() -> String + Copy {
    move || field.error.get().unwrap_or_default()
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let name = SignalField::new();
    let email = SignalField::new();
    let message = SignalField::new();
    let success = RwSignal::new(false);
    let form = StoredValue::new_local(None::<Rc<FormController>>);

    Effect::new(move || {
        if form.with_value(Option::is_some) {
            return;
        }
        let bindings = ContactBindings {
            name: Rc::new(name),
            email: Rc::new(email),
            message: Rc::new(message),
            success: Rc::new(SignalBanner(success)),
        };
        let started =
            FormController::init(Some(bindings), Rc::new(LogSink), BrowserScheduler::shared(), BehaviorConfig::default());
        if let Some((controller, disposer)) = started {
            form.set_value(Some(controller));
            on_cleanup(move || disposer.dispose());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.with_value(|f| {
            if let Some(f) = f {
                f.submit();
            }
        });
    };

    view! {
        <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
            <div class=group_class(name)>
                <label for="name">"Name"</label>
                <input
                    id="name"
                    type="text"
                    prop:value=move || name.value.get()
                    on:input=move |ev| name.value.set(event_target_value(&ev))
                />
                <small class="error-message">{error_text(name)}</small>
            </div>
            <div class=group_class(email)>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    prop:value=move || email.value.get()
                    on:input=move |ev| email.value.set(event_target_value(&ev))
                />
                <small class="error-message">{error_text(email)}</small>
            </div>
            <div class=group_class(message)>
                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    rows="5"
                    prop:value=move || message.value.get()
                    on:input=move |ev| message.value.set(event_target_value(&ev))
                ></textarea>
                <small class="error-message">{error_text(message)}</small>
            </div>
            <button type="submit" class="btn btn--primary">
                "Send Message"
            </button>
            <p
                id="form-success-message"
                class="form-success"
                style:display=move || if success.get() { "block" } else { "none" }
            >
                "Thank you! Your message has been sent."
            </p>
        </form>
    }
}
