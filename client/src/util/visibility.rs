//! One-shot "scrolled into view" trigger.
//!
//! [`OneShotTrigger`] is the pure gate: it fires the first time a visibility
//! ratio reaches its threshold and never again. [`observe_visibility`] feeds
//! it from an `IntersectionObserver` in the `hydrate` build and disconnects the
//! observer once the gate has fired.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::cell::Cell;

#[derive(Debug)]
pub struct OneShotTrigger {
    threshold: f64,
    armed: Cell<bool>,
}

impl OneShotTrigger {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), armed: Cell::new(true) }
    }

    /// Report the visible fraction of the watched region. Returns `true` only
    /// on the call that fires the trigger.
    pub fn observe(&self, ratio: f64) -> bool {
        if !self.armed.get() || ratio < self.threshold {
            return false;
        }
        self.armed.set(false);
        true
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }
}

/// A live `IntersectionObserver` and the callback it invokes.
///
/// Dropping the watch without [`VisibilityWatch::disconnect`] leaves the
/// observer pointing at a freed callback, so owners must disconnect it.
#[cfg(feature = "hydrate")]
pub struct VisibilityWatch {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl VisibilityWatch {
    /// Stop observing and free the callback.
    pub fn disconnect(self) {
        self.observer.disconnect();
    }
}

/// Watch `target` and call `on_ratio` with its visible fraction whenever it
/// crosses `threshold`. The observer disconnects itself as soon as
/// `on_ratio` returns `true`; the returned watch releases it earlier.
///
/// Returns `None` (after logging) when the browser has no
/// `IntersectionObserver`.
#[cfg(feature = "hydrate")]
pub fn observe_visibility(
    target: &web_sys::Element,
    threshold: f64,
    mut on_ratio: impl FnMut(f64) -> bool + 'static,
) -> Option<VisibilityWatch> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if on_ratio(entry.intersection_ratio()) {
                    observer.disconnect();
                    return;
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(target);
            Some(VisibilityWatch { observer, _callback: callback })
        }
        Err(e) => {
            leptos::logging::warn!("IntersectionObserver unavailable: {e:?}");
            None
        }
    }
}
