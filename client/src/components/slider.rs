//! Auto-rotating hero slider.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::BehaviorConfig;
use crate::state::carousel::{Carousel, SlideSurface};
use crate::util::scheduler::BrowserScheduler;

/// One panel of the slider.
#[derive(Clone, Copy, Debug)]
pub struct Slide {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy)]
struct SignalSlides {
    active: RwSignal<usize>,
    offset: RwSignal<usize>,
}

impl SlideSurface for SignalSlides {
    fn set_panel_active(&self, index: usize, active: bool) {
        if active {
            self.active.set(index);
        }
    }

    fn set_offset_percent(&self, percent: usize) {
        self.offset.set(percent);
    }
}

#[component]
pub fn Slider(slides: Vec<Slide>) -> impl IntoView {
    let active = RwSignal::new(0_usize);
    let offset = RwSignal::new(0_usize);
    let panel_count = slides.len();

    Effect::new(move || {
        let surface: Rc<dyn SlideSurface> = Rc::new(SignalSlides { active, offset });
        let started = Carousel::init(Some(surface), panel_count, BrowserScheduler::shared(), BehaviorConfig::default());
        if let Some((_carousel, disposer)) = started {
            on_cleanup(move || disposer.dispose());
        }
    });

    view! {
        <div class="slider">
            <div class="slides" style:transform=move || format!("translateX(-{}%)", offset.get())>
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(index, slide)| {
                        view! {
                            <div class="slide" class:active=move || active.get() == index>
                                <h2>{slide.heading}</h2>
                                <p>{slide.body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
