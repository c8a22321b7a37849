//! Auto-rotating home page slider.
//!
//! [`SlideSequence`] is the index arithmetic; [`Carousel`] drives it from a
//! repeating timer and pushes each change to a [`SlideSurface`].

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::BehaviorConfig;
use crate::util::scheduler::{Disposer, SharedScheduler};

/// Ordered panels with exactly one active index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideSequence {
    len: usize,
    active: usize,
}

impl SlideSequence {
    /// `None` for an empty panel list, which has no valid active index.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, active: 0 })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Move to the next panel, wrapping after the last.
    pub fn advance(&mut self) -> usize {
        self.active = (self.active + 1) % self.len;
        self.active
    }

    /// Horizontal viewport offset for the active panel, in percent of one
    /// panel width.
    #[must_use]
    pub fn offset_percent(&self) -> usize {
        self.active * 100
    }
}

/// Slider markup: the panels and the strip that scrolls between them.
pub trait SlideSurface {
    fn set_panel_active(&self, index: usize, active: bool);
    fn set_offset_percent(&self, percent: usize);
}

pub struct Carousel {
    sequence: Cell<SlideSequence>,
    surface: Rc<dyn SlideSurface>,
}

impl Carousel {
    /// Start rotating `panel_count` panels. Returns `None` (and schedules
    /// nothing) when the slider is missing or has no panels.
    pub fn init(
        surface: Option<Rc<dyn SlideSurface>>,
        panel_count: usize,
        scheduler: SharedScheduler,
        config: BehaviorConfig,
    ) -> Option<(Rc<Self>, Disposer)> {
        let surface = surface?;
        let sequence = SlideSequence::new(panel_count)?;
        let carousel = Rc::new(Self { sequence: Cell::new(sequence), surface });

        let ticking = Rc::clone(&carousel);
        let handle = scheduler.every(config.slide_interval, Box::new(move || ticking.show_next()));
        Some((carousel, Disposer::from_handle(handle)))
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.sequence.get().active()
    }

    pub fn show_next(&self) {
        let mut sequence = self.sequence.get();
        self.surface.set_panel_active(sequence.active(), false);
        let next = sequence.advance();
        self.sequence.set(sequence);
        self.surface.set_offset_percent(sequence.offset_percent());
        self.surface.set_panel_active(next, true);
    }
}
