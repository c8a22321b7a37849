//! Animated impact statistics.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page's impact section shows a handful of numbers that count up
//! from zero the first time the section scrolls into view. Each number is a
//! [`CounterSpec`]; [`ImpactCounters`] owns the group, the one-shot
//! visibility gate, and the tick scheduling.
//!
//! Every counter advances by `ceil(target / speed)` per tick and is clamped to
//! its target, so the displayed sequence is non-decreasing and ends exactly on
//! the target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::BehaviorConfig;
use crate::util::scheduler::{Disposer, SharedScheduler, TaskHandle};
use crate::util::visibility::OneShotTrigger;

/// Outcome of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterTick {
    /// Moved closer to the target; another tick is due.
    Advanced(u64),
    /// Already at the target; the counter is done.
    Finished(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    target: u64,
    current: u64,
    increment: u64,
}

impl CounterSpec {
    #[must_use]
    pub fn new(target: u64, speed: u64) -> Self {
        Self { target, current: 0, increment: increment_for(target, speed) }
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }

    #[must_use]
    pub fn increment(&self) -> u64 {
        self.increment
    }

    pub fn tick(&mut self) -> CounterTick {
        if self.current < self.target {
            self.current = self.current.saturating_add(self.increment).min(self.target);
            CounterTick::Advanced(self.current)
        } else {
            self.current = self.target;
            CounterTick::Finished(self.target)
        }
    }
}

/// Per-tick step: `ceil(target / speed)`.
#[must_use]
pub fn increment_for(target: u64, speed: u64) -> u64 {
    target.div_ceil(speed.max(1))
}

/// Text node (or signal) that shows a counter's value.
pub trait CounterDisplay {
    fn show(&self, value: u64);
}

pub struct CounterBinding {
    pub target: u64,
    pub display: Rc<dyn CounterDisplay>,
}

/// Run one counter to completion: tick now, then every `tick` until done.
///
/// Ticks stop early once `alive` is cancelled.
pub fn animate(spec: CounterSpec, display: Rc<dyn CounterDisplay>, scheduler: SharedScheduler, tick: Duration, alive: TaskHandle) {
    let spec = Rc::new(RefCell::new(spec));
    run_tick(spec, display, scheduler, tick, alive);
}

fn run_tick(
    spec: Rc<RefCell<CounterSpec>>,
    display: Rc<dyn CounterDisplay>,
    scheduler: SharedScheduler,
    tick: Duration,
    alive: TaskHandle,
) {
    if alive.is_cancelled() {
        return;
    }
    let step = spec.borrow_mut().tick();
    match step {
        CounterTick::Advanced(value) => {
            display.show(value);
            let next_scheduler = Rc::clone(&scheduler);
            let _ = scheduler.after(
                tick,
                Box::new(move || run_tick(spec, display, next_scheduler, tick, alive)),
            );
        }
        CounterTick::Finished(target) => display.show(target),
    }
}

/// The impact section's counters, started together on first sight.
pub struct ImpactCounters {
    counters: RefCell<Vec<CounterBinding>>,
    trigger: OneShotTrigger,
    scheduler: SharedScheduler,
    config: BehaviorConfig,
    alive: TaskHandle,
    release_hooks: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl ImpactCounters {
    /// Returns `None` when the page has no impact section.
    pub fn init(
        section: Option<Vec<CounterBinding>>,
        scheduler: SharedScheduler,
        config: BehaviorConfig,
    ) -> Option<(Rc<Self>, Disposer)> {
        let counters = section?;
        let alive = TaskHandle::new();
        let group = Rc::new(Self {
            counters: RefCell::new(counters),
            trigger: OneShotTrigger::new(config.counter_visibility_threshold),
            scheduler,
            config,
            alive: alive.clone(),
            release_hooks: RefCell::new(Vec::new()),
        });
        Some((group, Disposer::from_handle(alive)))
    }

    /// Feed the section's visible fraction. Starts every counter the first
    /// time the threshold is reached and returns `true` on that call only.
    pub fn on_visibility(&self, ratio: f64) -> bool {
        if self.alive.is_cancelled() || !self.trigger.observe(ratio) {
            return false;
        }
        for binding in self.counters.borrow_mut().drain(..) {
            let spec = CounterSpec::new(binding.target, self.config.counter_speed);
            animate(
                spec,
                binding.display,
                Rc::clone(&self.scheduler),
                self.config.counter_tick,
                self.alive.clone(),
            );
        }
        true
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        !self.trigger.is_armed()
    }

    /// Register teardown for something that feeds this group, such as the
    /// visibility observer. Runs once, on [`ImpactCounters::release`].
    pub fn on_release(&self, hook: Box<dyn FnOnce()>) {
        if self.alive.is_cancelled() {
            hook();
        } else {
            self.release_hooks.borrow_mut().push(hook);
        }
    }

    /// Stop ticking and run every release hook. Later calls are no-ops.
    pub fn release(&self) {
        self.alive.cancel();
        let hooks = self.release_hooks.take();
        for hook in hooks {
            hook();
        }
    }
}
