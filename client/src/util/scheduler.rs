//! Deferred task scheduling for timer-driven page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Impact counters, the slider, the chat reply delay, and the contact form's
//! success banner all defer work to a timer. They take a [`Scheduler`] instead
//! of touching browser timers directly, so tests drive them with
//! [`ManualClock`] and the browser build uses [`BrowserScheduler`].
//!
//! DESIGN
//! ======
//! Cancellation flags are `Arc<AtomicBool>` so a [`Disposer`] can move into
//! Leptos `on_cleanup`, which requires `Send + Sync`. Everything else stays
//! single-threaded (`Rc`, boxed non-`Send` closures).

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Cancellation handle for a scheduled task.
///
/// Clones share the same flag. Cancelling is idempotent and never runs the
/// task; a task that already ran is unaffected.
#[derive(Clone, Debug, Default)]
pub struct TaskHandle {
    cancelled: Arc<AtomicBool>,
}

impl TaskHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Single-threaded deferred task queue.
pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle;

    /// Run `task` every `period` until the returned handle is cancelled.
    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle;
}

/// Scheduler shared between a controller and the closures it schedules.
pub type SharedScheduler = Rc<dyn Scheduler>;

/// Releases everything a controller scheduled during `init`.
///
/// Controllers guard all of their timers with one liveness flag, so a single
/// handle covers them.
#[derive(Clone, Debug)]
pub struct Disposer {
    alive: TaskHandle,
}

impl Disposer {
    #[must_use]
    pub fn from_handle(alive: TaskHandle) -> Self {
        Self { alive }
    }

    pub fn dispose(&self) {
        self.alive.cancel();
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.alive.is_cancelled()
    }
}

// =============================================================================
// Browser scheduler
// =============================================================================

/// Scheduler backed by `gloo-timers` futures on the Leptos local executor.
///
/// Outside the `hydrate` build nothing is ever run, which keeps server
/// rendering free of timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl BrowserScheduler {
    #[must_use]
    pub fn shared() -> SharedScheduler {
        Rc::new(Self)
    }
}

impl Scheduler for BrowserScheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = TaskHandle::new();
        #[cfg(feature = "hydrate")]
        {
            let guard = handle.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                if !guard.is_cancelled() {
                    task();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, task);
        }
        handle
    }

    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle {
        let handle = TaskHandle::new();
        #[cfg(feature = "hydrate")]
        {
            let guard = handle.clone();
            let mut task = task;
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(period).await;
                    if guard.is_cancelled() {
                        break;
                    }
                    task();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period, task);
        }
        handle
    }
}

// =============================================================================
// Manual clock
// =============================================================================

enum Job {
    Once(Box<dyn FnOnce()>),
    Repeat { period_ms: u64, task: Box<dyn FnMut()> },
}

struct Pending {
    due_ms: u64,
    seq: u64,
    handle: TaskHandle,
    job: Job,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_seq: u64,
    queue: Vec<Pending>,
}

impl ClockState {
    fn push(&mut self, due_ms: u64, handle: TaskHandle, job: Job) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Pending { due_ms, seq, handle, job });
    }

    fn pop_due(&mut self, until_ms: u64) -> Option<Pending> {
        let index = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)?;
        Some(self.queue.swap_remove(index))
    }
}

/// Deterministic fake clock.
///
/// Time only moves on [`ManualClock::advance`]. Due tasks run in
/// `(due time, scheduling order)` order, and tasks scheduled while advancing
/// run in the same call if they fall due before its end.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shared(&self) -> SharedScheduler {
        Rc::new(self.clone())
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        Duration::from_millis(self.state.borrow().now_ms)
    }

    /// Number of queued tasks that have not been cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state
            .borrow()
            .queue
            .iter()
            .filter(|p| !p.handle.is_cancelled())
            .count()
    }

    pub fn advance(&self, by: Duration) {
        let until_ms = self.state.borrow().now_ms.saturating_add(duration_ms(by));
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let next = state.pop_due(until_ms);
                if let Some(p) = &next {
                    state.now_ms = p.due_ms;
                }
                next
            };
            let Some(Pending { due_ms, handle, job, .. }) = next else {
                break;
            };
            if handle.is_cancelled() {
                continue;
            }
            match job {
                Job::Once(task) => task(),
                Job::Repeat { period_ms, mut task } => {
                    task();
                    if !handle.is_cancelled() {
                        let job = Job::Repeat { period_ms, task };
                        self.state
                            .borrow_mut()
                            .push(due_ms.saturating_add(period_ms), handle, job);
                    }
                }
            }
        }
        self.state.borrow_mut().now_ms = until_ms;
    }
}

impl Scheduler for ManualClock {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = TaskHandle::new();
        let mut state = self.state.borrow_mut();
        let due_ms = state.now_ms.saturating_add(duration_ms(delay));
        state.push(due_ms, handle.clone(), Job::Once(task));
        handle
    }

    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> TaskHandle {
        let handle = TaskHandle::new();
        // A zero period would never let `advance` return.
        let period_ms = duration_ms(period).max(1);
        let mut state = self.state.borrow_mut();
        let due_ms = state.now_ms.saturating_add(period_ms);
        state.push(due_ms, handle.clone(), Job::Repeat { period_ms, task });
        handle
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
