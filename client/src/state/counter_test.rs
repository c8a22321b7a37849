use super::*;
use crate::util::scheduler::ManualClock;

#[derive(Default)]
struct RecordingDisplay {
    shown: RefCell<Vec<u64>>,
}

impl CounterDisplay for RecordingDisplay {
    fn show(&self, value: u64) {
        self.shown.borrow_mut().push(value);
    }
}

fn run_to_end(target: u64) -> Vec<u64> {
    let clock = ManualClock::new();
    let display = Rc::new(RecordingDisplay::default());
    animate(
        CounterSpec::new(target, 200),
        display.clone(),
        clock.shared(),
        Duration::from_millis(10),
        TaskHandle::new(),
    );
    clock.advance(Duration::from_secs(60));
    assert_eq!(clock.pending(), 0);
    display.shown.take()
}

// =============================================================
// CounterSpec
// =============================================================

#[test]
fn increment_rounds_up() {
    assert_eq!(increment_for(1000, 200), 5);
    assert_eq!(increment_for(1001, 200), 6);
    assert_eq!(increment_for(7, 200), 1);
    assert_eq!(increment_for(0, 200), 0);
}

#[test]
fn increment_tolerates_zero_speed() {
    assert_eq!(increment_for(50, 0), 50);
}

#[test]
fn tick_clamps_to_target() {
    let mut spec = CounterSpec::new(201, 200);
    assert_eq!(spec.increment(), 2);
    for _ in 0..100 {
        spec.tick();
    }
    assert_eq!(spec.current(), 200);
    assert_eq!(spec.tick(), CounterTick::Advanced(201));
    assert_eq!(spec.tick(), CounterTick::Finished(201));
}

#[test]
fn zero_target_finishes_immediately() {
    let mut spec = CounterSpec::new(0, 200);
    assert_eq!(spec.tick(), CounterTick::Finished(0));
}

// =============================================================
// animate
// =============================================================

#[test]
fn displayed_values_are_non_decreasing_and_end_on_target() {
    for target in [0, 1, 7, 199, 200, 201, 1234, 50_000] {
        let shown = run_to_end(target);
        assert!(shown.windows(2).all(|w| w[0] <= w[1]), "target {target}: {shown:?}");
        assert!(shown.iter().all(|v| *v <= target), "target {target} overshot");
        assert_eq!(shown.last().copied(), Some(target));
    }
}

#[test]
fn first_value_is_shown_without_waiting() {
    let clock = ManualClock::new();
    let display = Rc::new(RecordingDisplay::default());
    animate(CounterSpec::new(1000, 200), display.clone(), clock.shared(), Duration::from_millis(10), TaskHandle::new());
    assert_eq!(*display.shown.borrow(), vec![5]);

    clock.advance(Duration::from_millis(10));
    assert_eq!(*display.shown.borrow(), vec![5, 10]);
}

#[test]
fn cancelled_counter_stops_ticking() {
    let clock = ManualClock::new();
    let display = Rc::new(RecordingDisplay::default());
    let alive = TaskHandle::new();
    animate(CounterSpec::new(1000, 200), display.clone(), clock.shared(), Duration::from_millis(10), alive.clone());

    clock.advance(Duration::from_millis(30));
    alive.cancel();
    clock.advance(Duration::from_secs(10));
    assert_eq!(display.shown.borrow().len(), 4);
}

// =============================================================
// ImpactCounters
// =============================================================

fn section(targets: &[u64]) -> (Vec<CounterBinding>, Vec<Rc<RecordingDisplay>>) {
    let displays: Vec<_> = targets.iter().map(|_| Rc::new(RecordingDisplay::default())).collect();
    let bindings = targets
        .iter()
        .zip(&displays)
        .map(|(target, display)| CounterBinding { target: *target, display: display.clone() })
        .collect();
    (bindings, displays)
}

#[test]
fn missing_section_is_a_noop() {
    let clock = ManualClock::new();
    assert!(ImpactCounters::init(None, clock.shared(), BehaviorConfig::default()).is_none());
}

#[test]
fn counters_wait_for_half_visibility() {
    let clock = ManualClock::new();
    let (bindings, displays) = section(&[100]);
    let (group, _disposer) = ImpactCounters::init(Some(bindings), clock.shared(), BehaviorConfig::default()).unwrap();

    assert!(!group.on_visibility(0.2));
    clock.advance(Duration::from_secs(1));
    assert!(displays[0].shown.borrow().is_empty());
    assert!(!group.has_started());

    assert!(group.on_visibility(0.6));
    clock.advance(Duration::from_secs(5));
    assert_eq!(displays[0].shown.borrow().last().copied(), Some(100));
}

#[test]
fn counters_run_concurrently_and_start_only_once() {
    let clock = ManualClock::new();
    let (bindings, displays) = section(&[10, 5000]);
    let (group, _disposer) = ImpactCounters::init(Some(bindings), clock.shared(), BehaviorConfig::default()).unwrap();

    assert!(group.on_visibility(1.0));
    clock.advance(Duration::from_millis(100));
    assert_eq!(displays[0].shown.borrow().last().copied(), Some(10));
    assert!(displays[1].shown.borrow().last().copied().unwrap() < 5000);

    assert!(!group.on_visibility(0.0));
    assert!(!group.on_visibility(1.0));
    clock.advance(Duration::from_secs(10));
    let tail = displays[1].shown.borrow();
    assert_eq!(tail.last().copied(), Some(5000));
    assert_eq!(tail.iter().filter(|v| **v == 25).count(), 1);
}

#[test]
fn dispose_halts_running_counters() {
    let clock = ManualClock::new();
    let (bindings, displays) = section(&[1000]);
    let (group, disposer) = ImpactCounters::init(Some(bindings), clock.shared(), BehaviorConfig::default()).unwrap();

    group.on_visibility(1.0);
    disposer.dispose();
    clock.advance(Duration::from_secs(10));
    assert_eq!(*displays[0].shown.borrow(), vec![5]);
}

#[test]
fn release_runs_hooks_once_and_stops_counters() {
    let clock = ManualClock::new();
    let (bindings, displays) = section(&[1000]);
    let (group, _disposer) = ImpactCounters::init(Some(bindings), clock.shared(), BehaviorConfig::default()).unwrap();
    let released = Rc::new(std::cell::Cell::new(0));
    let counter = Rc::clone(&released);
    group.on_release(Box::new(move || counter.set(counter.get() + 1)));

    group.on_visibility(1.0);
    group.release();
    group.release();
    clock.advance(Duration::from_secs(10));

    assert_eq!(released.get(), 1);
    assert_eq!(*displays[0].shown.borrow(), vec![5]);
}

#[test]
fn released_group_ignores_visibility() {
    let clock = ManualClock::new();
    let (bindings, displays) = section(&[100]);
    let (group, _disposer) = ImpactCounters::init(Some(bindings), clock.shared(), BehaviorConfig::default()).unwrap();

    group.release();
    assert!(!group.on_visibility(1.0));
    clock.advance(Duration::from_secs(1));
    assert!(displays[0].shown.borrow().is_empty());
}

#[test]
fn hook_registered_after_release_runs_immediately() {
    let clock = ManualClock::new();
    let (group, _disposer) = ImpactCounters::init(Some(Vec::new()), clock.shared(), BehaviorConfig::default()).unwrap();
    group.release();

    let released = Rc::new(std::cell::Cell::new(false));
    let flag = Rc::clone(&released);
    group.on_release(Box::new(move || flag.set(true)));
    assert!(released.get());
}
