use std::cell::Cell;
use std::rc::Rc;

use wireframe_sim::core::{TickScheduler, TimeSource, DEFAULT_MAX_QUANTA, DEFAULT_QUANTUM};

/// Clock driven by hand; clones share the same time
#[derive(Debug, Clone, Default)]
struct ManualClock(Rc<Cell<f64>>);

impl ManualClock {
    fn advance(&self, seconds: f64) {
        self.0.set(self.0.get() + seconds);
    }

    fn set(&self, seconds: f64) {
        self.0.set(seconds);
    }
}

impl TimeSource for ManualClock {
    fn now(&mut self) -> f64 {
        self.0.get()
    }
}

const Q: f64 = DEFAULT_QUANTUM;

fn scheduler() -> (ManualClock, TickScheduler<ManualClock>) {
    let clock = ManualClock::default();
    let mut sched = TickScheduler::new(clock.clone(), Q, DEFAULT_MAX_QUANTA);
    sched.start();
    (clock, sched)
}

#[test]
fn test_first_advance_has_no_burst() {
    let clock = ManualClock::default();
    clock.set(1000.0);
    let mut sched = TickScheduler::new(clock.clone(), Q, DEFAULT_MAX_QUANTA);
    sched.start();

    assert_eq!(sched.advance().count(), 0);
    assert_eq!(sched.accumulator(), 0.0);
}

#[test]
fn test_stall_is_capped_at_max_quanta() {
    let (clock, mut sched) = scheduler();
    clock.advance(12.0 * Q);

    let ticks: Vec<f32> = sched.advance().collect();
    assert_eq!(ticks.len(), 10);
    assert!(ticks.iter().all(|&dt| dt == Q as f32));
    assert!(sched.accumulator().abs() < 1e-9);
}

#[test]
fn test_long_stall_still_capped() {
    let (clock, mut sched) = scheduler();
    clock.advance(3600.0);
    assert_eq!(sched.advance().count(), DEFAULT_MAX_QUANTA as usize);
}

#[test]
fn test_sub_quantum_delta_carries_over() {
    let (clock, mut sched) = scheduler();

    clock.advance(0.6 * Q);
    assert_eq!(sched.advance().count(), 0);
    assert!((sched.accumulator() - 0.6 * Q).abs() < 1e-12);

    clock.advance(0.6 * Q);
    assert_eq!(sched.advance().count(), 1);
    assert!((sched.accumulator() - 0.2 * Q).abs() < 1e-9);
}

#[test]
fn test_exact_quanta_release_exact_ticks() {
    let (clock, mut sched) = scheduler();
    clock.advance(3.0 * Q);
    assert_eq!(sched.advance().count(), 3);
    assert!(sched.accumulator() < 1e-9);
}

#[test]
fn test_clock_going_backwards_adds_nothing() {
    let (clock, mut sched) = scheduler();
    clock.advance(0.5 * Q);
    sched.advance().for_each(drop);

    clock.set(-5.0);
    assert_eq!(sched.advance().count(), 0);
    assert!((sched.accumulator() - 0.5 * Q).abs() < 1e-12);

    // Forward motion is measured from the new sample
    clock.advance(0.5 * Q);
    assert_eq!(sched.advance().count(), 1);
}

#[test]
fn test_start_discards_accumulated_time() {
    let (clock, mut sched) = scheduler();
    clock.advance(0.9 * Q);
    sched.advance().for_each(drop);
    assert!(sched.accumulator() > 0.0);

    clock.advance(5.0);
    sched.start();
    assert_eq!(sched.accumulator(), 0.0);
    assert_eq!(sched.advance().count(), 0);
}

#[test]
fn test_accumulator_bounded_after_every_advance() {
    let (clock, mut sched) = scheduler();
    for i in 0..200 {
        clock.advance((i % 7) as f64 * 0.013);
        sched.advance().for_each(drop);
        assert!(sched.accumulator() >= 0.0);
        assert!(sched.accumulator() < Q + 1e-9);
    }
}

#[test]
fn test_invalid_quantum_falls_back_to_default() {
    let sched = TickScheduler::new(ManualClock::default(), 0.0, 4);
    assert_eq!(sched.quantum(), DEFAULT_QUANTUM);
    assert!((sched.max_accumulation() - 4.0 * DEFAULT_QUANTUM).abs() < 1e-12);
}

#[test]
fn test_tiny_quantum_never_exceeds_cap() {
    for quantum in [1e-9, 1e-10, 1e-12, 1e-15] {
        let clock = ManualClock::default();
        let mut sched = TickScheduler::new(clock.clone(), quantum, 10);
        sched.start();

        clock.advance(1.0);
        let ticks = sched.advance().count();
        assert!(ticks <= 10, "quantum {} released {} ticks", quantum, ticks);
        assert!(sched.accumulator() >= 0.0);

        // A direct delta obeys the same cap
        assert!(sched.accumulate(1.0) <= 10);
    }
}

#[test]
fn test_high_tick_rate_releases_exactly_cap() {
    let clock = ManualClock::default();
    let mut sched = TickScheduler::new(clock.clone(), 1e-10, 10);
    sched.start();
    clock.advance(1.0);
    assert_eq!(sched.advance().count(), 10);
}

#[test]
fn test_zero_catch_up_cap_still_steps() {
    let clock = ManualClock::default();
    let mut sched = TickScheduler::new(clock.clone(), Q, 0);
    sched.start();
    assert_eq!(sched.max_quanta(), DEFAULT_MAX_QUANTA);

    clock.advance(2.0 * Q);
    assert_eq!(sched.advance().count(), 2);
}
