//! Fixed-timestep tick generation.
//!
//! Wall-clock deltas arrive at whatever rate the host redraws; the scheduler
//! turns them into a run of equally sized simulation steps and caps how much
//! time it is willing to catch up after a stall.

use super::clock::{Clock, TimeSource};

/// Default simulation quantum (60 Hz)
pub const DEFAULT_QUANTUM: f64 = 1.0 / 60.0;

/// Default cap on accumulated time, in quanta
pub const DEFAULT_MAX_QUANTA: u32 = 10;

/// Slack, relative to the quantum, when comparing the accumulator against
/// whole quanta, so that a clamped accumulator of exactly N quanta yields
/// N ticks despite rounding.
const QUANTUM_EPSILON: f64 = 1e-9;

/// Converts irregular wall-clock deltas into fixed-size simulation ticks
#[derive(Debug)]
pub struct TickScheduler<C: TimeSource = Clock> {
    clock: C,
    last_sample: f64,
    accumulator: f64,
    quantum: f64,
    max_quanta: u32,
    max_accumulation: f64,
}

impl TickScheduler<Clock> {
    /// Wall-clock scheduler at 60 Hz with a 10-quantum cap
    pub fn wall_clock() -> Self {
        Self::new(Clock::new(), DEFAULT_QUANTUM, DEFAULT_MAX_QUANTA)
    }
}

impl<C: TimeSource> TickScheduler<C> {
    /// Create a scheduler stepping in `quantum` seconds and holding at most
    /// `max_quanta` quanta of unconsumed time.
    ///
    /// The clock is sampled immediately so the first `advance` only sees the
    /// time elapsed since construction. A non-positive or non-finite
    /// `quantum` is replaced by [`DEFAULT_QUANTUM`], a zero `max_quanta` by
    /// [`DEFAULT_MAX_QUANTA`].
    pub fn new(mut clock: C, quantum: f64, max_quanta: u32) -> Self {
        let quantum = if quantum.is_finite() && quantum > 0.0 {
            quantum
        } else {
            log::warn!("Invalid tick quantum {}s, using {}s", quantum, DEFAULT_QUANTUM);
            DEFAULT_QUANTUM
        };
        let max_quanta = if max_quanta == 0 {
            log::warn!("Catch-up cap of 0 quanta would stall the simulation, using {}", DEFAULT_MAX_QUANTA);
            DEFAULT_MAX_QUANTA
        } else {
            max_quanta
        };
        let last_sample = clock.now();
        Self {
            clock,
            last_sample,
            accumulator: 0.0,
            quantum,
            max_quanta,
            max_accumulation: quantum * max_quanta as f64,
        }
    }

    /// Re-seed the last sample time at the start of a run and drop any
    /// accumulated time
    pub fn start(&mut self) {
        self.last_sample = self.clock.now();
        self.accumulator = 0.0;
    }

    /// Sample the clock and return the fixed steps to run for this frame.
    ///
    /// Yields `quantum` once per tick; the iterator owns its data, so callers
    /// may mutate anything while consuming it.
    pub fn advance(&mut self) -> impl Iterator<Item = f32> {
        let now = self.clock.now();
        let delta = now - self.last_sample;
        self.last_sample = now;

        let ticks = self.accumulate(delta);
        std::iter::repeat(self.quantum as f32).take(ticks as usize)
    }

    /// Feed a measured delta into the accumulator and return how many ticks
    /// it releases.
    ///
    /// Negative deltas (a clock stepping backwards) count as zero. The
    /// accumulator is clamped to the catch-up cap before ticks are drawn
    /// from it, never drops below zero, and releases at most `max_quanta`
    /// ticks per call.
    pub fn accumulate(&mut self, delta: f64) -> u32 {
        self.accumulator += delta.max(0.0);

        if self.accumulator > self.max_accumulation {
            log::debug!(
                "Tick accumulator clamped: {:.4}s -> {:.4}s",
                self.accumulator,
                self.max_accumulation
            );
            self.accumulator = self.max_accumulation;
        }

        let slack = self.quantum * QUANTUM_EPSILON;
        let mut ticks = 0;
        while ticks < self.max_quanta && self.accumulator + slack >= self.quantum {
            self.accumulator -= self.quantum;
            ticks += 1;
        }
        self.accumulator = self.accumulator.max(0.0);

        ticks
    }

    /// Unconsumed simulation time in seconds
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn quantum(&self) -> f64 {
        self.quantum
    }

    pub fn max_quanta(&self) -> u32 {
        self.max_quanta
    }

    pub fn max_accumulation(&self) -> f64 {
        self.max_accumulation
    }

    /// Interpolation factor between the last tick and the next one
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.quantum
    }
}
