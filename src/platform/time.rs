//! Clocks and frame timing

use std::time::Instant;

/// Monotonic time source in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Real clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    time: f64,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { time: start }
    }

    pub fn advance(&mut self, secs: f64) {
        self.time += secs;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.time
    }
}

/// Measures elapsed time between frames
#[derive(Debug, Clone)]
pub struct FrameTimer<C: Clock> {
    clock: C,
    last_time: Option<f64>,
}

impl<C: Clock> FrameTimer<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_time: None,
        }
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Seconds since the previous call (0 on the first call)
    pub fn tick(&mut self) -> f32 {
        let now = self.clock.now();
        let dt = self.last_time.map_or(0.0, |last| now - last);
        self.last_time = Some(now);
        dt as f32
    }
}
