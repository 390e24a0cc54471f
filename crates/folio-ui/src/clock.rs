//! Time source and frame driving
//!
//! Animations never read the time themselves. They are stepped with a
//! timestamp, so the browser can drive them from `requestAnimationFrame`
//! and tests can drive them from a [`ManualClock`].

use std::cell::Cell;

/// Monotonic millisecond clock
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> f64;
}

/// Outcome of a single animation step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Another frame is needed
    Continue,
    /// The animation reached its final frame
    Done,
}

impl Step {
    /// Check if the animation wants another frame
    #[inline]
    pub fn is_continue(&self) -> bool {
        matches!(self, Step::Continue)
    }
}

/// Something advanced once per display frame
pub trait Animated {
    /// Advance to `now_ms` and report whether to reschedule
    fn step(&mut self, now_ms: f64) -> Step;
}

/// Drive `anim` over `ticks` until it reports [`Step::Done`]
///
/// Returns the number of frames stepped. If the tick source runs dry first,
/// the animation is left mid-flight.
pub fn run_frames<A, I>(anim: &mut A, ticks: I) -> usize
where
    A: Animated + ?Sized,
    I: IntoIterator<Item = f64>,
{
    let mut frames = 0;
    for now_ms in ticks {
        frames += 1;
        if anim.step(now_ms) == Step::Done {
            break;
        }
    }
    frames
}

/// Hand-advanced clock for deterministic tests
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// Create a clock reading zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock reading `ms`
    pub fn at(ms: f64) -> Self {
        Self { now: Cell::new(ms) }
    }

    /// Move the clock forward
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    /// Set the clock to an absolute reading
    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Unbounded sequence of evenly spaced frame timestamps
#[derive(Clone, Debug)]
pub struct FixedRateTicks {
    next: f64,
    interval: f64,
}

impl FixedRateTicks {
    /// Frames starting at `start`, one every `interval` milliseconds
    pub fn new(start: f64, interval: f64) -> Self {
        Self { next: start, interval }
    }

    /// Roughly 60 frames per second from `start`
    pub fn sixty_hz(start: f64) -> Self {
        Self::new(start, 1000.0 / 60.0)
    }
}

impl Iterator for FixedRateTicks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let now = self.next;
        self.next += self.interval;
        Some(now)
    }
}
