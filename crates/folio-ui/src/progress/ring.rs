//! Progress ring animation state

use serde::Serialize;

use crate::clock::{Animated, Step};

/// Lifecycle of a progress ring
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RingPhase {
    /// Waiting to scroll into view
    Pending,
    /// Filling towards the target
    Animating {
        /// Time the animation began (ms)
        start_ms: f64,
    },
    /// Showing the target; never restarts
    Done,
}

/// What a ring shows on one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingFrame {
    /// Rounded percentage shown in the label
    pub percent: f64,
    /// Stroke dash offset for the ring shape
    pub dash_offset: f64,
}

impl RingFrame {
    /// Label text, e.g. `"73%"`
    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// Circular progress indicator filled once from 0 to its target
#[derive(Clone, Debug)]
pub struct ProgressRing {
    target: f64,
    circumference: f64,
    duration_ms: f64,
    phase: RingPhase,
    last_frame: Option<RingFrame>,
}

impl ProgressRing {
    /// Create a pending ring for `target` percent drawn with radius `radius`
    pub fn new(target: f64, radius: f64, duration_ms: f64) -> Self {
        Self {
            target,
            circumference: 2.0 * std::f64::consts::PI * radius,
            duration_ms,
            phase: RingPhase::Pending,
            last_frame: None,
        }
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Full stroke length of the ring
    #[inline]
    pub fn circumference(&self) -> f64 {
        self.circumference
    }

    #[inline]
    pub fn phase(&self) -> RingPhase {
        self.phase
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self.phase, RingPhase::Done)
    }

    /// Most recent frame produced by [`step`](Animated::step)
    pub fn last_frame(&self) -> Option<RingFrame> {
        self.last_frame
    }

    /// Begin animating at `now_ms`
    ///
    /// Only a pending ring starts; returns `false` if it already ran or is
    /// running. On start the whole stroke is hidden: dash array and dash
    /// offset both equal the circumference.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.phase != RingPhase::Pending {
            return false;
        }
        self.phase = RingPhase::Animating { start_ms: now_ms };
        log::debug!("[folio-progress] ring start, target {}%", self.target);
        true
    }

    /// Fraction of the duration elapsed at `now_ms`, clamped to [0, 1]
    pub fn elapsed_ratio(&self, now_ms: f64) -> f64 {
        match self.phase {
            RingPhase::Pending => 0.0,
            RingPhase::Animating { start_ms } => {
                ((now_ms - start_ms) / self.duration_ms).clamp(0.0, 1.0)
            }
            RingPhase::Done => 1.0,
        }
    }

    /// Frame to show at `now_ms`
    pub fn frame_at(&self, now_ms: f64) -> RingFrame {
        // Adding zero folds a -0.0 into 0.0 so the label never reads "-0%"
        let percent = (self.elapsed_ratio(now_ms) * self.target).round() + 0.0;
        RingFrame {
            percent,
            dash_offset: self.circumference - (percent / 100.0) * self.circumference,
        }
    }
}

impl Animated for ProgressRing {
    fn step(&mut self, now_ms: f64) -> Step {
        let RingPhase::Animating { .. } = self.phase else {
            return Step::Done;
        };

        let frame = self.frame_at(now_ms);
        self.last_frame = Some(frame);

        if self.elapsed_ratio(now_ms) < 1.0 {
            Step::Continue
        } else {
            self.phase = RingPhase::Done;
            log::debug!("[folio-progress] ring done at {}", frame.label());
            Step::Done
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RING_DURATION_MS;

    #[test]
    fn test_circumference() {
        let ring = ProgressRing::new(73.0, 54.0, RING_DURATION_MS);
        assert!((ring.circumference() - 2.0 * std::f64::consts::PI * 54.0).abs() < 0.001);
    }

    #[test]
    fn test_start_only_once() {
        let mut ring = ProgressRing::new(50.0, 10.0, RING_DURATION_MS);
        assert!(ring.start(100.0));
        assert!(!ring.start(200.0));
        assert_eq!(ring.phase(), RingPhase::Animating { start_ms: 100.0 });
    }

    #[test]
    fn test_pending_ring_does_not_step() {
        let mut ring = ProgressRing::new(50.0, 10.0, RING_DURATION_MS);
        assert_eq!(ring.step(500.0), Step::Done);
        assert!(ring.last_frame().is_none());
        assert_eq!(ring.phase(), RingPhase::Pending);
    }

    #[test]
    fn test_midpoint_frame() {
        let mut ring = ProgressRing::new(80.0, 10.0, 1000.0);
        ring.start(0.0);

        assert_eq!(ring.step(500.0), Step::Continue);
        let frame = ring.last_frame().unwrap();
        assert!((frame.percent - 40.0).abs() < 0.001);
        assert!((frame.dash_offset - ring.circumference() * 0.6).abs() < 0.001);
        assert_eq!(frame.label(), "40%");
    }

    #[test]
    fn test_final_frame_exact() {
        let mut ring = ProgressRing::new(73.0, 10.0, RING_DURATION_MS);
        ring.start(0.0);

        assert_eq!(ring.step(2000.0), Step::Done);
        assert!(ring.is_done());
        let frame = ring.last_frame().unwrap();
        assert_eq!(frame.label(), "73%");
        assert!((frame.dash_offset - ring.circumference() * 0.27).abs() < 0.001);
    }

    #[test]
    fn test_early_timestamp_clamps_to_zero() {
        let mut ring = ProgressRing::new(73.0, 10.0, RING_DURATION_MS);
        ring.start(1000.0);

        ring.step(990.0);
        let frame = ring.last_frame().unwrap();
        assert_eq!(frame.label(), "0%");
        assert!((frame.dash_offset - ring.circumference()).abs() < 0.001);
    }

    #[test]
    fn test_nan_target_propagates() {
        let mut ring = ProgressRing::new(f64::NAN, 10.0, RING_DURATION_MS);
        ring.start(0.0);

        assert_eq!(ring.step(RING_DURATION_MS), Step::Done);
        let frame = ring.last_frame().unwrap();
        assert!(frame.percent.is_nan());
        assert_eq!(frame.label(), "NaN%");
    }
}
