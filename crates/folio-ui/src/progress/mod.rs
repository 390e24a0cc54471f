//! Circular skill-progress rings
//!
//! A ring waits until it scrolls into view, then fills from 0 to its target
//! percentage over a fixed duration, updating its stroke and label every
//! frame.

mod parse;
mod ring;

pub use parse::{parse_length, parse_percent};
pub use ring::{ProgressRing, RingFrame, RingPhase};

use crate::config::ProgressConfig;

impl ProgressRing {
    /// Build a ring from raw attribute text
    ///
    /// `value` is the target percentage attribute, `radius` the shape's `r`
    /// attribute. Unparsable text becomes NaN rather than an error.
    pub fn from_attributes(value: &str, radius: &str, config: &ProgressConfig) -> Self {
        Self::new(parse_percent(value), parse_length(radius), config.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attributes() {
        let ring = ProgressRing::from_attributes("85", "40", &ProgressConfig::default());
        assert!((ring.target() - 85.0).abs() < 0.001);
        assert!((ring.circumference() - 80.0 * std::f64::consts::PI).abs() < 0.001);
        assert_eq!(ring.phase(), RingPhase::Pending);
    }

    #[test]
    fn test_from_attributes_malformed() {
        let ring = ProgressRing::from_attributes("lots", "", &ProgressConfig::default());
        assert!(ring.target().is_nan());
        assert!(ring.circumference().is_nan());
    }
}
