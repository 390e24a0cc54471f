//! Swipe classification

use serde::Serialize;

/// What a finished gesture asks the carousel to do
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Swipe {
    /// Swiped left: move to the next slide
    Forward,
    /// Swiped right: move to the previous slide
    Back,
    /// Travel stayed inside the threshold: settle on the current slide
    Stay,
}

impl Swipe {
    /// Classify horizontal travel `diff = end_x - start_x`
    ///
    /// Travel exactly equal to the threshold does not commit.
    pub fn classify(diff: f64, threshold: f64) -> Self {
        if diff > threshold {
            Swipe::Back
        } else if diff < -threshold {
            Swipe::Forward
        } else {
            Swipe::Stay
        }
    }

    /// Check if the gesture changes the slide
    #[inline]
    pub fn commits(&self) -> bool {
        !matches!(self, Swipe::Stay)
    }
}
