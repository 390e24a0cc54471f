//! Landing cover reveal

/// Phase of the landing cover
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoverState {
    /// Cover shown, waiting for the button
    #[default]
    Covered,
    /// Circle shrinking; overlay still in place
    Shrinking,
    /// Overlay hidden
    Revealed,
}

/// Two-step reveal: shrink the circle, then hide the overlay after a delay
#[derive(Clone, Debug)]
pub struct CoverReveal {
    state: CoverState,
    delay_ms: u32,
}

impl CoverReveal {
    /// Class added to the circle when the reveal starts
    pub const SHRINK_CLASS: &'static str = "shrink";
    /// Class added to the overlay when the reveal ends
    pub const HIDDEN_CLASS: &'static str = "hidden";

    pub fn new(delay_ms: u32) -> Self {
        Self {
            state: CoverState::Covered,
            delay_ms,
        }
    }

    #[inline]
    pub fn state(&self) -> CoverState {
        self.state
    }

    /// Cover button pressed
    ///
    /// Returns the delay before [`finish`](Self::finish) should run, or
    /// `None` if the reveal already started.
    pub fn press(&mut self) -> Option<u32> {
        if self.state != CoverState::Covered {
            return None;
        }
        self.state = CoverState::Shrinking;
        log::debug!("[folio-cover] shrinking, reveal in {}ms", self.delay_ms);
        Some(self.delay_ms)
    }

    /// Delay elapsed; returns `true` if the overlay should now hide
    pub fn finish(&mut self) -> bool {
        if self.state != CoverState::Shrinking {
            return false;
        }
        self.state = CoverState::Revealed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_sequence() {
        let mut cover = CoverReveal::new(1000);
        assert_eq!(cover.state(), CoverState::Covered);

        assert_eq!(cover.press(), Some(1000));
        assert_eq!(cover.state(), CoverState::Shrinking);

        assert!(cover.finish());
        assert_eq!(cover.state(), CoverState::Revealed);
    }

    #[test]
    fn test_double_press() {
        let mut cover = CoverReveal::new(1000);
        cover.press();
        assert_eq!(cover.press(), None);
    }

    #[test]
    fn test_finish_without_press() {
        let mut cover = CoverReveal::new(1000);
        assert!(!cover.finish());
        assert_eq!(cover.state(), CoverState::Covered);
    }
}
