//! Testimonial card deck
//!
//! Only one card is shown at a time. A swipe swaps the active card; there is
//! no live drag feedback.

use super::{wrap_step, Swipe};

/// Swipeable deck of cards with a single active card
#[derive(Clone, Debug)]
pub struct CardDeck {
    card_count: usize,
    current: usize,
    swipe_threshold: f64,
    start_x: Option<f64>,
}

impl CardDeck {
    /// Class on the card currently shown
    pub const ACTIVE_CLASS: &'static str = "active";

    pub fn new(card_count: usize, swipe_threshold: f64) -> Self {
        Self {
            card_count,
            current: 0,
            swipe_threshold,
            start_x: None,
        }
    }

    #[inline]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Index of the active card
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Check if card `index` should carry the active class
    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Record where a swipe began
    pub fn press(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish a swipe at `x`
    ///
    /// Returns the classified swipe, or `None` if no swipe was started. The
    /// active card changes only for a committing swipe.
    pub fn release(&mut self, x: f64) -> Option<Swipe> {
        let start_x = self.start_x.take()?;
        let swipe = Swipe::classify(x - start_x, self.swipe_threshold);
        if self.card_count > 0 {
            match swipe {
                Swipe::Forward => self.current = wrap_step(self.current, self.card_count, true),
                Swipe::Back => self.current = wrap_step(self.current, self.card_count, false),
                Swipe::Stay => {}
            }
        }
        Some(swipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_left_advances() {
        let mut deck = CardDeck::new(3, 50.0);
        deck.press(300.0);
        assert_eq!(deck.release(200.0), Some(Swipe::Forward));
        assert_eq!(deck.current(), 1);
        assert!(deck.is_active(1));
        assert!(!deck.is_active(0));
        assert_eq!(CardDeck::ACTIVE_CLASS, "active");
    }

    #[test]
    fn test_swipe_right_wraps_back() {
        let mut deck = CardDeck::new(3, 50.0);
        deck.press(100.0);
        assert_eq!(deck.release(200.0), Some(Swipe::Back));
        assert_eq!(deck.current(), 2);
    }

    #[test]
    fn test_short_swipe_keeps_card() {
        let mut deck = CardDeck::new(3, 50.0);
        deck.press(100.0);
        assert_eq!(deck.release(140.0), Some(Swipe::Stay));
        assert_eq!(deck.current(), 0);
    }

    #[test]
    fn test_release_without_press_ignored() {
        let mut deck = CardDeck::new(3, 50.0);
        assert!(deck.release(500.0).is_none());

        deck.press(300.0);
        deck.release(100.0);
        // The start position is consumed by the first release
        assert!(deck.release(0.0).is_none());
        assert_eq!(deck.current(), 1);
    }
}
