//! Slide carousels
//!
//! [`Carousel`] pages a track of slides by translating it horizontally and
//! follows the finger or pointer live while a gesture is in progress.
//! [`CardDeck`] is the simpler testimonial variant that only swaps which
//! card is active.

mod deck;
mod drag;
mod swipe;

pub use deck::CardDeck;
pub use drag::DragState;
pub use swipe::Swipe;

use serde::Serialize;

use crate::config::CarouselConfig;

/// Step `index` one place forward or back, wrapping within `count`
///
/// `count` must be non-zero.
#[inline]
pub(crate) fn wrap_step(index: usize, count: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % count
    } else {
        (index + count - 1) % count
    }
}

/// Paged slide carousel
#[derive(Clone, Debug)]
pub struct Carousel {
    slide_count: usize,
    index: usize,
    /// Measured slide width plus the inter-slide gap
    slide_width: f64,
    gap: f64,
    swipe_threshold: f64,
    drag: DragState,
}

/// Serializable view of a carousel
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSnapshot {
    pub slide_count: usize,
    pub index: usize,
    pub slide_width: f64,
    pub offset: f64,
    pub dragging: bool,
}

impl Carousel {
    /// Create a carousel over `slide_count` slides, showing the first
    ///
    /// The slide width is zero until [`set_slide_width`](Self::set_slide_width)
    /// supplies a measurement.
    pub fn new(slide_count: usize, config: &CarouselConfig) -> Self {
        Self {
            slide_count,
            index: 0,
            slide_width: 0.0,
            gap: config.slide_gap,
            swipe_threshold: config.swipe_threshold,
            drag: DragState::Idle,
        }
    }

    /// Number of slides
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the leading slide
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Distance between the starts of adjacent slides
    #[inline]
    pub fn slide_width(&self) -> f64 {
        self.slide_width
    }

    /// Current gesture state
    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Record a fresh measurement of one slide's content width
    ///
    /// Returns the offset to render at the current index.
    pub fn set_slide_width(&mut self, content_width: f64) -> f64 {
        self.slide_width = content_width + self.gap;
        self.offset()
    }

    /// Offset of the current slide with no gesture applied
    pub fn base_offset(&self) -> f64 {
        -(self.slide_width * self.index as f64)
    }

    /// Offset to render: the slide offset plus any live drag travel
    pub fn offset(&self) -> f64 {
        self.base_offset() + self.drag.delta()
    }

    /// CSS transform for the current offset
    pub fn transform(&self) -> String {
        format!("translateX({}px)", self.offset())
    }

    /// Move to the next slide, wrapping to the first
    ///
    /// Returns the offset to render. Does nothing on an empty carousel.
    pub fn advance(&mut self) -> f64 {
        if self.slide_count > 0 {
            self.index = wrap_step(self.index, self.slide_count, true);
        }
        self.offset()
    }

    /// Move to the previous slide, wrapping to the last
    pub fn retreat(&mut self) -> f64 {
        if self.slide_count > 0 {
            self.index = wrap_step(self.index, self.slide_count, false);
        }
        self.offset()
    }

    /// Begin a gesture at horizontal position `x`
    pub fn press(&mut self, x: f64) {
        self.drag = DragState::start(x);
    }

    /// Follow the gesture to `x`
    ///
    /// Returns the live offset to render, or `None` when no gesture is in
    /// progress. The index is not changed.
    pub fn drag_to(&mut self, x: f64) -> Option<f64> {
        match &mut self.drag {
            DragState::Dragging { current_x, .. } => {
                *current_x = x;
                Some(self.offset())
            }
            DragState::Idle => None,
        }
    }

    /// Finish the gesture at `x`
    ///
    /// Travel beyond the swipe threshold retreats (rightward) or advances
    /// (leftward); anything shorter settles back on the current slide.
    /// Returns `None` when there was no gesture to finish.
    pub fn release(&mut self, x: f64) -> Option<Swipe> {
        let start_x = self.drag.start_x()?;
        self.drag = DragState::Idle;

        let swipe = Swipe::classify(x - start_x, self.swipe_threshold);
        match swipe {
            Swipe::Forward => {
                self.advance();
            }
            Swipe::Back => {
                self.retreat();
            }
            Swipe::Stay => {}
        }
        if swipe.commits() {
            log::debug!("[folio-carousel] swipe {:?} -> slide {}", swipe, self.index);
        }
        Some(swipe)
    }

    /// Abandon the gesture and settle on the current slide
    pub fn cancel(&mut self) -> f64 {
        self.drag = DragState::Idle;
        self.offset()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            slide_count: self.slide_count,
            index: self.index,
            slide_width: self.slide_width,
            offset: self.offset(),
            dragging: self.is_dragging(),
        }
    }
}
