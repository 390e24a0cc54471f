//! Interactive behaviors for the portfolio site
//!
//! This crate holds the state behind every interactive element on the page:
//! - Slide carousels with drag/swipe tracking
//! - Circular skill-progress rings animated on first view
//! - Scroll-triggered fade groups
//! - Navigation drawer, work filter, preview modals, lightbox, cover reveal
//!
//! ## Architecture
//!
//! - [`carousel`]: Slide carousel and testimonial card deck
//! - [`progress`]: Progress ring animation
//! - [`visibility`]: One-shot and toggling viewport watchers
//! - [`fade`]: Class toggling for scroll-revealed groups
//! - [`panels`]: Show/hide state for drawers, modals and filters
//! - [`clock`]: Time source and frame-driving abstraction
//! - [`config`]: Selectors and tunables for every behavior
//!
//! ## Example
//!
//! ```rust
//! use folio_ui::{Carousel, CarouselConfig};
//!
//! let mut carousel = Carousel::new(3, &CarouselConfig::default());
//! carousel.set_slide_width(284.0);
//!
//! carousel.advance();
//! carousel.advance();
//! assert_eq!(carousel.index(), 2);
//! assert!((carousel.offset() + 600.0).abs() < 0.001);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: No browser types; the `folio-web` crate binds these to the DOM
//! 2. **Per-Instance State**: Every carousel, ring and panel owns its state outright
//! 3. **Time Abstraction**: Animations take timestamps, so tests drive them with a fake clock

pub mod carousel;
pub mod clock;
pub mod config;
pub mod fade;
pub mod panels;
pub mod progress;
pub mod visibility;

pub use carousel::{CardDeck, Carousel, CarouselSnapshot, DragState, Swipe};
pub use clock::{run_frames, Animated, Clock, FixedRateTicks, ManualClock, Step};
pub use config::{
    CarouselConfig, ConfigError, CoverConfig, FadeConfig, FadeGroup, FolioConfig,
    LightboxConfig, LogLevel, ModalConfig, NavConfig, PreviewLayout, ProgressConfig, SkillsConfig,
    TestimonialConfig, WorksConfig,
};
pub use fade::{ClassChange, FadeTracker};
pub use panels::{
    ClickTarget, CoverReveal, CoverState, Lightbox, ModalSet, NavDrawer, Toggle, WorkFilter,
};
pub use progress::{parse_length, parse_percent, ProgressRing, RingFrame, RingPhase};
pub use visibility::{VisibilityAction, VisibilityEntry, VisibilityWatcher, WatchMode};

/// Gap between adjacent carousel slides, in CSS pixels
pub const SLIDE_GAP: f64 = 16.0;

/// Horizontal travel a gesture needs before it commits to a slide change
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Duration of the progress ring fill animation in milliseconds
pub const RING_DURATION_MS: f64 = 1500.0;

/// Visible ratio at which a progress ring starts animating
pub const RING_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Visible ratio at which fade groups reveal
pub const FADE_VISIBILITY_THRESHOLD: f64 = 0.2;

/// Delay between the cover circle shrinking and the overlay hiding
pub const COVER_REVEAL_DELAY_MS: u32 = 1000;
