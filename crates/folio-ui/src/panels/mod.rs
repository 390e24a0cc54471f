//! Show/hide state for the page's panels
//!
//! Each panel maps clicks to class or style flags on its own elements.

mod cover;
mod filter;
mod modal;
mod nav;

pub use cover::{CoverReveal, CoverState};
pub use filter::WorkFilter;
pub use modal::{ClickTarget, Lightbox, ModalSet};
pub use nav::{NavDrawer, Toggle};
