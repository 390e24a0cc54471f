//! Preview modals and the image lightbox

use std::collections::BTreeSet;

/// Open/closed state of the page's preview modals, keyed by element id
#[derive(Clone, Debug, Default)]
pub struct ModalSet {
    known: BTreeSet<String>,
    open: BTreeSet<String>,
}

impl ModalSet {
    /// Track the modals with the given element ids
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: ids.into_iter().map(Into::into).collect(),
            open: BTreeSet::new(),
        }
    }

    /// Show modal `id`; returns `false` if no such modal exists
    pub fn open(&mut self, id: &str) -> bool {
        if !self.known.contains(id) {
            return false;
        }
        self.open.insert(id.to_string());
        true
    }

    /// Hide modal `id`; returns `true` if it was open
    pub fn close(&mut self, id: &str) -> bool {
        self.open.remove(id)
    }

    /// A click landed directly on a modal element, outside its content
    pub fn backdrop_click(&mut self, id: &str) -> bool {
        self.close(id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Ids of the currently open modals
    pub fn open_ids(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}

/// Where a click inside an open lightbox landed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The close glyph
    CloseButton,
    /// The dimmed area around the image
    Backdrop,
    /// The image or its frame
    Content,
}

/// Full-size view of a clicked contact image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lightbox {
    pub src: String,
    pub alt: String,
}

impl Lightbox {
    /// Class of the overlay element
    pub const OVERLAY_CLASS: &'static str = "image-modal";
    /// Class of the frame around the image
    pub const CONTENT_CLASS: &'static str = "image-modal-content";
    /// Class of the close glyph
    pub const CLOSE_CLASS: &'static str = "close";
    /// Text of the close glyph
    pub const CLOSE_GLYPH: &'static str = "\u{00d7}";

    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }

    /// Check if a click on `target` dismisses the lightbox
    pub fn should_close(&self, target: ClickTarget) -> bool {
        matches!(target, ClickTarget::CloseButton | ClickTarget::Backdrop)
    }
}
