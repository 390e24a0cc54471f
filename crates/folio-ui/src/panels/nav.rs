//! Navigation drawer and click toggles

/// Mobile navigation drawer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavDrawer {
    #[default]
    Closed,
    Open,
}

impl NavDrawer {
    /// Class carried by the links container while open
    pub const LINKS_CLASS: &'static str = "show";
    /// Class carried by the burger button while open
    pub const TOGGLE_CLASS: &'static str = "hide";

    /// Burger pressed
    pub fn open(&mut self) {
        *self = NavDrawer::Open;
    }

    /// Close button or a nav link pressed
    pub fn close(&mut self) {
        *self = NavDrawer::Closed;
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, NavDrawer::Open)
    }
}

/// Class flag flipped by clicks, e.g. a skill popup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Toggle {
    on: bool,
}

impl Toggle {
    /// Flip the flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }
}
