//! Scroll-revealed fade groups

use crate::config::{FadeConfig, FadeGroup};
use crate::visibility::{VisibilityAction, VisibilityEntry, VisibilityWatcher, WatchMode};

/// Class mutation for one element of a fade group
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassChange {
    /// Element index within the group
    pub key: usize,
    pub class: String,
    /// Add the class if true, remove it if false
    pub present: bool,
    /// Stop observing the element after applying the change
    pub unobserve: bool,
}

/// Visibility tracking for one fade group
#[derive(Clone, Debug)]
pub struct FadeTracker {
    class_name: String,
    watcher: VisibilityWatcher<usize>,
}

impl FadeTracker {
    /// Track `element_count` elements of `group`
    pub fn new(group: &FadeGroup, config: &FadeConfig, element_count: usize) -> Self {
        let mode = if group.once { WatchMode::Once } else { WatchMode::Toggle };
        let mut watcher = VisibilityWatcher::new(mode, config.threshold).without_ratio_gate();
        for key in 0..element_count {
            watcher.observe(key);
        }
        Self {
            class_name: group.class_name.clone(),
            watcher,
        }
    }

    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Number of elements still observed
    pub fn watching(&self) -> usize {
        self.watcher.len()
    }

    /// Translate an intersection entry into a class change
    pub fn handle(&mut self, entry: VisibilityEntry<usize>) -> Option<ClassChange> {
        let change = match self.watcher.handle(entry)? {
            VisibilityAction::Enter { key, unobserve } => ClassChange {
                key,
                class: self.class_name.clone(),
                present: true,
                unobserve,
            },
            VisibilityAction::Leave { key } => ClassChange {
                key,
                class: self.class_name.clone(),
                present: false,
                unobserve: false,
            },
        };
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_group() {
        let config = FadeConfig::default();
        let group = FadeGroup::new(".fade-in", "show", false);
        let mut tracker = FadeTracker::new(&group, &config, 2);

        let shown = tracker.handle(VisibilityEntry::new(1, true, 0.4)).unwrap();
        assert_eq!(shown.key, 1);
        assert_eq!(shown.class, "show");
        assert!(shown.present);
        assert!(!shown.unobserve);

        let hidden = tracker.handle(VisibilityEntry::new(1, false, 0.0)).unwrap();
        assert!(!hidden.present);
        assert_eq!(tracker.watching(), 2);
    }

    #[test]
    fn test_once_group() {
        let config = FadeConfig::default();
        let group = FadeGroup::new(".resume-card", "show", true);
        let mut tracker = FadeTracker::new(&group, &config, 3);

        let shown = tracker.handle(VisibilityEntry::new(0, true, 0.9)).unwrap();
        assert!(shown.present);
        assert!(shown.unobserve);
        assert_eq!(tracker.watching(), 2);

        assert!(tracker.handle(VisibilityEntry::new(0, false, 0.0)).is_none());
    }

    #[test]
    fn test_tall_element_shown_below_threshold() {
        let config = FadeConfig::default();
        let group = FadeGroup::new(".work-page-fade", "work-page-visible", false);
        let mut tracker = FadeTracker::new(&group, &config, 1);

        let change = tracker.handle(VisibilityEntry::new(0, true, 0.15)).unwrap();
        assert_eq!(change.class, "work-page-visible");
        assert!(change.present);
    }

    #[test]
    fn test_custom_class() {
        let config = FadeConfig::default();
        let group = FadeGroup::new(".work-page-fade", "work-page-visible", false);
        let mut tracker = FadeTracker::new(&group, &config, 1);

        assert_eq!(tracker.class_name(), "work-page-visible");
        let change = tracker.handle(VisibilityEntry::new(0, true, 1.0)).unwrap();
        assert_eq!(change.class, "work-page-visible");
    }
}
