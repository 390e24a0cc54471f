//! Viewport visibility watching
//!
//! The browser reports intersection changes as a stream of entries. A
//! [`VisibilityWatcher`] turns those entries into enter/leave actions for
//! the keys it is subscribed to, and in [`WatchMode::Once`] drops each key
//! the first time it enters so it can never fire again.

use std::collections::BTreeSet;

/// How a watcher treats a key after it first becomes visible
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchMode {
    /// Report the first entry, then unsubscribe the key
    Once,
    /// Report every enter and leave
    Toggle,
}

/// One intersection report for a watched key
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEntry<K> {
    pub key: K,
    pub is_intersecting: bool,
    /// Visible fraction of the element, 0.0 to 1.0
    pub ratio: f64,
}

impl<K> VisibilityEntry<K> {
    pub fn new(key: K, is_intersecting: bool, ratio: f64) -> Self {
        Self { key, is_intersecting, ratio }
    }
}

/// Action to take for an entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityAction<K> {
    /// The key became visible
    Enter {
        key: K,
        /// Stop observing the element; it will not be reported again
        unobserve: bool,
    },
    /// The key left the viewport
    Leave { key: K },
}

impl<K: Copy> VisibilityAction<K> {
    pub fn key(&self) -> K {
        match self {
            VisibilityAction::Enter { key, .. } | VisibilityAction::Leave { key } => *key,
        }
    }
}

/// Subscription set interpreting intersection entries
#[derive(Clone, Debug)]
pub struct VisibilityWatcher<K> {
    mode: WatchMode,
    threshold: f64,
    /// Require `ratio >= threshold` to enter; otherwise any overlap enters
    ratio_gate: bool,
    watched: BTreeSet<K>,
}

impl<K: Ord + Copy> VisibilityWatcher<K> {
    pub fn new(mode: WatchMode, threshold: f64) -> Self {
        Self {
            mode,
            threshold,
            ratio_gate: true,
            watched: BTreeSet::new(),
        }
    }

    /// Enter on any intersecting entry, whatever its ratio
    ///
    /// The threshold then only tells the browser when to report.
    pub fn without_ratio_gate(mut self) -> Self {
        self.ratio_gate = false;
        self
    }

    #[inline]
    pub fn is_ratio_gated(&self) -> bool {
        self.ratio_gate
    }

    #[inline]
    pub fn mode(&self) -> WatchMode {
        self.mode
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Subscribe `key`
    pub fn observe(&mut self, key: K) {
        self.watched.insert(key);
    }

    /// Unsubscribe `key`
    pub fn unobserve(&mut self, key: K) {
        self.watched.remove(&key);
    }

    pub fn is_watching(&self, key: K) -> bool {
        self.watched.contains(&key)
    }

    /// Number of keys still subscribed
    pub fn len(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Interpret one entry
    ///
    /// A key enters when it intersects with a ratio at or above the
    /// threshold, or on any intersection when the ratio gate is off. It leaves (toggle mode only) when it no longer intersects.
    /// Partial visibility below the threshold changes nothing.
    pub fn handle(&mut self, entry: VisibilityEntry<K>) -> Option<VisibilityAction<K>> {
        if !self.watched.contains(&entry.key) {
            return None;
        }

        let visible_enough = !self.ratio_gate || entry.ratio >= self.threshold;
        if entry.is_intersecting && visible_enough {
            let unobserve = self.mode == WatchMode::Once;
            if unobserve {
                self.watched.remove(&entry.key);
            }
            Some(VisibilityAction::Enter { key: entry.key, unobserve })
        } else if !entry.is_intersecting && self.mode == WatchMode::Toggle {
            Some(VisibilityAction::Leave { key: entry.key })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_fires_once() {
        let mut watcher = VisibilityWatcher::new(WatchMode::Once, 0.5);
        watcher.observe(1u32);

        let action = watcher.handle(VisibilityEntry::new(1, true, 0.6));
        assert_eq!(action, Some(VisibilityAction::Enter { key: 1, unobserve: true }));
        assert!(!watcher.is_watching(1));

        assert_eq!(watcher.handle(VisibilityEntry::new(1, false, 0.0)), None);
        assert_eq!(watcher.handle(VisibilityEntry::new(1, true, 1.0)), None);
    }

    #[test]
    fn test_below_threshold_ignored() {
        let mut watcher = VisibilityWatcher::new(WatchMode::Once, 0.5);
        watcher.observe(7u32);

        assert_eq!(watcher.handle(VisibilityEntry::new(7, true, 0.3)), None);
        assert!(watcher.is_watching(7));
    }

    #[test]
    fn test_toggle_enter_and_leave() {
        let mut watcher = VisibilityWatcher::new(WatchMode::Toggle, 0.2);
        watcher.observe(0usize);

        assert_eq!(
            watcher.handle(VisibilityEntry::new(0, true, 0.25)),
            Some(VisibilityAction::Enter { key: 0, unobserve: false })
        );
        assert_eq!(
            watcher.handle(VisibilityEntry::new(0, false, 0.0)),
            Some(VisibilityAction::Leave { key: 0 })
        );
        assert!(watcher.is_watching(0));
    }

    #[test]
    fn test_partial_exit_keeps_state() {
        let mut watcher = VisibilityWatcher::new(WatchMode::Toggle, 0.2);
        watcher.observe(0usize);
        assert_eq!(watcher.handle(VisibilityEntry::new(0, true, 0.1)), None);
    }

    #[test]
    fn test_ungated_enters_on_any_overlap() {
        let mut watcher = VisibilityWatcher::new(WatchMode::Toggle, 0.2).without_ratio_gate();
        watcher.observe(0usize);
        assert!(!watcher.is_ratio_gated());

        assert_eq!(
            watcher.handle(VisibilityEntry::new(0, true, 0.05)),
            Some(VisibilityAction::Enter { key: 0, unobserve: false })
        );
        assert_eq!(
            watcher.handle(VisibilityEntry::new(0, false, 0.0)),
            Some(VisibilityAction::Leave { key: 0 })
        );
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut watcher: VisibilityWatcher<usize> = VisibilityWatcher::new(WatchMode::Toggle, 0.2);
        assert!(watcher.is_empty());
        assert_eq!(watcher.handle(VisibilityEntry::new(3, true, 1.0)), None);
    }

    #[test]
    fn test_action_key() {
        assert_eq!(VisibilityAction::Leave { key: 4 }.key(), 4);
        assert_eq!(VisibilityAction::Enter { key: 9, unobserve: true }.key(), 9);
    }
}
