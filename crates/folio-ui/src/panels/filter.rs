//! Featured works category filter

/// Category buttons hiding work boxes outside the selected category
#[derive(Clone, Debug)]
pub struct WorkFilter {
    /// Category named by each button
    categories: Vec<String>,
    /// Class list of each work box
    boxes: Vec<Vec<String>>,
    active: Option<usize>,
}

impl WorkFilter {
    /// Class on the selected category button
    pub const ACTIVE_CLASS: &'static str = "active";
    /// Class on work boxes outside the selected category
    pub const HIDDEN_CLASS: &'static str = "hidden";

    pub fn new(categories: Vec<String>, boxes: Vec<Vec<String>>) -> Self {
        Self {
            categories,
            boxes,
            active: None,
        }
    }

    /// Check if the filter has anything to act on
    pub fn is_usable(&self) -> bool {
        !self.categories.is_empty() && !self.boxes.is_empty()
    }

    /// Index of the active button, if any was pressed
    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Category of the active button
    pub fn active_category(&self) -> Option<&str> {
        self.active.map(|i| self.categories[i].as_str())
    }

    /// Press button `index`
    ///
    /// Returns `false` (and changes nothing) for an unknown button.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.categories.len() {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Check if button `index` carries the active class
    pub fn is_button_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Check if box `index` is hidden by the current selection
    ///
    /// Nothing is hidden before the first selection.
    pub fn is_box_hidden(&self, index: usize) -> bool {
        match (self.active_category(), self.boxes.get(index)) {
            (Some(category), Some(classes)) => !classes.iter().any(|c| c == category),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> WorkFilter {
        WorkFilter::new(
            vec!["web".into(), "design".into()],
            vec![
                vec!["work-box".into(), "web".into()],
                vec!["work-box".into(), "design".into()],
                vec!["work-box".into(), "web".into(), "design".into()],
            ],
        )
    }

    #[test]
    fn test_nothing_hidden_initially() {
        let filter = filter();
        assert!(filter.is_usable());
        assert!(filter.active().is_none());
        assert!((0..3).all(|i| !filter.is_box_hidden(i)));
    }

    #[test]
    fn test_select_category() {
        let mut filter = filter();
        assert!(filter.select(1));

        assert!(filter.is_button_active(1));
        assert!(!filter.is_button_active(0));
        assert!(filter.is_box_hidden(0));
        assert!(!filter.is_box_hidden(1));
        assert!(!filter.is_box_hidden(2));
    }

    #[test]
    fn test_select_unknown_button() {
        let mut filter = filter();
        filter.select(0);
        assert!(!filter.select(5));
        assert_eq!(filter.active_category(), Some("web"));
    }

    #[test]
    fn test_class_names() {
        assert_eq!(WorkFilter::ACTIVE_CLASS, "active");
        assert_eq!(WorkFilter::HIDDEN_CLASS, "hidden");
    }

    #[test]
    fn test_unusable_without_boxes() {
        let filter = WorkFilter::new(vec!["web".into()], Vec::new());
        assert!(!filter.is_usable());
    }
}
