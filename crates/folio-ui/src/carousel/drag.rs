//! Drag state for carousel gestures

/// Gesture state of a carousel track
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer or finger is down on the track
    Dragging {
        /// Horizontal position where the gesture began
        start_x: f64,
        /// Latest horizontal position seen
        current_x: f64,
    },
}

impl DragState {
    /// Begin a gesture at `x`
    pub fn start(x: f64) -> Self {
        DragState::Dragging { start_x: x, current_x: x }
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Live horizontal travel since the gesture began (zero when idle)
    pub fn delta(&self) -> f64 {
        match self {
            DragState::Dragging { start_x, current_x } => current_x - start_x,
            DragState::Idle => 0.0,
        }
    }

    /// Gesture start position, if dragging
    pub fn start_x(&self) -> Option<f64> {
        match self {
            DragState::Dragging { start_x, .. } => Some(*start_x),
            DragState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_state() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert!(state.start_x().is_none());
        assert!(state.delta().abs() < 0.001);
    }

    #[test]
    fn test_dragging_delta() {
        let mut state = DragState::start(120.0);
        assert!(state.is_dragging());
        assert!(state.delta().abs() < 0.001);

        if let DragState::Dragging { current_x, .. } = &mut state {
            *current_x = 95.0;
        }
        assert!((state.delta() + 25.0).abs() < 0.001);
        assert_eq!(state.start_x(), Some(120.0));
    }
}
