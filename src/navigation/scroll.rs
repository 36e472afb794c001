//! Header scroll state.

/// Vertical offset above which the header switches to its scrolled look.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Whether the page has scrolled past [`SCROLL_THRESHOLD`].
///
/// Presentation only; nothing in the navigation logic branches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    scrolled: bool,
}

impl ScrollState {
    /// Recompute from a scroll offset. Returns `true` if the flag changed.
    pub fn update(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_not_scrolled() {
        assert!(!ScrollState::default().is_scrolled());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut state = ScrollState::default();
        assert!(!state.update(50.0));
        assert!(!state.is_scrolled());

        assert!(state.update(50.5));
        assert!(state.is_scrolled());
    }

    #[test]
    fn test_update_reports_changes_only() {
        let mut state = ScrollState::default();
        assert!(state.update(120.0));
        assert!(!state.update(400.0));
        assert!(state.update(0.0));
        assert!(!state.is_scrolled());
    }
}
