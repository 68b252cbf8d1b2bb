//! Presentation-only view state.
//!
//! Scroll position and loading animation live here, outside the session, so
//! the session stays deterministic. The terminal driver owns one
//! [`ViewState`] and updates it from [`Scroll`] actions and ticks.

use std::ops::Range;

use boba_app::Scroll;

/// Number of dots in the loading indicator.
pub const LOADING_DOTS: usize = 3;

/// Transient view state owned by the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Lines scrolled up from the newest line. Zero means pinned to the end.
    scroll_from_end: usize,
    /// Largest useful `scroll_from_end`, as of the last render.
    max_scroll: usize,
    /// Animation frame, advanced on every tick.
    frame: usize,
}

impl ViewState {
    /// Fresh view pinned to the newest message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a scroll request from the session.
    pub fn scroll(&mut self, scroll: Scroll) {
        match scroll {
            Scroll::ToEnd => self.scroll_from_end = 0,
            Scroll::Older => {
                self.scroll_from_end = (self.scroll_from_end + 1).min(self.max_scroll);
            },
            Scroll::Newer => self.scroll_from_end = self.scroll_from_end.saturating_sub(1),
        }
    }

    /// Advance the loading animation.
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Index of the highlighted loading dot.
    pub fn active_dot(&self) -> usize {
        self.frame % LOADING_DOTS
    }

    /// Lines scrolled up from the newest line.
    pub fn scroll_from_end(&self) -> usize {
        self.scroll_from_end
    }

    /// Visible slice of `total` lines in a viewport of `height` lines.
    ///
    /// Records the scroll bound for later [`Scroll::Older`] requests and
    /// clamps the current offset to it.
    pub fn window(&mut self, total: usize, height: usize) -> Range<usize> {
        self.max_scroll = total.saturating_sub(height);
        self.scroll_from_end = self.scroll_from_end.min(self.max_scroll);

        let end = total - self.scroll_from_end;
        let start = end.saturating_sub(height);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_view_shows_tail() {
        let mut view = ViewState::new();
        assert_eq!(view.window(10, 4), 6..10);
        assert_eq!(view.window(3, 4), 0..3);
    }

    #[test]
    fn scroll_older_is_bounded() {
        let mut view = ViewState::new();
        let _ = view.window(6, 4);

        for _ in 0..5 {
            view.scroll(Scroll::Older);
        }

        assert_eq!(view.scroll_from_end(), 2);
        assert_eq!(view.window(6, 4), 0..4);
    }

    #[test]
    fn scroll_to_end_resets_offset() {
        let mut view = ViewState::new();
        let _ = view.window(20, 4);
        view.scroll(Scroll::Older);
        view.scroll(Scroll::Older);
        view.scroll(Scroll::Newer);
        assert_eq!(view.scroll_from_end(), 1);

        view.scroll(Scroll::ToEnd);
        assert_eq!(view.window(22, 4), 18..22);
    }

    #[test]
    fn dots_cycle_with_ticks() {
        let mut view = ViewState::new();
        let dots: Vec<_> = (0..4)
            .map(|_| {
                let dot = view.active_dot();
                view.tick();
                dot
            })
            .collect();
        assert_eq!(dots, vec![0, 1, 2, 0]);
    }
}
