//! Result [`Pager`] tracking a growing fetch window.

use common::Window;

/// Pager growing the requested result window on a "load more" action.
///
/// The [`Window`] only ever grows. While a grown [`Window`]'s request is in
/// flight the pager is pending: further "load more" actions are ignored
/// until [`Pager::settle()`] is called, and the consumer is expected to
/// render [`Pager::skeleton_count()`] placeholders meanwhile. There is no
/// cancellation of the in-flight request.
#[derive(Clone, Copy, Debug)]
pub struct Pager {
    /// Current fetch [`Window`].
    window: Window,

    /// Indicator whether a request for the current [`Window`] is in flight.
    pending: bool,
}

impl Pager {
    /// Creates a new [`Pager`] requesting `initial` results.
    #[must_use]
    pub const fn new(initial: usize) -> Self {
        Self {
            window: Window::new(initial),
            pending: false,
        }
    }

    /// Returns the current fetch [`Window`].
    #[must_use]
    pub const fn window(&self) -> Window {
        self.window
    }

    /// Indicates whether a request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of skeleton placeholders to render while pending.
    ///
    /// Equals the [`Window`]'s step, as that is how many new results the
    /// in-flight request may add.
    #[must_use]
    pub const fn skeleton_count(&self) -> usize {
        if self.pending {
            self.window.step()
        } else {
            0
        }
    }

    /// Grows the [`Window`] and returns it to be requested.
    ///
    /// Returns [`None`] while a previous request is still in flight:
    /// overlapping "load more" requests are ignored rather than queued or
    /// cancelled.
    pub fn load_more(&mut self) -> Option<Window> {
        if self.pending {
            return None;
        }
        self.window = self.window.grown();
        self.pending = true;
        Some(self.window)
    }

    /// Marks the in-flight request as resolved.
    pub fn settle(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod spec {
    use super::Pager;

    #[test]
    fn grows_monotonically() {
        let mut pager = Pager::new(12);
        assert_eq!(pager.window().limit(), 12);

        let window = pager.load_more().unwrap();
        assert_eq!(window.limit(), 24);
        pager.settle();

        let window = pager.load_more().unwrap();
        assert_eq!(window.limit(), 36);
    }

    #[test]
    fn overlapping_load_more_is_ignored() {
        let mut pager = Pager::new(12);

        assert!(pager.load_more().is_some());
        assert!(pager.load_more().is_none());
        assert_eq!(pager.window().limit(), 24);

        pager.settle();
        assert_eq!(pager.load_more().unwrap().limit(), 36);
    }

    #[test]
    fn skeletons_match_the_step_while_pending() {
        let mut pager = Pager::new(12);
        assert_eq!(pager.skeleton_count(), 0);

        _ = pager.load_more();
        assert_eq!(pager.skeleton_count(), 12);

        pager.settle();
        assert_eq!(pager.skeleton_count(), 0);
    }
}
