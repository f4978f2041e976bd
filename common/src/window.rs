//! Abstractions for fetch-window pagination.
//!
//! Unlike cursor pagination, a fetch window only ever grows: a "load more"
//! action re-requests the whole result set with a larger limit, and the
//! total count of matching items is the sole signal that further growth is
//! useful.

/// Monotonically growing fetch window.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Window {
    /// Number of items requested by this [`Window`].
    limit: usize,

    /// Number of items this [`Window`] grows by.
    step: usize,
}

impl Window {
    /// Creates a new [`Window`] requesting `initial` items and growing by
    /// `initial` items on every [`Window::grown()`] call.
    #[must_use]
    pub const fn new(initial: usize) -> Self {
        Self {
            limit: initial,
            step: initial,
        }
    }

    /// Returns the number of items requested by this [`Window`].
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the number of items this [`Window`] grows by.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Returns this [`Window`] grown by its step.
    ///
    /// Growth is strictly monotonic: no cap is enforced here, as a
    /// [`Page::has_more`] indicator is the only thing stopping further
    /// growth from being requested.
    #[must_use]
    pub const fn grown(self) -> Self {
        Self {
            limit: self.limit + self.step,
            step: self.step,
        }
    }
}

/// Page of nodes selected by a [`Window`].
#[derive(Clone, Debug)]
pub struct Page<N> {
    /// Nodes in this [`Page`].
    pub nodes: Vec<N>,

    /// Indicator whether more nodes exist beyond this [`Page`].
    pub has_more: bool,
}

impl<N> Page<N> {
    /// Creates a new [`Page`] from the nodes selected by the provided
    /// [`Window`] and the `total` count of matching nodes.
    #[must_use]
    pub fn new(
        window: Window,
        nodes: impl IntoIterator<Item = impl Into<N>>,
        total: usize,
    ) -> Self {
        Self {
            nodes: nodes.into_iter().map(Into::into).collect::<Vec<_>>(),
            has_more: total > window.limit(),
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Page, Window};

    #[test]
    fn grows_by_initial_step() {
        let window = Window::new(12);
        assert_eq!(window.limit(), 12);

        let window = window.grown();
        assert_eq!(window.limit(), 24);
        assert_eq!(window.step(), 12);

        let window = window.grown();
        assert_eq!(window.limit(), 36);
    }

    #[test]
    fn has_more_compares_total_against_limit() {
        let window = Window::new(2);

        let page = Page::<u8>::new(window, [1_u8, 2], 5);
        assert!(page.has_more);

        let page = Page::<u8>::new(window.grown(), [1_u8, 2, 3, 4, 5], 5);
        assert!(!page.has_more);
    }

    #[test]
    fn exact_total_is_not_more() {
        let page = Page::<u8>::new(Window::new(3), [1_u8, 2, 3], 3);
        assert!(!page.has_more);
    }
}
