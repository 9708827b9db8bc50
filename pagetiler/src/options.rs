use crate::EdgeInsets;

/// Configuration for [`crate::Pager`].
///
/// Immutable between reloads in spirit: the orchestrator owns the live copy
/// and exposes clamping setters; geometry is always derived from the current
/// values, never cached.
///
/// Negative spacing clamps to zero so the layout geometry stays well-defined;
/// preload and index fields are unsigned by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerOptions {
    /// Space between adjacent pages. Half of it pads each side of a page
    /// inside the overscanned viewport.
    pub spacing: f64,
    /// Insets applied to every page's rectangle within the container bounds.
    pub page_insets: EdgeInsets,
    /// How many extra pages to keep materialized on each side of the
    /// visible window.
    pub preload_pages: usize,
    /// Simulate an infinitely-looping sequence over the finite collection.
    pub infinite_scroll: bool,
    /// The logical page considered current before any scrolling happens.
    pub initial_page_index: usize,
}

impl PagerOptions {
    pub fn new() -> Self {
        Self {
            spacing: 0.0,
            page_insets: EdgeInsets::default(),
            preload_pages: 0,
            infinite_scroll: false,
            initial_page_index: 0,
        }
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    pub fn with_page_insets(mut self, page_insets: EdgeInsets) -> Self {
        self.page_insets = page_insets;
        self
    }

    pub fn with_preload_pages(mut self, preload_pages: usize) -> Self {
        self.preload_pages = preload_pages;
        self
    }

    pub fn with_infinite_scroll(mut self, infinite_scroll: bool) -> Self {
        self.infinite_scroll = infinite_scroll;
        self
    }

    pub fn with_initial_page_index(mut self, initial_page_index: usize) -> Self {
        self.initial_page_index = initial_page_index;
        self
    }

    /// Returns a copy with every field forced into its valid range.
    pub(crate) fn clamped(mut self) -> Self {
        self.spacing = self.spacing.max(0.0);
        self
    }
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self::new()
    }
}
