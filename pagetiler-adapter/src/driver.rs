use pagetiler::{PageHandle, PageId, PageSource, Pager, PagerOptions, Point, Rect, Viewport};

use crate::SimViewport;

/// A framework-neutral driver that wraps a [`pagetiler::Pager`] and plays
/// the host's role over a [`SimViewport`]: it writes the scroll offset,
/// forwards the matching notifications, snaps drag releases to page
/// boundaries, and settles animated moves.
///
/// This type does not hold any UI objects. Hosts (and tests) drive it by
/// calling:
/// - `scroll_to` when a scroll position change occurs
/// - `begin_drag` / `drag_to` / `end_drag` for a drag gesture
/// - `settle` after `end_drag` or an animated `set_current_page`, standing
///   in for the deceleration finishing
pub struct Driver<P: PageHandle = PageId> {
    pager: Pager<P>,
    viewport: SimViewport,
}

impl<P: PageHandle> Driver<P> {
    pub fn new(options: PagerOptions, bounds: Rect, source: Box<dyn PageSource<P>>) -> Self {
        let viewport = SimViewport::new();
        let pager = Pager::new(options, bounds, Box::new(viewport.clone()), source);
        Self { pager, viewport }
    }

    pub fn pager(&self) -> &Pager<P> {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager<P> {
        &mut self.pager
    }

    pub fn into_pager(self) -> Pager<P> {
        self.pager
    }

    pub fn viewport(&self) -> &SimViewport {
        &self.viewport
    }

    pub fn offset(&self) -> Point {
        self.viewport.offset()
    }

    /// Moves the scroll position and delivers the scroll notification.
    pub fn scroll_to(&mut self, x: f64) {
        let y = self.viewport.offset().y;
        self.viewport.set_offset(Point::new(x, y));
        self.pager.handle_scroll();
    }

    pub fn begin_drag(&mut self) {
        self.viewport.set_dragging(true);
        self.pager.handle_will_begin_drag();
    }

    /// A finger move while dragging: same delivery as [`Driver::scroll_to`].
    pub fn drag_to(&mut self, x: f64) {
        self.scroll_to(x);
    }

    /// Releases the drag and parks a page-snapped deceleration target: the
    /// nearest slot boundary, clamped into the scrollable range. Returns the
    /// target's x. Call [`Driver::settle`] to finish the deceleration.
    pub fn end_drag(&mut self) -> f64 {
        self.viewport.set_dragging(false);

        let width = self.viewport.frame().w;
        let x = self.viewport.offset().x;
        let target = if width > 0.0 {
            let max = (self.viewport.content_size().w - width).max(0.0);
            ((x / width).round() * width).clamp(0.0, max)
        } else {
            0.0
        };
        self.viewport.park_target(Point::new(target, self.viewport.offset().y));
        target
    }

    /// Applies the parked animated target, if any, and delivers the scroll
    /// and deceleration-ended notifications. Returns whether a move settled.
    pub fn settle(&mut self) -> bool {
        let Some(target) = self.viewport.take_pending_target() else {
            return false;
        };
        self.viewport.set_offset(target);
        self.pager.handle_scroll();
        self.pager.handle_did_end_decelerating();
        true
    }
}
