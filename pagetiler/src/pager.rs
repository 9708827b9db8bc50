use std::collections::HashMap;

use crate::geometry;
use crate::pool::{PageFactory, ReusePool};
use crate::registry::PageRegistry;
use crate::{
    NoopObserver, PageHandle, PageId, PageSource, PagerObserver, PagerOptions, Point, Rect, Size,
    Viewport,
};

/// Where the orchestrator currently is in its own control flow.
///
/// Scroll notifications are honored only from `Idle`; the other states make
/// core-initiated geometry writes (the jump, self-layout, reload
/// repositioning) invisible to the scroll handler instead of relying on a
/// shared boolean flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Reconciling,
    SelfLayouting,
}

/// A horizontally paginated, virtualized scroll surface.
///
/// `Pager` owns the configuration, the current-page state, the reuse pool
/// and the page registry; the viewport primitive, the data source and the
/// observer are collaborators passed in at construction. The host forwards
/// the viewport's notifications to the `handle_*` methods and applies the
/// frames reported through [`PagerObserver::layout_page`].
///
/// All reconciliation is synchronous and single-threaded: a multi-threaded
/// host must confine the pager to one thread and marshal viewport
/// notifications onto it.
pub struct Pager<P: PageHandle = PageId> {
    pub(crate) options: PagerOptions,
    pub(crate) bounds: Rect,
    current_page_index: usize,
    phase: Phase,
    suppress_jump_once: bool,
    pub(crate) pool: ReusePool<P>,
    pub(crate) factories: HashMap<String, PageFactory<P>>,
    pub(crate) registry: PageRegistry<P>,
    pub(crate) viewport: Box<dyn Viewport>,
    pub(crate) source: Box<dyn PageSource<P>>,
    pub(crate) observer: Box<dyn PagerObserver<P>>,
}

impl<P: PageHandle> Pager<P> {
    /// Creates a pager over a viewport primitive and a data source.
    ///
    /// The viewport's frame is derived from `bounds` immediately; no pages
    /// are materialized until the first [`Pager::reload`] or scroll
    /// notification.
    pub fn new(
        options: PagerOptions,
        bounds: Rect,
        viewport: Box<dyn Viewport>,
        source: Box<dyn PageSource<P>>,
    ) -> Self {
        let options = options.clamped();
        pdebug!(
            spacing = options.spacing,
            preload = options.preload_pages,
            infinite = options.infinite_scroll,
            "Pager::new"
        );
        let mut pager = Self {
            current_page_index: options.initial_page_index,
            options,
            bounds,
            phase: Phase::Idle,
            suppress_jump_once: false,
            pool: ReusePool::new(),
            factories: HashMap::new(),
            registry: PageRegistry::new(),
            viewport,
            source,
            observer: Box::new(NoopObserver),
        };
        let frame = pager.derived_viewport_frame();
        pager.viewport.set_frame(frame);
        pager
    }

    /// Replaces the observer. Pass [`NoopObserver`] to detach.
    pub fn attach_observer(&mut self, observer: Box<dyn PagerObserver<P>>) {
        self.observer = observer;
    }

    /// Records a factory for lazy materialization when the pool has no idle
    /// instance under `reuse_id`.
    pub fn register(&mut self, reuse_id: &str, factory: impl Fn() -> P + 'static) {
        ptrace!(reuse_id, "register page factory");
        self.factories.insert(reuse_id.to_owned(), Box::new(factory));
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    /// Overrides the current-page state without moving the viewport.
    pub fn set_current_page_index(&mut self, index: usize) {
        self.current_page_index = index;
    }

    pub fn page_at(&self, index: usize) -> Option<&P> {
        self.registry.page_at(index)
    }

    pub fn index_of(&self, page: &P) -> Option<usize> {
        self.registry.index_of(page)
    }

    pub fn is_displaying(&self, index: usize) -> bool {
        self.registry.is_displaying(index)
    }

    pub fn displayed_count(&self) -> usize {
        self.registry.len()
    }

    /// Visits every displayed page with its logical index and current frame.
    pub fn for_each_displayed(&self, f: impl FnMut(&P, usize, Rect)) {
        self.registry.for_each(f);
    }

    pub fn is_dragging(&self) -> bool {
        self.viewport.is_dragging()
    }

    pub fn content_offset(&self) -> Point {
        self.viewport.offset()
    }

    pub fn set_content_offset(&mut self, offset: Point) {
        self.viewport.set_offset(offset);
    }

    // Configuration setters. Geometry-affecting changes run a self-layout
    // pass immediately, the synchronous equivalent of a deferred relayout
    // request.

    pub fn set_spacing(&mut self, spacing: f64) {
        self.options.spacing = spacing.max(0.0);
        self.layout();
    }

    pub fn set_page_insets(&mut self, page_insets: crate::EdgeInsets) {
        self.options.page_insets = page_insets;
        self.layout();
    }

    pub fn set_preload_pages(&mut self, preload_pages: usize) {
        self.options.preload_pages = preload_pages;
    }

    pub fn set_infinite_scroll(&mut self, infinite_scroll: bool) {
        if self.options.infinite_scroll == infinite_scroll {
            return;
        }
        self.options.infinite_scroll = infinite_scroll;
        self.layout();
    }

    /// Moves the container; recomputes the viewport geometry and re-frames
    /// displayed pages under the self-layout guard.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layout();
    }

    /// Recycles every displayed page, clears the reuse pool, recomputes the
    /// content extent from the data source's fresh count, and runs one
    /// tiling pass.
    pub fn reload(&mut self) {
        pdebug!("reload");
        let prev = self.begin(Phase::Reconciling);
        self.discard_displayed();
        self.pool.clear();
        self.apply_content_extent();
        self.tile_pages();
        self.end(prev);
    }

    /// As [`Pager::reload`], but repositions the viewport to `index` first
    /// (with scroll notifications suppressed) and makes it current.
    pub fn reload_at(&mut self, index: usize) {
        pdebug!(index, "reload_at");
        let prev = self.begin(Phase::Reconciling);
        self.discard_displayed();
        self.pool.clear();
        self.apply_content_extent();

        let width = self.derived_viewport_frame().w;
        self.viewport
            .set_offset(Point::new(width * index as f64, 0.0));
        self.current_page_index = index;

        self.tile_pages();
        self.end(prev);
    }

    /// Requests the viewport move to a logical index's offset. Settling is
    /// reported asynchronously by the viewport collaborator through the
    /// host's notifications.
    ///
    /// Jump evaluation is suppressed for the next scroll notification so an
    /// explicit target never competes with a padding-slot translation in the
    /// same pass.
    pub fn set_current_page(&mut self, index: usize, animated: bool) {
        let width = self.derived_viewport_frame().w;
        self.suppress_jump_once = true;
        self.viewport
            .set_offset_animated(Point::new(width * index as f64, 0.0), animated);
    }

    /// Scroll-position notification from the viewport primitive.
    ///
    /// Ignored while the orchestrator is inside its own layout or
    /// reconciliation pass.
    pub fn handle_scroll(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        let prev = self.begin(Phase::Reconciling);

        let suppress = core::mem::take(&mut self.suppress_jump_once);
        if !suppress {
            self.perform_jump_if_needed();
        }

        self.observer.did_scroll();

        let logical = self.source.count();
        let width = self.derived_viewport_frame().w;
        let index = geometry::current_page_index_for(
            self.viewport.offset().x,
            width,
            logical,
            self.options.infinite_scroll,
        );
        if index != self.current_page_index {
            self.current_page_index = index;
            self.observer.page_changed(index);
        }

        self.tile_pages();
        self.end(prev);
    }

    /// Drag-started notification from the viewport primitive.
    pub fn handle_will_begin_drag(&mut self) {
        self.observer.will_begin_drag();
    }

    /// Deceleration-ended notification from the viewport primitive.
    pub fn handle_did_end_decelerating(&mut self) {
        self.observer.did_finish_scrolling();
    }

    /// Self-layout pass: derives the viewport frame from the container
    /// bounds and, when it changed, rewrites the viewport geometry and every
    /// displayed page's frame, then reconciles.
    pub fn layout(&mut self) {
        let prev = self.begin(Phase::SelfLayouting);

        let frame = self.derived_viewport_frame();
        if self.viewport.frame() != frame {
            let logical = self.source.count();
            let actual = geometry::actual_page_count(logical, self.options.infinite_scroll);

            self.viewport.set_frame(frame);
            self.viewport
                .set_content_size(Size::new(frame.w * actual as f64, frame.h));
            self.viewport
                .set_offset(Point::new(frame.w * self.current_page_index as f64, 0.0));

            // Displayed pages sit at their canonical slots once the offset
            // is reset to the current index.
            let mut reframed: Vec<(P, usize, Rect)> = Vec::new();
            self.registry.for_each(|page, index, _| {
                let page_frame = geometry::page_frame(
                    self.bounds,
                    self.options.page_insets,
                    index,
                    frame.w,
                    self.options.spacing,
                );
                reframed.push((page.clone(), index, page_frame));
            });
            for (page, index, page_frame) in reframed {
                if self.registry.update_frame(index, page_frame) {
                    self.observer.layout_page(&page, index, page_frame);
                }
            }
        }

        self.end(prev);

        // A size change triggers reconciliation like a scroll change does.
        if self.phase == Phase::Idle {
            let prev = self.begin(Phase::Reconciling);
            self.tile_pages();
            self.end(prev);
        }
    }

    pub(crate) fn derived_viewport_frame(&self) -> Rect {
        geometry::viewport_frame(self.bounds, self.options.page_insets, self.options.spacing)
    }

    fn apply_content_extent(&mut self) {
        let frame = self.derived_viewport_frame();
        let logical = self.source.count();
        let actual = geometry::actual_page_count(logical, self.options.infinite_scroll);
        self.viewport
            .set_content_size(Size::new(frame.w * actual as f64, frame.h));
    }

    /// Drops every binding without pooling, notifying removal for each.
    fn discard_displayed(&mut self) {
        for (page, index) in self.registry.drain() {
            self.observer.did_end_displaying(&page, index);
        }
    }

    fn begin(&mut self, phase: Phase) -> Phase {
        core::mem::replace(&mut self.phase, phase)
    }

    fn end(&mut self, prev: Phase) {
        self.phase = prev;
    }
}

impl<P: PageHandle> core::fmt::Debug for Pager<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pager")
            .field("options", &self.options)
            .field("bounds", &self.bounds)
            .field("current_page_index", &self.current_page_index)
            .field("phase", &self.phase)
            .field("displayed", &self.registry.len())
            .finish_non_exhaustive()
    }
}
