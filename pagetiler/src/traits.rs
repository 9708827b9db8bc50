use crate::pool::Dequeue;
use crate::{Point, Rect, Size};

/// Identity requirements for a page handle.
///
/// The engine never looks inside a page; it only needs cheap cloning and
/// identity so the registry and the reuse pool can track instances.
pub trait PageHandle: Clone + Eq + core::hash::Hash {}
impl<T: Clone + Eq + core::hash::Hash> PageHandle for T {}

/// The underlying scrollable viewport primitive.
///
/// The core reads its geometry on every reconciliation and writes the offset
/// only during a jump, a self-layout pass, or an explicit set-current-page
/// command. Notifications flow the other way: the host forwards the
/// primitive's scroll/drag events to the matching `Pager::handle_*` method.
pub trait Viewport {
    fn frame(&self) -> Rect;
    fn set_frame(&mut self, frame: Rect);
    fn offset(&self) -> Point;
    fn set_offset(&mut self, offset: Point);
    /// Moves the offset, optionally animated by the host. Settling is
    /// reported asynchronously through the host's notifications, never
    /// synchronously here.
    fn set_offset_animated(&mut self, offset: Point, animated: bool) {
        let _ = animated;
        self.set_offset(offset);
    }
    fn content_size(&self) -> Size;
    fn set_content_size(&mut self, size: Size);
    fn is_dragging(&self) -> bool {
        false
    }
}

/// The data-source capability: reports the collection size and produces a
/// ready page for a logical index.
///
/// `count` is queried on demand every pass and must not be cached by the
/// engine. `page` should draw from the pool first via [`Dequeue::dequeue`]
/// before constructing anew; the same index must yield visually-equivalent
/// content across calls, though the handle identity may differ.
pub trait PageSource<P: PageHandle> {
    fn count(&self) -> usize;
    fn page(&mut self, index: usize, dequeue: &mut Dequeue<'_, P>) -> P;
}

/// Observer notifications emitted by the core.
///
/// Every method defaults to a no-op, so hosts implement only what they need.
/// `layout_page` carries the computed frame because the engine is headless:
/// applying the rectangle (and attaching the page on first layout) is the
/// host's job.
pub trait PagerObserver<P: PageHandle> {
    fn page_changed(&mut self, _index: usize) {}
    fn will_begin_drag(&mut self) {}
    fn did_scroll(&mut self) {}
    fn did_finish_scrolling(&mut self) {}
    fn layout_page(&mut self, _page: &P, _index: usize, _frame: Rect) {}
    fn did_end_displaying(&mut self, _page: &P, _index: usize) {}
}

/// The default observer: ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<P: PageHandle> PagerObserver<P> for NoopObserver {}
