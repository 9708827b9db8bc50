use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pagetiler::{Dequeue, PageId, PageSource, Point, Rect, Size, Viewport};

#[derive(Debug, Default)]
struct SimState {
    frame: Rect,
    offset: Point,
    content_size: Size,
    dragging: bool,
    pending_target: Option<Point>,
}

/// A simulated scrollable viewport primitive.
///
/// State lives behind `Rc<RefCell<_>>`, so a clone handed to the pager and a
/// clone kept by the host observe the same geometry. Animated moves are not
/// applied synchronously; the requested target is parked until the host
/// settles it (see [`crate::Driver::settle`]), mirroring how a real scroll
/// container reports animated moves through later notifications.
#[derive(Clone, Debug, Default)]
pub struct SimViewport {
    state: Rc<RefCell<SimState>>,
}

impl SimViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_dragging(&self, dragging: bool) {
        self.state.borrow_mut().dragging = dragging;
    }

    /// The parked animated target, if a move is in flight.
    pub fn pending_target(&self) -> Option<Point> {
        self.state.borrow().pending_target
    }

    pub fn take_pending_target(&self) -> Option<Point> {
        self.state.borrow_mut().pending_target.take()
    }

    pub(crate) fn park_target(&self, target: Point) {
        self.state.borrow_mut().pending_target = Some(target);
    }
}

impl Viewport for SimViewport {
    fn frame(&self) -> Rect {
        self.state.borrow().frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.state.borrow_mut().frame = frame;
    }

    fn offset(&self) -> Point {
        self.state.borrow().offset
    }

    fn set_offset(&mut self, offset: Point) {
        self.state.borrow_mut().offset = offset;
    }

    fn set_offset_animated(&mut self, offset: Point, animated: bool) {
        if animated {
            self.park_target(offset);
        } else {
            self.set_offset(offset);
        }
    }

    fn content_size(&self) -> Size {
        self.state.borrow().content_size
    }

    fn set_content_size(&mut self, size: Size) {
        self.state.borrow_mut().content_size = size;
    }

    fn is_dragging(&self) -> bool {
        self.state.borrow().dragging
    }
}

/// Mints sequential [`PageId`]s for page factories.
///
/// Clones share the counter, so a clone moved into a factory closure and
/// one kept by the host observe the same sequence.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds(Rc<Cell<u64>>);

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> PageId {
        let id = self.0.get();
        self.0.set(id + 1);
        PageId(id)
    }

    /// How many ids have been handed out so far.
    pub fn minted(&self) -> u64 {
        self.0.get()
    }
}

/// A data source over a uniform collection: every page is dequeued under the
/// same reuse identifier, and the count can be changed from outside through
/// the shared handle.
pub struct SimSource {
    count: Rc<Cell<usize>>,
    reuse_id: String,
}

impl SimSource {
    pub fn new(count: usize, reuse_id: &str) -> Self {
        Self {
            count: Rc::new(Cell::new(count)),
            reuse_id: reuse_id.to_owned(),
        }
    }

    /// A handle for adjusting the count after the source is boxed into the
    /// pager. The pager picks the new value up on its next pass.
    pub fn count_handle(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.count)
    }
}

impl PageSource<PageId> for SimSource {
    fn count(&self) -> usize {
        self.count.get()
    }

    fn page(&mut self, _index: usize, dequeue: &mut Dequeue<'_, PageId>) -> PageId {
        dequeue.dequeue(&self.reuse_id)
    }
}
