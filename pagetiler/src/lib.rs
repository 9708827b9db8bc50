//! A headless horizontal paging engine.
//!
//! For host-side glue (simulated viewport, notification driver), see the
//! `pagetiler-adapter` crate.
//!
//! This crate implements the windowing/tiling core of a horizontally
//! paginated scroll surface: it maps a scroll offset to the set of logical
//! pages that must be on screen, recycles off-screen page instances into a
//! keyed reuse pool, materializes missing pages pool-first, computes every
//! page's placement rectangle, and can simulate an infinitely-looping
//! sequence of pages over a finite collection by translating the scroll
//! offset through two padding slots ("the jump").
//!
//! It is UI-agnostic. Pages are opaque handles with identity; a host layer
//! is expected to provide:
//! - a scrollable viewport primitive (offset, frame, content size)
//! - the page content for a logical index (via [`PageSource`])
//! - the actual attach/detach/frame application (via [`PagerObserver`])
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod geometry;
mod infinite;
mod options;
mod pager;
mod pool;
mod registry;
mod tiler;
mod traits;
mod types;


pub use infinite::jump_translation;
pub use options::PagerOptions;
pub use pager::Pager;
pub use pool::{Dequeue, PageFactory, ReusePool};
pub use registry::PageRegistry;
pub use traits::{NoopObserver, PageHandle, PageSource, PagerObserver, Viewport};
pub use types::{EdgeInsets, PageId, Point, Rect, Size};

pub mod layout {
    //! Pure layout geometry, exposed for adapters and tests.
    pub use crate::geometry::{
        PADDING_PAGES, actual_page_count, current_page_index_for, logical_index,
        needed_actual_range, page_frame, viewport_frame,
    };
}
