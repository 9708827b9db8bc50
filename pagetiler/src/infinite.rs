//! Infinite-scroll jump detection.
//!
//! With infinite scroll active the actual range carries one padding slot at
//! each end. When the rounded scroll position drifts into a padding slot the
//! offset is translated by a whole number of page widths back into the
//! canonical range, preserving the apparent position. The translation happens
//! inside the same synchronous pass as the notification that observed the
//! drift, before any tiling, so no page re-materialization precedes it.

use crate::geometry::{PADDING_PAGES, actual_page_count};
use crate::{PageHandle, Pager, Point};

/// Offset translation (in points, along x) required to remap the scroll
/// position out of a padding slot, or `None` when the position is canonical.
///
/// `offset_x / viewport_width` rounds to the current actual slot; the slot
/// may be negative while the viewport rubber-bands past the leading edge,
/// and truncated remainder keeps the low-side target inside the collection
/// in that case.
pub fn jump_translation(offset_x: f64, viewport_width: f64, logical_count: usize) -> Option<f64> {
    if logical_count == 0 || viewport_width <= 0.0 {
        return None;
    }

    let actual = actual_page_count(logical_count, true) as i64;
    let n = logical_count as i64;
    let current = (offset_x / viewport_width).round() as i64;
    let low = (PADDING_PAGES / 2) as i64;

    if current < low {
        let target = n + current % n;
        Some((target - current) as f64 * viewport_width)
    } else if current > actual - 1 - low {
        let target = current % n;
        Some(-((current - target) as f64 * viewport_width))
    } else {
        None
    }
}

impl<P: PageHandle> Pager<P> {
    /// Rewrites the viewport offset when the scroll position has drifted
    /// into a padding slot. Runs under the caller's phase guard, so the
    /// offset write cannot re-enter the scroll handler.
    pub(crate) fn perform_jump_if_needed(&mut self) {
        let logical = self.source.count();
        if !self.options.infinite_scroll || logical == 0 {
            return;
        }

        let width = self.derived_viewport_frame().w;
        let offset = self.viewport.offset();
        if let Some(delta) = jump_translation(offset.x, width, logical) {
            pdebug!(
                offset_x = offset.x,
                delta,
                logical,
                "infinite scroll jump"
            );
            self.viewport
                .set_offset(Point::new(offset.x + delta, offset.y));
        }
    }
}
