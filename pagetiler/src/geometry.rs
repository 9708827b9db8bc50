//! Pure layout geometry.
//!
//! Everything here is a function of the configuration and the current sizes;
//! no state is read or written. The actual <-> logical index mapping and the
//! needed-window computation live here so the tiling pass stays a plain
//! sequence of lookups.

use crate::{EdgeInsets, Rect};

/// Number of padding slots added to the actual range when infinite scroll
/// is active: one staging slot at each end.
pub const PADDING_PAGES: usize = 2;

/// Actual slot count for the underlying scrollable range.
///
/// Recomputed on every pass from the data source's fresh count; never cache
/// the result across reconciliations.
pub fn actual_page_count(logical_count: usize, infinite_scroll: bool) -> usize {
    if infinite_scroll && logical_count > 0 {
        logical_count + PADDING_PAGES
    } else {
        logical_count
    }
}

/// Maps an actual slot index into the logical collection.
///
/// `None` when the collection is empty (the mapping is undefined).
pub fn logical_index(actual_index: usize, logical_count: usize) -> Option<usize> {
    if logical_count == 0 {
        None
    } else {
        Some(actual_index % logical_count)
    }
}

/// The viewport's frame inside the container.
///
/// The origin shifts right by `insets.left - spacing / 2` and the width grows
/// by `spacing - insets.left - insets.right`: a half-spacing overscan on each
/// side makes inter-page gaps symmetric without an extra gap at the
/// container's outer edge.
pub fn viewport_frame(container_bounds: Rect, insets: EdgeInsets, spacing: f64) -> Rect {
    let mut frame = container_bounds;
    frame.x += insets.left - spacing / 2.0;
    frame.w += spacing - insets.left - insets.right;
    frame
}

/// The placement rectangle for the page occupying an actual slot.
pub fn page_frame(
    container_bounds: Rect,
    insets: EdgeInsets,
    actual_index: usize,
    viewport_width: f64,
    spacing: f64,
) -> Rect {
    let mut frame = container_bounds.inset_by(insets);
    frame.x = viewport_width * actual_index as f64 + spacing / 2.0;
    frame
}

/// The inclusive range of actual slots that must be materialized for the
/// given scroll position, or `None` when nothing is needed.
///
/// First slot: `floor(min_x / width) - preload`, clamped to zero (the scroll
/// position can rubber-band to negative offsets). Last slot:
/// `floor((max_x - 1) / width) + preload`, clamped to `actual_count - 1`.
pub fn needed_actual_range(
    viewport_bounds: Rect,
    preload_pages: usize,
    actual_count: usize,
) -> Option<(usize, usize)> {
    let width = viewport_bounds.w;
    if actual_count == 0 || width <= 0.0 {
        return None;
    }

    let preload = preload_pages as i64;
    let first = ((viewport_bounds.min_x() / width).floor() as i64 - preload).max(0);
    let last = (((viewport_bounds.max_x() - 1.0) / width).floor() as i64 + preload)
        .min(actual_count as i64 - 1);

    if last < first {
        return None;
    }
    Some((first as usize, last as usize))
}

/// The logical page index implied by a scroll position.
///
/// Rounds the offset to the nearest actual slot, clamps into the actual
/// range, then wraps into the logical collection. Zero when the collection
/// is empty or the viewport has no width.
pub fn current_page_index_for(
    offset_x: f64,
    viewport_width: f64,
    logical_count: usize,
    infinite_scroll: bool,
) -> usize {
    if logical_count == 0 || viewport_width <= 0.0 {
        return 0;
    }
    let actual = actual_page_count(logical_count, infinite_scroll);
    let slot = (offset_x / viewport_width).round() as i64;
    let slot = slot.clamp(0, actual as i64 - 1) as usize;
    slot % logical_count
}
