//! The tiling (reconciliation) pass.
//!
//! One pass: query the fresh logical count, correct stale slots left behind
//! by a jump, compute the needed window of actual slots, recycle displayed
//! pages outside it into the pool, then materialize the missing ones
//! pool-first. Recycling always completes before materializing so a page
//! released earlier in the pass can be dequeued later in the same pass.

use crate::geometry;
use crate::pool::Dequeue;
use crate::{PageHandle, Pager, Rect};

impl<P: PageHandle> Pager<P> {
    pub(crate) fn tile_pages(&mut self) {
        let logical = self.source.count();
        let actual = geometry::actual_page_count(logical, self.options.infinite_scroll);

        let frame = self.derived_viewport_frame();
        let offset = self.viewport.offset();
        let visible = Rect::new(offset.x, offset.y, frame.w, frame.h);
        let range = geometry::needed_actual_range(visible, self.options.preload_pages, actual);

        // Move displayed pages whose actual slot no longer matches their
        // logical index (stale rectangles immediately after a jump). The
        // binding is unchanged; only the frame moves.
        if self.options.infinite_scroll && logical > 0 {
            if let Some((first, last)) = range {
                for actual_index in first..=last {
                    let index = actual_index % logical;
                    let Some(page) = self.registry.page_at(index).cloned() else {
                        continue;
                    };
                    let page_frame = self.frame_for_slot(actual_index, frame.w);
                    if self.registry.update_frame(index, page_frame) {
                        self.observer.layout_page(&page, index, page_frame);
                    }
                }
            }
        }

        // The needed logical set. Distinct actual slots collapse onto the
        // same logical index only inside the padding region, so the window
        // stays tiny; a scratch vec with linear dedup beats hashing here.
        let mut needed: Vec<usize> = Vec::new();
        if logical > 0 {
            if let Some((first, last)) = range {
                for actual_index in first..=last {
                    let index = actual_index % logical;
                    if !needed.contains(&index) {
                        needed.push(index);
                    }
                }
            }
        }

        // Recycle no-longer-needed pages.
        let mut stale: Vec<(P, usize)> = Vec::new();
        self.registry.for_each(|page, index, _| {
            if logical == 0 || !needed.contains(&index) {
                stale.push((page.clone(), index));
            }
        });
        for (page, index) in stale {
            self.registry.unbind(&page);
            self.pool.recycle(page.clone());
            self.observer.did_end_displaying(&page, index);
        }

        // Materialize missing pages, pool-first.
        if logical > 0 {
            if let Some((first, last)) = range {
                for actual_index in first..=last {
                    let index = actual_index % logical;
                    if self.registry.is_displaying(index) {
                        continue;
                    }
                    let page = self
                        .source
                        .page(index, &mut Dequeue::new(&mut self.pool, &self.factories));
                    debug_assert!(
                        !self.pool.contains_idle(&page),
                        "materialized page is still idle in the reuse pool"
                    );
                    let page_frame = self.frame_for_slot(actual_index, frame.w);
                    self.registry.bind(page.clone(), index, page_frame);
                    self.observer.layout_page(&page, index, page_frame);
                }
            }
        }

        ptrace!(
            logical,
            actual,
            displayed = self.registry.len(),
            "tile_pages"
        );
    }

    fn frame_for_slot(&self, actual_index: usize, viewport_width: f64) -> Rect {
        geometry::page_frame(
            self.bounds,
            self.options.page_insets,
            actual_index,
            viewport_width,
            self.options.spacing,
        )
    }
}
