use std::collections::HashMap;

use crate::{PageHandle, Rect};

#[derive(Clone, Debug)]
struct Binding<P> {
    page: P,
    frame: Rect,
}

/// Authoritative mapping from logical index to the page instance currently
/// displaying it.
///
/// The binding is bidirectional and lives here, in the core's own table,
/// rather than as out-of-band state attached to an opaque instance: one
/// registry owns each binding, and an instance can never be displayed under
/// two indices at once.
///
/// The last computed placement rectangle is stored per binding so frame
/// recomputations that change nothing can be recognized (and not
/// re-notified).
#[derive(Debug, Default)]
pub struct PageRegistry<P: PageHandle> {
    by_index: HashMap<usize, Binding<P>>,
    by_page: HashMap<P, usize>,
}

impl<P: PageHandle> PageRegistry<P> {
    pub fn new() -> Self {
        Self {
            by_index: HashMap::new(),
            by_page: HashMap::new(),
        }
    }

    /// Binds an instance to a logical index with its initial frame.
    ///
    /// # Panics
    ///
    /// Panics when the index already has a displayed page or the instance is
    /// already bound: either is an internal-consistency failure of the
    /// reconciliation ordering, not recoverable input.
    pub fn bind(&mut self, page: P, index: usize, frame: Rect) {
        assert!(
            !self.by_index.contains_key(&index),
            "logical index {index} already has a displayed page"
        );
        assert!(
            !self.by_page.contains_key(&page),
            "page instance is already bound to index {:?}",
            self.by_page.get(&page)
        );
        self.by_page.insert(page.clone(), index);
        self.by_index.insert(index, Binding { page, frame });
    }

    /// Removes an instance's binding; returns the index it displayed.
    pub fn unbind(&mut self, page: &P) -> Option<usize> {
        let index = self.by_page.remove(page)?;
        self.by_index.remove(&index);
        Some(index)
    }

    pub fn page_at(&self, index: usize) -> Option<&P> {
        self.by_index.get(&index).map(|b| &b.page)
    }

    pub fn index_of(&self, page: &P) -> Option<usize> {
        self.by_page.get(page).copied()
    }

    pub fn frame_of(&self, index: usize) -> Option<Rect> {
        self.by_index.get(&index).map(|b| b.frame)
    }

    /// Replaces the stored frame for an index; returns whether it changed.
    pub fn update_frame(&mut self, index: usize, frame: Rect) -> bool {
        match self.by_index.get_mut(&index) {
            Some(binding) if binding.frame != frame => {
                binding.frame = frame;
                true
            }
            _ => false,
        }
    }

    pub fn is_displaying(&self, index: usize) -> bool {
        self.by_index.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }

    /// Visits every displayed page with its index and current frame.
    pub fn for_each(&self, mut f: impl FnMut(&P, usize, Rect)) {
        for (&index, binding) in &self.by_index {
            f(&binding.page, index, binding.frame);
        }
    }

    /// Removes and returns every binding (used on full reload).
    pub fn drain(&mut self) -> Vec<(P, usize)> {
        self.by_page.clear();
        self.by_index
            .drain()
            .map(|(index, binding)| (binding.page, index))
            .collect()
    }

    /// The displayed indices, sorted (handy for assertions and logs).
    pub fn displayed_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.by_index.keys().copied().collect();
        indices.sort_unstable();
        indices
    }
}
