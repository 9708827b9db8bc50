use std::collections::HashMap;

use crate::PageHandle;

/// Constructor for a fresh page instance under one reuse identifier.
pub type PageFactory<P> = Box<dyn Fn() -> P>;

/// Keyed storage of idle page instances grouped by reuse identifier.
///
/// An instance present here holds no logical-index binding; the tiling pass
/// guarantees it is never simultaneously registered as displayed. Selection
/// among idle instances of one identifier is "any available" (no ordering
/// guarantee).
///
/// The pool also remembers which identifier an instance was dequeued under,
/// so recycling can route it back without the host restating the tag.
#[derive(Debug, Default)]
pub struct ReusePool<P: PageHandle> {
    idle: HashMap<String, Vec<P>>,
    tags: HashMap<P, String>,
}

impl<P: PageHandle> ReusePool<P> {
    pub fn new() -> Self {
        Self {
            idle: HashMap::new(),
            tags: HashMap::new(),
        }
    }

    /// Inserts an instance into the idle set for `reuse_id`, creating the
    /// set on first use. Tags the instance with the identifier.
    pub fn store(&mut self, reuse_id: &str, page: P) {
        let set = self.idle.entry(reuse_id.to_owned()).or_default();
        debug_assert!(
            !set.contains(&page),
            "page stored into the reuse pool twice"
        );
        set.push(page.clone());
        self.tags.insert(page, reuse_id.to_owned());
    }

    /// Removes and returns an arbitrary idle instance for `reuse_id`.
    pub fn take_any(&mut self, reuse_id: &str) -> Option<P> {
        self.idle.get_mut(reuse_id)?.pop()
    }

    /// Stores an instance under the identifier it was dequeued with.
    ///
    /// Instances that were never dequeued carry no tag and are not pooled;
    /// returns whether the instance was kept.
    pub(crate) fn recycle(&mut self, page: P) -> bool {
        match self.tags.get(&page).cloned() {
            Some(reuse_id) => {
                self.store(&reuse_id, page);
                true
            }
            None => {
                pwarn!("recycled page has no reuse identifier; dropping");
                false
            }
        }
    }

    /// Remembers which identifier an instance belongs to without pooling it.
    pub(crate) fn tag(&mut self, page: P, reuse_id: &str) {
        self.tags.insert(page, reuse_id.to_owned());
    }

    pub fn reuse_id_of(&self, page: &P) -> Option<&str> {
        self.tags.get(page).map(String::as_str)
    }

    /// Empties every idle set and forgets all tags (used on full reload).
    pub fn clear(&mut self) {
        self.idle.clear();
        self.tags.clear();
    }

    pub fn idle_count(&self, reuse_id: &str) -> usize {
        self.idle.get(reuse_id).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.idle.values().all(Vec::is_empty)
    }

    pub(crate) fn contains_idle(&self, page: &P) -> bool {
        self.idle.values().any(|set| set.contains(page))
    }
}

/// Pool-first page acquisition, handed to the data source during
/// materialization.
///
/// Borrows the pool and the factory table so the source can dequeue without
/// re-borrowing the engine itself.
pub struct Dequeue<'a, P: PageHandle> {
    pool: &'a mut ReusePool<P>,
    factories: &'a HashMap<String, PageFactory<P>>,
}

impl<'a, P: PageHandle> Dequeue<'a, P> {
    pub(crate) fn new(
        pool: &'a mut ReusePool<P>,
        factories: &'a HashMap<String, PageFactory<P>>,
    ) -> Self {
        Self { pool, factories }
    }

    /// Returns an idle instance for `reuse_id` if one exists, otherwise
    /// constructs a fresh one with the registered factory.
    ///
    /// # Panics
    ///
    /// Panics when the pool is empty for `reuse_id` and no factory was
    /// registered: that is a caller configuration bug, not a runtime
    /// condition to recover from.
    pub fn dequeue(&mut self, reuse_id: &str) -> P {
        if let Some(page) = self.pool.take_any(reuse_id) {
            return page;
        }
        ptrace!(reuse_id, "pool miss, constructing fresh page");
        let factory = self.factories.get(reuse_id).unwrap_or_else(|| {
            panic!("no page factory registered for reuse identifier {reuse_id:?}")
        });
        let page = factory();
        self.pool.tag(page.clone(), reuse_id);
        page
    }

    pub fn idle_count(&self, reuse_id: &str) -> usize {
        self.pool.idle_count(reuse_id)
    }
}
