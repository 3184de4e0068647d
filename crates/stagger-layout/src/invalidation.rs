//! Invalidation requests.
//!
//! An [`InvalidationContext`] carries the earliest element whose geometry
//! may have changed. Applying it drops that element and everything after it
//! from the cache, so the next pass recomputes only that tail.

use crate::index_path::{ElementPath, IndexPath};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InvalidationContext {
    invalidated_from: Option<ElementPath>,
}

impl InvalidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that invalidates everything.
    pub fn everything() -> Self {
        Self {
            invalidated_from: Some(ElementPath::FIRST),
        }
    }

    /// A context that invalidates `index_path` and everything after it.
    pub fn from_item(index_path: IndexPath) -> Self {
        let mut context = Self::new();
        context.invalidate_items_after(index_path);
        context
    }

    /// Marks `index_path` and every later element as invalid.
    ///
    /// Keeps the earlier point if one was already recorded.
    pub fn invalidate_items_after(&mut self, index_path: IndexPath) {
        self.invalidate_from(ElementPath::item(index_path));
    }

    pub fn invalidate_all_items(&mut self) {
        self.invalidate_from(ElementPath::FIRST);
    }

    fn invalidate_from(&mut self, element: ElementPath) {
        self.invalidated_from = Some(match self.invalidated_from {
            Some(current) => current.min(element),
            None => element,
        });
    }

    /// Combines two contexts; the earliest invalidation point wins.
    pub fn merge(mut self, other: InvalidationContext) -> Self {
        if let Some(element) = other.invalidated_from {
            self.invalidate_from(element);
        }
        self
    }

    /// The earliest invalidated element, if any.
    pub fn invalidated_from(&self) -> Option<ElementPath> {
        self.invalidated_from
    }

    pub fn invalidates_everything(&self) -> bool {
        self.invalidated_from == Some(ElementPath::FIRST)
    }

    pub fn is_empty(&self) -> bool {
        self.invalidated_from.is_none()
    }
}
