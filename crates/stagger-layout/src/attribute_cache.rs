//! Cross-pass storage of computed attributes and measured sizes.
//!
//! A pass consults the cache before computing anything, so whatever survives
//! an invalidation is reused verbatim by the next pass. Measured sizes of
//! self-sizing items live in a separate table that invalidation never
//! touches: they are the input the next pass needs to correct the layout.

use stagger_geometry::Size;

use crate::attributes::LayoutAttributes;
use crate::collections::map::HashMap;
use crate::index_path::{ElementPath, IndexPath};

#[derive(Debug, Default)]
pub struct AttributeCache {
    attributes: HashMap<ElementPath, LayoutAttributes>,
    measured_sizes: HashMap<IndexPath, Size>,
}

impl AttributeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached attributes of `element`, if still valid.
    #[inline]
    pub fn get(&self, element: ElementPath) -> Option<&LayoutAttributes> {
        self.attributes.get(&element)
    }

    /// Stores `attributes`, replacing any previous entry for its element.
    pub fn put(&mut self, attributes: LayoutAttributes) {
        self.attributes.insert(attributes.element, attributes);
    }

    /// Drops every cached attribute at or after `element` in layout order.
    ///
    /// Returns the number of entries removed.
    pub fn invalidate_from(&mut self, element: ElementPath) -> usize {
        let before = self.attributes.len();
        self.attributes.retain(|cached, _| *cached < element);
        before - self.attributes.len()
    }

    /// Drops every cached attribute.
    pub fn invalidate_all(&mut self) -> usize {
        self.invalidate_from(ElementPath::FIRST)
    }

    /// Records the measured size of a self-sizing item.
    ///
    /// Returns true if it differs from the previous record. An item that was
    /// never measured counts as [`Size::ZERO`].
    pub fn record_measured_size(&mut self, index_path: IndexPath, size: Size) -> bool {
        let size = size.sanitized();
        let previous = self
            .measured_sizes
            .insert(index_path, size)
            .unwrap_or(Size::ZERO);
        previous != size
    }

    pub fn measured_size(&self, index_path: IndexPath) -> Option<Size> {
        self.measured_sizes.get(&index_path).copied()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagger_geometry::Rect;

    fn populated() -> AttributeCache {
        let mut cache = AttributeCache::new();
        for section in 0..3 {
            cache.put(LayoutAttributes::header(
                section,
                Rect::new(0.0, 0.0, 100.0, 10.0),
                1,
            ));
            for item in 0..4 {
                cache.put(LayoutAttributes::item(
                    IndexPath::new(section, item),
                    0,
                    Rect::new(0.0, 0.0, 100.0, 10.0),
                    1,
                ));
            }
            cache.put(LayoutAttributes::footer(
                section,
                Rect::new(0.0, 0.0, 100.0, 10.0),
                1,
            ));
        }
        cache
    }

    #[test]
    fn invalidate_from_item_keeps_header_and_earlier_items() {
        let mut cache = populated();
        assert_eq!(cache.len(), 18);

        let removed = cache.invalidate_from(ElementPath::item(IndexPath::new(1, 2)));

        // items 2 and 3 and the footer of section 1, plus all of section 2
        assert_eq!(removed, 3 + 6);
        assert!(cache.get(ElementPath::header(1)).is_some());
        assert!(cache.get(ElementPath::item(IndexPath::new(1, 1))).is_some());
        assert!(cache.get(ElementPath::item(IndexPath::new(1, 2))).is_none());
        assert!(cache.get(ElementPath::footer(1)).is_none());
        assert!(cache.get(ElementPath::header(2)).is_none());
        assert!(cache.get(ElementPath::footer(0)).is_some());
    }

    #[test]
    fn invalidate_all_empties_attributes_but_keeps_measurements() {
        let mut cache = populated();
        cache.record_measured_size(IndexPath::new(0, 1), Size::new(100.0, 42.0));

        cache.invalidate_all();

        assert!(cache.is_empty());
        assert_eq!(
            cache.measured_size(IndexPath::new(0, 1)),
            Some(Size::new(100.0, 42.0))
        );
    }

    #[test]
    fn record_measured_size_reports_changes_only() {
        let mut cache = AttributeCache::new();
        let path = IndexPath::new(0, 0);

        assert!(!cache.record_measured_size(path, Size::ZERO));
        assert!(cache.record_measured_size(path, Size::new(100.0, 30.0)));
        assert!(!cache.record_measured_size(path, Size::new(100.0, 30.0)));
        assert!(cache.record_measured_size(path, Size::new(100.0, 31.0)));
    }
}
