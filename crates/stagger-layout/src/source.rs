//! Data source trait for sectioned layouts.
//!
//! This module defines the [`LayoutDataSource`] trait through which the
//! engine learns everything it needs about the content: its shape, each
//! section's descriptor and spacing, and each item's intended size.

use stagger_geometry::EdgeInsets;

use crate::descriptor::{ItemSize, SectionLayout};
use crate::error::LayoutError;
use crate::index_path::IndexPath;

/// Provides the layout inputs for a sectioned collection.
///
/// Every method is a pure query. The engine may call any of them several
/// times and out of order during a pass, so answers must stay stable until
/// the host invalidates the layout. The engine only ever borrows a source
/// for the duration of one call.
pub trait LayoutDataSource {
    /// Number of sections in the content.
    fn section_count(&self) -> usize;

    /// Number of body items in `section`.
    fn item_count(&self, section: usize) -> usize;

    /// Strategy and column count of `section`.
    fn section_layout(&self, section: usize) -> Result<SectionLayout, LayoutError>;

    /// Intended size of the item at `index_path`.
    fn item_size(&self, index_path: IndexPath) -> Result<ItemSize, LayoutError>;

    /// Header height; at or below the negligible threshold means no header.
    fn header_height(&self, section: usize) -> f32 {
        let _ = section;
        0.0
    }

    /// Footer height; at or below the negligible threshold means no footer.
    fn footer_height(&self, section: usize) -> f32 {
        let _ = section;
        0.0
    }

    /// Section inset. Only the left and right edges take part in layout.
    fn section_inset(&self, section: usize) -> EdgeInsets {
        let _ = section;
        EdgeInsets::ZERO
    }

    /// Horizontal gap between adjacent columns.
    fn line_spacing(&self, section: usize) -> f32 {
        let _ = section;
        0.0
    }

    /// Vertical gap between consecutive items of one column.
    fn inter_item_spacing(&self, section: usize) -> f32 {
        let _ = section;
        0.0
    }
}

/// Returns true if `index_path` addresses an item the source currently has.
pub fn contains_item<S: LayoutDataSource + ?Sized>(source: &S, index_path: IndexPath) -> bool {
    index_path.section < source.section_count()
        && index_path.item < source.item_count(index_path.section)
}
