//! Computed geometry for one header, item or footer.

use stagger_geometry::Rect;

use crate::index_path::{ElementKind, ElementPath, IndexPath};

/// Placement of one element, as produced by a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutAttributes {
    /// Which element this is.
    pub element: ElementPath,

    /// Frame in content coordinates.
    pub frame: Rect,

    /// Column the item was placed in. `None` for headers and footers.
    pub column: Option<usize>,

    /// Pass counter value of the pass that computed this frame.
    ///
    /// Attributes reused from the cache keep the generation they were
    /// computed in.
    pub generation: u64,
}

impl LayoutAttributes {
    pub fn header(section: usize, frame: Rect, generation: u64) -> Self {
        Self {
            element: ElementPath::header(section),
            frame,
            column: None,
            generation,
        }
    }

    pub fn item(index_path: IndexPath, column: usize, frame: Rect, generation: u64) -> Self {
        Self {
            element: ElementPath::item(index_path),
            frame,
            column: Some(column),
            generation,
        }
    }

    pub fn footer(section: usize, frame: Rect, generation: u64) -> Self {
        Self {
            element: ElementPath::footer(section),
            frame,
            column: None,
            generation,
        }
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.element.kind()
    }

    #[inline]
    pub fn section(&self) -> usize {
        self.element.section
    }

    /// Index path of a body item; `None` for headers and footers.
    #[inline]
    pub fn index_path(&self) -> Option<IndexPath> {
        self.element.index_path()
    }
}
