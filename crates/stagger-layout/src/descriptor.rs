//! Per-section layout descriptors and per-item size intentions.

use stagger_geometry::Size;

/// Column strategy of a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LayoutKind {
    /// Round-robin columns. The first row is pinned to the section start,
    /// later items stack under their column's previous item.
    #[default]
    Flow,
    /// Every item goes to the currently shortest column (masonry).
    Waterfall,
}

/// Largest column count a section is laid out with. Larger counts are
/// clamped so per-column state stays bounded.
pub const MAX_COLUMNS: usize = 64;

/// Layout descriptor of one section: its strategy and column count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SectionLayout {
    pub kind: LayoutKind,
    pub columns: usize,
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self::flow(1)
    }
}

impl SectionLayout {
    pub const fn flow(columns: usize) -> Self {
        Self {
            kind: LayoutKind::Flow,
            columns,
        }
    }

    pub const fn waterfall(columns: usize) -> Self {
        Self {
            kind: LayoutKind::Waterfall,
            columns,
        }
    }

    /// Column count used for placement, clamped to `1..=MAX_COLUMNS`.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.clamp(1, MAX_COLUMNS)
    }
}

/// How an item intends to be sized.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ItemSize {
    /// Intrinsic size; the height is scaled to the column width so the
    /// aspect ratio is kept.
    Explicit(Size),
    /// Self-sizing: the height is only known once the host measures the
    /// rendered item and reports it back.
    #[default]
    Automatic,
}

impl ItemSize {
    pub const fn explicit(width: f32, height: f32) -> Self {
        ItemSize::Explicit(Size::new(width, height))
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self, ItemSize::Automatic)
    }

    /// Height of an explicit size scaled to `column_width`, rounded down.
    ///
    /// Degenerate intrinsic sizes scale to zero.
    pub fn scaled_height(intrinsic: Size, column_width: f32) -> f32 {
        let intrinsic = intrinsic.sanitized();
        if intrinsic.width > 0.0 && intrinsic.height > 0.0 {
            (intrinsic.height * column_width / intrinsic.width).floor()
        } else {
            0.0
        }
    }
}
