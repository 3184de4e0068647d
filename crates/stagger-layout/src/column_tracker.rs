//! Per-section column offsets.
//!
//! Each section owns one "next free Y" offset per column. Both strategies
//! read and advance these while placing items; waterfall also uses them to
//! pick the column for the next item.

use smallvec::SmallVec;

use crate::descriptor::MAX_COLUMNS;

/// Inline capacity for column offsets.
/// Sections rarely use more than four columns, so this avoids heap
/// allocation in the common case.
pub type ColumnOffsets = SmallVec<[f32; 4]>;

#[derive(Clone, Debug, Default)]
struct SectionColumns {
    offsets: ColumnOffsets,
    inter_item_spacing: f32,
}

/// Tracks the next free Y offset of every column of every section.
#[derive(Clone, Debug, Default)]
pub struct ColumnTracker {
    sections: Vec<SectionColumns>,
}

impl ColumnTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates empty column state for `section_count` sections.
    pub fn prepare(&mut self, section_count: usize) {
        self.sections.clear();
        self.sections
            .resize_with(section_count, SectionColumns::default);
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Starts every column of `section` at `start_y`.
    ///
    /// The column count is clamped to `1..=MAX_COLUMNS`.
    pub fn reset(
        &mut self,
        section: usize,
        column_count: usize,
        start_y: f32,
        inter_item_spacing: f32,
    ) {
        if section >= self.sections.len() {
            self.sections
                .resize_with(section + 1, SectionColumns::default);
        }
        let columns = &mut self.sections[section];
        columns.offsets.clear();
        columns
            .offsets
            .resize(column_count.clamp(1, MAX_COLUMNS), start_y);
        columns.inter_item_spacing = inter_item_spacing;
    }

    /// Returns the column with the smallest offset; ties go to the lowest index.
    pub fn shortest_column(&self, section: usize) -> usize {
        let Some(columns) = self.sections.get(section) else {
            return 0;
        };
        let mut shortest = 0;
        let mut min_offset = f32::INFINITY;
        for (column, &offset) in columns.offsets.iter().enumerate() {
            if offset < min_offset {
                shortest = column;
                min_offset = offset;
            }
        }
        shortest
    }

    /// Moves `column` of `section` to just below an element ending at `new_max_y`.
    pub fn advance(&mut self, section: usize, column: usize, new_max_y: f32) {
        if let Some(columns) = self.sections.get_mut(section) {
            let spacing = columns.inter_item_spacing;
            if let Some(offset) = columns.offsets.get_mut(column) {
                *offset = new_max_y + spacing;
            }
        }
    }

    pub fn offset(&self, section: usize, column: usize) -> f32 {
        self.sections
            .get(section)
            .and_then(|columns| columns.offsets.get(column))
            .copied()
            .unwrap_or(0.0)
    }

    /// Offset of the tallest column of `section`.
    pub fn max_offset(&self, section: usize) -> f32 {
        self.sections
            .get(section)
            .and_then(|columns| columns.offsets.iter().copied().reduce(f32::max))
            .unwrap_or(0.0)
    }

    pub fn column_count(&self, section: usize) -> usize {
        self.sections
            .get(section)
            .map_or(0, |columns| columns.offsets.len())
    }

    pub fn offsets(&self, section: usize) -> &[f32] {
        match self.sections.get(section) {
            Some(columns) => columns.offsets.as_slice(),
            None => &[],
        }
    }
}
