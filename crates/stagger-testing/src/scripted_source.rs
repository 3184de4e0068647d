//! In-memory data source for tests.
//!
//! [`ScriptedSource`] answers every [`LayoutDataSource`] query from plain
//! vectors built with [`ScriptedSection`]. Sections and items can be told to
//! fail so tests can exercise the engine's degraded paths.

use stagger_geometry::EdgeInsets;
use stagger_layout::{
    ElementPath, IndexPath, ItemSize, LayoutDataSource, LayoutError, SectionLayout,
};

#[derive(Clone, Debug, PartialEq)]
enum ScriptedItem {
    Size(ItemSize),
    Broken(String),
}

/// One section of a [`ScriptedSource`].
#[derive(Clone, Debug)]
pub struct ScriptedSection {
    layout: Result<SectionLayout, String>,
    items: Vec<ScriptedItem>,
    header: f32,
    footer: f32,
    inset: EdgeInsets,
    line_spacing: f32,
    inter_item_spacing: f32,
}

impl ScriptedSection {
    pub fn new(layout: SectionLayout) -> Self {
        Self {
            layout: Ok(layout),
            items: Vec::new(),
            header: 0.0,
            footer: 0.0,
            inset: EdgeInsets::ZERO,
            line_spacing: 0.0,
            inter_item_spacing: 0.0,
        }
    }

    pub fn flow(columns: usize) -> Self {
        Self::new(SectionLayout::flow(columns))
    }

    pub fn waterfall(columns: usize) -> Self {
        Self::new(SectionLayout::waterfall(columns))
    }

    pub fn header(mut self, height: f32) -> Self {
        self.header = height;
        self
    }

    pub fn footer(mut self, height: f32) -> Self {
        self.footer = height;
        self
    }

    pub fn inset(mut self, inset: EdgeInsets) -> Self {
        self.inset = inset;
        self
    }

    pub fn line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn inter_item_spacing(mut self, spacing: f32) -> Self {
        self.inter_item_spacing = spacing;
        self
    }

    pub fn item(mut self, size: ItemSize) -> Self {
        self.items.push(ScriptedItem::Size(size));
        self
    }

    pub fn explicit(self, width: f32, height: f32) -> Self {
        self.item(ItemSize::explicit(width, height))
    }

    /// Adds explicit items of the given heights, all `width` wide.
    pub fn explicit_heights(mut self, width: f32, heights: &[f32]) -> Self {
        self.items.extend(
            heights
                .iter()
                .map(|&height| ScriptedItem::Size(ItemSize::explicit(width, height))),
        );
        self
    }

    pub fn automatic(self) -> Self {
        self.item(ItemSize::Automatic)
    }

    pub fn automatic_items(mut self, count: usize) -> Self {
        self.items
            .extend(std::iter::repeat(ScriptedItem::Size(ItemSize::Automatic)).take(count));
        self
    }

    /// Adds an item whose size query fails.
    pub fn broken(mut self, reason: impl Into<String>) -> Self {
        self.items.push(ScriptedItem::Broken(reason.into()));
        self
    }

    /// Makes the section's descriptor query fail.
    pub fn broken_layout(mut self, reason: impl Into<String>) -> Self {
        self.layout = Err(reason.into());
        self
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn set_item(&mut self, item: usize, size: ItemSize) {
        if let Some(slot) = self.items.get_mut(item) {
            *slot = ScriptedItem::Size(size);
        }
    }

    pub fn insert_item(&mut self, item: usize, size: ItemSize) {
        let item = item.min(self.items.len());
        self.items.insert(item, ScriptedItem::Size(size));
    }

    pub fn remove_item(&mut self, item: usize) {
        if item < self.items.len() {
            self.items.remove(item);
        }
    }
}

/// A [`LayoutDataSource`] backed by [`ScriptedSection`]s.
///
/// Out-of-range queries are answered with errors or zeros instead of
/// panicking, matching what a host racing a content update may see.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    sections: Vec<ScriptedSection>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section: ScriptedSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn push_section(&mut self, section: ScriptedSection) {
        self.sections.push(section);
    }

    pub fn remove_section(&mut self, section: usize) -> Option<ScriptedSection> {
        (section < self.sections.len()).then(|| self.sections.remove(section))
    }

    pub fn section_mut(&mut self, section: usize) -> Option<&mut ScriptedSection> {
        self.sections.get_mut(section)
    }

    /// Index paths of every `Automatic` item, in layout order.
    pub fn automatic_items(&self) -> Vec<IndexPath> {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(section, scripted)| {
                scripted
                    .items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| **item == ScriptedItem::Size(ItemSize::Automatic))
                    .map(move |(item, _)| IndexPath::new(section, item))
            })
            .collect()
    }

    fn section(&self, section: usize) -> Result<&ScriptedSection, LayoutError> {
        self.sections
            .get(section)
            .ok_or(LayoutError::SectionOutOfRange {
                section,
                section_count: self.sections.len(),
            })
    }
}

impl LayoutDataSource for ScriptedSource {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections
            .get(section)
            .map_or(0, ScriptedSection::item_count)
    }

    fn section_layout(&self, section: usize) -> Result<SectionLayout, LayoutError> {
        match &self.section(section)?.layout {
            Ok(layout) => Ok(*layout),
            Err(reason) => Err(LayoutError::unavailable(
                ElementPath::header(section),
                reason.clone(),
            )),
        }
    }

    fn item_size(&self, index_path: IndexPath) -> Result<ItemSize, LayoutError> {
        let section = self.section(index_path.section)?;
        match section.items.get(index_path.item) {
            Some(ScriptedItem::Size(size)) => Ok(*size),
            Some(ScriptedItem::Broken(reason)) => {
                Err(LayoutError::unavailable(index_path, reason.clone()))
            }
            None => Err(LayoutError::ItemOutOfRange {
                index_path,
                item_count: section.items.len(),
            }),
        }
    }

    fn header_height(&self, section: usize) -> f32 {
        self.sections.get(section).map_or(0.0, |s| s.header)
    }

    fn footer_height(&self, section: usize) -> f32 {
        self.sections.get(section).map_or(0.0, |s| s.footer)
    }

    fn section_inset(&self, section: usize) -> EdgeInsets {
        self.sections
            .get(section)
            .map_or(EdgeInsets::ZERO, |s| s.inset)
    }

    fn line_spacing(&self, section: usize) -> f32 {
        self.sections.get(section).map_or(0.0, |s| s.line_spacing)
    }

    fn inter_item_spacing(&self, section: usize) -> f32 {
        self.sections
            .get(section)
            .map_or(0.0, |s| s.inter_item_spacing)
    }
}
