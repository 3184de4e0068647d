//! One layout pass over every section.
//!
//! Sections are laid out strictly in order: a section starts where the
//! previous section's footer (or tallest column) ended. Within a section the
//! header comes first, then the items, then the footer. Every step reuses a
//! cached attribute when one survived invalidation and computes a fresh one
//! otherwise.

use std::ops::Range;

use stagger_geometry::{EdgeInsets, Rect};

use crate::attribute_cache::AttributeCache;
use crate::attributes::LayoutAttributes;
use crate::collections::map::IndexMap;
use crate::column_tracker::ColumnTracker;
use crate::config::LayoutConfig;
use crate::descriptor::{ItemSize, LayoutKind, SectionLayout, MAX_COLUMNS};
use crate::index_path::{ElementPath, IndexPath};
use crate::source::LayoutDataSource;

/// Vertical extent of one section in the last pass.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub section: usize,
    /// Cursor before the header.
    pub top: f32,
    /// Cursor after the footer.
    pub bottom: f32,
    /// Positions of the section's attributes in pass order.
    pub attributes: Range<usize>,
}

/// Resolved per-section inputs, fetched once per pass.
#[derive(Clone, Debug)]
pub(crate) struct SectionMetrics {
    pub layout: SectionLayout,
    pub column_count: usize,
    pub item_count: usize,
    pub inset: EdgeInsets,
    pub line_spacing: f32,
    pub inter_item_spacing: f32,
    pub column_width: f32,
}

impl SectionMetrics {
    pub fn resolve<S: LayoutDataSource + ?Sized>(
        source: &S,
        section: usize,
        viewport_width: f32,
    ) -> Self {
        let layout = source.section_layout(section).unwrap_or_else(|error| {
            log::warn!("section {section}: {error}; falling back to a single flow column");
            SectionLayout::default()
        });
        if layout.columns == 0 {
            log::warn!("section {section}: column count 0 treated as 1");
        } else if layout.columns > MAX_COLUMNS {
            log::warn!(
                "section {section}: column count {} clamped to {MAX_COLUMNS}",
                layout.columns
            );
        }
        let column_count = layout.column_count();
        let inset = source.section_inset(section).sanitized();
        let line_spacing = non_negative(source.line_spacing(section));
        let inter_item_spacing = non_negative(source.inter_item_spacing(section));

        let gaps = (column_count - 1) as f32 * line_spacing;
        let available = (viewport_width - inset.horizontal_sum() - gaps).floor();
        let column_width = (available / column_count as f32).max(0.0);

        Self {
            layout,
            column_count,
            item_count: source.item_count(section),
            inset,
            line_spacing,
            inter_item_spacing,
            column_width,
        }
    }

    /// X origin of `column`.
    #[inline]
    pub fn column_x(&self, column: usize) -> f32 {
        self.inset.left + column as f32 * (self.column_width + self.line_spacing)
    }
}

/// Lays out every section, reusing cached attributes where possible.
pub(crate) struct LayoutPass<'a, S: ?Sized> {
    source: &'a S,
    config: &'a LayoutConfig,
    cache: &'a mut AttributeCache,
    columns: &'a mut ColumnTracker,
    output: &'a mut IndexMap<ElementPath, LayoutAttributes>,
    viewport_width: f32,
    generation: u64,
    computed: usize,
}

impl<'a, S: LayoutDataSource + ?Sized> LayoutPass<'a, S> {
    pub fn new(
        source: &'a S,
        config: &'a LayoutConfig,
        cache: &'a mut AttributeCache,
        columns: &'a mut ColumnTracker,
        output: &'a mut IndexMap<ElementPath, LayoutAttributes>,
        viewport_width: f32,
        generation: u64,
    ) -> Self {
        Self {
            source,
            config,
            cache,
            columns,
            output,
            viewport_width,
            generation,
            computed: 0,
        }
    }

    /// Runs the pass and returns the span of every section together with
    /// the number of attributes that had to be computed.
    pub fn run(mut self, section_count: usize) -> (Vec<SectionSpan>, usize) {
        let metrics: Vec<SectionMetrics> = (0..section_count)
            .map(|section| SectionMetrics::resolve(self.source, section, self.viewport_width))
            .collect();
        self.columns.prepare(section_count);

        let mut spans = Vec::with_capacity(section_count);
        let mut cursor = 0.0;
        for (section, metrics) in metrics.iter().enumerate() {
            let top = cursor;
            let first_attribute = self.output.len();

            self.layout_header(section, metrics, &mut cursor);
            self.layout_items(section, metrics, cursor);
            self.layout_footer(section, &mut cursor);

            spans.push(SectionSpan {
                section,
                top,
                bottom: cursor,
                attributes: first_attribute..self.output.len(),
            });
        }
        (spans, self.computed)
    }

    fn layout_header(&mut self, section: usize, metrics: &SectionMetrics, cursor: &mut f32) {
        if let Some(cached) = self.cache.get(ElementPath::header(section)).copied() {
            *cursor = cached.frame.max_y();
            self.emit(cached);
        } else {
            let height = non_negative(self.source.header_height(section));
            if height > self.config.negligible_height {
                let frame = Rect::new(0.0, *cursor, self.viewport_width, height);
                let attributes = LayoutAttributes::header(section, frame, self.generation);
                self.store(attributes);
                *cursor = frame.max_y();
            }
        }
        self.columns.reset(
            section,
            metrics.column_count,
            *cursor,
            metrics.inter_item_spacing,
        );
    }

    fn layout_items(&mut self, section: usize, metrics: &SectionMetrics, start_y: f32) {
        for item in 0..metrics.item_count {
            let index_path = IndexPath::new(section, item);

            if let Some(cached) = self.cache.get(ElementPath::item(index_path)).copied() {
                let column = cached
                    .column
                    .unwrap_or_else(|| self.pick_column(section, item, metrics));
                self.columns.advance(section, column, cached.frame.max_y());
                self.emit(cached);
                continue;
            }

            let column = self.pick_column(section, item, metrics);
            let y = match metrics.layout.kind {
                LayoutKind::Flow if item < metrics.column_count => start_y,
                LayoutKind::Flow | LayoutKind::Waterfall => self.columns.offset(section, column),
            };
            let x = metrics.column_x(column);

            let frame = match self.source.item_size(index_path) {
                Ok(size) => Rect::new(
                    x,
                    y,
                    metrics.column_width,
                    self.item_height(index_path, size, metrics.column_width),
                ),
                Err(error) => {
                    log::warn!("item {index_path}: {error}; using a zero-size frame");
                    Rect::new(x, y, 0.0, 0.0)
                }
            };

            self.columns.advance(section, column, frame.max_y());
            self.store(LayoutAttributes::item(
                index_path,
                column,
                frame,
                self.generation,
            ));
        }
    }

    fn layout_footer(&mut self, section: usize, cursor: &mut f32) {
        let max_offset = self.columns.max_offset(section);
        *cursor = max_offset;

        if let Some(cached) = self.cache.get(ElementPath::footer(section)).copied() {
            *cursor = cached.frame.max_y();
            self.emit(cached);
        } else {
            let height = non_negative(self.source.footer_height(section));
            if height > self.config.negligible_height {
                let frame = Rect::new(0.0, max_offset, self.viewport_width, height);
                self.store(LayoutAttributes::footer(section, frame, self.generation));
                *cursor = frame.max_y();
            }
        }
    }

    fn pick_column(&self, section: usize, item: usize, metrics: &SectionMetrics) -> usize {
        match metrics.layout.kind {
            LayoutKind::Flow => item % metrics.column_count,
            LayoutKind::Waterfall => self.columns.shortest_column(section),
        }
    }

    fn item_height(&self, index_path: IndexPath, size: ItemSize, column_width: f32) -> f32 {
        match size {
            ItemSize::Explicit(intrinsic) => ItemSize::scaled_height(intrinsic, column_width),
            ItemSize::Automatic => self
                .cache
                .measured_size(index_path)
                .map_or(0.0, |measured| measured.height),
        }
    }

    fn store(&mut self, attributes: LayoutAttributes) {
        self.cache.put(attributes);
        self.computed += 1;
        self.emit(attributes);
    }

    #[inline]
    fn emit(&mut self, attributes: LayoutAttributes) {
        self.output.insert(attributes.element, attributes);
    }
}

/// Replaces non-finite or negative values with zero.
#[inline]
pub(crate) fn non_negative(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
