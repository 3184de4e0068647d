//! The layout engine.
//!
//! [`LayoutEngine`] turns the answers of a [`LayoutDataSource`] into frames
//! for every header, item and footer, and keeps them cached between passes.
//!
//! # Lifecycle
//!
//! 1. The host calls [`LayoutEngine::prepare`] whenever the viewport or the
//!    content changed. The pass walks the sections in order and fills the
//!    cache.
//! 2. The host queries [`LayoutEngine::attributes_intersecting`] and
//!    [`LayoutEngine::content_size`] to render.
//! 3. When a self-sizing item has been rendered and measured, the host
//!    calls [`LayoutEngine::report_measured_size`]. If the size changed,
//!    the item and everything laid out after it are dropped from the cache
//!    and the engine goes back to [`LayoutPhase::Idle`].
//! 4. The next `prepare` recomputes only what was dropped.
//!
//! A width change or a structural change of the content drops everything.
//! [`LayoutEngine::invalidate_for_data_change`] is always available as a
//! full recovery.

use stagger_geometry::{Rect, Size};
use web_time::Instant;

use crate::attribute_cache::AttributeCache;
use crate::attributes::LayoutAttributes;
use crate::collections::map::IndexMap;
use crate::column_tracker::ColumnTracker;
use crate::config::LayoutConfig;
use crate::descriptor::ItemSize;
use crate::fingerprint::structure_fingerprint;
use crate::index_path::{ElementPath, IndexPath};
use crate::invalidation::InvalidationContext;
use crate::pass::{non_negative, LayoutPass, SectionSpan};
use crate::source::{contains_item, LayoutDataSource};

/// Where the engine is in its pass cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutPhase {
    /// No valid pass output; the next `prepare` will compute one.
    #[default]
    Idle,
    /// A pass is running.
    Preparing,
    /// Pass output is valid and can be queried.
    Ready,
}

/// Computes and caches geometry for a sectioned flow/waterfall layout.
#[derive(Debug, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
    cache: AttributeCache,
    columns: ColumnTracker,
    /// Output of the last pass in layout order.
    attributes: IndexMap<ElementPath, LayoutAttributes>,
    sections: Vec<SectionSpan>,
    phase: LayoutPhase,
    viewport_width: Option<f32>,
    fingerprint: Option<u64>,
    generation: u64,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    /// Counter of completed passes; stamped on every attribute a pass computes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Viewport width of the last pass.
    pub fn viewport_width(&self) -> Option<f32> {
        self.viewport_width
    }

    /// Runs a layout pass for `viewport_width`.
    ///
    /// Everything still cached is reused as is. A width different from the
    /// previous pass, or a data source whose shape changed, drops the whole
    /// cache first. Calling this twice without an invalidation in between
    /// produces identical output.
    pub fn prepare<S: LayoutDataSource + ?Sized>(&mut self, source: &S, viewport_width: f32) {
        let viewport_width = non_negative(viewport_width);

        if self.should_invalidate_for_width(viewport_width) {
            log::debug!(
                "viewport width changed from {:?} to {viewport_width}; invalidating all attributes",
                self.viewport_width
            );
            self.invalidate(InvalidationContext::everything());
        }

        if self.config.detect_structural_changes {
            let fingerprint = structure_fingerprint(source);
            if self
                .fingerprint
                .is_some_and(|previous| previous != fingerprint)
            {
                log::debug!("data source structure changed; invalidating all attributes");
                self.invalidate(InvalidationContext::everything());
            }
            self.fingerprint = Some(fingerprint);
        }

        self.phase = LayoutPhase::Preparing;
        self.viewport_width = Some(viewport_width);
        self.generation += 1;
        self.attributes.clear();
        self.sections.clear();

        let section_count = source.section_count();
        if section_count == 0 {
            self.columns.clear();
            self.phase = LayoutPhase::Ready;
            return;
        }

        let start = Instant::now();
        let pass = LayoutPass::new(
            source,
            &self.config,
            &mut self.cache,
            &mut self.columns,
            &mut self.attributes,
            viewport_width,
            self.generation,
        );
        let (sections, computed) = pass.run(section_count);
        self.sections = sections;
        self.phase = LayoutPhase::Ready;

        let elapsed = start.elapsed();
        if elapsed > self.config.pass_time_budget {
            log::warn!(
                "layout pass {} took {:?} (budget {:?}) for {} attributes",
                self.generation,
                elapsed,
                self.config.pass_time_budget,
                self.attributes.len()
            );
        }
        log::trace!(
            "layout pass {}: {} sections, {} attributes ({} computed, {} reused), content height {}",
            self.generation,
            section_count,
            self.attributes.len(),
            computed,
            self.attributes.len() - computed,
            self.content_size().height
        );
    }

    /// Attributes of the last pass whose frames intersect `rect`, in layout order.
    ///
    /// Sections whose vertical span misses `rect` are skipped without
    /// looking at their attributes.
    pub fn attributes_intersecting(&self, rect: Rect) -> Vec<LayoutAttributes> {
        let slice = self.attributes.as_slice();
        let mut found = Vec::new();
        for span in &self.sections {
            if !rect.intersects_vertical_span(span.top, span.bottom) {
                continue;
            }
            found.extend(
                slice[span.attributes.clone()]
                    .values()
                    .filter(|attributes| rect.intersects(&attributes.frame))
                    .copied(),
            );
        }
        found
    }

    /// Every attribute of the last pass, in layout order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = &LayoutAttributes> + '_ {
        self.attributes.values()
    }

    pub fn attributes_for_item(&self, index_path: IndexPath) -> Option<&LayoutAttributes> {
        self.attributes.get(&ElementPath::item(index_path))
    }

    pub fn attributes_for_header(&self, section: usize) -> Option<&LayoutAttributes> {
        self.attributes.get(&ElementPath::header(section))
    }

    pub fn attributes_for_footer(&self, section: usize) -> Option<&LayoutAttributes> {
        self.attributes.get(&ElementPath::footer(section))
    }

    /// Vertical spans of the sections laid out by the last pass.
    pub fn sections(&self) -> &[SectionSpan] {
        &self.sections
    }

    /// Viewport width by the bottom of the last section.
    pub fn content_size(&self) -> Size {
        match (self.viewport_width, self.sections.last()) {
            (Some(width), Some(last)) => Size::new(width, last.bottom),
            _ => Size::ZERO,
        }
    }

    /// Returns true if laying out at `new_width` requires dropping the cache.
    pub fn should_invalidate_for_width(&self, new_width: f32) -> bool {
        let new_width = non_negative(new_width);
        self.viewport_width.is_some_and(|width| width != new_width)
    }

    pub fn invalidation_context_for_width_change(
        &self,
        new_width: f32,
    ) -> Option<InvalidationContext> {
        self.should_invalidate_for_width(new_width)
            .then(InvalidationContext::everything)
    }

    /// Records the measured size of a self-sizing item and returns the
    /// invalidation it requires.
    ///
    /// Returns `None` if the size did not change, if the item is not
    /// [`ItemSize::Automatic`], or if `index_path` is out of range. The size
    /// is recorded either way for automatic items; a host that drops the
    /// returned context keeps the stale frames until the next invalidation.
    pub fn invalidation_context_for_measured_size<S: LayoutDataSource + ?Sized>(
        &mut self,
        source: &S,
        index_path: IndexPath,
        size: Size,
    ) -> Option<InvalidationContext> {
        if !contains_item(source, index_path) {
            log::debug!("ignoring measured size for out-of-range item {index_path}");
            return None;
        }
        match source.item_size(index_path) {
            Ok(ItemSize::Automatic) => {}
            Ok(ItemSize::Explicit(_)) => return None,
            Err(error) => {
                log::warn!("ignoring measured size for item {index_path}: {error}");
                return None;
            }
        }
        if !self.cache.record_measured_size(index_path, size) {
            return None;
        }
        log::debug!("item {index_path} measured at {size:?}; invalidating from it");
        Some(InvalidationContext::from_item(index_path))
    }

    /// Applies `context` and discards the output of the last pass.
    pub fn invalidate(&mut self, context: InvalidationContext) {
        if let Some(from) = context.invalidated_from() {
            let removed = self.cache.invalidate_from(from);
            log::debug!("invalidated {removed} cached attributes from {from}");
        }
        self.attributes.clear();
        self.sections.clear();
        self.columns.clear();
        self.phase = LayoutPhase::Idle;
    }

    /// Reports the measured size of a self-sizing item.
    ///
    /// Returns true if the layout was invalidated and needs another pass.
    pub fn report_measured_size<S: LayoutDataSource + ?Sized>(
        &mut self,
        source: &S,
        index_path: IndexPath,
        size: Size,
    ) -> bool {
        match self.invalidation_context_for_measured_size(source, index_path, size) {
            Some(context) => {
                self.invalidate(context);
                true
            }
            None => false,
        }
    }

    /// Runs one measurement round over the self-sizing items of the last
    /// pass that are visible in `viewport`.
    ///
    /// `measure` returns the fitted size of an item rendered in the given
    /// frame, or `None` to skip it. Every size is recorded; the returned
    /// context covers all of them that changed, and the count says how many
    /// did. Apply the context with [`invalidate`](Self::invalidate) and
    /// prepare again until a round comes back empty.
    pub fn measure_visible_items<S, F>(
        &mut self,
        source: &S,
        viewport: Rect,
        mut measure: F,
    ) -> (InvalidationContext, usize)
    where
        S: LayoutDataSource + ?Sized,
        F: FnMut(IndexPath, Rect) -> Option<Size>,
    {
        let mut context = InvalidationContext::new();
        let mut changed = 0;
        for attributes in self.attributes_intersecting(viewport) {
            let Some(index_path) = attributes.index_path() else {
                continue;
            };
            if !source
                .item_size(index_path)
                .is_ok_and(|size| size.is_automatic())
            {
                continue;
            }
            let Some(size) = measure(index_path, attributes.frame) else {
                continue;
            };
            if let Some(request) =
                self.invalidation_context_for_measured_size(source, index_path, size)
            {
                changed += 1;
                context = context.merge(request);
            }
        }
        (context, changed)
    }

    pub fn invalidate_for_width_change(&mut self) {
        self.invalidate(InvalidationContext::everything());
    }

    /// Drops every cached attribute after the content changed.
    ///
    /// Measured sizes are kept; they are still the best estimate for items
    /// that kept their index path.
    pub fn invalidate_for_data_change(&mut self) {
        self.fingerprint = None;
        self.invalidate(InvalidationContext::everything());
    }

    pub fn measured_size(&self, index_path: IndexPath) -> Option<Size> {
        self.cache.measured_size(index_path)
    }

    /// Number of attributes currently cached across passes.
    pub fn cached_attribute_count(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
