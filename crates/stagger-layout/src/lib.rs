//! Sectioned flow/waterfall layout engine.
//!
//! Positions the items of a vertically scrolling collection inside
//! sections, each with its own column strategy, header, footer, insets and
//! spacing. Items either carry an intrinsic size, scaled to their column
//! width, or size themselves once the host has rendered and measured them.
//!
//! # Architecture
//!
//! - [`LayoutDataSource`] - pure queries the engine asks the host
//! - [`SectionLayout`] / [`ItemSize`] - per-section descriptor and per-item size intention
//! - [`AttributeCache`] - computed frames and measured sizes kept across passes
//! - [`ColumnTracker`] - next free Y offset of every column
//! - [`InvalidationContext`] - earliest element whose geometry may have changed
//! - [`LayoutEngine`] - runs passes and answers geometry queries
//!
//! # Example
//!
//! ```rust,ignore
//! use stagger_layout::{LayoutEngine, IndexPath};
//! use stagger_geometry::{Rect, Size};
//!
//! let mut engine = LayoutEngine::new();
//! engine.prepare(&feed, 375.0);
//! for attributes in engine.attributes_intersecting(Rect::new(0.0, 0.0, 375.0, 812.0)) {
//!     render(attributes.element, attributes.frame);
//! }
//! if engine.report_measured_size(&feed, IndexPath::new(1, 0), Size::new(375.0, 88.0)) {
//!     engine.prepare(&feed, 375.0);
//! }
//! ```

mod attribute_cache;
mod attributes;
mod collections;
mod column_tracker;
mod config;
mod descriptor;
mod engine;
mod error;
mod fingerprint;
mod index_path;
mod invalidation;
mod pass;
mod source;

pub use attribute_cache::*;
pub use attributes::*;
pub use column_tracker::*;
pub use config::*;
pub use descriptor::*;
pub use engine::*;
pub use error::*;
pub use fingerprint::structure_fingerprint;
pub use index_path::*;
pub use invalidation::*;
pub use pass::SectionSpan;
pub use source::*;

pub mod prelude {
    pub use crate::descriptor::{ItemSize, LayoutKind, SectionLayout};
    pub use crate::engine::{LayoutEngine, LayoutPhase};
    pub use crate::error::LayoutError;
    pub use crate::index_path::{ElementKind, ElementPath, IndexPath};
    pub use crate::source::LayoutDataSource;
    pub use stagger_geometry::{EdgeInsets, Rect, Size};
}
