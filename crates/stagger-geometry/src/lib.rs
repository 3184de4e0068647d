//! Pure math/data for stagger
//!
//! This crate contains the geometry primitives shared by the layout engine,
//! the test harness and the demo.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
