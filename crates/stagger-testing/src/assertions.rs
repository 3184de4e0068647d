//! Assertion utilities for layout tests
//!
//! Helpers for checking frames produced by the layout engine.

use stagger_geometry::Rect;
use stagger_layout::{ElementKind, LayoutAttributes};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that no two item frames of the same section overlap.
pub fn assert_items_disjoint(attributes: &[LayoutAttributes], msg: &str) {
    let items: Vec<&LayoutAttributes> = attributes
        .iter()
        .filter(|a| a.kind() == ElementKind::Item && a.frame.height > 0.0)
        .collect();
    for (index, first) in items.iter().enumerate() {
        for second in &items[index + 1..] {
            if first.section() != second.section() {
                continue;
            }
            assert!(
                !first.frame.intersects(&second.frame),
                "{}: {} at {:?} overlaps {} at {:?}",
                msg,
                first.element,
                first.frame,
                second.element,
                second.frame
            );
        }
    }
}

/// Assert that every frame lies within `[0, content_width]` horizontally
/// and `[0, content_height]` vertically.
pub fn assert_within_content(
    attributes: &[LayoutAttributes],
    content_width: f32,
    content_height: f32,
    msg: &str,
) {
    for a in attributes {
        assert!(
            a.frame.x >= 0.0
                && a.frame.y >= 0.0
                && a.frame.max_x() <= content_width
                && a.frame.max_y() <= content_height,
            "{}: {} at {:?} escapes content {}x{}",
            msg,
            a.element,
            a.frame,
            content_width,
            content_height
        );
    }
}

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}
