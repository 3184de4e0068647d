//! Geometric primitives: Point, Size, Rect, Insets

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Replaces non-finite or negative dimensions with zero.
    pub fn sanitized(self) -> Self {
        Self {
            width: non_negative(self.width),
            height: non_negative(self.height),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns true if the two rectangles overlap.
    ///
    /// Spans are half-open, so edges that merely touch do not overlap. A
    /// rectangle with a zero extent on an axis behaves like a point on that
    /// axis and overlaps any span `[start, end)` holding it. Zero-height
    /// frames of items that have not been measured yet are therefore still
    /// reported as visible, and by exactly one of two adjacent windows.
    pub fn intersects(&self, other: &Rect) -> bool {
        spans_overlap(self.x, self.width, other.x, other.width)
            && spans_overlap(self.y, self.height, other.y, other.height)
    }

    /// Returns true if frames inside the closed vertical span
    /// `[top, bottom]` may overlap this rect.
    ///
    /// The bottom is inclusive: a zero-height frame can sit exactly on it.
    pub fn intersects_vertical_span(&self, top: f32, bottom: f32) -> bool {
        if self.height <= 0.0 {
            return self.y >= top && self.y <= bottom;
        }
        top < self.max_y() && bottom >= self.y
    }
}

fn spans_overlap(start_a: f32, len_a: f32, start_b: f32, len_b: f32) -> bool {
    let end_a = start_a + len_a;
    let end_b = start_b + len_b;
    match (len_a > 0.0, len_b > 0.0) {
        (true, true) => start_a < end_b && start_b < end_a,
        (false, true) => start_a >= start_b && start_a < end_b,
        (true, false) => start_b >= start_a && start_b < end_a,
        (false, false) => start_a == start_b,
    }
}

#[inline]
fn non_negative(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Padding values for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn horizontal(horizontal: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            ..Self::default()
        }
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    /// Replaces non-finite or negative edges with zero.
    pub fn sanitized(self) -> Self {
        Self {
            left: non_negative(self.left),
            top: non_negative(self.top),
            right: non_negative(self.right),
            bottom: non_negative(self.bottom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let below = Rect::new(0.0, 100.0, 100.0, 20.0);
        assert!(!a.intersects(&below));
    }

    #[test]
    fn zero_height_rect_inside_span_intersects() {
        let viewport = Rect::new(0.0, 0.0, 320.0, 480.0);
        let unmeasured = Rect::new(10.0, 200.0, 150.0, 0.0);
        assert!(viewport.intersects(&unmeasured));
        assert!(unmeasured.intersects(&viewport));

        let far_below = Rect::new(10.0, 900.0, 150.0, 0.0);
        assert!(!viewport.intersects(&far_below));
    }

    #[test]
    fn zero_height_rect_on_boundary_belongs_to_the_lower_window() {
        let upper = Rect::new(0.0, 0.0, 320.0, 300.0);
        let lower = Rect::new(0.0, 300.0, 320.0, 300.0);
        let on_boundary = Rect::new(10.0, 300.0, 150.0, 0.0);

        assert!(!upper.intersects(&on_boundary));
        assert!(!on_boundary.intersects(&upper));
        assert!(lower.intersects(&on_boundary));
        assert!(on_boundary.intersects(&lower));

        let at_top = Rect::new(10.0, 0.0, 150.0, 0.0);
        assert!(upper.intersects(&at_top));
    }

    #[test]
    fn vertical_span_includes_its_bottom_edge() {
        let window = Rect::new(0.0, 300.0, 320.0, 300.0);
        assert!(window.intersects_vertical_span(0.0, 300.0));
        assert!(window.intersects_vertical_span(250.0, 250.0 + 100.0));
        assert!(!window.intersects_vertical_span(0.0, 299.0));
        assert!(!window.intersects_vertical_span(600.0, 700.0));

        let line = Rect::new(0.0, 300.0, 320.0, 0.0);
        assert!(line.intersects_vertical_span(300.0, 300.0));
        assert!(!line.intersects_vertical_span(301.0, 400.0));
    }

    #[test]
    fn sanitized_insets_drop_negative_and_nan() {
        let insets = EdgeInsets {
            left: -4.0,
            top: f32::NAN,
            right: 8.0,
            bottom: f32::INFINITY,
        };
        assert_eq!(
            insets.sanitized(),
            EdgeInsets {
                right: 8.0,
                ..EdgeInsets::ZERO
            }
        );
    }

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.max_x(), 40.0);
        assert_eq!(rect.max_y(), 60.0);
        assert_eq!(rect.size(), Size::new(30.0, 40.0));
        assert_eq!(rect.translate(5.0, 5.0).origin(), Point::new(15.0, 25.0));
    }
}
