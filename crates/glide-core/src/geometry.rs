//! Geometric primitives: Point, Size, Rect, `CornerRadius`.
//!
//! All values are viewport pixels as reported by the page (`f64`), with +y
//! pointing down.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let d = *self - *other;
        d.x.hypot(d.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The larger of the two dimensions.
    #[must_use]
    pub fn max_dimension(&self) -> f64 {
        self.width.max(self.height)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// An axis-aligned rectangle in viewport coordinates.
///
/// Stores all four edges together with the derived width and height, the
/// same shape `getBoundingClientRect()` reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Right edge
    pub right: f64,
    /// Bottom edge
    pub bottom: f64,
    /// Width (`right - left`)
    pub width: f64,
    /// Height (`bottom - top`)
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its edges.
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Create from a top-left origin and a size.
    #[must_use]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }

    /// Rectangle covering a viewport of the given size.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::from_origin_size(Point::ORIGIN, size)
    }

    /// Get the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Whether the horizontal spans overlap (edges touching counts).
    ///
    /// Rects that overlap this way are stacked on top of each other, so they
    /// are "vertically aligned".
    #[must_use]
    pub fn overlaps_horizontally(&self, other: &Self) -> bool {
        !(self.right < other.left || self.left > other.right)
    }

    /// Whether the vertical spans overlap (edges touching counts).
    #[must_use]
    pub fn overlaps_vertically(&self, other: &Self) -> bool {
        !(self.bottom < other.top || self.top > other.bottom)
    }

    /// Whether the horizontal spans share more than an edge.
    #[must_use]
    pub fn interiors_overlap_horizontally(&self, other: &Self) -> bool {
        self.left < other.right && other.left < self.right
    }

    /// Whether the vertical spans share more than an edge.
    #[must_use]
    pub fn interiors_overlap_vertically(&self, other: &Self) -> bool {
        self.top < other.bottom && other.top < self.bottom
    }

    /// Grow the rectangle by `amount` on every side.
    #[must_use]
    pub fn expand(&self, amount: f64) -> Self {
        Self::new(
            self.left - amount,
            self.top - amount,
            self.right + amount,
            self.bottom + amount,
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Corner radii for rounded rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadius {
    /// Top-left radius
    pub top_left: f64,
    /// Top-right radius
    pub top_right: f64,
    /// Bottom-right radius
    pub bottom_right: f64,
    /// Bottom-left radius
    pub bottom_left: f64,
}

impl CornerRadius {
    /// Zero radius
    pub const ZERO: Self = Self {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    /// Create corner radii with individual values.
    #[must_use]
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Create uniform corner radius.
    #[must_use]
    pub const fn uniform(radius: f64) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Apply `f` to every corner.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(
            f(self.top_left),
            f(self.top_right),
            f(self.bottom_right),
            f(self.bottom_left),
        )
    }

    /// Radii as rendered for an element whose layout box was transformed to
    /// `rendered`, clamped to `max(rendered.width, rendered.height)`.
    ///
    /// A non-uniform transform stretches a circular corner into an ellipse; a
    /// single radius cannot express that, so the smaller axis scale is used.
    /// Degenerate layout sizes (zero width or height) scale by 1.
    #[must_use]
    pub fn rendered(self, layout: Size, rendered: Size) -> Self {
        let scale_x = if layout.width > 0.0 {
            rendered.width / layout.width
        } else {
            1.0
        };
        let scale_y = if layout.height > 0.0 {
            rendered.height / layout.height
        } else {
            1.0
        };
        let scale = scale_x.min(scale_y);
        let limit = rendered.max_dimension().max(0.0);
        self.map(|r| (r * scale).clamp(0.0, limit))
    }

}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rect_new_derives_size() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r.width, 100.0);
        assert_eq!(r.height, 50.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_rect_default() {
        let r = Rect::default();
        assert_eq!(r.left, 0.0);
        assert_eq!(r.size(), Size::ZERO);
    }

    #[test]
    fn test_rect_expand() {
        let r = Rect::from_size(Size::new(800.0, 600.0)).expand(100.0);
        assert_eq!(r, Rect::new(-100.0, -100.0, 900.0, 700.0));
    }

    #[test]
    fn test_overlap_touching_edges() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 200.0, 200.0, 300.0);
        assert!(a.overlaps_horizontally(&b));
        assert!(!a.overlaps_vertically(&b));
    }

    #[test]
    fn test_point_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(&Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_corner_radius_rendered_identity() {
        let r = CornerRadius::new(4.0, 8.0, 12.0, 16.0);
        let size = Size::new(100.0, 40.0);
        assert_eq!(r.rendered(size, size), r);
    }

    #[test]
    fn test_corner_radius_rendered_scaled_down() {
        let r = CornerRadius::uniform(10.0);
        let scaled = r.rendered(Size::new(100.0, 100.0), Size::new(50.0, 80.0));
        assert_eq!(scaled, CornerRadius::uniform(5.0));
    }

    #[test]
    fn test_corner_radius_pill_clamped() {
        // `border-radius: 9999px` on a 120x32 button
        let r = CornerRadius::uniform(9999.0);
        let size = Size::new(120.0, 32.0);
        assert_eq!(r.rendered(size, size), CornerRadius::uniform(120.0));
    }

    #[test]
    fn test_corner_radius_zero_layout_size() {
        let r = CornerRadius::uniform(6.0);
        let out = r.rendered(Size::ZERO, Size::new(20.0, 20.0));
        assert_eq!(out, CornerRadius::uniform(6.0));
    }

    #[test]
    fn test_touching_edges_are_not_interior_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 30.0);
        let below = Rect::new(0.0, 30.0, 300.0, 60.0);
        assert!(a.overlaps_vertically(&below));
        assert!(!a.interiors_overlap_vertically(&below));
        assert!(a.interiors_overlap_horizontally(&below));
    }

    #[test]
    fn test_point_sub_and_distance() {
        let d = Point::new(4.0, 7.0) - Point::new(1.0, 3.0);
        assert_eq!(d, Point::new(3.0, 4.0));
        assert_eq!(Point::new(1.0, 3.0).distance(&Point::new(4.0, 7.0)), 5.0);
    }

    proptest! {
        #[test]
        fn prop_rendered_radius_never_exceeds_box(
            radius in 0.0f64..100_000.0,
            w in 0.0f64..2000.0,
            h in 0.0f64..2000.0,
            sx in 0.1f64..4.0,
            sy in 0.1f64..4.0,
        ) {
            let layout = Size::new(w, h);
            let rendered = Size::new(w * sx, h * sy);
            let out = CornerRadius::uniform(radius).rendered(layout, rendered);
            let limit = rendered.max_dimension() + 1e-9;
            prop_assert!(out.top_left <= limit && out.bottom_right <= limit);
            prop_assert!(out.top_left >= 0.0);
        }
    }
}
