//! Basic geometric types shared by the drawing primitives.
//!
//! All coordinates are `f32` in SVG user units, with the y axis growing
//! downward. The types here are plain values: cheap to copy, with no
//! behavior beyond coordinate arithmetic.

/// A point in diagram space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal coordinate.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the vertical coordinate.
    pub fn y(self) -> f32 {
        self.y
    }
}

/// A width/height pair.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a size from its dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height.
    pub fn height(self) -> f32 {
        self.height
    }
}

/// An axis-aligned rectangle described by its extreme corners.
///
/// `Bounds` is how callers hand a region to the composite drawers: the
/// activation drawer spans a bounds horizontally, the frame drawer fills one
/// entirely.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Creates bounds from a top-left corner and a size.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min: top_left,
            max: Point::new(top_left.x + size.width(), top_left.y + size.height()),
        }
    }

    /// Creates bounds from two opposite corners, in either order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// The smallest x coordinate.
    pub fn min_x(self) -> f32 {
        self.min.x
    }

    /// The smallest y coordinate.
    pub fn min_y(self) -> f32 {
        self.min.y
    }

    /// The largest x coordinate.
    pub fn max_x(self) -> f32 {
        self.max.x
    }

    /// The largest y coordinate.
    pub fn max_y(self) -> f32 {
        self.max.y
    }

    /// The horizontal extent.
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    /// The vertical extent.
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_accessors() {
        let p = Point::new(3.0, -4.5);
        assert_approx_eq!(f32, p.x(), 3.0);
        assert_approx_eq!(f32, p.y(), -4.5);
    }

    #[test]
    fn test_size_accessors() {
        let size = Size::new(150.0, 65.0);
        assert_approx_eq!(f32, size.width(), 150.0);
        assert_approx_eq!(f32, size.height(), 65.0);
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        assert_approx_eq!(f32, bounds.min_x(), 10.0);
        assert_approx_eq!(f32, bounds.min_y(), 20.0);
        assert_approx_eq!(f32, bounds.max_x(), 110.0);
        assert_approx_eq!(f32, bounds.max_y(), 70.0);
        assert_approx_eq!(f32, bounds.width(), 100.0);
        assert_approx_eq!(f32, bounds.height(), 50.0);
    }

    #[test]
    fn test_bounds_from_corners_normalizes() {
        let bounds = Bounds::from_corners(Point::new(110.0, 70.0), Point::new(10.0, 20.0));
        assert_approx_eq!(f32, bounds.min_x(), 10.0);
        assert_approx_eq!(f32, bounds.min_y(), 20.0);
        assert_approx_eq!(f32, bounds.max_x(), 110.0);
        assert_approx_eq!(f32, bounds.max_y(), 70.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    proptest! {
        /// `from_corners` always yields non-negative extents, whatever the
        /// corner order.
        #[test]
        fn from_corners_has_non_negative_extents(a in point_strategy(), b in point_strategy()) {
            let bounds = Bounds::from_corners(a, b);
            prop_assert!(bounds.width() >= 0.0);
            prop_assert!(bounds.height() >= 0.0);
            prop_assert!(bounds.min_x() <= bounds.max_x());
            prop_assert!(bounds.min_y() <= bounds.max_y());
        }
    }
}
