//! The [`Rectangle`] value type: construction, mutation, containment and set algebra.
//!
//! Rectangles may be "non-standardized" (negative width or height). Every
//! extent query goes through [`min_x`](Rectangle::min_x) and friends, so the
//! results do not depend on the sign of the size.

use core::ops::{AddAssign, SubAssign};

use num_traits::Float;

use crate::point::Point;

/// Absolute tolerance used by rectangle equality, [`Rectangle::is_empty`]
/// and the identity check in [`Rectangle::scale_from_center_xy`].
pub const TOLERANCE: f64 = 0.001;

#[inline]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    Float::abs(a - b) <= TOLERANCE
}

/// Axis-aligned rectangle with `f64` origin and extent.
///
/// Mutating methods work in place and return `&mut Self` for chaining:
///
/// ```
/// use zenrect::Rectangle;
///
/// let mut r = Rectangle::new(1.0, 2.0, 3.0, 4.0);
/// r.translate(10.0, 10.0).scale(2.0);
/// assert_eq!(r, Rectangle::new(11.0, 12.0, 6.0, 8.0));
/// ```
///
/// `==` is approximate: fields may differ by up to [`TOLERANCE`]. Use
/// [`exact_eq`](Self::exact_eq) for bitwise-style comparison.
#[derive(Copy, Clone, Debug, Default)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.width, other.width)
            && approx_eq(self.height, other.height)
    }
}

impl Rectangle {
    /// `(0, 0, 0, 0)`, also returned for disjoint intersections.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new rectangle.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Standardized bounding rectangle of two corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let mut r = Self::ZERO;
        r.set_from_corners(a, b);
        r
    }

    /// Rectangle of the given size centered on `center`.
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        let mut r = Self::ZERO;
        r.set_from_center_point(center, width, height);
        r
    }

    /// Field-wise `==` with no tolerance.
    pub fn exact_eq(&self, other: &Self) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
    }

    // ---- Field mutation ----

    /// Overwrite the fields that are `Some`, leaving the rest unchanged.
    ///
    /// `Some(0.0)` and `Some(f64::NAN)` are applied like any other value.
    pub fn set(
        &mut self,
        x: Option<f64>,
        y: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> &mut Self {
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }
        self
    }

    pub fn set_from_point(
        &mut self,
        position: Point,
        width: Option<f64>,
        height: Option<f64>,
    ) -> &mut Self {
        self.set(Some(position.x), Some(position.y), width, height)
    }

    pub fn set_from_rect(&mut self, other: &Rectangle) -> &mut Self {
        *self = *other;
        self
    }

    /// Set to the bounding box of two corners. The result is always standardized.
    pub fn set_from_corners(&mut self, a: Point, b: Point) -> &mut Self {
        let x0 = a.x.min(b.x);
        let x1 = a.x.max(b.x);
        let y0 = a.y.min(b.y);
        let y1 = a.y.max(b.y);
        self.set(Some(x0), Some(y0), Some(x1 - x0), Some(y1 - y0))
    }

    pub fn set_from_center(&mut self, cx: f64, cy: f64, width: f64, height: f64) -> &mut Self {
        self.set(
            Some(cx - width * 0.5),
            Some(cy - height * 0.5),
            Some(width),
            Some(height),
        )
    }

    pub fn set_from_center_point(&mut self, center: Point, width: f64, height: f64) -> &mut Self {
        self.set_from_center(center.x, center.y, width, height)
    }

    /// `(x, y)`.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) -> &mut Self {
        self.x = position.x;
        self.y = position.y;
        self
    }

    /// `(width, height)` as a point.
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    pub fn set_size(&mut self, size: Point) -> &mut Self {
        self.width = size.x;
        self.height = size.y;
        self
    }

    // ---- Translation ----

    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.translate_x(dx).translate_y(dy)
    }

    pub fn translate_point(&mut self, delta: Point) -> &mut Self {
        self.translate(delta.x, delta.y)
    }

    pub fn translate_x(&mut self, dx: f64) -> &mut Self {
        self.x += dx;
        self
    }

    pub fn translate_y(&mut self, dy: f64) -> &mut Self {
        self.y += dy;
        self
    }

    // ---- Scaling ----

    /// Scale width and height uniformly. The origin stays put.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.scale_xy(factor, factor)
    }

    pub fn scale_xy(&mut self, fx: f64, fy: f64) -> &mut Self {
        self.scale_width(fx).scale_height(fy)
    }

    pub fn scale_point(&mut self, factors: Point) -> &mut Self {
        self.scale_xy(factors.x, factors.y)
    }

    pub fn scale_width(&mut self, factor: f64) -> &mut Self {
        self.width *= factor;
        self
    }

    pub fn scale_height(&mut self, factor: f64) -> &mut Self {
        self.height *= factor;
        self
    }

    pub fn scale_from_center(&mut self, factor: f64) -> &mut Self {
        self.scale_from_center_xy(factor, factor)
    }

    /// Scale the size while keeping the center fixed.
    ///
    /// Factors within [`TOLERANCE`] of `1.0` on both axes leave the rectangle
    /// untouched, so an identity call never drifts the origin.
    pub fn scale_from_center_xy(&mut self, fx: f64, fy: f64) -> &mut Self {
        if approx_eq(fx, 1.0) && approx_eq(fy, 1.0) {
            return self;
        }

        let new_width = self.width * fx;
        let new_height = self.height * fy;
        let center = self.center();

        self.x = center.x - new_width / 2.0;
        self.y = center.y - new_height / 2.0;
        self.width = new_width;
        self.height = new_height;
        self
    }

    pub fn scale_from_center_point(&mut self, factors: Point) -> &mut Self {
        self.scale_from_center_xy(factors.x, factors.y)
    }

    // ---- Containment ----

    /// Strictly inside: points on an edge are outside.
    pub fn inside_xy(&self, x: f64, y: f64) -> bool {
        x > self.min_x() && y > self.min_y() && x < self.max_x() && y < self.max_y()
    }

    pub fn inside_point(&self, p: Point) -> bool {
        self.inside_xy(p.x, p.y)
    }

    /// Both the min and max corners of `other` are strictly inside.
    pub fn inside_rect(&self, other: &Rectangle) -> bool {
        self.inside_xy(other.min_x(), other.min_y()) && self.inside_xy(other.max_x(), other.max_y())
    }

    /// Both endpoints of the segment are strictly inside.
    pub fn inside_line(&self, a: Point, b: Point) -> bool {
        self.inside_point(a) && self.inside_point(b)
    }

    // ---- Growth ----

    /// Grow to cover `(x, y)`. The result is standardized.
    pub fn grow_to_include_xy(&mut self, x: f64, y: f64) -> &mut Self {
        let x0 = self.min_x().min(x);
        let x1 = self.max_x().max(x);
        let y0 = self.min_y().min(y);
        let y1 = self.max_y().max(y);
        self.set(Some(x0), Some(y0), Some(x1 - x0), Some(y1 - y0))
    }

    pub fn grow_to_include_point(&mut self, p: Point) -> &mut Self {
        self.grow_to_include_xy(p.x, p.y)
    }

    /// Grow to cover `other`. The result is standardized.
    pub fn grow_to_include_rect(&mut self, other: &Rectangle) -> &mut Self {
        let x0 = self.min_x().min(other.min_x());
        let x1 = self.max_x().max(other.max_x());
        let y0 = self.min_y().min(other.min_y());
        let y1 = self.max_y().max(other.max_y());
        self.set(Some(x0), Some(y0), Some(x1 - x0), Some(y1 - y0))
    }

    pub fn grow_to_include_line(&mut self, a: Point, b: Point) -> &mut Self {
        self.grow_to_include_point(a).grow_to_include_point(b)
    }

    // ---- Set algebra ----

    /// Overlapping region, or [`Rectangle::ZERO`] when the rectangles are
    /// disjoint on either axis. Touching edges yield a zero-width (or
    /// zero-height) rectangle at the shared edge.
    pub fn intersection(&self, other: &Rectangle) -> Rectangle {
        let x0 = self.min_x().max(other.min_x());
        let x1 = self.max_x().min(other.max_x());
        let w = x1 - x0;
        if w < 0.0 {
            return Rectangle::ZERO;
        }

        let y0 = self.min_y().max(other.min_y());
        let y1 = self.max_y().min(other.max_y());
        let h = y1 - y0;
        if h < 0.0 {
            return Rectangle::ZERO;
        }

        Rectangle::new(x0, y0, w, h)
    }

    /// Standardized bounding box of both rectangles. Neither operand changes.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let mut united = *self;
        united.grow_to_include_rect(other);
        united
    }

    /// Flip negative dimensions so that width and height are `>= 0`,
    /// covering the same area.
    pub fn standardize(&mut self) -> &mut Self {
        if self.width < 0.0 {
            self.x += self.width;
            self.width = -self.width;
        }
        if self.height < 0.0 {
            self.y += self.height;
            self.height = -self.height;
        }
        self
    }

    // ---- Derived properties ----

    pub fn is_standardized(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    pub fn area(&self) -> f64 {
        Float::abs(self.width) * Float::abs(self.height)
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * Float::abs(self.width) + 2.0 * Float::abs(self.height)
    }

    /// `|width| / |height|`. Zero height gives `inf` (or `NaN` when width is zero too).
    pub fn aspect_ratio(&self) -> f64 {
        Float::abs(self.width) / Float::abs(self.height)
    }

    /// Width and height both within [`TOLERANCE`] of zero.
    pub fn is_empty(&self) -> bool {
        approx_eq(self.width, 0.0) && approx_eq(self.height, 0.0)
    }

    pub fn min(&self) -> Point {
        Point::new(self.min_x(), self.min_y())
    }

    pub fn max(&self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    pub fn min_x(&self) -> f64 {
        self.x.min(self.x + self.width)
    }

    pub fn max_x(&self) -> f64 {
        self.x.max(self.x + self.width)
    }

    pub fn min_y(&self) -> f64 {
        self.y.min(self.y + self.height)
    }

    pub fn max_y(&self) -> f64 {
        self.y.max(self.y + self.height)
    }

    pub fn left(&self) -> f64 {
        self.min_x()
    }

    pub fn right(&self) -> f64 {
        self.max_x()
    }

    pub fn top(&self) -> f64 {
        self.min_y()
    }

    pub fn bottom(&self) -> f64 {
        self.max_y()
    }

    pub fn top_left(&self) -> Point {
        self.min()
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        self.max()
    }

    /// Midpoint of the origin and the far corner. Unlike the edge accessors
    /// this does not normalize, but a flipped rectangle has the same center.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Offset the origin.
impl AddAssign<Point> for Rectangle {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign<Point> for Rectangle {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
