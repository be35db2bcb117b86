use super::{Point, Size};

/// Edge of a rectangle, selecting where [`Rect::divide`] takes its slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectEdge {
    /// The edge at the smallest x-coordinate.
    MinX,
    /// The edge at the smallest y-coordinate.
    MinY,
    /// The edge at the largest x-coordinate.
    MaxX,
    /// The edge at the largest y-coordinate.
    MaxY,
}

/// An axis-aligned rectangle defined by an origin and a size.
///
/// The size may carry negative extents; such a rectangle is
/// "unstandardized" and covers the same points as its
/// [`standardized`](Rect::standardized) form. Operations that need a
/// normalized input standardize internally and say so; the containment
/// tests do not.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Corner the size extends from.
    pub origin: Point,
    /// Extent of the rectangle.
    pub size: Size,
}

impl Rect {
    /// The zero rectangle: zero origin, zero size.
    pub const ZERO: Rect = Rect::from_origin_size(Point::ZERO, Size::ZERO);

    /// Sentinel for "no rectangle", produced by operations with no
    /// geometric result. Distinct from [`Rect::ZERO`], which is a real
    /// (empty) rectangle at the origin.
    pub const NULL: Rect =
        Rect::from_origin_size(Point::new(f64::INFINITY, f64::INFINITY), Size::ZERO);

    /// Sentinel covering the entire coordinate plane.
    pub const INFINITE: Rect = Rect::from_origin_size(
        Point::new(-f64::MAX / 2.0, -f64::MAX / 2.0),
        Size::new(f64::MAX, f64::MAX),
    );

    /// Creates a rectangle from edge coordinates and extents.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Creates a rectangle from an origin and a size.
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Width as a non-negative value, regardless of standardization.
    #[must_use]
    pub fn width(self) -> f64 {
        self.size.width.abs()
    }

    /// Height as a non-negative value, regardless of standardization.
    #[must_use]
    pub fn height(self) -> f64 {
        self.size.height.abs()
    }

    /// Smallest x-coordinate covered, correct even for a negative width.
    #[must_use]
    pub fn min_x(self) -> f64 {
        if self.size.width > 0.0 {
            self.origin.x
        } else {
            self.origin.x + self.size.width
        }
    }

    /// Largest x-coordinate covered, correct even for a negative width.
    #[must_use]
    pub fn max_x(self) -> f64 {
        if self.size.width > 0.0 {
            self.origin.x + self.size.width
        } else {
            self.origin.x
        }
    }

    /// X-coordinate of the center. Computed on the raw fields, so the
    /// result lies inside the rectangle only once it is standardized.
    #[must_use]
    pub fn mid_x(self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    /// Smallest y-coordinate covered, correct even for a negative height.
    #[must_use]
    pub fn min_y(self) -> f64 {
        if self.size.height > 0.0 {
            self.origin.y
        } else {
            self.origin.y + self.size.height
        }
    }

    /// Largest y-coordinate covered, correct even for a negative height.
    #[must_use]
    pub fn max_y(self) -> f64 {
        if self.size.height > 0.0 {
            self.origin.y + self.size.height
        } else {
            self.origin.y
        }
    }

    /// Y-coordinate of the center, on the raw fields like [`Rect::mid_x`].
    #[must_use]
    pub fn mid_y(self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    /// True for the null sentinel: both origin coordinates are positive
    /// infinity. Exact comparison, never tolerance-based.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_null(self) -> bool {
        self.origin.x == f64::INFINITY && self.origin.y == f64::INFINITY
    }

    /// True when all four fields exactly match [`Rect::INFINITE`].
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_infinite(self) -> bool {
        self.origin.x == Rect::INFINITE.origin.x
            && self.origin.y == Rect::INFINITE.origin.y
            && self.size.width == Rect::INFINITE.size.width
            && self.size.height == Rect::INFINITE.size.height
    }

    /// True when both size components are exactly zero.
    ///
    /// A rectangle that is degenerate along only one axis does not count
    /// as empty here.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_empty(self) -> bool {
        self.size.height == 0.0 && self.size.width == 0.0
    }

    /// Approximate equality: sizes and origins within
    /// [`EPSILON`](super::EPSILON), component-wise.
    #[must_use]
    pub fn approx_eq(self, other: Rect) -> bool {
        self.size.approx_eq(other.size) && self.origin.approx_eq(other.origin)
    }

    /// Half-open containment test: the min edges are included, the max
    /// edges excluded. Reads the raw fields; standardize first when the
    /// size may be negative.
    #[must_use]
    pub fn contains_point(self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.size.height
    }

    /// True when `other` lies entirely inside `self`.
    ///
    /// Both `other`'s origin and its far corner (`origin + size`) must pass
    /// the half-open test, so a far corner landing exactly on the boundary
    /// counts as outside.
    #[must_use]
    pub fn contains_rect(self, other: Rect) -> bool {
        self.contains_point(other.origin)
            && self.contains_point(Point::new(
                other.origin.x + other.size.width,
                other.origin.y + other.size.height,
            ))
    }

    /// Returns the same covered area with non-negative extents.
    ///
    /// Idempotent: standardizing twice equals standardizing once.
    #[must_use]
    pub fn standardized(self) -> Rect {
        let mut rect = self;

        if rect.size.width < 0.0 {
            rect.origin.x += rect.size.width;
            rect.size.width = -rect.size.width;
        }
        if rect.size.height < 0.0 {
            rect.origin.y += rect.size.height;
            rect.size.height = -rect.size.height;
        }

        rect
    }

    /// Translates the origin by `(dx, dy)`; the size is unchanged.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Rect {
        Rect::from_origin_size(
            Point::new(self.origin.x + dx, self.origin.y + dy),
            self.size,
        )
    }

    /// Snaps to the integer grid: the origin is floored and the size
    /// fields are ceiled as-is. Callers wanting the covered extent ceiled
    /// must standardize first.
    #[must_use]
    pub fn integral(self) -> Rect {
        Rect::new(
            self.origin.x.floor(),
            self.origin.y.floor(),
            self.size.width.ceil(),
            self.size.height.ceil(),
        )
    }

    /// Shrinks by `dx` on each horizontal side and `dy` on each vertical
    /// side; negative values grow the rectangle.
    ///
    /// Returns [`Rect::NULL`] when the inset would invert the rectangle.
    /// The guard reads the raw size fields, so an unstandardized input is
    /// judged on its signed extents.
    #[must_use]
    pub fn inset(self, dx: f64, dy: f64) -> Rect {
        if dx.abs() * 2.0 > self.size.width || dy.abs() * 2.0 > self.size.height {
            return Rect::NULL;
        }

        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width - dx * 2.0,
            self.size.height - dy * 2.0,
        )
    }

    /// Intersection of the two rectangles, or [`Rect::NULL`] when they are
    /// disjoint.
    ///
    /// Both inputs are standardized first. Rectangles that merely touch
    /// along an edge intersect in a zero-extent strip rather than NULL.
    /// A NULL input is not special-cased; its infinite origin flows
    /// through the arithmetic.
    #[must_use]
    pub fn intersection(self, other: Rect) -> Rect {
        let a = self.standardized();
        let b = other.standardized();

        let x0 = a.origin.x.max(b.origin.x);
        let x1 = (a.origin.x + a.size.width).min(b.origin.x + b.size.width);

        if x0 <= x1 {
            let y0 = a.origin.y.max(b.origin.y);
            let y1 = (a.origin.y + a.size.height).min(b.origin.y + b.size.height);

            if y0 <= y1 {
                return Rect::new(x0, y0, x1 - x0, y1 - y0);
            }
        }

        Rect::NULL
    }

    /// True when [`Rect::intersection`] yields a rectangle; touching edges
    /// count.
    #[must_use]
    pub fn intersects(self, other: Rect) -> bool {
        !self.intersection(other).is_null()
    }

    /// Smallest rectangle containing both inputs.
    ///
    /// [`Rect::NULL`] acts as the identity on either side; otherwise both
    /// inputs are standardized and the bounding box is returned.
    #[must_use]
    pub fn union(self, other: Rect) -> Rect {
        if self.is_null() {
            return other;
        }
        if other.is_null() {
            return self;
        }

        let a = self.standardized();
        let b = other.standardized();

        let x0 = a.origin.x.min(b.origin.x);
        let x1 = (a.origin.x + a.size.width).max(b.origin.x + b.size.width);
        let y0 = a.origin.y.min(b.origin.y);
        let y1 = (a.origin.y + a.size.height).max(b.origin.y + b.size.height);

        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Splits into a slice `amount` deep measured from `edge`, and the
    /// remainder covering the rest.
    ///
    /// The input is standardized first. When `amount` exceeds the extent
    /// along the chosen axis, the slice is the whole standardized
    /// rectangle and the remainder is [`Rect::ZERO`].
    #[must_use]
    pub fn divide(self, amount: f64, edge: RectEdge) -> (Rect, Rect) {
        let rect = self.standardized();

        let overflow = match edge {
            RectEdge::MinX | RectEdge::MaxX => amount > rect.size.width,
            RectEdge::MinY | RectEdge::MaxY => amount > rect.size.height,
        };
        if overflow {
            return (rect, Rect::ZERO);
        }

        match edge {
            RectEdge::MinX => (
                Rect::new(rect.origin.x, rect.origin.y, amount, rect.size.height),
                Rect::new(
                    rect.origin.x + amount,
                    rect.origin.y,
                    rect.size.width - amount,
                    rect.size.height,
                ),
            ),
            RectEdge::MinY => (
                Rect::new(rect.origin.x, rect.origin.y, rect.size.width, amount),
                Rect::new(
                    rect.origin.x,
                    rect.origin.y + amount,
                    rect.size.width,
                    rect.size.height - amount,
                ),
            ),
            RectEdge::MaxX => (
                Rect::new(
                    rect.origin.x + rect.size.width - amount,
                    rect.origin.y,
                    amount,
                    rect.size.height,
                ),
                Rect::new(
                    rect.origin.x,
                    rect.origin.y,
                    rect.size.width - amount,
                    rect.size.height,
                ),
            ),
            RectEdge::MaxY => (
                Rect::new(
                    rect.origin.x,
                    rect.origin.y + rect.size.height - amount,
                    rect.size.width,
                    amount,
                ),
                Rect::new(
                    rect.origin.x,
                    rect.origin.y,
                    rect.size.width,
                    rect.size.height - amount,
                ),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── accessors ──

    #[test]
    fn width_height_are_absolute() {
        let rect = r(0.0, 0.0, -4.0, -6.0);
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 6.0);
    }

    #[test]
    fn min_max_handle_negative_extents() {
        // Covers x in [6, 10] and y in [4, 10] despite the raw fields.
        let rect = r(10.0, 10.0, -4.0, -6.0);
        assert_eq!(rect.min_x(), 6.0);
        assert_eq!(rect.max_x(), 10.0);
        assert_eq!(rect.min_y(), 4.0);
        assert_eq!(rect.max_y(), 10.0);
    }

    #[test]
    fn min_max_on_standardized_rect() {
        let rect = r(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.min_x(), 1.0);
        assert_eq!(rect.max_x(), 4.0);
        assert_eq!(rect.min_y(), 2.0);
        assert_eq!(rect.max_y(), 6.0);
    }

    #[test]
    fn mid_uses_raw_fields() {
        assert_eq!(r(0.0, 0.0, 10.0, 20.0).mid_x(), 5.0);
        assert_eq!(r(0.0, 0.0, 10.0, 20.0).mid_y(), 10.0);
        // Unstandardized: the midpoint is still origin + extent/2.
        assert_eq!(r(10.0, 0.0, -4.0, 0.0).mid_x(), 8.0);
    }

    // ── sentinels ──

    #[test]
    fn null_is_null_and_nothing_else_is() {
        assert!(Rect::NULL.is_null());
        assert!(!Rect::ZERO.is_null());
        assert!(!Rect::INFINITE.is_null());
        assert!(!r(0.0, 0.0, 10.0, 10.0).is_null());
    }

    #[test]
    fn infinite_matches_exactly() {
        assert!(Rect::INFINITE.is_infinite());
        // Standardizing the infinite rect leaves it untouched.
        assert!(Rect::INFINITE.standardized().is_infinite());
        // One nudged field and it no longer classifies.
        let almost = Rect::from_origin_size(
            Point::new(-f64::MAX / 2.0, -f64::MAX / 2.0),
            Size::new(f64::MAX, f64::MAX / 2.0),
        );
        assert!(!almost.is_infinite());
        assert!(!Rect::ZERO.is_infinite());
    }

    #[test]
    fn empty_requires_both_extents_zero() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::NULL.is_empty());
        assert!(!r(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(!r(0.0, 0.0, 10.0, 0.0).is_empty());
    }

    // ── equality ──

    #[test]
    fn approx_eq_componentwise() {
        let a = r(1.0, 2.0, 3.0, 4.0);
        let eps = crate::geometry::EPSILON;
        assert!(a.approx_eq(r(1.0 + eps / 2.0, 2.0, 3.0, 4.0 - eps / 2.0)));
        assert!(!a.approx_eq(r(1.0, 2.0, 3.0, 4.1)));
        assert!(!a.approx_eq(r(1.1, 2.0, 3.0, 4.0)));
    }

    // ── containment ──

    #[test]
    fn contains_point_is_half_open() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(Point::new(0.0, 0.0)));
        assert!(rect.contains_point(Point::new(9.999, 5.0)));
        // Max edges are excluded.
        assert!(!rect.contains_point(Point::new(10.0, 5.0)));
        assert!(!rect.contains_point(Point::new(5.0, 10.0)));
        assert!(!rect.contains_point(Point::new(-0.001, 5.0)));
    }

    #[test]
    fn contains_rect_requires_strict_far_corner() {
        let outer = r(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains_rect(r(1.0, 1.0, 5.0, 5.0)));
        // Far corner exactly on the boundary: not contained.
        assert!(!outer.contains_rect(r(5.0, 5.0, 5.0, 5.0)));
        assert!(!outer.contains_rect(r(-1.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn contains_rect_implies_contains_origin() {
        let outer = r(0.0, 0.0, 100.0, 50.0);
        let inner = r(10.0, 10.0, 20.0, 20.0);
        assert!(outer.contains_rect(inner));
        assert!(outer.contains_point(inner.origin));
    }

    // ── standardize ──

    #[test]
    fn standardized_flips_negative_extents() {
        let rect = r(10.0, 10.0, -4.0, -6.0);
        assert_eq!(rect.standardized(), r(6.0, 4.0, 4.0, 6.0));
    }

    #[test]
    fn standardized_is_idempotent() {
        for rect in [
            r(10.0, 10.0, -4.0, -6.0),
            r(0.0, 0.0, 5.0, 5.0),
            r(-3.0, 2.0, 7.0, -1.0),
        ] {
            let once = rect.standardized();
            assert_eq!(once.standardized(), once);
            assert!(once.size.width >= 0.0);
            assert!(once.size.height >= 0.0);
        }
    }

    #[test]
    fn standardized_preserves_covered_extent() {
        let rect = r(10.0, 10.0, -4.0, -6.0);
        let std = rect.standardized();
        assert_eq!(std.min_x(), rect.min_x());
        assert_eq!(std.max_x(), rect.max_x());
        assert_eq!(std.min_y(), rect.min_y());
        assert_eq!(std.max_y(), rect.max_y());
    }

    // ── offset / integral ──

    #[test]
    fn offset_translates_origin_only() {
        let rect = r(1.0, 2.0, 3.0, 4.0).offset(10.0, -2.0);
        assert_eq!(rect, r(11.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn integral_floors_origin_and_ceils_size() {
        let rect = r(0.5, -0.5, 9.2, 9.8).integral();
        assert_eq!(rect, r(0.0, -1.0, 10.0, 10.0));
    }

    #[test]
    fn integral_ceils_raw_negative_size() {
        // The raw size is ceiled, not the standardized extent.
        let rect = r(5.0, 5.0, -4.5, 3.0).integral();
        assert_eq!(rect, r(5.0, 5.0, -4.0, 3.0));
    }

    // ── intersection ──

    #[test]
    fn intersection_of_overlapping_rects() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection(b), r(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn intersection_is_commutative() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(5.0, -5.0, 10.0, 10.0);
        assert_eq!(a.intersection(b), b.intersection(a));

        let disjoint = r(100.0, 100.0, 1.0, 1.0);
        assert!(a.intersection(disjoint).is_null());
        assert!(disjoint.intersection(a).is_null());
    }

    #[test]
    fn touching_rects_intersect_in_zero_strip() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 5.0, 10.0);
        let strip = a.intersection(b);
        assert!(!strip.is_null());
        assert_eq!(strip, r(10.0, 0.0, 0.0, 10.0));
        assert!(a.intersects(b));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(20.0, 20.0, 5.0, 5.0);
        assert!(a.intersection(b).is_null());
        assert!(!a.intersects(b));
    }

    #[test]
    fn intersection_standardizes_inputs() {
        // Same area as (0,0,10,10) expressed with negative extents.
        let a = r(10.0, 10.0, -10.0, -10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection(b), r(5.0, 5.0, 5.0, 5.0));
    }

    // ── union ──

    #[test]
    fn union_treats_null_as_identity() {
        let rect = r(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.union(Rect::NULL), rect);
        assert_eq!(Rect::NULL.union(rect), rect);
    }

    #[test]
    fn union_is_bounding_box() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(20.0, -5.0, 5.0, 5.0);
        assert_eq!(a.union(b), r(0.0, -5.0, 25.0, 15.0));
    }

    #[test]
    fn union_standardizes_inputs() {
        let a = r(10.0, 10.0, -10.0, -10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.union(b), r(0.0, 0.0, 15.0, 15.0));
    }

    // ── inset ──

    #[test]
    fn inset_shrinks_symmetrically() {
        let rect = r(0.0, 0.0, 10.0, 10.0).inset(2.0, 3.0);
        assert_eq!(rect, r(2.0, 3.0, 6.0, 4.0));
    }

    #[test]
    fn inset_grows_with_negative_deltas() {
        let rect = r(0.0, 0.0, 10.0, 10.0).inset(-2.0, -2.0);
        assert_eq!(rect, r(-2.0, -2.0, 14.0, 14.0));
    }

    #[test]
    fn inset_that_would_invert_is_null() {
        assert!(r(0.0, 0.0, 10.0, 10.0).inset(6.0, 0.0).is_null());
        assert!(r(0.0, 0.0, 10.0, 10.0).inset(0.0, 5.1).is_null());
        // Guard compares against the raw (negative) width.
        assert!(r(10.0, 0.0, -10.0, 10.0).inset(1.0, 0.0).is_null());
    }

    // ── divide ──

    #[test]
    fn divide_min_x_edge() {
        let (slice, remainder) = r(0.0, 0.0, 100.0, 50.0).divide(30.0, RectEdge::MinX);
        assert_eq!(slice, r(0.0, 0.0, 30.0, 50.0));
        assert_eq!(remainder, r(30.0, 0.0, 70.0, 50.0));
    }

    #[test]
    fn divide_min_y_edge() {
        let (slice, remainder) = r(0.0, 0.0, 100.0, 50.0).divide(20.0, RectEdge::MinY);
        assert_eq!(slice, r(0.0, 0.0, 100.0, 20.0));
        assert_eq!(remainder, r(0.0, 20.0, 100.0, 30.0));
    }

    #[test]
    fn divide_max_x_edge() {
        let (slice, remainder) = r(0.0, 0.0, 100.0, 50.0).divide(30.0, RectEdge::MaxX);
        assert_eq!(slice, r(70.0, 0.0, 30.0, 50.0));
        assert_eq!(remainder, r(0.0, 0.0, 70.0, 50.0));
    }

    #[test]
    fn divide_max_y_edge() {
        let (slice, remainder) = r(0.0, 0.0, 100.0, 50.0).divide(10.0, RectEdge::MaxY);
        assert_eq!(slice, r(0.0, 40.0, 100.0, 10.0));
        assert_eq!(remainder, r(0.0, 0.0, 100.0, 40.0));
    }

    #[test]
    fn divide_overflow_returns_whole_rect_and_zero() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        let (slice, remainder) = rect.divide(20.0, RectEdge::MinX);
        assert_eq!(slice, rect);
        assert_eq!(remainder, Rect::ZERO);
    }

    #[test]
    fn divide_standardizes_input() {
        // Same area as (0,0,100,50) with negative extents.
        let (slice, remainder) = r(100.0, 50.0, -100.0, -50.0).divide(30.0, RectEdge::MinX);
        assert_eq!(slice, r(0.0, 0.0, 30.0, 50.0));
        assert_eq!(remainder, r(30.0, 0.0, 70.0, 50.0));
    }

    #[test]
    fn divide_partitions_exactly() {
        let rect = r(-10.0, 5.0, 40.0, 20.0);
        for edge in [RectEdge::MinX, RectEdge::MinY, RectEdge::MaxX, RectEdge::MaxY] {
            let (slice, remainder) = rect.divide(7.5, edge);
            assert_eq!(slice.union(remainder), rect);
            // Adjacent halves share at most a zero-extent seam.
            let seam = slice.intersection(remainder);
            assert!(seam.size.width == 0.0 || seam.size.height == 0.0);
        }
    }
}
