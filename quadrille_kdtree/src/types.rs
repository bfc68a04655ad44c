// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry vocabulary: splitting axes, the unit square, argument
//! validation, and the closed-rectangle predicates the queries rely on.

use kurbo::{Line, Point, Rect};

use crate::error::{InvalidArgument, Result};

/// The unit square `[0, 1] × [0, 1]`: the region the root of a tree owns.
pub const UNIT_SQUARE: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

/// Splitting orientation of a kd-tree node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Splits space by an x comparison (a vertical line through the point).
    Vertical,
    /// Splits space by a y comparison (a horizontal line through the point).
    Horizontal,
}

impl Axis {
    /// The axis used one level deeper. Alternates per depth; the root is
    /// [`Axis::Vertical`].
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// The coordinate of `p` this axis compares by.
    #[inline]
    #[must_use]
    pub const fn coord(self, p: Point) -> f64 {
        match self {
            Self::Vertical => p.x,
            Self::Horizontal => p.y,
        }
    }
}

/// Check that `p` has finite coordinates inside the unit square.
pub(crate) fn validate_point(p: Point) -> Result<()> {
    if in_unit(p.x) && in_unit(p.y) {
        Ok(())
    } else {
        Err(InvalidArgument(
            "point must have finite coordinates in [0, 1]",
        ))
    }
}

fn in_unit(v: f64) -> bool {
    // NaN fails both comparisons, so no explicit is_finite is needed.
    (0.0..=1.0).contains(&v)
}

/// Check that `r` is finite and not inverted. Query rectangles are not
/// required to lie inside the unit square.
pub(crate) fn validate_rect(r: &Rect) -> Result<()> {
    let finite =
        r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite();
    if finite && r.x0 <= r.x1 && r.y0 <= r.y1 {
        Ok(())
    } else {
        Err(InvalidArgument(
            "rectangle must be finite with x0 <= x1 and y0 <= y1",
        ))
    }
}

/// Closed containment: boundary points count as inside.
///
/// Kurbo's own `Rect::contains` is half-open on the max edges, which would
/// drop stored points sitting exactly on a query boundary.
#[inline]
pub(crate) fn rect_contains_closed(r: &Rect, p: Point) -> bool {
    r.x0 <= p.x && p.x <= r.x1 && r.y0 <= p.y && p.y <= r.y1
}

/// Closed intersection test: rectangles sharing only an edge intersect.
#[inline]
pub(crate) fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Squared distance from `p` to the closest point of `r`; zero when `p`
/// is inside. Lower-bounds the distance to every point inside `r`, which
/// is what makes nearest-neighbor pruning sound.
#[inline]
pub(crate) fn dist_sq_to_rect(r: &Rect, p: Point) -> f64 {
    let clamped = Point::new(p.x.clamp(r.x0, r.x1), p.y.clamp(r.y0, r.y1));
    p.distance_squared(clamped)
}

/// Split `region` along `axis` at the coordinate of `at`, returning the
/// `(low, high)` halves inherited by a node's children.
pub(crate) fn split_region(region: &Rect, axis: Axis, at: Point) -> (Rect, Rect) {
    match axis {
        Axis::Vertical => (
            Rect::new(region.x0, region.y0, at.x, region.y1),
            Rect::new(at.x, region.y0, region.x1, region.y1),
        ),
        Axis::Horizontal => (
            Rect::new(region.x0, region.y0, region.x1, at.y),
            Rect::new(region.x0, at.y, region.x1, region.y1),
        ),
    }
}

/// The degenerate splitting segment through `p`, spanning `region` along
/// `axis`.
pub(crate) fn split_segment(region: &Rect, axis: Axis, p: Point) -> Line {
    match axis {
        Axis::Vertical => Line::new((p.x, region.y0), (p.x, region.y1)),
        Axis::Horizontal => Line::new((region.x0, p.y), (region.x1, p.y)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_points_are_inside() {
        let r = Rect::new(0.2, 0.2, 0.6, 0.6);
        assert!(rect_contains_closed(&r, Point::new(0.2, 0.2)));
        assert!(rect_contains_closed(&r, Point::new(0.6, 0.6)));
        assert!(rect_contains_closed(&r, Point::new(0.4, 0.6)));
        assert!(!rect_contains_closed(&r, Point::new(0.61, 0.4)));
    }

    #[test]
    fn touching_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 0.5, 0.5);
        let b = Rect::new(0.5, 0.5, 1.0, 1.0);
        let c = Rect::new(0.6, 0.6, 1.0, 1.0);
        assert!(rects_intersect(&a, &b));
        assert!(!rects_intersect(&a, &c));
    }

    #[test]
    fn rect_distance_is_zero_inside() {
        let r = Rect::new(0.2, 0.2, 0.6, 0.6);
        assert_eq!(dist_sq_to_rect(&r, Point::new(0.3, 0.5)), 0.0);
        assert_eq!(dist_sq_to_rect(&r, Point::new(0.6, 0.2)), 0.0);
        // Directly right of the rect: only the x gap counts.
        let d = dist_sq_to_rect(&r, Point::new(0.8, 0.4));
        assert!((d - 0.04).abs() < 1e-12, "got {d}");
        // Past a corner: both gaps count.
        let d = dist_sq_to_rect(&r, Point::new(0.8, 0.8));
        assert!((d - 0.08).abs() < 1e-12, "got {d}");
    }

    #[test]
    fn split_halves_share_the_split_line() {
        let at = Point::new(0.3, 0.7);
        let (low, high) = split_region(&UNIT_SQUARE, Axis::Vertical, at);
        assert_eq!(low, Rect::new(0.0, 0.0, 0.3, 1.0));
        assert_eq!(high, Rect::new(0.3, 0.0, 1.0, 1.0));
        let (low, high) = split_region(&UNIT_SQUARE, Axis::Horizontal, at);
        assert_eq!(low, Rect::new(0.0, 0.0, 1.0, 0.7));
        assert_eq!(high, Rect::new(0.0, 0.7, 1.0, 1.0));
    }

    #[test]
    fn segment_spans_region_through_point() {
        let region = Rect::new(0.0, 0.0, 0.5, 1.0);
        let seg = split_segment(&region, Axis::Vertical, Point::new(0.2, 0.8));
        assert_eq!(seg.p0, Point::new(0.2, 0.0));
        assert_eq!(seg.p1, Point::new(0.2, 1.0));
        let seg = split_segment(&region, Axis::Horizontal, Point::new(0.2, 0.8));
        assert_eq!(seg.p0, Point::new(0.0, 0.8));
        assert_eq!(seg.p1, Point::new(0.5, 0.8));
    }

    #[test]
    fn nan_and_out_of_square_points_are_rejected() {
        assert!(validate_point(Point::new(0.0, 1.0)).is_ok());
        assert!(validate_point(Point::new(f64::NAN, 0.5)).is_err());
        assert!(validate_point(Point::new(0.5, f64::INFINITY)).is_err());
        assert!(validate_point(Point::new(-0.1, 0.5)).is_err());
        assert!(validate_point(Point::new(0.5, 1.1)).is_err());
    }

    #[test]
    fn inverted_and_nan_rects_are_rejected() {
        assert!(validate_rect(&Rect::new(0.0, 0.0, 0.0, 0.0)).is_ok());
        assert!(validate_rect(&Rect::new(0.4, 0.0, 0.2, 1.0)).is_err());
        assert!(validate_rect(&Rect::new(0.0, f64::NAN, 1.0, 1.0)).is_err());
    }
}
