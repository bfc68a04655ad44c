// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brute-force linear-scan point set. Small and simple; the reference
//! oracle the kd-tree is checked against.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::error::Result;
use crate::set::PointSet;
use crate::types::{rect_contains_closed, validate_point, validate_rect};

/// Linear-scan implementation of [`PointSet`].
///
/// Every query walks the whole set, so each operation is O(n) but trivially
/// correct. Good for tiny sets, and as the oracle in differential tests and
/// benchmarks.
#[derive(Clone, Debug, Default)]
pub struct ScanSet {
    points: Vec<Point>,
}

impl ScanSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the stored points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}

impl PointSet for ScanSet {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn insert(&mut self, p: Point) -> Result<bool> {
        validate_point(p)?;
        if self.points.contains(&p) {
            return Ok(false);
        }
        self.points.push(p);
        Ok(true)
    }

    fn contains(&self, p: Point) -> Result<bool> {
        validate_point(p)?;
        Ok(self.points.contains(&p))
    }

    fn range(&self, rect: Rect) -> Result<Vec<Point>> {
        validate_rect(&rect)?;
        Ok(self
            .points
            .iter()
            .copied()
            .filter(|&p| rect_contains_closed(&rect, p))
            .collect())
    }

    fn nearest(&self, p: Point) -> Result<Option<Point>> {
        validate_point(p)?;
        let mut best: Option<(f64, Point)> = None;
        for &q in &self.points {
            let d = p.distance_squared(q);
            if best.is_none_or(|(best_d, _)| d < best_d) {
                best = Some((d, q));
            }
        }
        Ok(best.map(|(_, q)| q))
    }
}
