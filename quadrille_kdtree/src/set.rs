// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four-operation point-set contract.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::error::Result;

/// Contract shared by the kd-tree and the brute-force scan.
///
/// Both implementations answer the same queries with identical semantics,
/// which is what makes differential testing between them meaningful. The
/// only permitted divergence is nearest-neighbor tie-breaking: when several
/// stored points are equidistant from the query, each implementation may
/// return any one of them.
pub trait PointSet {
    /// Number of distinct points stored.
    fn len(&self) -> usize;

    /// Whether the set stores no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add `p` to the set. Returns `Ok(true)` if the point was new and
    /// `Ok(false)` if an exactly equal point was already present, in which
    /// case the call is a no-op.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`](crate::InvalidArgument) if `p` is not a finite
    /// point inside the unit square. The set is unchanged on error.
    fn insert(&mut self, p: Point) -> Result<bool>;

    /// Whether a point with exactly equal coordinates is stored.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`](crate::InvalidArgument) if `p` is invalid.
    fn contains(&self, p: Point) -> Result<bool>;

    /// All stored points inside the closed rectangle `rect` (boundary
    /// inclusive), in no particular order and without duplicates.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`](crate::InvalidArgument) if `rect` is non-finite
    /// or inverted.
    fn range(&self, rect: Rect) -> Result<Vec<Point>>;

    /// A stored point with minimum squared Euclidean distance to `p`, or
    /// `None` if the set is empty.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`](crate::InvalidArgument) if `p` is invalid.
    fn nearest(&self, p: Point) -> Result<Option<Point>>;
}
