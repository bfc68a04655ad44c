// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The kd-tree: alternating-axis space partitioning with pruned queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::{Line, Point, Rect};

use crate::error::Result;
use crate::set::PointSet;
use crate::types::{
    Axis, UNIT_SQUARE, dist_sq_to_rect, rect_contains_closed, rects_intersect, split_region,
    split_segment, validate_point, validate_rect,
};

/// A 2D kd-tree over the unit square.
///
/// Points are routed by comparing one coordinate per level: x at the root,
/// alternating with depth. Each subtree is responsible for the axis-aligned
/// region implied by its ancestors' splits. Nodes do not store that region;
/// range and nearest-neighbor queries reconstruct it while descending,
/// starting from the unit square, and use it to prune whole subtrees.
///
/// Tree shape depends entirely on insertion order. No rebalancing is
/// performed, so a sorted insertion order degrades the height (and query
/// cost) from O(log n) toward O(n).
///
/// The query operations live on the [`PointSet`] trait, shared with the
/// linear-scan oracle [`ScanSet`](crate::ScanSet).
pub struct KdTree {
    root: Option<Box<Node>>,
    len: usize,
}

struct Node {
    point: Point,
    axis: Axis,
    /// Subtree of points with the smaller coordinate along `axis`.
    low: Option<Box<Node>>,
    /// Subtree of points with the larger or equal coordinate along `axis`.
    high: Option<Box<Node>>,
}

impl Node {
    fn new(point: Point, axis: Axis) -> Box<Self> {
        Box::new(Self {
            point,
            axis,
            low: None,
            high: None,
        })
    }
}

impl KdTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Build a tree by inserting every point in order.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`](crate::InvalidArgument) if any point is invalid.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Result<Self> {
        let mut tree = Self::new();
        for p in points {
            let _ = tree.insert(p)?;
        }
        Ok(tree)
    }

    /// Remove every point, dropping the whole subtree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Read-only pre-order traversal yielding each stored point with its
    /// splitting orientation and reconstructed region. This is everything a
    /// renderer needs; it cannot mutate the tree.
    #[must_use]
    pub fn splits(&self) -> Splits<'_> {
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, UNIT_SQUARE));
        }
        Splits { stack }
    }

    /// Iterate over the stored points (pre-order).
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.splits().map(|s| s.point)
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for KdTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl PointSet for KdTree {
    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, p: Point) -> Result<bool> {
        validate_point(p)?;
        let inserted = insert_link(&mut self.root, p, Axis::Vertical);
        if inserted {
            self.len += 1;
        }
        Ok(inserted)
    }

    fn contains(&self, p: Point) -> Result<bool> {
        validate_point(p)?;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            if node.point == p {
                return Ok(true);
            }
            cur = if node.axis.coord(p) < node.axis.coord(node.point) {
                node.low.as_deref()
            } else {
                node.high.as_deref()
            };
        }
        Ok(false)
    }

    fn range(&self, rect: Rect) -> Result<Vec<Point>> {
        validate_rect(&rect)?;
        let mut out = Vec::new();
        if let Some(root) = self.root.as_deref() {
            collect_in_range(root, UNIT_SQUARE, &rect, &mut out);
        }
        Ok(out)
    }

    fn nearest(&self, p: Point) -> Result<Option<Point>> {
        validate_point(p)?;
        let Some(root) = self.root.as_deref() else {
            return Ok(None);
        };
        let mut best = (f64::INFINITY, root.point);
        descend_nearest(root, UNIT_SQUARE, p, &mut best);
        Ok(Some(best.1))
    }
}

/// Descend from `link`, routing by each node's axis, and attach a new leaf
/// at the first empty link. Returns false without mutating if an equal
/// point is met on the way down (the routing is deterministic, so a
/// duplicate always lies on the descent path).
fn insert_link(link: &mut Option<Box<Node>>, p: Point, axis: Axis) -> bool {
    match link {
        None => {
            *link = Some(Node::new(p, axis));
            true
        }
        Some(node) => {
            if node.point == p {
                return false;
            }
            // Equal-on-axis coordinates route high.
            let child = if node.axis.coord(p) < node.axis.coord(node.point) {
                &mut node.low
            } else {
                &mut node.high
            };
            insert_link(child, p, node.axis.flip())
        }
    }
}

fn collect_in_range(node: &Node, region: Rect, query: &Rect, out: &mut Vec<Point>) {
    // A subtree whose region misses the query cannot contribute anything.
    if !rects_intersect(&region, query) {
        return;
    }
    if rect_contains_closed(query, node.point) {
        out.push(node.point);
    }
    let (low_region, high_region) = split_region(&region, node.axis, node.point);
    if let Some(low) = node.low.as_deref() {
        collect_in_range(low, low_region, query, out);
    }
    if let Some(high) = node.high.as_deref() {
        collect_in_range(high, high_region, query, out);
    }
}

fn descend_nearest(node: &Node, region: Rect, query: Point, best: &mut (f64, Point)) {
    // The region distance lower-bounds every point in the subtree.
    if dist_sq_to_rect(&region, query) >= best.0 {
        return;
    }
    let d = query.distance_squared(node.point);
    if d < best.0 {
        *best = (d, node.point);
    }
    let (low_region, high_region) = split_region(&region, node.axis, node.point);
    // Visiting the query's side first shrinks `best` before the far side's
    // pruning check runs.
    let low_side = node.axis.coord(query) < node.axis.coord(node.point);
    let ordered = if low_side {
        [
            (node.low.as_deref(), low_region),
            (node.high.as_deref(), high_region),
        ]
    } else {
        [
            (node.high.as_deref(), high_region),
            (node.low.as_deref(), low_region),
        ]
    };
    for (child, child_region) in ordered {
        if let Some(child) = child {
            descend_nearest(child, child_region, query, best);
        }
    }
}

/// One stored point together with its split geometry, as seen by a
/// read-only pre-order traversal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitNode {
    /// The stored point.
    pub point: Point,
    /// Which coordinate this node compares by.
    pub axis: Axis,
    /// The region this node's subtree is responsible for.
    pub region: Rect,
}

impl SplitNode {
    /// The degenerate splitting segment through the point, spanning the
    /// region along the node's axis. This is the line a renderer draws.
    #[must_use]
    pub fn segment(&self) -> Line {
        split_segment(&self.region, self.axis, self.point)
    }
}

/// Pre-order iterator over [`SplitNode`]s. Created by [`KdTree::splits`].
pub struct Splits<'a> {
    stack: Vec<(&'a Node, Rect)>,
}

impl Iterator for Splits<'_> {
    type Item = SplitNode;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, region) = self.stack.pop()?;
        let (low_region, high_region) = split_region(&region, node.axis, node.point);
        if let Some(high) = node.high.as_deref() {
            self.stack.push((high, high_region));
        }
        if let Some(low) = node.low.as_deref() {
            self.stack.push((low, low_region));
        }
        Some(SplitNode {
            point: node.point,
            axis: node.axis,
            region,
        })
    }
}

impl core::fmt::Debug for Splits<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Splits")
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}
