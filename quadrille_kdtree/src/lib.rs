// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrille kd-tree: a 2D point set over the unit square.
//!
//! - Insert points with finite coordinates in `[0, 1] × [0, 1]`.
//! - Ask for membership, for all points inside a closed axis-aligned
//!   rectangle, or for the nearest stored point to a query point.
//! - Range and nearest-neighbor queries prune whole subtrees using the
//!   region each subtree is responsible for, reconstructed on the fly from
//!   the ancestor splits.
//!
//! The same four-operation contract, [`PointSet`], is implemented twice:
//! by [`KdTree`], the space-partitioning tree, and by [`ScanSet`], a
//! brute-force linear scan used as the reference oracle in differential
//! tests and benchmarks.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use quadrille_kdtree::{KdTree, PointSet};
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.5, 0.5))?;
//! tree.insert(Point::new(0.2, 0.8))?;
//! tree.insert(Point::new(0.8, 0.2))?;
//! assert_eq!(tree.len(), 3);
//!
//! // Closed rectangle query: boundaries count as inside.
//! let hits = tree.range(Rect::new(0.0, 0.7, 0.3, 1.0))?;
//! assert_eq!(hits, [Point::new(0.2, 0.8)]);
//!
//! let near = tree.nearest(Point::new(0.9, 0.1))?;
//! assert_eq!(near, Some(Point::new(0.8, 0.2)));
//! # Ok::<(), quadrille_kdtree::InvalidArgument>(())
//! ```
//!
//! ## Float semantics
//!
//! Coordinates are validated on the way in: NaN, infinite, and
//! out-of-square values are rejected with [`InvalidArgument`], so the
//! structure itself never has to reason about them.
//!
//! ## Concurrency
//!
//! Both structures are plain owned data with no interior mutability or
//! global state. Share them across threads only behind external
//! synchronization.

#![no_std]

extern crate alloc;

pub mod error;
pub mod scan;
pub mod set;
pub mod tree;
pub mod types;

pub use error::{InvalidArgument, Result};
pub use scan::ScanSet;
pub use set::PointSet;
pub use tree::{KdTree, SplitNode, Splits};
pub use types::{Axis, UNIT_SQUARE};

// Geometry vocabulary used throughout the public API.
pub use kurbo::{Line, Point, Rect};
