// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only split traversal.
//!
//! Walk the tree the way a renderer would: each stored point together with
//! its splitting orientation, its region, and the segment to draw.
//!
//! Run:
//! - `cargo run -p quadrille_demos --example kdtree_splits`

use kurbo::Point;
use quadrille_kdtree::{Axis, KdTree, PointSet};

fn main() {
    let mut tree = KdTree::new();
    for p in [
        Point::new(0.7, 0.2),
        Point::new(0.5, 0.4),
        Point::new(0.2, 0.3),
        Point::new(0.4, 0.7),
        Point::new(0.9, 0.6),
    ] {
        tree.insert(p).expect("points are inside the unit square");
    }

    for split in tree.splits() {
        let orientation = match split.axis {
            Axis::Vertical => "vertical",
            Axis::Horizontal => "horizontal",
        };
        println!(
            "point ({:.2}, {:.2})  {orientation:<10}  region {:?}  segment {:?}",
            split.point.x,
            split.point.y,
            split.region,
            split.segment(),
        );
    }
}
