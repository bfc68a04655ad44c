// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kd-tree basics.
//!
//! Insert a few points, run a range query and a nearest-neighbor query.
//!
//! Run:
//! - `cargo run -p quadrille_demos --example kdtree_basics`

use kurbo::{Point, Rect};
use quadrille_kdtree::{KdTree, PointSet};

fn main() {
    let mut tree = KdTree::new();
    for p in [
        Point::new(0.5, 0.5),
        Point::new(0.2, 0.8),
        Point::new(0.8, 0.2),
        Point::new(0.4, 0.1),
        Point::new(0.9, 0.6),
    ] {
        tree.insert(p).expect("points are inside the unit square");
    }
    println!("stored {} points", tree.len());

    let rect = Rect::new(0.0, 0.0, 0.5, 0.7);
    let hits = tree.range(rect).expect("rect is well-formed");
    println!("points in {rect:?}: {hits:?}");

    let query = Point::new(0.9, 0.1);
    let near = tree.nearest(query).expect("query point is valid");
    println!("nearest to {query:?}: {near:?}");
    assert_eq!(near, Some(Point::new(0.8, 0.2)), "nearest should be the low-right point");
}
