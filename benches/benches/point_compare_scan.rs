// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compare the kd-tree against the linear scan on identical point sets:
//! build cost, range queries, and nearest-neighbor queries.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use quadrille_kdtree::{KdTree, PointSet, ScanSet};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(Point::new(rng.next_f64(), rng.next_f64()));
    }
    out
}

fn gen_rects(count: usize, side: f64, seed: u64) -> Vec<Rect> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x0 = rng.next_f64() * (1.0 - side);
        let y0 = rng.next_f64() * (1.0 - side);
        out.push(Rect::new(x0, y0, x0 + side, y0 + side));
    }
    out
}

fn build_tree(points: &[Point]) -> KdTree {
    let mut tree = KdTree::new();
    for &p in points {
        let _ = tree.insert(p).unwrap();
    }
    tree
}

fn build_scan(points: &[Point]) -> ScanSet {
    let mut scan = ScanSet::new();
    for &p in points {
        let _ = scan.insert(p).unwrap();
    }
    scan
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000_usize, 10_000] {
        let points = gen_points(n, 0xCAFE_F00D_DEAD_BEEF);
        group.bench_function(format!("kdtree/{n}"), |b| {
            b.iter(|| build_tree(black_box(&points)));
        });
        group.bench_function(format!("scan/{n}"), |b| {
            b.iter(|| build_scan(black_box(&points)));
        });
    }
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    for &n in &[1_000_usize, 10_000] {
        let points = gen_points(n, 0xBADC_F00D_1234_5678);
        let tree = build_tree(&points);
        let scan = build_scan(&points);
        let rects = gen_rects(64, 0.05, 0x1357_9BDF_2468_ACE0);
        group.bench_function(format!("kdtree/{n}"), |b| {
            b.iter(|| {
                for rect in &rects {
                    let _ = black_box(tree.range(*rect).unwrap());
                }
            });
        });
        group.bench_function(format!("scan/{n}"), |b| {
            b.iter(|| {
                for rect in &rects {
                    let _ = black_box(scan.range(*rect).unwrap());
                }
            });
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    for &n in &[1_000_usize, 10_000] {
        let points = gen_points(n, 0xC1A5_7E55_9999_ABCD);
        let tree = build_tree(&points);
        let scan = build_scan(&points);
        let queries = gen_points(64, 0xFEED_FACE_0123_4567);
        group.bench_function(format!("kdtree/{n}"), |b| {
            b.iter(|| {
                for &q in &queries {
                    let _ = black_box(tree.nearest(q).unwrap());
                }
            });
        });
        group.bench_function(format!("scan/{n}"), |b| {
            b.iter(|| {
                for &q in &queries {
                    let _ = black_box(scan.nearest(q).unwrap());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_range, bench_nearest);
criterion_main!(benches);
