// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid must answer exactly like a linear scan on randomized scenes.

use kurbo::{Point, Rect};
use vantage_hit::Primitive;
use vantage_index::backends::FlatVec;
use vantage_index::{Element, GridConfig, SpatialIndex};

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
        (v as f64) / ((1_u64 << 53) as f64)
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

fn random_primitive(rng: &mut Rng) -> Primitive {
    let x = rng.range(-500.0, 500.0);
    let y = rng.range(-500.0, 500.0);
    match rng.next_u64() % 5 {
        0 => Primitive::rect(x, y, rng.range(0.0, 80.0), rng.range(0.0, 80.0)),
        1 => Primitive::circle(x, y, rng.range(0.0, 40.0)),
        2 => Primitive::line(x, y, x + rng.range(-90.0, 90.0), y + rng.range(-90.0, 90.0)),
        3 => Primitive::polygon([
            (x, y),
            (x + rng.range(10.0, 60.0), y + rng.range(-20.0, 20.0)),
            (x + rng.range(-20.0, 20.0), y + rng.range(10.0, 60.0)),
        ]),
        // A large element, to exercise multi-cell bucketing.
        _ => Primitive::rect(x, y, rng.range(100.0, 600.0), rng.range(0.0, 30.0)),
    }
}

fn ids(found: Vec<&Element<u32>>) -> Vec<u32> {
    found.into_iter().map(Element::id).collect()
}

#[test]
fn grid_matches_flat_scan() {
    let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
    let elements: Vec<Element<u32>> = (0..400)
        .map(|id| Element::new(id, random_primitive(&mut rng)))
        .collect();

    let mut grid = SpatialIndex::new(GridConfig::for_elements(&elements));
    let mut flat = SpatialIndex::with_backend(FlatVec::default());
    grid.rebuild(elements.clone());
    flat.rebuild(elements);

    // Remove a third so removal bookkeeping is covered too.
    for id in (0..400).step_by(3) {
        assert_eq!(grid.remove(&id).is_some(), flat.remove(&id).is_some());
    }
    assert_eq!(grid.len(), flat.len());

    for _ in 0..500 {
        let pt = Point::new(rng.range(-600.0, 600.0), rng.range(-600.0, 600.0));
        let tol = rng.range(0.0, 6.0);
        assert_eq!(
            ids(grid.query_point(pt, tol)),
            ids(flat.query_point(pt, tol)),
            "point {pt:?} tolerance {tol}"
        );

        let rect = Rect::from_center_size(pt, (rng.range(0.0, 200.0), rng.range(0.0, 200.0)));
        assert_eq!(
            ids(grid.query(rect)),
            ids(flat.query(rect)),
            "rect {rect:?}"
        );
    }
}

#[test]
fn small_cells_match_flat_scan() {
    let mut rng = Rng::new(42);
    let mut elements: Vec<Element<u32>> = (0..150)
        .map(|id| Element::new(id, random_primitive(&mut rng)))
        .collect();
    elements.push(Element::new(
        1000,
        Primitive::rect(-400.0, -400.0, 800.0, 800.0),
    ));

    // Tiny cells push the big rectangles into the oversized list.
    let mut grid = SpatialIndex::new(GridConfig::with_cell_size(2.0));
    let mut flat = SpatialIndex::with_backend(FlatVec::default());
    grid.rebuild(elements.clone());
    flat.rebuild(elements);
    assert!(grid.backend().oversized_len() > 0);

    for _ in 0..200 {
        let pt = Point::new(rng.range(-600.0, 600.0), rng.range(-600.0, 600.0));
        assert_eq!(ids(grid.query_point(pt, 2.0)), ids(flat.query_point(pt, 2.0)));
    }
}
