// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
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
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A schematic-like scene: small pads, wires and outlines over `extent`².
fn gen_scene(count: usize, extent: f64) -> Vec<Element<u32>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let x = rng.next_f64() * extent;
        let y = rng.next_f64() * extent;
        let primitive = match i % 4 {
            0 => Primitive::rect(x, y, 12.0, 8.0),
            1 => Primitive::circle(x, y, 3.0),
            2 => Primitive::line(x, y, x + rng.next_f64() * 200.0, y),
            _ => Primitive::polygon([(x, y), (x + 20.0, y), (x + 10.0, y + 15.0)]),
        };
        out.push(Element::new(i as u32, primitive));
    }
    out
}

fn gen_probes(count: usize, extent: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    for &n in &[1_000usize, 10_000, 50_000] {
        let scene = gen_scene(n, 10_000.0);
        let config = GridConfig::for_elements(&scene);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("grid_n{n}"), |b| {
            b.iter_batched(
                || (SpatialIndex::new(config), scene.clone()),
                |(mut idx, scene)| {
                    idx.rebuild(scene);
                    black_box(idx.len());
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_function(format!("flatvec_n{n}"), |b| {
            b.iter_batched(
                || (SpatialIndex::with_backend(FlatVec::default()), scene.clone()),
                |(mut idx, scene)| {
                    idx.rebuild(scene);
                    black_box(idx.len());
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_query_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_point");
    let probes = gen_probes(256, 10_000.0);
    for &n in &[1_000usize, 10_000, 50_000] {
        let scene = gen_scene(n, 10_000.0);
        let grid = SpatialIndex::from_elements(scene.clone());
        let mut flat = SpatialIndex::with_backend(FlatVec::default());
        flat.rebuild(scene);

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("grid_n{n}"), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for &pt in &probes {
                    total += grid.query_point(pt, 4.0).len();
                }
                black_box(total);
            })
        });
        group.bench_function(format!("flatvec_n{n}"), |b| {
            b.iter(|| {
                let mut total = 0usize;
                for &pt in &probes {
                    total += flat.query_point(pt, 4.0).len();
                }
                black_box(total);
            })
        });
    }
    group.finish();
}

fn bench_query_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_rect");
    let scene = gen_scene(50_000, 10_000.0);
    let grid = SpatialIndex::from_elements(scene);
    for &side in &[100.0, 1_000.0, 20_000.0] {
        let query = Rect::new(2_000.0, 2_000.0, 2_000.0 + side, 2_000.0 + side);
        group.bench_function(format!("grid_side{side}"), |b| {
            b.iter(|| black_box(grid.query(query).len()))
        });
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    let scene = gen_scene(10_000, 10_000.0);
    group.bench_function("remove_reinsert_half", |b| {
        b.iter_batched(
            || SpatialIndex::from_elements(scene.clone()),
            |mut idx| {
                for id in (0..10_000u32).step_by(2) {
                    if let Some(e) = idx.remove(&id) {
                        idx.insert(e);
                    }
                }
                black_box(idx.len());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_rebuild,
    bench_query_point,
    bench_query_rect,
    bench_churn
);
criterion_main!(benches);
