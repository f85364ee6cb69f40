// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer picking in a pannable, zoomable viewer.
//!
//! This example shows how to combine:
//! - `vantage_view` to fit the scene into a viewport and map pointer
//!   positions back to world space,
//! - `vantage_index` to find candidates and run exact hit tests,
//! - `vantage_hit` scores to report how each element was hit.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p vantage_demos --example pick_scene`

use kurbo::{Point, Rect, Vec2};
use log::info;
use vantage_hit::Primitive;
use vantage_index::{Element, SpatialIndex, content_bounds};
use vantage_view::{ViewTransform, ZoomLimits};

/// Pointer tolerance in screen pixels.
const PICK_RADIUS_PX: f64 = 4.0;

fn build_scene() -> Vec<Element<&'static str>> {
    vec![
        Element::new("board", Primitive::rect(0.0, 0.0, 400.0, 250.0)),
        Element::new(
            "chip",
            Primitive::polygon([(150.0, 80.0), (250.0, 80.0), (250.0, 170.0), (150.0, 170.0)]),
        ),
        Element::new("trace", Primitive::line(40.0, 125.0, 150.0, 125.0)),
        Element::new("via", Primitive::circle(40.0, 125.0, 6.0)),
        Element::new(
            "notch",
            Primitive::polygon([(300.0, 40.0), (360.0, 40.0), (330.0, 90.0)]),
        ),
    ]
}

fn pick(
    index: &SpatialIndex<&'static str>,
    view: &ViewTransform,
    pointer: Point,
) -> Option<&'static str> {
    let world = view.invert(pointer);
    let tolerance = PICK_RADIUS_PX / view.scale;
    for (element, score) in index.query_point_scored(world, tolerance) {
        info!(
            "  candidate {:>6} ({}) {:?} at {:.3}",
            element.id(),
            element.primitive().kind_name(),
            score.kind,
            score.distance
        );
    }
    index.topmost(world, tolerance).map(Element::id)
}

fn main() {
    env_logger::init();

    let scene = build_scene();
    let viewport = Rect::new(0.0, 0.0, 1280.0, 720.0);
    let Some(content) = content_bounds(&scene) else {
        return;
    };
    let limits = ZoomLimits::default();
    let mut view = ViewTransform::fit_to_view(content, viewport, 32.0);
    info!("fitted {content:?} into {viewport:?}: {view:?}");

    let index = SpatialIndex::from_elements(scene);

    let pointers = [
        view.apply(Point::new(200.0, 120.0)),
        view.apply(Point::new(95.0, 126.0)),
        view.apply(Point::new(42.0, 122.0)),
        view.apply(Point::new(330.0, 95.0)),
        Point::new(4.0, 4.0),
    ];
    for pointer in pointers {
        info!("pointer at {pointer:?}");
        println!("{pointer:?} -> {:?}", pick(&index, &view, pointer));
    }

    // Zoom in on the via, drag a little, then keep the board on screen.
    let via = view.apply(Point::new(40.0, 125.0));
    view = view.zoom_about(via, 8.0, limits).pan_by(Vec2::new(-5000.0, 0.0));
    view = view.clamp(content, viewport, limits);
    info!("after zoom and pan: {view:?}");
    println!(
        "visible world after zoom: {:?}",
        view.visible_world_rect(viewport)
    );
    let via = view.apply(Point::new(40.0, 125.0));
    println!("{via:?} -> {:?}", pick(&index, &view, via));
}
