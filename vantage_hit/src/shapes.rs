// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area predicates: rectangles, circles, polygons, and bounding boxes.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Circle, Line, Point, Rect};

use crate::segment::distance_to_segment;
use crate::{HitKind, HitScore, sanitize_tolerance};

/// Distance from `pt` to the closest point of `rect`; 0 inside.
fn distance_to_rect(pt: Point, rect: Rect) -> f64 {
    let dx = if pt.x < rect.x0 {
        rect.x0 - pt.x
    } else if pt.x > rect.x1 {
        pt.x - rect.x1
    } else {
        0.0
    };
    let dy = if pt.y < rect.y0 {
        rect.y0 - pt.y
    } else if pt.y > rect.y1 {
        pt.y - rect.y1
    } else {
        0.0
    };
    (dx * dx + dy * dy).sqrt()
}

/// Whether `pt` lies in `rect` grown by `tolerance` on every side, edges inclusive.
#[inline]
fn in_inflated(pt: Point, rect: Rect, tolerance: f64) -> bool {
    pt.x >= rect.x0 - tolerance
        && pt.x <= rect.x1 + tolerance
        && pt.y >= rect.y0 - tolerance
        && pt.y <= rect.y1 + tolerance
}

fn inflated_hit(pt: Point, rect: Rect, tolerance: f64, kind: HitKind) -> Option<HitScore> {
    let rect = rect.abs();
    if in_inflated(pt, rect, sanitize_tolerance(tolerance)) {
        Some(HitScore {
            distance: distance_to_rect(pt, rect),
            kind,
        })
    } else {
        None
    }
}

/// Rect predicate: hit within `[x0 - tol, x1 + tol] × [y0 - tol, y1 + tol]`.
///
/// Edges and corners are inclusive. The tolerance band is square, so a point
/// diagonally off a corner hits as long as it is within `tol` on each axis.
pub fn hit_rect(pt: Point, rect: Rect, tolerance: f64) -> Option<HitScore> {
    inflated_hit(pt, rect, tolerance, HitKind::Fill)
}

/// Coarse predicate for shapes tested only by their bounding box.
///
/// Same geometry as [`hit_rect`], but reported as [`HitKind::Bounds`].
pub fn hit_bounds(pt: Point, bounds: Rect, tolerance: f64) -> Option<HitScore> {
    inflated_hit(pt, bounds, tolerance, HitKind::Bounds)
}

/// Circle predicate: hit when the distance to the center is at most `radius + tolerance`.
///
/// The circle is treated as a filled disk. A zero radius makes it a point.
pub fn hit_circle(pt: Point, circle: Circle, tolerance: f64) -> Option<HitScore> {
    let dx = pt.x - circle.center.x;
    let dy = pt.y - circle.center.y;
    let dist = (dx * dx + dy * dy).sqrt();
    let radius = circle.radius;
    if dist <= radius + sanitize_tolerance(tolerance) {
        // Distance inside the circle is 0, outside is how far we exceeded the radius.
        let distance = if dist <= radius { 0.0 } else { dist - radius };
        Some(HitScore {
            distance,
            kind: HitKind::Fill,
        })
    } else {
        None
    }
}

/// Even-odd containment test by casting a ray towards +x.
///
/// An edge is counted when it straddles the ray's y half-open, i.e. one
/// endpoint is strictly above `pt.y` and the other is not. Consequently,
/// horizontal edges are never crossed, a point on a bottom horizontal edge
/// (largest y) reports outside, and a point on a top horizontal edge
/// (smallest y) reports inside. [`hit_polygon`] covers the boundary through its
/// edge-distance fallback, so this only matters to direct callers.
///
/// Returns `false` for fewer than three vertices.
pub fn polygon_contains(pt: Point, points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (points[i].x, points[i].y);
        let (xj, yj) = (points[j].x, points[j].y);
        if (yi > pt.y) != (yj > pt.y) && pt.x < (xj - xi) * (pt.y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Polygon predicate.
///
/// A point inside the polygon (even-odd rule) is a fill hit. Otherwise the
/// point is tested against each edge, including the implicit closing edge,
/// with the line predicate and the same tolerance, so clicks just outside the
/// outline still register as stroke hits.
///
/// Fewer than three vertices never hit.
pub fn hit_polygon(pt: Point, points: &[Point], tolerance: f64) -> Option<HitScore> {
    if points.len() < 3 {
        return None;
    }
    if polygon_contains(pt, points) {
        return Some(HitScore::filled());
    }

    let tolerance = sanitize_tolerance(tolerance);
    let mut best: Option<f64> = None;
    let mut prev = points[points.len() - 1];
    for &p in points {
        let dist = distance_to_segment(pt, Line::new(prev, p));
        if dist <= tolerance && best.is_none_or(|b| dist < b) {
            best = Some(dist);
        }
        prev = p;
    }
    best.map(|distance| HitScore {
        distance,
        kind: HitKind::Stroke,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn rect_interior_and_edges_hit_at_zero_tolerance() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        for pt in [
            Point::new(5.0, 5.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 3.0),
        ] {
            let score = hit_rect(pt, r, 0.0).expect("expected hit");
            assert_eq!(score.distance, 0.0);
        }
    }

    #[test]
    fn rect_outside_beyond_tolerance_misses() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(hit_rect(Point::new(11.0, 5.0), r, 0.0).is_none());
        assert!(hit_rect(Point::new(11.0, 5.0), r, 0.99).is_none());
        assert!(hit_rect(Point::new(5.0, -2.0), r, 1.5).is_none());
    }

    #[test]
    fn rect_hit_with_tolerance() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let score = hit_rect(Point::new(10.5, 5.0), r, 1.0).expect("expected tolerant hit");
        assert!((score.distance - 0.5).abs() < 1e-12);
        // Square tolerance band at the corner.
        assert!(hit_rect(Point::new(11.0, 11.0), r, 1.0).is_some());
    }

    #[test]
    fn circle_center_edge_and_outside() {
        let c = Circle::new((3.0, 4.0), 5.0);
        assert!(hit_circle(Point::new(3.0, 4.0), c, 0.0).is_some());
        assert!(hit_circle(Point::new(0.0, 0.0), c, 0.0).is_some());
        // Distance r + 0.2 with tolerance 0.1.
        assert!(hit_circle(Point::new(8.2, 4.0), c, 0.1).is_none());
        let score = hit_circle(Point::new(8.2, 4.0), c, 0.3).expect("tolerant hit");
        assert!((score.distance - 0.2).abs() < 1e-9);
    }

    #[test]
    fn zero_radius_circle() {
        let c = Circle::new((1.0, 1.0), 0.0);
        assert!(hit_circle(Point::new(1.0, 1.0), c, 0.0).is_some());
        assert!(hit_circle(Point::new(1.0, 1.5), c, 0.0).is_none());
        assert!(hit_circle(Point::new(1.0, 1.5), c, 0.5).is_some());
    }

    #[test]
    fn polygon_centroid_hits() {
        let hexagon: Vec<Point> = (0..6)
            .map(|i| {
                let a = f64::from(i) * core::f64::consts::PI / 3.0;
                Point::new(50.0 + 20.0 * a.cos(), -30.0 + 20.0 * a.sin())
            })
            .collect();
        let score = hit_polygon(Point::new(50.0, -30.0), &hexagon, 0.0).expect("centroid");
        assert_eq!(score.kind, HitKind::Fill);
    }

    #[test]
    fn polygon_far_outside_misses() {
        let sq = square();
        for tol in [0.0, 1.0, 50.0] {
            assert!(hit_polygon(Point::new(100.0, 100.0), &sq, tol).is_none());
        }
    }

    #[test]
    fn polygon_near_outline_is_stroke_hit() {
        let sq = square();
        let score = hit_polygon(Point::new(10.5, 5.0), &sq, 1.0).expect("near edge");
        assert_eq!(score.kind, HitKind::Stroke);
        assert!((score.distance - 0.5).abs() < 1e-12);
        // The closing edge (0,10) -> (0,0) is tested too.
        assert!(hit_polygon(Point::new(-0.5, 5.0), &sq, 1.0).is_some());
        assert!(hit_polygon(Point::new(10.5, 5.0), &sq, 0.25).is_none());
    }

    #[test]
    fn polygon_concave_notch_misses() {
        // U shape: the notch between the arms is outside.
        let u = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 7.0),
            Point::new(7.0, 7.0),
            Point::new(7.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(hit_polygon(Point::new(5.0, 3.0), &u, 0.0).is_none());
        assert!(hit_polygon(Point::new(1.5, 3.0), &u, 0.0).is_some());
        assert!(hit_polygon(Point::new(8.5, 3.0), &u, 0.0).is_some());
    }

    #[test]
    fn polygon_with_fewer_than_three_points_never_hits() {
        let two = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        assert!(hit_polygon(Point::new(5.0, 0.0), &two, 5.0).is_none());
        assert!(hit_polygon(Point::new(0.0, 0.0), &[], 5.0).is_none());
        assert!(!polygon_contains(Point::new(5.0, 0.0), &two));
    }

    #[test]
    fn horizontal_edge_convention() {
        let sq = square();
        // Top edge (smallest y) counts as inside, bottom edge (largest y) as outside.
        assert!(polygon_contains(Point::new(5.0, 0.0), &sq));
        assert!(!polygon_contains(Point::new(5.0, 10.0), &sq));
        // Left vertical edge is inside, right vertical edge is outside.
        assert!(polygon_contains(Point::new(0.0, 5.0), &sq));
        assert!(!polygon_contains(Point::new(10.0, 5.0), &sq));

        // The full predicate hits every boundary point through the edge fallback.
        for pt in [
            Point::new(5.0, 0.0),
            Point::new(5.0, 10.0),
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
        ] {
            assert!(hit_polygon(pt, &sq, 0.0).is_some(), "{pt:?}");
        }
    }

    #[test]
    fn bounds_hit_kind() {
        let b = Rect::new(-5.0, -5.0, 5.0, 5.0);
        let score = hit_bounds(Point::new(4.0, -4.0), b, 0.0).expect("inside bounds");
        assert_eq!(score.kind, HitKind::Bounds);
        assert!(hit_bounds(Point::new(6.0, 0.0), b, 0.5).is_none());
    }
}
