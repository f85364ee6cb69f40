// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-to-segment distance and the line predicate built on it.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point};

use crate::{HitKind, HitScore, sanitize_tolerance};

/// Distance from `pt` to the closed segment `line`.
///
/// The projection of `pt` onto the segment is clamped to the endpoints, so
/// points beyond either end measure to that endpoint. A zero-length segment
/// degenerates to the distance to its single point.
pub fn distance_to_segment(pt: Point, line: Line) -> f64 {
    let p0 = line.p0;
    let p1 = line.p1;
    let vx = p1.x - p0.x;
    let vy = p1.y - p0.y;
    let wx = pt.x - p0.x;
    let wy = pt.y - p0.y;
    let len2 = vx * vx + vy * vy;
    let t = if len2 > 0.0 {
        (wx * vx + wy * vy) / len2
    } else {
        0.0
    };
    let t = t.clamp(0.0, 1.0);
    let dx = pt.x - (p0.x + t * vx);
    let dy = pt.y - (p0.y + t * vy);
    (dx * dx + dy * dy).sqrt()
}

/// Line predicate: hit when `pt` is within `tolerance` of the segment.
///
/// Both endpoints always hit, even at zero tolerance.
pub fn hit_line(pt: Point, line: Line, tolerance: f64) -> Option<HitScore> {
    let dist = distance_to_segment(pt, line);
    if dist <= sanitize_tolerance(tolerance) {
        Some(HitScore {
            distance: dist,
            kind: HitKind::Stroke,
        })
    } else {
        None
    }
}
