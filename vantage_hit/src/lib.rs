// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact point hit testing for 2D scene primitives.
//!
//! This crate answers the narrow-phase question "does this world-space point
//! hit this primitive?", built on top of [`kurbo`]. It is decoupled from any
//! spatial index; `vantage_index` uses it after a cheap bounding-box cull.
//!
//! # Typical usage
//!
//! - Cull candidates with a broad-phase index.
//! - Convert the pointer position into world space.
//! - Call [`HitTest::hit_test`] (or [`Primitive::hits`]) with a tolerance in
//!   world units.
//! - Use the returned [`HitScore`] for tie-breaking between several hits.
//!
//! # Primitives and predicates
//!
//! | Primitive | Hit when |
//! |-----------|----------|
//! | [`Primitive::Rect`] | the point lies in the rect grown by the tolerance (edges inclusive) |
//! | [`Primitive::Circle`] | distance to the center is at most `radius + tolerance` |
//! | [`Primitive::Line`] | distance to the segment is at most the tolerance |
//! | [`Primitive::Polygon`] | the point is inside (even-odd), or within the tolerance of an edge |
//! | [`Primitive::Path`] | the point lies in the path's bounding box grown by the tolerance |
//!
//! Paths are deliberately tested against their bounds only. True path
//! intersection is not attempted, so a click in the hollow of a curved path
//! still counts as a hit.
//!
//! Each predicate is also available as a free function ([`hit_rect`],
//! [`hit_circle`], [`hit_line`], [`hit_polygon`], [`hit_bounds`]) so it can be
//! used and tested on its own.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use vantage_hit::{HitKind, HitTest, Primitive};
//!
//! let line = Primitive::line(0.0, 0.0, 10.0, 0.0);
//! let score = line
//!     .hit_test(Point::new(5.0, 1.5), 2.0)
//!     .expect("within tolerance");
//! assert_eq!(score.kind, HitKind::Stroke);
//! assert!((score.distance - 1.5).abs() < 1e-12);
//!
//! let square = Primitive::polygon([(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
//! assert!(square.hits(Point::new(2.0, 2.0), 0.0));
//! assert!(!square.hits(Point::new(9.0, 9.0), 1.0));
//! ```
//!
//! Tolerances are inclusive radii; negative tolerances are treated as zero.
//! The predicates are plain math: non-finite input returns `None` or a
//! degenerate result and never panics.

#![no_std]

extern crate alloc;

use core::cmp::Ordering;

use kurbo::Point;

mod primitive;
mod segment;
mod shapes;

pub use primitive::Primitive;
pub use segment::{distance_to_segment, hit_line};
pub use shapes::{hit_bounds, hit_circle, hit_polygon, hit_rect, polygon_contains};

/// Which part of a primitive was hit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HitKind {
    /// Hit the interior of a filled shape (or within tolerance of it).
    Fill,
    /// Hit near a line or polygon outline.
    Stroke,
    /// Hit the bounding box of a shape that is only tested coarsely.
    Bounds,
}

/// Score returned from a hit test.
///
/// Lower distance is considered a better (closer) hit for tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Distance from the query point to the hit geometry; 0 for interior hits.
    pub distance: f64,
    /// Classification of what was hit.
    pub kind: HitKind,
}

impl HitScore {
    /// Convenience constructor for an interior hit at distance 0.
    pub const fn filled() -> Self {
        Self {
            distance: 0.0,
            kind: HitKind::Fill,
        }
    }

    /// Compare two scores, preferring smaller distance; ties keep original order.
    pub fn cmp_distance(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
    }
}

/// Point hit testing in world coordinates.
///
/// Implementors should treat `tolerance` as an inclusive radius and clamp
/// negative values to zero.
pub trait HitTest {
    /// Test `pt` against the shape, growing it by `tolerance`.
    ///
    /// Returns `Some(HitScore)` when the point is considered a hit.
    fn hit_test(&self, pt: Point, tolerance: f64) -> Option<HitScore>;
}

impl HitTest for Primitive {
    fn hit_test(&self, pt: Point, tolerance: f64) -> Option<HitScore> {
        match self {
            Self::Rect(rect) => hit_rect(pt, *rect, tolerance),
            Self::Circle(circle) => hit_circle(pt, *circle, tolerance),
            Self::Line(line) => hit_line(pt, *line, tolerance),
            Self::Polygon(points) => hit_polygon(pt, points, tolerance),
            Self::Path(_) => hit_bounds(pt, self.bounds(), tolerance),
        }
    }
}

#[inline]
pub(crate) fn sanitize_tolerance(tolerance: f64) -> f64 {
    // `max` also maps NaN to 0.
    tolerance.max(0.0)
}
