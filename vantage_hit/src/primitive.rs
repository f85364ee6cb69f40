// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The primitive shapes a scene element can carry.

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Line, Point, Rect, Shape};

use crate::HitTest;

/// Geometry of a single scene element, in world coordinates.
///
/// Adding a variant forces every `match` over primitives (hit testing and
/// bounds) to be revisited.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Circle (disk); a zero radius is allowed.
    Circle(Circle),
    /// Straight segment.
    Line(Line),
    /// Closed polygon through the given vertices. Fewer than three vertices never hit.
    Polygon(Vec<Point>),
    /// Arbitrary path. Hit tested by its bounding box only.
    Path(BezPath),
}

impl Primitive {
    /// Rectangle from its origin and size. Negative sizes are normalized.
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::Rect(Rect::from_origin_size((x, y), (w, h)))
    }

    /// Circle from its center and radius.
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::Circle(Circle::new((cx, cy), r))
    }

    /// Segment between two endpoints.
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Line(Line::new((x1, y1), (x2, y2)))
    }

    /// Polygon from its vertices, in order. The closing edge is implicit.
    pub fn polygon<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self::Polygon(points.into_iter().map(Into::into).collect())
    }

    /// Short lowercase name of the primitive kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rect",
            Self::Circle(_) => "circle",
            Self::Line(_) => "line",
            Self::Polygon(_) => "polygon",
            Self::Path(_) => "path",
        }
    }

    /// Axis-aligned bounds of the primitive.
    ///
    /// An empty polygon yields a zero-area box at the origin.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(rect) => rect.abs(),
            Self::Circle(circle) => circle.bounding_box(),
            Self::Line(line) => Rect::from_points(line.p0, line.p1),
            Self::Polygon(points) => polygon_bounds(points),
            Self::Path(path) => path.bounding_box(),
        }
    }

    /// Whether `pt` hits the primitive within `tolerance`.
    #[inline]
    pub fn hits(&self, pt: Point, tolerance: f64) -> bool {
        self.hit_test(pt, tolerance).is_some()
    }
}

fn polygon_bounds(points: &[Point]) -> Rect {
    let Some((first, rest)) = points.split_first() else {
        return Rect::ZERO;
    };
    rest.iter()
        .fold(Rect::from_points(*first, *first), |acc, p| {
            acc.union_pt(*p)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn rect_constructor_normalizes() {
        let r = Primitive::rect(10.0, 10.0, -4.0, -2.0);
        assert_eq!(r.bounds(), Rect::new(6.0, 8.0, 10.0, 10.0));
    }

    #[test]
    fn bounds_per_kind() {
        assert_eq!(
            Primitive::circle(5.0, 5.0, 2.0).bounds(),
            Rect::new(3.0, 3.0, 7.0, 7.0)
        );
        assert_eq!(
            Primitive::line(4.0, -1.0, -2.0, 3.0).bounds(),
            Rect::new(-2.0, -1.0, 4.0, 3.0)
        );
        assert_eq!(
            Primitive::polygon([(0.0, 5.0), (3.0, -2.0), (-1.0, 1.0)]).bounds(),
            Rect::new(-1.0, -2.0, 3.0, 5.0)
        );
    }

    #[test]
    fn degenerate_bounds() {
        assert_eq!(Primitive::Polygon(vec![]).bounds(), Rect::ZERO);
        let point = Primitive::circle(2.0, 3.0, 0.0).bounds();
        assert_eq!(point, Rect::new(2.0, 3.0, 2.0, 3.0));
        assert_eq!(point.area(), 0.0);
    }

    #[test]
    fn kind_names() {
        assert_eq!(Primitive::rect(0.0, 0.0, 1.0, 1.0).kind_name(), "rect");
        assert_eq!(Primitive::Path(BezPath::new()).kind_name(), "path");
    }
}
