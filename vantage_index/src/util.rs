// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Whether two normalized boxes overlap, edges inclusive.
///
/// Boxes that merely share an edge or a corner overlap, and a zero-area box
/// overlaps anything that contains it.
#[inline]
pub(crate) fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

/// Square box of half-side `radius` around `(x, y)`.
#[inline]
pub(crate) fn probe_rect(x: f64, y: f64, radius: f64) -> Rect {
    Rect::new(x - radius, y - radius, x + radius, y + radius)
}
