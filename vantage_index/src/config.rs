// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid configuration and the default cell-size heuristic.

use kurbo::{Point, Rect};

use crate::element::{Element, content_bounds};

/// Cell size and origin of a uniform grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Side length of each square cell, in world units. Must be strictly positive.
    pub cell_size: f64,
    /// World point at which cell `(0, 0)` starts.
    pub origin: Point,
}

impl GridConfig {
    /// Smallest cell size picked by [`for_content`][Self::for_content].
    pub const MIN_CELL_SIZE: f64 = 50.0;

    /// Number of cells the shorter content axis is divided into by
    /// [`for_content`][Self::for_content].
    pub const CELLS_ACROSS: f64 = 20.0;

    /// Region assumed when there is no content to size the grid from.
    pub const DEFAULT_REGION: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

    /// Create a configuration from an explicit cell size and origin.
    pub const fn new(cell_size: f64, origin: Point) -> Self {
        Self { cell_size, origin }
    }

    /// Create a configuration with the given cell size and origin at `(0, 0)`.
    pub const fn with_cell_size(cell_size: f64) -> Self {
        Self::new(cell_size, Point::ZERO)
    }

    /// Size the grid for content spanning `bounds`.
    ///
    /// The cell size is `max(50, min(width, height) / 20)` and the origin is
    /// the top-left corner of `bounds`.
    pub fn for_content(bounds: Rect) -> Self {
        let bounds = bounds.abs();
        let cell_size =
            (bounds.width().min(bounds.height()) / Self::CELLS_ACROSS).max(Self::MIN_CELL_SIZE);
        Self::new(cell_size, bounds.origin())
    }

    /// Size the grid for an initial set of elements, falling back to
    /// [`DEFAULT_REGION`][Self::DEFAULT_REGION] when there are none.
    pub fn for_elements<'a, K: 'a>(elements: impl IntoIterator<Item = &'a Element<K>>) -> Self {
        Self::for_content(content_bounds(elements).unwrap_or(Self::DEFAULT_REGION))
    }

    /// Replace an unusable cell size or origin with defaults.
    pub(crate) fn sanitized(self) -> Self {
        let cell_size_ok = self.cell_size.is_finite() && self.cell_size > 0.0;
        debug_assert!(cell_size_ok, "grid cell_size must be finite and strictly positive");
        let origin_ok = self.origin.x.is_finite() && self.origin.y.is_finite();
        Self {
            cell_size: if cell_size_ok {
                self.cell_size
            } else {
                Self::MIN_CELL_SIZE
            },
            origin: if origin_ok { self.origin } else { Point::ZERO },
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::for_content(Self::DEFAULT_REGION)
    }
}
