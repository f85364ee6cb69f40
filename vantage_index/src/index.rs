// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `SpatialIndex` API over a pluggable backend.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::marker::PhantomData;

use kurbo::{Point, Rect};
use log::debug;
use vantage_hit::HitScore;

use crate::backend::Backend;
use crate::backends::Grid;
use crate::config::GridConfig;
use crate::element::{Element, ElementId};

/// Spatial index over scene elements: box queries and exact point picking.
///
/// The index is an owned value with no interior mutability. It is not meant to
/// be mutated from several threads at once; wrap it in a lock in the embedding
/// application if it has to be shared.
pub struct SpatialIndex<K: ElementId, B: Backend<K> = Grid<K>> {
    backend: B,
    _id: PhantomData<K>,
}

impl<K: ElementId, B: Backend<K> + Debug> Debug for SpatialIndex<K, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("backend", &self.backend)
            .finish()
    }
}

impl<K: ElementId> SpatialIndex<K> {
    /// Create an empty grid-backed index.
    pub fn new(config: GridConfig) -> Self {
        Self::with_backend(Grid::new(config))
    }

    /// Build a grid-backed index sized for `elements` and insert them.
    ///
    /// The cell size and origin come from [`GridConfig::for_elements`]; an
    /// empty list falls back to [`GridConfig::DEFAULT_REGION`], so this never
    /// fails.
    pub fn from_elements(elements: impl IntoIterator<Item = Element<K>>) -> Self {
        let elements: Vec<_> = elements.into_iter().collect();
        let config = GridConfig::for_elements(&elements);
        debug!(
            "spatial index: sizing grid for {} elements, cell size {}",
            elements.len(),
            config.cell_size
        );
        let mut index = Self::new(config);
        index.rebuild(elements);
        index
    }
}

impl<K: ElementId> Default for SpatialIndex<K> {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl<K: ElementId, B: Backend<K>> SpatialIndex<K, B> {
    /// Create an empty index using an explicit backend instance.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            _id: PhantomData,
        }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Insert an element, returning the element it replaced if its id was
    /// already present.
    pub fn insert(&mut self, element: Element<K>) -> Option<Element<K>> {
        self.backend.insert(element)
    }

    /// Remove the element with this id. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &K) -> Option<Element<K>> {
        self.backend.remove(id)
    }

    /// Elements whose bounds intersect `rect`, in insertion order.
    pub fn query(&self, rect: Rect) -> Vec<&Element<K>> {
        self.backend.query(rect)
    }

    /// Elements whose geometry is hit by `pt` within `tolerance`, in
    /// insertion order.
    ///
    /// For topmost-wins picking iterate from the end, or use
    /// [`topmost`][Self::topmost].
    pub fn query_point(&self, pt: Point, tolerance: f64) -> Vec<&Element<K>> {
        self.backend.query_point(pt, tolerance)
    }

    /// Like [`query_point`][Self::query_point], with the hit score of each element.
    pub fn query_point_scored(&self, pt: Point, tolerance: f64) -> Vec<(&Element<K>, HitScore)> {
        self.backend.query_point_scored(pt, tolerance)
    }

    /// The most recently inserted element hit by `pt`, if any.
    pub fn topmost(&self, pt: Point, tolerance: f64) -> Option<&Element<K>> {
        self.backend.topmost(pt, tolerance)
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        debug!("spatial index: clearing {} elements", self.backend.len());
        self.backend.clear();
    }

    /// Replace the whole content with `elements`.
    ///
    /// This is the way to resync to a new scene; no diffing is attempted.
    pub fn rebuild(&mut self, elements: impl IntoIterator<Item = Element<K>>) {
        self.backend.clear();
        for element in elements {
            self.backend.insert(element);
        }
        debug!("spatial index: rebuilt with {} elements", self.backend.len());
    }

    /// Number of indexed elements.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Whether an element with this id is indexed.
    pub fn contains(&self, id: &K) -> bool {
        self.backend.contains(id)
    }

    /// Look up an element by id.
    pub fn get(&self, id: &K) -> Option<&Element<K>> {
        self.backend.get(id)
    }
}
