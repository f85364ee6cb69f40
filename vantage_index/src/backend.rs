// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial partition implementations.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use vantage_hit::{HitScore, HitTest};

use crate::element::{Element, ElementId};
use crate::util::probe_rect;

/// Spatial backend abstraction used by [`SpatialIndex`][crate::SpatialIndex].
///
/// A backend owns the elements inserted into it and answers box queries.
/// Point picking is built on top of [`visit_rect`][Backend::visit_rect] by the
/// provided methods, so every backend gets the same exact hit semantics.
pub trait Backend<K: ElementId> {
    /// Insert an element. An element already stored under the same id is
    /// replaced and returned.
    fn insert(&mut self, element: Element<K>) -> Option<Element<K>>;

    /// Remove the element with this id. Unknown ids are a no-op.
    fn remove(&mut self, id: &K) -> Option<Element<K>>;

    /// Remove all elements.
    fn clear(&mut self);

    /// Number of stored elements.
    fn len(&self) -> usize;

    /// Look up an element by id.
    fn get(&self, id: &K) -> Option<&Element<K>>;

    /// Visit each element whose bounds intersect `rect` (edges inclusive),
    /// exactly once and in insertion order.
    fn visit_rect<'a, F: FnMut(&'a Element<K>)>(&'a self, rect: Rect, f: F)
    where
        K: 'a;

    /// Whether the backend holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether an element with this id is stored.
    fn contains(&self, id: &K) -> bool {
        self.get(id).is_some()
    }

    /// Elements whose bounds intersect `rect`, in insertion order.
    ///
    /// The default implementation collects [`visit_rect`][Backend::visit_rect].
    fn query(&self, rect: Rect) -> Vec<&Element<K>> {
        let mut out = Vec::new();
        self.visit_rect(rect, |e| out.push(e));
        out
    }

    /// Elements hit by `pt` within `tolerance`, with their scores, in insertion order.
    ///
    /// Candidates come from a box query over the square of half-side
    /// `tolerance` around `pt` and are then filtered by the exact predicate
    /// of their primitive.
    fn query_point_scored(&self, pt: Point, tolerance: f64) -> Vec<(&Element<K>, HitScore)> {
        let tolerance = tolerance.max(0.0);
        let mut out = Vec::new();
        self.visit_rect(probe_rect(pt.x, pt.y, tolerance), |e| {
            if let Some(score) = e.hit_test(pt, tolerance) {
                out.push((e, score));
            }
        });
        out
    }

    /// Elements hit by `pt` within `tolerance`, in insertion order.
    ///
    /// Callers that want topmost-wins picking should read from the end, or use
    /// [`topmost`][Backend::topmost].
    fn query_point(&self, pt: Point, tolerance: f64) -> Vec<&Element<K>> {
        self.query_point_scored(pt, tolerance)
            .into_iter()
            .map(|(e, _)| e)
            .collect()
    }

    /// The most recently inserted element hit by `pt`, if any.
    fn topmost(&self, pt: Point, tolerance: f64) -> Option<&Element<K>> {
        self.query_point_scored(pt, tolerance)
            .pop()
            .map(|(e, _)| e)
    }
}
