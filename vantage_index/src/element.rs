// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indexed scene elements.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Rect};
use vantage_hit::{HitScore, HitTest, Primitive};

/// Requirements on caller-assigned element identifiers.
///
/// Implemented for every `Copy + Eq + Hash + Debug` type, e.g. integers or
/// `&'static str`.
pub trait ElementId: Copy + Eq + Hash + Debug {}

impl<K: Copy + Eq + Hash + Debug> ElementId for K {}

/// A primitive together with its identity and cached bounds.
///
/// The bounds are computed once at construction and always match the
/// primitive. Elements are immutable: to change geometry, remove the element
/// and insert a new one with the same id.
#[derive(Clone, Debug, PartialEq)]
pub struct Element<K> {
    id: K,
    primitive: Primitive,
    bounds: Rect,
}

impl<K> Element<K> {
    /// Create an element, computing its axis-aligned bounds.
    pub fn new(id: K, primitive: Primitive) -> Self {
        let bounds = primitive.bounds();
        Self {
            id,
            primitive,
            bounds,
        }
    }

    /// The element's geometry.
    #[inline]
    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    /// Axis-aligned bounds of the primitive.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Split the element back into its id and primitive.
    pub fn into_parts(self) -> (K, Primitive) {
        (self.id, self.primitive)
    }
}

impl<K: Copy> Element<K> {
    /// The caller-assigned id.
    #[inline]
    pub fn id(&self) -> K {
        self.id
    }
}

impl<K> HitTest for Element<K> {
    fn hit_test(&self, pt: Point, tolerance: f64) -> Option<HitScore> {
        self.primitive.hit_test(pt, tolerance)
    }
}

/// Union of the bounds of `elements`, or `None` when there are none.
pub fn content_bounds<'a, K: 'a>(
    elements: impl IntoIterator<Item = &'a Element<K>>,
) -> Option<Rect> {
    elements
        .into_iter()
        .map(Element::bounds)
        .reduce(|acc, b| acc.union(b))
}
