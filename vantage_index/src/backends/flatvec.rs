// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Rect;

use crate::backend::Backend;
use crate::element::{Element, ElementId};
use crate::util::overlaps;

/// Flat vector backend with linear scans.
///
/// Elements are kept in insertion order, so queries need no sorting.
#[derive(Clone)]
pub struct FlatVec<K> {
    elements: Vec<Element<K>>,
}

impl<K> Default for FlatVec<K> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<K: ElementId> Debug for FlatVec<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("len", &self.elements.len())
            .finish_non_exhaustive()
    }
}

impl<K: ElementId> FlatVec<K> {
    fn position(&self, id: &K) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == *id)
    }
}

impl<K: ElementId> Backend<K> for FlatVec<K> {
    fn insert(&mut self, element: Element<K>) -> Option<Element<K>> {
        let replaced = self.remove(&element.id());
        self.elements.push(element);
        replaced
    }

    fn remove(&mut self, id: &K) -> Option<Element<K>> {
        let pos = self.position(id)?;
        Some(self.elements.remove(pos))
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn get(&self, id: &K) -> Option<&Element<K>> {
        self.elements.iter().find(|e| e.id() == *id)
    }

    fn visit_rect<'a, F: FnMut(&'a Element<K>)>(&'a self, rect: Rect, mut f: F)
    where
        K: 'a,
    {
        let rect = rect.abs();
        for e in &self.elements {
            if overlaps(&e.bounds(), &rect) {
                f(e);
            }
        }
    }
}
