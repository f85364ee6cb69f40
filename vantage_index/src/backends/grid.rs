// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend for scene elements.
//!
//! This backend buckets elements into fixed-size square cells and answers
//! queries by touching only the cells overlapping the query box. An element is
//! added to every cell its bounds cover, so elements straddling cell borders
//! are never missed; queries deduplicate the repeated entries.
//!
//! It is intended for workloads with:
//! - moderately uniform spatial density (typical vector drawings),
//! - dynamic inserts and removals, and
//! - query boxes that are small compared to the full content extent.
//!
//! The worst case (every element in one cell) degrades to a linear scan.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::{HashMap, HashSet};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;
use log::trace;
use smallvec::SmallVec;

use crate::backend::Backend;
use crate::config::GridConfig;
use crate::element::{Element, ElementId};
use crate::util::overlaps;

/// Largest number of cells a single element is bucketed into.
///
/// Elements with larger bounds are kept in a side list that every query
/// scans, so an enormous element cannot flood the grid with buckets.
pub const MAX_CELLS_PER_ELEMENT: u128 = 4096;

type CellKey = (i64, i64);

/// Map a world coordinate to a cell coordinate along one axis.
///
/// Rounds towards -∞, so negative coordinates land in negative cells.
/// Results outside the `i64` range saturate, and NaN maps to cell 0.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Float-to-int casts saturate, which is the intended clamping for far-away coordinates."
)]
#[inline]
pub fn cell_coord(value: f64, origin: f64, cell_size: f64) -> i64 {
    debug_assert!(cell_size > 0.0, "grid cell_size must be strictly positive");
    ((value - origin) / cell_size).floor() as i64
}

/// Inclusive rectangle of cell coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct CellRange {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl CellRange {
    fn cell_count(&self) -> u128 {
        let w = (i128::from(self.x1) - i128::from(self.x0) + 1).unsigned_abs();
        let h = (i128::from(self.y1) - i128::from(self.y0) + 1).unsigned_abs();
        w.saturating_mul(h)
    }

    fn contains(&self, (ix, iy): CellKey) -> bool {
        self.x0 <= ix && ix <= self.x1 && self.y0 <= iy && iy <= self.y1
    }

    fn cells(self) -> impl Iterator<Item = CellKey> {
        (self.x0..=self.x1).flat_map(move |ix| (self.y0..=self.y1).map(move |iy| (ix, iy)))
    }
}

/// Uniform grid backend with fixed cell size.
///
/// Cell coordinates are unbounded signed integers, so negative and very
/// large world coordinates are handled like any others.
pub struct Grid<K: ElementId> {
    config: GridConfig,
    cells: HashMap<CellKey, Cell>,
    slots: Vec<Option<SlotEntry<K>>>,
    ids: HashMap<K, usize>,
    free_list: Vec<usize>,
    oversized: Vec<usize>,
    next_seq: u64,
}

#[derive(Clone, Debug)]
struct SlotEntry<K> {
    element: Element<K>,
    // Insertion sequence number, used to report results in insertion order.
    seq: u64,
    // Cells containing this element; `None` when it lives in `oversized`.
    cells: Option<CellRange>,
}

#[derive(Default)]
struct Cell {
    slots: SmallVec<[usize; 8]>,
}

impl<K: ElementId> Debug for Grid<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Grid")
            .field("cell_size", &self.config.cell_size)
            .field("origin", &self.config.origin)
            .field("total_slots", &self.slots.len())
            .field("live_slots", &self.ids.len())
            .field("cells", &self.cells.len())
            .field("oversized", &self.oversized.len())
            .finish_non_exhaustive()
    }
}

impl<K: ElementId> Default for Grid<K> {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl<K: ElementId> Grid<K> {
    /// Create an empty grid.
    ///
    /// A non-finite or non-positive cell size is a caller error; debug builds
    /// assert, release builds fall back to [`GridConfig::MIN_CELL_SIZE`].
    pub fn new(config: GridConfig) -> Self {
        Self {
            config: config.sanitized(),
            cells: HashMap::new(),
            slots: Vec::new(),
            ids: HashMap::new(),
            free_list: Vec::new(),
            oversized: Vec::new(),
            next_seq: 0,
        }
    }

    /// The configuration this grid was built with.
    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Number of non-empty cell buckets.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Number of elements too large to bucket, scanned by every query.
    pub fn oversized_len(&self) -> usize {
        self.oversized.len()
    }

    fn cell_range(&self, rect: &Rect) -> CellRange {
        let GridConfig { cell_size, origin } = self.config;
        CellRange {
            x0: cell_coord(rect.x0, origin.x, cell_size),
            y0: cell_coord(rect.y0, origin.y, cell_size),
            x1: cell_coord(rect.x1, origin.x, cell_size),
            y1: cell_coord(rect.y1, origin.y, cell_size),
        }
    }

    fn slot_entry(&self, slot: usize) -> Option<&SlotEntry<K>> {
        self.slots.get(slot)?.as_ref()
    }

    fn alloc_slot(&mut self) -> usize {
        if let Some(slot) = self.free_list.pop() {
            slot
        } else {
            self.slots.push(None);
            self.slots.len() - 1
        }
    }

    fn remove_from_cells(&mut self, slot: usize, range: CellRange) {
        for key in range.cells() {
            let cell = self.cells.get_mut(&key);
            debug_assert!(
                cell.is_some(),
                "grid invariant violated: missing cell while removing slot"
            );
            let Some(cell) = cell else {
                continue;
            };
            if let Some(pos) = cell.slots.iter().position(|&s| s == slot) {
                cell.slots.swap_remove(pos);
            }
            if cell.slots.is_empty() {
                // Dropping empty cells keeps the map compact for sparse grids.
                self.cells.remove(&key);
            }
        }
    }
}

impl<K: ElementId> Backend<K> for Grid<K> {
    fn insert(&mut self, element: Element<K>) -> Option<Element<K>> {
        let id = element.id();
        let replaced = self.remove(&id);
        if replaced.is_some() {
            trace!("grid: replacing element {id:?}");
        }

        let slot = self.alloc_slot();
        let range = self.cell_range(&element.bounds());
        let cells = if range.cell_count() <= MAX_CELLS_PER_ELEMENT {
            for key in range.cells() {
                self.cells.entry(key).or_default().slots.push(slot);
            }
            Some(range)
        } else {
            trace!(
                "grid: element {id:?} spans {} cells, tracking it as oversized",
                range.cell_count()
            );
            self.oversized.push(slot);
            None
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots[slot] = Some(SlotEntry {
            element,
            seq,
            cells,
        });
        self.ids.insert(id, slot);
        replaced
    }

    fn remove(&mut self, id: &K) -> Option<Element<K>> {
        let slot = self.ids.remove(id)?;
        let entry = self.slots.get_mut(slot)?.take()?;
        match entry.cells {
            Some(range) => self.remove_from_cells(slot, range),
            None => self.oversized.retain(|&s| s != slot),
        }
        self.free_list.push(slot);
        Some(entry.element)
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.slots.clear();
        self.ids.clear();
        self.free_list.clear();
        self.oversized.clear();
    }

    fn len(&self) -> usize {
        self.ids.len()
    }

    fn get(&self, id: &K) -> Option<&Element<K>> {
        let slot = *self.ids.get(id)?;
        self.slot_entry(slot).map(|e| &e.element)
    }

    fn visit_rect<'a, F: FnMut(&'a Element<K>)>(&'a self, rect: Rect, mut f: F)
    where
        K: 'a,
    {
        if self.ids.is_empty() {
            return;
        }
        let rect = rect.abs();
        let range = self.cell_range(&rect);

        // Slots map one-to-one to ids, so deduplicating slots deduplicates ids.
        let mut seen: HashSet<usize> = HashSet::new();
        let mut candidates: Vec<usize> = Vec::new();

        if range.cell_count() <= self.cells.len() as u128 {
            for key in range.cells() {
                if let Some(cell) = self.cells.get(&key) {
                    for &slot in &cell.slots {
                        if seen.insert(slot) {
                            candidates.push(slot);
                        }
                    }
                }
            }
        } else {
            // The query covers more cells than are occupied: walk the occupied ones.
            for (key, cell) in &self.cells {
                if !range.contains(*key) {
                    continue;
                }
                for &slot in &cell.slots {
                    if seen.insert(slot) {
                        candidates.push(slot);
                    }
                }
            }
        }
        candidates.extend(self.oversized.iter().copied());

        candidates
            .sort_unstable_by_key(|&slot| self.slot_entry(slot).map_or(u64::MAX, |e| e.seq));
        for slot in candidates {
            if let Some(entry) = self.slot_entry(slot)
                && overlaps(&entry.element.bounds(), &rect)
            {
                f(&entry.element);
            }
        }
    }
}
