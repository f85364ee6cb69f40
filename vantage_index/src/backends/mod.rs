// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different spatial strategies.
//!
//! - `grid`: uniform grid with a fixed cell size (the default).
//! - `flatvec`: flat vector with linear scans (small, simple, and a handy
//!   reference when checking the grid).

pub(crate) mod flatvec;
pub(crate) mod grid;

pub use flatvec::FlatVec;
pub use grid::{Grid, MAX_CELLS_PER_ELEMENT, cell_coord};
