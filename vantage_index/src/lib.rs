// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_index --heading-base-level=0

//! Vantage Index: a uniform-grid spatial index with exact point picking.
//!
//! Vantage Index answers "which scene element lies under this point?" for an
//! interactive 2D viewer.
//!
//! - Insert and remove [`Element`]s, each a [`vantage_hit::Primitive`] with a
//!   caller-assigned id and cached bounds.
//! - Query by box ([`SpatialIndex::query`]) or by point with a tolerance
//!   ([`SpatialIndex::query_point`]).
//! - Resync to a new scene with [`SpatialIndex::rebuild`].
//!
//! Point queries run in two phases: the grid narrows candidates to those whose
//! bounds intersect a small box around the point, then each candidate's exact
//! predicate from [`vantage_hit`] decides. Results come back in insertion
//! order; for topmost-wins picking read from the end or call
//! [`SpatialIndex::topmost`].
//!
//! Coordinates are world coordinates. Convert pointer positions first, for
//! example with `vantage_view::ViewTransform::invert`.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use vantage_hit::Primitive;
//! use vantage_index::{Element, GridConfig, SpatialIndex};
//!
//! let mut idx = SpatialIndex::new(GridConfig::for_content(Rect::new(0.0, 0.0, 100.0, 100.0)));
//! idx.insert(Element::new("a", Primitive::rect(10.0, 10.0, 20.0, 5.0)));
//! idx.insert(Element::new("b", Primitive::circle(80.0, 80.0, 5.0)));
//!
//! let hits: Vec<_> = idx
//!     .query_point(Point::new(20.0, 12.0), 0.0)
//!     .iter()
//!     .map(|e| e.id())
//!     .collect();
//! assert_eq!(hits, ["a"]);
//! assert!(idx.query_point(Point::new(50.0, 50.0), 0.0).is_empty());
//! ```
//!
//! Building straight from a scene list sizes the grid automatically:
//!
//! ```rust
//! use kurbo::Point;
//! use vantage_hit::Primitive;
//! use vantage_index::{Element, SpatialIndex};
//!
//! let idx = SpatialIndex::from_elements([
//!     Element::new(1_u32, Primitive::line(0.0, 0.0, 400.0, 300.0)),
//!     Element::new(2_u32, Primitive::polygon([(0.0, 0.0), (40.0, 0.0), (20.0, 30.0)])),
//! ]);
//! let top = idx.topmost(Point::new(20.0, 10.0), 1.0).map(|e| e.id());
//! assert_eq!(top, Some(2));
//! ```
//!
//! ## Choosing a backend
//!
//! - [`Grid`](backends::Grid) (default): uniform grid. Elements are bucketed
//!   into every cell their bounds cover; cell size comes from
//!   [`GridConfig`], by default `max(50, min(width, height) / 20)` of the
//!   content bounds.
//! - [`FlatVec`](backends::FlatVec): linear scans. Fine for a handful of
//!   elements, and useful as a reference in tests.
//!
//! ## Threading
//!
//! Everything is synchronous and single-threaded. The index is a plain owned
//! value; mutation requires `&mut`, and callers that need to share it across
//! threads must serialize access themselves.
//!
//! ### Float semantics
//!
//! This crate assumes finite coordinates. NaN never panics, but query results
//! involving NaN are unspecified.

#![no_std]

extern crate alloc;

mod backend;
pub mod backends;
mod config;
mod element;
mod index;
pub(crate) mod util;

pub use backend::Backend;
pub use config::GridConfig;
pub use element::{Element, ElementId, content_bounds};
pub use index::SpatialIndex;
