// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_view --heading-base-level=0

//! Vantage View: pan/zoom transforms between world and screen space.
//!
//! This crate holds the small amount of math an interactive 2D scene viewer
//! needs to relate its content (world space) to the drawing surface (screen
//! space):
//! - [`ViewTransform`]: a uniform scale followed by a translation.
//! - Mapping points and boxes in both directions ([`ViewTransform::apply`],
//!   [`ViewTransform::invert`]).
//! - Fitting content into a viewport with padding ([`ViewTransform::fit_to_view`]).
//! - Keeping a transform within zoom limits and keeping content recoverable by
//!   panning ([`ViewTransform::clamp`]).
//!
//! It does **not** own a scene, a renderer, or input handling. A typical caller
//! converts a pointer position with [`ViewTransform::invert`] and hands the
//! resulting world point to a spatial index for hit testing.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use vantage_view::{ViewTransform, ZoomLimits};
//!
//! let content = Rect::new(0.0, 0.0, 200.0, 100.0);
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//!
//! let view = ViewTransform::fit_to_view(content, viewport, 20.0);
//! assert!((view.scale - 3.8).abs() < 1e-12);
//!
//! // Zoom in around the pointer, then keep the result sane.
//! let view = view
//!     .zoom_about(Point::new(400.0, 300.0), 2.0, ZoomLimits::default())
//!     .clamp(content, viewport, ZoomLimits::default());
//!
//! // Screen -> world for hit testing.
//! let world = view.invert(Point::new(400.0, 300.0));
//! assert!((world.x - 100.0).abs() < 1e-9);
//! assert!((world.y - 50.0).abs() < 1e-9);
//! ```
//!
//! ## Numeric contract
//!
//! All functions are total for finite input and never divide by zero:
//! zero-extent content is treated as one unit wide when computing a fit.
//! Non-finite input (NaN or infinities) is a caller precondition violation;
//! results are unspecified but the functions still return.
//!
//! This crate is `no_std`.

#![no_std]

mod limits;
mod transform;

pub use limits::ZoomLimits;
pub use transform::ViewTransform;
