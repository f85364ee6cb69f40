// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform-scale view transform and the fitting/clamping helpers built on it.

use kurbo::{Affine, Point, Rect, Vec2};

use crate::limits::ZoomLimits;

/// Mapping from world space to screen space: `screen = world * scale + translate`.
///
/// The scale is uniform on both axes and must be strictly positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewTransform {
    /// Screen-space x offset of the world origin.
    pub translate_x: f64,
    /// Screen-space y offset of the world origin.
    pub translate_y: f64,
    /// Screen units per world unit.
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    /// The identity transform: world and screen coincide.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a transform from a translation and a scale.
    #[inline(always)]
    pub const fn new(translate_x: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            scale,
        }
    }

    /// The translation component as a vector.
    #[inline]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Map a world-space point to screen space.
    #[inline]
    pub fn apply(&self, pt: Point) -> Point {
        debug_assert!(self.scale > 0.0, "view scale must be strictly positive");
        Point::new(
            pt.x * self.scale + self.translate_x,
            pt.y * self.scale + self.translate_y,
        )
    }

    /// Map a screen-space point back to world space.
    ///
    /// This is the inverse of [`apply`][Self::apply]: `invert(apply(p)) ≈ p`.
    #[inline]
    pub fn invert(&self, pt: Point) -> Point {
        debug_assert!(self.scale > 0.0, "view scale must be strictly positive");
        Point::new(
            (pt.x - self.translate_x) / self.scale,
            (pt.y - self.translate_y) / self.scale,
        )
    }

    /// Map a world-space box to screen space.
    #[inline]
    pub fn apply_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.apply(rect.origin()),
            self.apply(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Map a screen-space box back to world space.
    #[inline]
    pub fn invert_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.invert(rect.origin()),
            self.invert(Point::new(rect.x1, rect.y1)),
        )
    }

    /// The world-space region currently shown in `viewport`.
    ///
    /// Useful for culling before drawing.
    #[inline]
    pub fn visible_world_rect(&self, viewport: Rect) -> Rect {
        self.invert_rect(viewport)
    }

    /// The equivalent [`Affine`], for handing to a renderer.
    #[inline]
    pub fn to_affine(&self) -> Affine {
        Affine::new([
            self.scale,
            0.0,
            0.0,
            self.scale,
            self.translate_x,
            self.translate_y,
        ])
    }

    /// Translate the view by a screen-space delta.
    #[inline]
    pub fn pan_by(&self, delta: Vec2) -> Self {
        Self::new(
            self.translate_x + delta.x,
            self.translate_y + delta.y,
            self.scale,
        )
    }

    /// Multiply the scale by `factor` while keeping the world point under the
    /// screen-space `anchor` fixed.
    ///
    /// The resulting scale is clamped into `limits`.
    pub fn zoom_about(&self, anchor: Point, factor: f64, limits: ZoomLimits) -> Self {
        let world = self.invert(anchor);
        let scale = limits.clamp_scale(self.scale * factor);
        Self::new(anchor.x - world.x * scale, anchor.y - world.y * scale, scale)
    }

    /// Compute the transform that shows all of `content` inside `viewport`,
    /// leaving `padding` screen units free on every side.
    ///
    /// The scale is uniform (the tighter axis wins) and the scaled content is
    /// centered on both axes. Zero-extent content is treated as one unit wide
    /// on that axis, so a single point or a flat line still yields a finite,
    /// positive scale. When the padding would consume the whole viewport the
    /// unpadded extent is used instead.
    pub fn fit_to_view(content: Rect, viewport: Rect, padding: f64) -> Self {
        let content = content.abs();
        let viewport = viewport.abs();
        let padding = padding.max(0.0);

        let avail_w = padded_extent(viewport.width(), padding);
        let avail_h = padded_extent(viewport.height(), padding);
        let scale_x = avail_w / nonzero_extent(content.width());
        let scale_y = avail_h / nonzero_extent(content.height());
        let scale = scale_x.min(scale_y);

        let view_center = viewport.center();
        let content_center = content.center();
        Self::new(
            view_center.x - content_center.x * scale,
            view_center.y - content_center.y * scale,
            scale,
        )
    }

    /// Clamp the scale into `limits`, then limit the translation so that the
    /// transformed `content` box never lies more than one full viewport extent
    /// beyond any edge of `viewport`.
    ///
    /// Content can still be panned off-screen, but never so far that it cannot
    /// be recovered by panning back.
    pub fn clamp(&self, content: Rect, viewport: Rect, limits: ZoomLimits) -> Self {
        let content = content.abs();
        let viewport = viewport.abs();
        let scale = limits.clamp_scale(self.scale);
        Self::new(
            clamp_axis(
                self.translate_x,
                content.x0,
                content.x1,
                viewport.x0,
                viewport.x1,
                scale,
            ),
            clamp_axis(
                self.translate_y,
                content.y0,
                content.y1,
                viewport.y0,
                viewport.y1,
                scale,
            ),
            scale,
        )
    }
}

#[inline]
fn nonzero_extent(extent: f64) -> f64 {
    if extent > 0.0 { extent } else { 1.0 }
}

#[inline]
fn padded_extent(extent: f64, padding: f64) -> f64 {
    let padded = extent - 2.0 * padding;
    if padded > 0.0 {
        padded
    } else {
        nonzero_extent(extent)
    }
}

/// Clamp a translation along one axis.
///
/// The content's far edge may not end up more than one viewport extent before
/// the viewport's near edge, and its near edge may not start more than one
/// viewport extent past the viewport's far edge.
#[inline]
fn clamp_axis(translate: f64, c0: f64, c1: f64, v0: f64, v1: f64, scale: f64) -> f64 {
    let extent = v1 - v0;
    let lo = v0 - extent - c1 * scale;
    let hi = v1 + extent - c0 * scale;
    translate.max(lo).min(hi)
}
