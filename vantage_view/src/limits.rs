// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom constraints.

/// Inclusive range of permitted view scales.
///
/// The default allows zooming from 1% to 10000%.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Smallest permitted scale (strictly positive).
    pub min: f64,
    /// Largest permitted scale.
    pub max: f64,
}

impl ZoomLimits {
    /// Create limits from two bounds, in either order.
    pub fn new(a: f64, b: f64) -> Self {
        debug_assert!(
            a > 0.0 && b > 0.0,
            "zoom limits must be strictly positive"
        );
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Clamp `scale` into `[min, max]`.
    ///
    /// Inverted limits are tolerated and treated as if they were swapped.
    #[inline]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        scale.max(lo).min(hi)
    }

    /// Whether `scale` already lies within the limits.
    #[inline]
    pub fn contains(&self, scale: f64) -> bool {
        self.clamp_scale(scale) == scale
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.01,
            max: 100.0,
        }
    }
}
