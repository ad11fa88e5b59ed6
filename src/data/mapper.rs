//! Domain ⇄ pixel coordinate mapping.
//!
//! A [`PixelMap`] is a snapshot of one axis against one viewport extent,
//! built fresh each frame from the values the collaborator supplies. It is
//! never cached across frames, so it can never hold a stale viewport size.

use crate::data::axis::{AxisError, AxisRange};

/// Current drawable pixel extents, supplied by the UI layer each layout pass.
/// Read-only input to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
}

impl Viewport {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PixelMap
// ─────────────────────────────────────────────────────────────────────────────

/// Bidirectional transform between domain values and pixel offsets along one
/// axis. Pixel 0 corresponds to the axis `low`; pixels grow toward `high`.
///
/// `to_domain(to_pixel(v)) == v` within floating-point tolerance for any `v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelMap {
    low: f64,
    pixels_per_unit: f64,
}

impl PixelMap {
    /// Build the transform for `axis` rendered into `extent` pixels.
    ///
    /// Fails with [`AxisError::DegenerateViewport`] when `extent <= 0`; the
    /// axis itself is valid by construction.
    pub fn new(axis: &AxisRange, extent: f64) -> Result<Self, AxisError> {
        Ok(Self {
            low: axis.low(),
            pixels_per_unit: axis.pixels_per_unit(extent)?,
        })
    }

    /// Pixel scale: how many pixels one domain unit occupies.
    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// Map a domain value to its pixel offset from the axis `low` edge.
    pub fn to_pixel(&self, value: f64) -> f64 {
        (value - self.low) * self.pixels_per_unit
    }

    /// Exact inverse of [`to_pixel`](Self::to_pixel).
    pub fn to_domain(&self, pixel: f64) -> f64 {
        self.low + pixel / self.pixels_per_unit
    }
}
