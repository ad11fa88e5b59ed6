//! Axis value model: the bounds and tick spacing of one continuous dimension.
//!
//! An [`AxisRange`] is a pure value type. It never holds pixel state; the
//! pixel scale is derived on demand from a viewport extent supplied by the
//! caller each frame. Construction is checked: an `AxisRange` with
//! `high <= low` or a non-positive tick spacing cannot exist, so downstream
//! code (tick generation, coordinate mapping) can assume a valid axis.

use thiserror::Error;

/// Errors for axis construction and pixel-scale derivation.
///
/// All of these are prevented at the mutation boundary by clamping; they
/// surface only when a caller hands the engine raw, unclamped values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AxisError {
    /// `high <= low` (or a non-finite bound): the visible span would be empty.
    #[error("invalid axis range: high must be greater than low")]
    InvalidAxisRange,
    /// Tick spacing is zero, negative, or non-finite.
    #[error("invalid tick spacing: spacing must be positive")]
    InvalidTickSpacing,
    /// Viewport extent is zero or negative, so pixels-per-unit is undefined.
    #[error("degenerate viewport: pixel extent must be positive")]
    DegenerateViewport,
}

// ─────────────────────────────────────────────────────────────────────────────
// AxisRange
// ─────────────────────────────────────────────────────────────────────────────

/// One continuous axis: visible bounds plus gridline spacing, in domain units
/// (Hz for the frequency axis, dBm for the power axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    low: f64,
    high: f64,
    tick_spacing: f64,
}

impl AxisRange {
    /// Build an axis from explicit bounds.
    ///
    /// Fails with [`AxisError::InvalidAxisRange`] unless `low < high` and both
    /// are finite, and with [`AxisError::InvalidTickSpacing`] unless
    /// `tick_spacing` is a positive finite number.
    pub fn new(low: f64, high: f64, tick_spacing: f64) -> Result<Self, AxisError> {
        if !low.is_finite() || !high.is_finite() || high <= low {
            return Err(AxisError::InvalidAxisRange);
        }
        if !tick_spacing.is_finite() || tick_spacing <= 0.0 {
            return Err(AxisError::InvalidTickSpacing);
        }
        Ok(Self {
            low,
            high,
            tick_spacing,
        })
    }

    /// Build an axis from a center value and a span (the frequency-axis
    /// parameterization: `center ± span/2`).
    pub fn from_center_span(center: f64, span: f64, tick_spacing: f64) -> Result<Self, AxisError> {
        Self::new(center - span / 2.0, center + span / 2.0, tick_spacing)
    }

    /// Lower visible bound, in domain units.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper visible bound, in domain units.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Distance between adjacent gridlines, in domain units.
    pub fn tick_spacing(&self) -> f64 {
        self.tick_spacing
    }

    /// Visible span `high - low`. Always positive.
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Pixel scale for the given viewport extent.
    ///
    /// Fails with [`AxisError::DegenerateViewport`] when `extent <= 0`.
    pub fn pixels_per_unit(&self, extent: f64) -> Result<f64, AxisError> {
        if !extent.is_finite() || extent <= 0.0 {
            return Err(AxisError::DegenerateViewport);
        }
        Ok(extent / self.span())
    }

    /// Phase alignment of the grid: the (non-positive) offset from `low` down
    /// to the nearest tick-spacing multiple, so that `low + tick_offset()` is
    /// the first bracketing tick at or before `low`.
    ///
    /// This is what locks gridlines to absolute domain coordinates (multiples
    /// of e.g. 20 kHz) instead of the viewport edge: panning slides the grid
    /// rather than regenerating it at an arbitrary phase. The Euclidean
    /// remainder keeps the property for negative bounds (the power axis).
    pub fn tick_offset(&self) -> f64 {
        -self.low.rem_euclid(self.tick_spacing)
    }

    /// Whether `value` lies within the visible bounds (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}
