//! The spectrum model: both axes plus every clamped mutation entry point.
//!
//! All axis state lives here, behind setters that clamp instead of erroring.
//! The UI layer never shares mutable axis state with the engine: each frame
//! it takes [`AxisRange`] snapshots via [`SpectrumModel::freq_axis`] /
//! [`SpectrumModel::power_axis`], and every edit (slider, stepper, or drag)
//! flows back through one of the methods below. An out-of-range edit is
//! silently clamped to the nearest valid value, matching slider feel; the
//! invariants `span > 0` and `spacing > 0` hold at every instant.
//!
//! Two families of setters exist:
//! * `set_*` / `nudge_*` — control edits, clamped to the control limits
//!   (the slider ranges).
//! * `drag_*` — gesture updates, clamped only as far as the invariants
//!   require, so panning is not confined to the slider range.

use std::ops::RangeInclusive;

use crate::data::axis::{AxisError, AxisRange};

/// The enumerated power-grid spacings offered by the legend context menu.
pub const DBM_SPACING_CHOICES: [f64; 4] = [5.0, 10.0, 15.0, 20.0];

// ─────────────────────────────────────────────────────────────────────────────
// SpectrumLimits
// ─────────────────────────────────────────────────────────────────────────────

/// Control-edit limits: the slider ranges and the minimum power span.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumLimits {
    /// Center frequency slider range, Hz.
    pub center: RangeInclusive<f64>,
    /// Bandwidth slider range, Hz.
    pub bandwidth: RangeInclusive<f64>,
    /// Frequency gridline spacing range, Hz.
    pub freq_spacing: RangeInclusive<f64>,
    /// Power upper-bound slider range, dBm.
    pub dbm_high: RangeInclusive<f64>,
    /// Power lower-bound slider range, dBm.
    pub dbm_low: RangeInclusive<f64>,
    /// Smallest allowed power span, dBm. Rescale drags stop here so the
    /// bounds can never cross.
    pub min_dbm_span: f64,
}

impl Default for SpectrumLimits {
    fn default() -> Self {
        Self {
            center: 14_000_000.0..=14_200_000.0,
            bandwidth: 100_000.0..=300_000.0,
            freq_spacing: 5_000.0..=40_000.0,
            dbm_high: -50.0..=10.0,
            dbm_low: -130.0..=0.0,
            min_dbm_span: 1.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SpectrumModel
// ─────────────────────────────────────────────────────────────────────────────

/// Axis state for one spectrum display: the frequency axis (center +
/// bandwidth) and the power axis (high/low dBm), with their grid spacings.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumModel {
    center: f64,
    bandwidth: f64,
    freq_spacing: f64,
    dbm_high: f64,
    dbm_low: f64,
    dbm_spacing: f64,
    limits: SpectrumLimits,
}

impl Default for SpectrumModel {
    fn default() -> Self {
        Self {
            center: 14_100_000.0,
            bandwidth: 200_000.0,
            freq_spacing: 20_000.0,
            dbm_high: 10.0,
            dbm_low: -100.0,
            dbm_spacing: 10.0,
            limits: SpectrumLimits::default(),
        }
    }
}

impl SpectrumModel {
    // ── Snapshots ────────────────────────────────────────────────────────────

    /// Frequency-axis snapshot: `center ± bandwidth/2` at the current grid
    /// spacing. The setters keep the fields valid, so an error here means a
    /// logic bug; callers treat it as fatal to the current operation only.
    pub fn freq_axis(&self) -> Result<AxisRange, AxisError> {
        AxisRange::from_center_span(self.center, self.bandwidth, self.freq_spacing)
    }

    /// Power-axis snapshot: `low..high` dBm at the current grid spacing.
    pub fn power_axis(&self) -> Result<AxisRange, AxisError> {
        AxisRange::new(self.dbm_low, self.dbm_high, self.dbm_spacing)
    }

    // ── Getters ──────────────────────────────────────────────────────────────

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn freq_spacing(&self) -> f64 {
        self.freq_spacing
    }

    /// Lower edge of the frequency axis, Hz.
    pub fn freq_start(&self) -> f64 {
        self.center - self.bandwidth / 2.0
    }

    /// Upper edge of the frequency axis, Hz.
    pub fn freq_end(&self) -> f64 {
        self.center + self.bandwidth / 2.0
    }

    pub fn dbm_high(&self) -> f64 {
        self.dbm_high
    }

    pub fn dbm_low(&self) -> f64 {
        self.dbm_low
    }

    pub fn dbm_spacing(&self) -> f64 {
        self.dbm_spacing
    }

    pub fn limits(&self) -> &SpectrumLimits {
        &self.limits
    }

    // ── Control edits (clamped to the control limits) ────────────────────────

    pub fn set_center(&mut self, hz: f64) {
        self.center = clamp_to(hz, &self.limits.center, self.center);
    }

    pub fn nudge_center(&mut self, delta_hz: f64) {
        self.set_center(self.center + delta_hz);
    }

    pub fn set_bandwidth(&mut self, hz: f64) {
        self.bandwidth = clamp_to(hz, &self.limits.bandwidth, self.bandwidth);
    }

    pub fn nudge_bandwidth(&mut self, delta_hz: f64) {
        self.set_bandwidth(self.bandwidth + delta_hz);
    }

    /// Set the frequency gridline spacing, clamped to the allowed range.
    /// Non-positive or non-finite values keep the previous valid spacing.
    pub fn set_freq_spacing(&mut self, hz: f64) {
        if !hz.is_finite() || hz <= 0.0 {
            log::debug!("rejected freq spacing {hz}, keeping {}", self.freq_spacing);
            return;
        }
        self.freq_spacing = clamp_to(hz, &self.limits.freq_spacing, self.freq_spacing);
    }

    pub fn nudge_freq_spacing(&mut self, delta_hz: f64) {
        self.set_freq_spacing(self.freq_spacing + delta_hz);
    }

    pub fn set_dbm_high(&mut self, dbm: f64) {
        let clamped = clamp_to(dbm, &self.limits.dbm_high, self.dbm_high);
        self.dbm_high = clamped.max(self.dbm_low + self.limits.min_dbm_span);
    }

    pub fn nudge_dbm_high(&mut self, delta: f64) {
        self.set_dbm_high(self.dbm_high + delta);
    }

    pub fn set_dbm_low(&mut self, dbm: f64) {
        let clamped = clamp_to(dbm, &self.limits.dbm_low, self.dbm_low);
        self.dbm_low = clamped.min(self.dbm_high - self.limits.min_dbm_span);
    }

    pub fn nudge_dbm_low(&mut self, delta: f64) {
        self.set_dbm_low(self.dbm_low + delta);
    }

    /// Set the power gridline spacing, snapped to the nearest entry of
    /// [`DBM_SPACING_CHOICES`]. Non-positive or non-finite values keep the
    /// previous valid spacing.
    pub fn set_dbm_spacing(&mut self, dbm: f64) {
        if !dbm.is_finite() || dbm <= 0.0 {
            log::debug!("rejected dbm spacing {dbm}, keeping {}", self.dbm_spacing);
            return;
        }
        self.dbm_spacing = DBM_SPACING_CHOICES
            .iter()
            .copied()
            .min_by(|a, b| {
                (a - dbm)
                    .abs()
                    .partial_cmp(&(b - dbm).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(self.dbm_spacing);
    }

    // ── Drag updates (clamped to the invariants only) ────────────────────────

    /// Pan: move the frequency window to a new center. Unbounded apart from
    /// finiteness; panning is not confined to the center slider range.
    pub fn drag_set_center(&mut self, hz: f64) {
        if !hz.is_finite() {
            return;
        }
        self.center = hz;
    }

    /// Compress/expand the frequency window. Clamped to the bandwidth range
    /// so the span can never collapse to zero or go negative mid-drag.
    pub fn drag_set_bandwidth(&mut self, hz: f64) {
        self.bandwidth = clamp_to(hz, &self.limits.bandwidth, self.bandwidth);
    }

    /// Rescale the top of the power window only.
    pub fn drag_set_dbm_high(&mut self, dbm: f64) {
        if !dbm.is_finite() {
            return;
        }
        self.dbm_high = dbm.max(self.dbm_low + self.limits.min_dbm_span);
    }

    /// Rescale the bottom of the power window only.
    pub fn drag_set_dbm_low(&mut self, dbm: f64) {
        if !dbm.is_finite() {
            return;
        }
        self.dbm_low = dbm.min(self.dbm_high - self.limits.min_dbm_span);
    }

    /// Move the whole power window without changing its span. Both bounds are
    /// applied in one step so no observer can see `high < low` in between.
    pub fn drag_set_dbm_window(&mut self, high: f64, low: f64) {
        if !high.is_finite() || !low.is_finite() || high - low <= 0.0 {
            log::debug!("rejected power window high={high} low={low}");
            return;
        }
        self.dbm_high = high;
        self.dbm_low = low;
    }
}

/// Clamp `value` into `range`; non-finite values fall back to `previous`.
fn clamp_to(value: f64, range: &RangeInclusive<f64>, previous: f64) -> f64 {
    if !value.is_finite() {
        log::debug!("rejected non-finite value, keeping {previous}");
        return previous;
    }
    value.clamp(*range.start(), *range.end())
}
