//! Tick-label formatters: decimal, unit-scaled, and integer formatting.
//!
//! The engine does not own formatting policy: the caller picks a
//! [`TickFormatter`] per axis and the tick generator invokes it once per
//! tick. The frequency legend uses [`TickFormatter::megahertz`] (raw Hz
//! rendered as MHz); the power legend uses [`TickFormatter::Integer`].

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// DecimalFormatter
// ─────────────────────────────────────────────────────────────────────────────

/// Plain decimal formatter with a fixed number of decimal places and an
/// optional unit suffix (e.g. `"dBm"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecimalFormatter {
    /// Number of digits after the decimal point.
    pub decimal_places: usize,
    /// Optional unit suffix appended after the number.
    pub unit: Option<String>,
}

impl DecimalFormatter {
    pub fn format(&self, value: f64) -> String {
        let s = format!("{:.*}", self.decimal_places, value);
        match &self.unit {
            Some(u) => format!("{} {}", s, u),
            None => s,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ScaledFormatter
// ─────────────────────────────────────────────────────────────────────────────

/// Divides the raw value by a fixed scale before decimal formatting.
///
/// Used for the frequency legend, where domain values are Hz but labels read
/// in MHz: `14_020_000.0` → `"14.020000"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledFormatter {
    /// Divisor applied to the raw value (e.g. `1e6` for Hz → MHz).
    pub divisor: f64,
    /// Number of digits after the decimal point.
    pub decimal_places: usize,
    /// Optional unit suffix.
    pub unit: Option<String>,
}

impl ScaledFormatter {
    pub fn format(&self, value: f64) -> String {
        let s = format!("{:.*}", self.decimal_places, value / self.divisor);
        match &self.unit {
            Some(u) => format!("{} {}", s, u),
            None => s,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TickFormatter  (the enum exported to users)
// ─────────────────────────────────────────────────────────────────────────────

/// Selects how one axis's tick labels are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickFormatter {
    /// Fixed decimal notation: `-37.50`.
    Decimal(DecimalFormatter),
    /// Value divided by a fixed scale, then decimal: `14.020000`.
    Scaled(ScaledFormatter),
    /// Rounded to the nearest whole number: `-100`.
    Integer,
}

impl TickFormatter {
    /// Hz-to-MHz formatter with the given number of decimal places.
    pub fn megahertz(decimal_places: usize) -> Self {
        TickFormatter::Scaled(ScaledFormatter {
            divisor: 1e6,
            decimal_places,
            unit: None,
        })
    }

    /// Format one tick value.
    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormatter::Decimal(df) => df.format(value),
            TickFormatter::Scaled(sf) => sf.format(value),
            TickFormatter::Integer => format!("{:.0}", value),
        }
    }
}
