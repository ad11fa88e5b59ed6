//! Configuration types for the spectrum grid UI.

use crate::color_scheme::GridTheme;
use crate::data::formatter::{DecimalFormatter, TickFormatter};

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI elements on or off.
///
/// All features default to `true` (enabled). Disable elements to embed a
/// bare grid surface into a larger dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Draw vertical and horizontal gridlines.
    pub gridlines: bool,
    /// Show the frequency tick-label strip below the grid.
    pub frequency_legend: bool,
    /// Show the dBm tick-label strip at the right edge.
    pub power_legend: bool,
    /// Show the slider/stepper control rows at the bottom.
    pub controls: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            gridlines: true,
            frequency_legend: true,
            power_legend: true,
            controls: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout metrics
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed pixel metrics of the panel layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Height of the frequency legend strip below the grid.
    pub frequency_legend_height: f32,
    /// Height of the controls area at the bottom.
    pub controls_height: f32,
    /// Width of the draggable dBm legend strip at the right edge.
    pub power_legend_width: f32,
    /// Inset of dBm labels from the right edge of the grid.
    pub power_label_inset: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            frequency_legend_height: 20.0,
            controls_height: 90.0,
            power_legend_width: 40.0,
            power_label_inset: 20.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GridConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the spectrum grid.
///
/// | Field             | Purpose |
/// |-------------------|---------|
/// | `features`        | Toggle individual UI elements on/off |
/// | `layout`          | Fixed pixel metrics |
/// | `theme`           | Colors for grid, legends, dividers |
/// | `freq_formatter`  | Frequency tick-label format |
/// | `power_formatter` | dBm tick-label format |
pub struct GridConfig {
    /// Native window title.
    pub title: String,
    /// Toggle individual UI elements.
    pub features: FeatureFlags,
    /// Fixed pixel metrics.
    pub layout: LayoutMetrics,
    /// Colors.
    pub theme: GridTheme,
    /// Frequency tick-label format (raw values are Hz).
    pub freq_formatter: TickFormatter,
    /// Power tick-label format (raw values are dBm).
    pub power_formatter: TickFormatter,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            title: "Spectrum Grid".to_string(),
            features: FeatureFlags::default(),
            layout: LayoutMetrics::default(),
            theme: GridTheme::default(),
            // Hz shown as MHz with six decimals; dBm as whole numbers.
            freq_formatter: TickFormatter::megahertz(6),
            power_formatter: TickFormatter::Integer,
            native_options: None,
        }
    }
}

impl Clone for GridConfig {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            features: self.features.clone(),
            layout: self.layout.clone(),
            theme: self.theme.clone(),
            freq_formatter: self.freq_formatter.clone(),
            power_formatter: self.power_formatter.clone(),
            native_options: self.native_options.clone(),
        }
    }
}

impl GridConfig {
    /// Convenience: a decimal power formatter with a unit suffix.
    pub fn with_power_unit(mut self, unit: &str) -> Self {
        self.power_formatter = TickFormatter::Decimal(DecimalFormatter {
            decimal_places: 0,
            unit: Some(unit.to_string()),
        });
        self
    }
}
