//! Color theme for the grid surface and its legends.
//!
//! The default scheme draws gray gridlines on a dark surface with a green
//! frequency legend and a white power legend. All fields are plain colors so
//! embedders can restyle freely.

use eframe::egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

/// Colors for every painted element of the spectrum grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridTheme {
    /// Grid surface fill.
    pub background: Color32,
    /// Vertical (frequency) gridlines.
    pub freq_lines: Color32,
    /// Horizontal (power) gridlines.
    pub dbm_lines: Color32,
    /// Frequency tick labels below the grid.
    pub freq_legend_text: Color32,
    /// dBm tick labels at the right edge of the grid.
    pub dbm_legend_text: Color32,
    /// Translucent fill of the draggable dBm legend strip.
    pub dbm_legend_strip: Color32,
    /// Divider lines between grid, legend, and controls.
    pub divider: Color32,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(12, 12, 16),
            freq_lines: Color32::from_gray(110),
            dbm_lines: Color32::from_gray(110),
            freq_legend_text: Color32::from_rgb(80, 200, 120),
            dbm_legend_text: Color32::WHITE,
            dbm_legend_strip: Color32::from_rgba_unmultiplied(255, 255, 255, 26),
            divider: Color32::from_gray(70),
        }
    }
}

impl GridTheme {
    /// Apply dark visuals matched to the theme background.
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        ctx.set_visuals(visuals);
    }
}
