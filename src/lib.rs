//! Spectrum grid crate root: re-exports and module wiring.
//!
//! This crate provides an interactive measurement grid for a 2D spectrum
//! display built on egui/eframe:
//! - `data`: axis model, tick generation, pixel mapping, gesture routing
//! - `config`: feature flags, layout metrics, formatters
//! - `color_scheme`: grid and legend colors
//! - `panels`: the grid surface and the control rows
//! - `app`: the eframe shell and run helpers

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run, run_with_config, SpectrumApp};
pub use color_scheme::GridTheme;
pub use config::{FeatureFlags, GridConfig, LayoutMetrics};
pub use data::axis::{AxisError, AxisRange};
pub use data::formatter::{DecimalFormatter, ScaledFormatter, TickFormatter};
pub use data::gesture::{
    DragKind, DragRegion, GesturePhase, GestureRouter, PointerDrag, PointerPos,
};
pub use data::mapper::{PixelMap, Viewport};
pub use data::spectrum::{SpectrumLimits, SpectrumModel, DBM_SPACING_CHOICES};
pub use data::ticks::{tick_values, ticks, Tick, TickWalk, MAX_TICKS};
