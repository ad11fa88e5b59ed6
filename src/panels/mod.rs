//! UI panels: the grid surface and the control rows.

pub mod controls_ui;
pub mod grid_ui;

pub use controls_ui::ControlsPanel;
pub use grid_ui::GridPanel;
