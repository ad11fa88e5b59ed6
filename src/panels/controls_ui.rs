//! Slider and stepper rows for the axis parameters, shown below the grid.
//!
//! Every widget edits a local copy and pushes the result through the model's
//! clamped setters; the readouts always show the post-clamp value.

use eframe::egui;

use crate::data::spectrum::SpectrumModel;

/// The control rows: center, bandwidth, grid spacing, and dBm bounds.
#[derive(Default)]
pub struct ControlsPanel;

impl ControlsPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, model: &mut SpectrumModel) {
        let limits = model.limits().clone();

        ui.horizontal(|ui| {
            ui.label("Center");
            if ui.small_button("\u{2212}").clicked() {
                model.nudge_center(-100.0);
            }
            let mut center = model.center();
            if ui
                .add(
                    egui::Slider::new(&mut center, limits.center.clone())
                        .step_by(1_000.0)
                        .show_value(false),
                )
                .changed()
            {
                model.set_center(center);
            }
            if ui.small_button("+").clicked() {
                model.nudge_center(100.0);
            }
            ui.monospace(format!("{:.0} Hz", model.center()));

            ui.separator();

            ui.label("Bandwidth");
            if ui.small_button("\u{2212}").clicked() {
                model.nudge_bandwidth(-100.0);
            }
            let mut bandwidth = model.bandwidth();
            if ui
                .add(
                    egui::Slider::new(&mut bandwidth, limits.bandwidth.clone())
                        .step_by(1_000.0)
                        .show_value(false),
                )
                .changed()
            {
                model.set_bandwidth(bandwidth);
            }
            if ui.small_button("+").clicked() {
                model.nudge_bandwidth(100.0);
            }
            ui.monospace(format!("{:.0} Hz", model.bandwidth()));

            ui.separator();

            ui.label("Freq incr");
            if ui.small_button("\u{2212}").clicked() {
                model.nudge_freq_spacing(-1_000.0);
            }
            let mut spacing = model.freq_spacing();
            if ui
                .add(
                    egui::Slider::new(&mut spacing, limits.freq_spacing.clone())
                        .step_by(1_000.0)
                        .show_value(false),
                )
                .changed()
            {
                model.set_freq_spacing(spacing);
            }
            if ui.small_button("+").clicked() {
                model.nudge_freq_spacing(1_000.0);
            }
            ui.monospace(format!("{:.0} Hz", model.freq_spacing()));
        });

        ui.horizontal(|ui| {
            ui.label("Start");
            ui.monospace(format!("{:.0} Hz", model.freq_start()));
            ui.separator();
            ui.label("End");
            ui.monospace(format!("{:.0} Hz", model.freq_end()));
        });

        ui.horizontal(|ui| {
            ui.label("dBm high");
            if ui.small_button("\u{2212}").clicked() {
                model.nudge_dbm_high(-1.0);
            }
            let mut high = model.dbm_high();
            if ui
                .add(
                    egui::Slider::new(&mut high, limits.dbm_high.clone())
                        .step_by(10.0)
                        .show_value(false),
                )
                .changed()
            {
                model.set_dbm_high(high);
            }
            if ui.small_button("+").clicked() {
                model.nudge_dbm_high(1.0);
            }
            ui.monospace(format!("{:.0} dBm", model.dbm_high()));

            ui.separator();

            ui.label("dBm low");
            if ui.small_button("\u{2212}").clicked() {
                model.nudge_dbm_low(-1.0);
            }
            let mut low = model.dbm_low();
            if ui
                .add(
                    egui::Slider::new(&mut low, limits.dbm_low.clone())
                        .step_by(10.0)
                        .show_value(false),
                )
                .changed()
            {
                model.set_dbm_low(low);
            }
            if ui.small_button("+").clicked() {
                model.nudge_dbm_low(1.0);
            }
            ui.monospace(format!("{:.0} dBm", model.dbm_low()));
        });
    }
}
