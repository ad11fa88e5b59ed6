//! The eframe application shell: wires the model, the grid surface, and the
//! control rows into a native window.

use eframe::egui;

use crate::config::GridConfig;
use crate::data::spectrum::SpectrumModel;
use crate::panels::{ControlsPanel, GridPanel};

/// Top-level application state.
pub struct SpectrumApp {
    model: SpectrumModel,
    config: GridConfig,
    grid: GridPanel,
    controls: ControlsPanel,
}

impl SpectrumApp {
    pub fn new(config: GridConfig) -> Self {
        Self::with_model(SpectrumModel::default(), config)
    }

    /// Start from a caller-provided model, e.g. restored axis state.
    pub fn with_model(model: SpectrumModel, config: GridConfig) -> Self {
        Self {
            model,
            config,
            grid: GridPanel::new(),
            controls: ControlsPanel::new(),
        }
    }

    pub fn model(&self) -> &SpectrumModel {
        &self.model
    }
}

impl eframe::App for SpectrumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.config.features.controls {
            egui::TopBottomPanel::bottom("spectrum_controls")
                .exact_height(self.config.layout.controls_height)
                .show(ctx, |ui| {
                    self.controls.ui(ui, &mut self.model);
                });
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            self.grid.ui(ui, &mut self.model, &self.config);
        });
    }
}

/// Open the spectrum grid window with the default configuration and block
/// until it is closed.
pub fn run() -> eframe::Result<()> {
    run_with_config(GridConfig::default())
}

/// Open the spectrum grid window with a custom configuration.
pub fn run_with_config(mut config: GridConfig) -> eframe::Result<()> {
    let title = config.title.clone();
    let native_options = config.native_options.take().unwrap_or_else(|| {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 700.0]),
            ..Default::default()
        }
    });
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            config.theme.apply(&cc.egui_ctx);
            Ok(Box::new(SpectrumApp::new(config)))
        }),
    )
}
