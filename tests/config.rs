use specgrid::{GridConfig, SpectrumApp, SpectrumModel};

#[test]
fn defaults_match_the_standard_display() {
    let cfg = GridConfig::default();
    assert!(cfg.features.gridlines);
    assert!(cfg.features.controls);
    assert_eq!(cfg.layout.frequency_legend_height, 20.0);
    assert_eq!(cfg.layout.controls_height, 90.0);
    assert_eq!(cfg.layout.power_legend_width, 40.0);
    assert_eq!(cfg.freq_formatter.format(14_020_000.0), "14.020000");
    assert_eq!(cfg.power_formatter.format(-100.0), "-100");
}

#[test]
fn power_unit_builder_labels_the_ticks() {
    let cfg = GridConfig::default().with_power_unit("dBm");
    assert_eq!(cfg.power_formatter.format(-100.0), "-100 dBm");
    assert_eq!(cfg.power_formatter.format(10.0), "10 dBm");
}

#[test]
fn app_starts_from_a_caller_provided_model() {
    let mut model = SpectrumModel::default();
    model.drag_set_center(14_150_000.0);
    let app = SpectrumApp::with_model(model, GridConfig::default());
    assert_eq!(app.model().center(), 14_150_000.0);
    assert_eq!(app.model().bandwidth(), 200_000.0);
}
