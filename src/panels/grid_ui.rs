//! The grid surface: paints gridlines and legends from tick sequences and
//! routes pointer drags on its three hit regions into the [`GestureRouter`].
//!
//! This panel is a pure collaborator of the engine: each frame it takes axis
//! snapshots and the current pixel extents, asks the engine for ticks, and
//! pushes normalized drag events back. It holds no axis state of its own.

use eframe::egui::{self, Align2, FontId, Pos2, Rect, Sense, Stroke};

use crate::config::GridConfig;
use crate::data::gesture::{DragRegion, GesturePhase, GestureRouter, PointerDrag, PointerPos};
use crate::data::mapper::{PixelMap, Viewport};
use crate::data::spectrum::{SpectrumModel, DBM_SPACING_CHOICES};
use crate::data::ticks::{ticks, TickWalk};

/// The central grid widget: gridlines, frequency legend, dBm legend strip.
#[derive(Default)]
pub struct GridPanel {
    router: GestureRouter,
}

impl GridPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render into the available space and process this frame's drags.
    pub fn ui(&mut self, ui: &mut egui::Ui, model: &mut SpectrumModel, cfg: &GridConfig) {
        let avail = ui.available_rect_before_wrap();
        let legend_h = if cfg.features.frequency_legend {
            cfg.layout.frequency_legend_height
        } else {
            0.0
        };

        // Grid body above, frequency legend strip below; the dBm legend
        // strip overlays the right edge of the body at full body height.
        let body = Rect::from_min_max(
            avail.min,
            Pos2::new(avail.max.x, (avail.max.y - legend_h).max(avail.min.y)),
        );
        let freq_legend = Rect::from_min_max(Pos2::new(avail.min.x, body.max.y), avail.max);
        let strip = Rect::from_min_max(
            Pos2::new(body.max.x - cfg.layout.power_legend_width, body.min.y),
            body.max,
        );

        let viewport = Viewport::new(body.width() as f64, body.height() as f64);

        // Interactions first, so this frame paints the post-drag state.
        // The body hit area excludes the strip so the two never fight for
        // the same press.
        let body_hit = Rect::from_min_max(body.min, Pos2::new(strip.min.x, body.max.y));
        let body_resp = ui.interact(body_hit, ui.id().with("grid_body"), Sense::drag());
        self.route(&body_resp, DragRegion::GridBody, body.min, viewport, model);

        if cfg.features.power_legend {
            let strip_resp =
                ui.interact(strip, ui.id().with("dbm_legend"), Sense::click_and_drag());
            self.route(&strip_resp, DragRegion::PowerLegend, body.min, viewport, model);
            strip_resp.context_menu(|ui| {
                for &choice in DBM_SPACING_CHOICES.iter() {
                    if ui.button(format!("{choice:.0} dBm")).clicked() {
                        model.set_dbm_spacing(choice);
                        ui.close();
                    }
                }
            });
        }

        if cfg.features.frequency_legend {
            let legend_resp = ui.interact(freq_legend, ui.id().with("freq_legend"), Sense::drag());
            self.route(
                &legend_resp,
                DragRegion::FrequencyLegend,
                body.min,
                viewport,
                model,
            );
        }

        self.paint(ui, model, cfg, body, freq_legend, strip);
    }

    /// Translate one egui response into normalized drag events.
    fn route(
        &mut self,
        resp: &egui::Response,
        region: DragRegion,
        origin: Pos2,
        viewport: Viewport,
        model: &mut SpectrumModel,
    ) {
        if resp.dragged() {
            let start = resp.ctx.input(|i| i.pointer.press_origin());
            let current = resp.interact_pointer_pos();
            if let (Some(start), Some(current)) = (start, current) {
                // Begin on the start frame (captures nothing yet), Changed
                // afterwards; the router classifies on the first movement.
                let phase = if resp.drag_started() {
                    GesturePhase::Begin
                } else {
                    GesturePhase::Changed
                };
                let drag = PointerDrag {
                    phase,
                    region,
                    start: to_local(start, origin),
                    current: to_local(current, origin),
                };
                self.router.handle(&drag, viewport, model);
            }
        }
        if resp.drag_stopped() {
            let drag = PointerDrag {
                phase: GesturePhase::Ended,
                region,
                start: PointerPos::new(0.0, 0.0),
                current: PointerPos::new(0.0, 0.0),
            };
            self.router.handle(&drag, viewport, model);
        }
    }

    fn paint(
        &self,
        ui: &egui::Ui,
        model: &SpectrumModel,
        cfg: &GridConfig,
        body: Rect,
        freq_legend: Rect,
        strip: Rect,
    ) {
        let theme = &cfg.theme;
        let painter = ui.painter().with_clip_rect(body.union(freq_legend));
        painter.rect_filled(body, 0.0, theme.background);

        let label_font = FontId::proportional(12.0);

        // ── Frequency axis: vertical lines + bottom legend ───────────────────
        match model
            .freq_axis()
            .and_then(|axis| PixelMap::new(&axis, body.width() as f64).map(|map| (axis, map)))
        {
            Ok((axis, map)) => {
                for tick in ticks(&axis, TickWalk::Ascending, &map, &cfg.freq_formatter) {
                    let x = body.min.x + tick.pixel as f32;
                    if cfg.features.gridlines {
                        painter.line_segment(
                            [Pos2::new(x, body.min.y), Pos2::new(x, body.max.y)],
                            Stroke::new(1.0, theme.freq_lines),
                        );
                    }
                    if cfg.features.frequency_legend {
                        painter.text(
                            Pos2::new(x, freq_legend.center().y),
                            Align2::CENTER_CENTER,
                            tick.label,
                            label_font.clone(),
                            theme.freq_legend_text,
                        );
                    }
                }
            }
            Err(e) => log::warn!("frequency grid skipped: {e}"),
        }

        // ── Power axis: horizontal lines + right-edge legend ─────────────────
        match model
            .power_axis()
            .and_then(|axis| PixelMap::new(&axis, body.height() as f64).map(|map| (axis, map)))
        {
            Ok((axis, map)) => {
                for tick in ticks(&axis, TickWalk::Descending, &map, &cfg.power_formatter) {
                    // The map measures from `low`; the screen y axis grows
                    // downward, so flip against the body height.
                    let y = body.min.y + (body.height() - tick.pixel as f32);
                    if cfg.features.gridlines {
                        painter.line_segment(
                            [Pos2::new(body.min.x, y), Pos2::new(body.max.x, y)],
                            Stroke::new(1.0, theme.dbm_lines),
                        );
                    }
                    if cfg.features.power_legend {
                        painter.text(
                            Pos2::new(body.max.x - cfg.layout.power_label_inset, y),
                            Align2::RIGHT_CENTER,
                            tick.label,
                            label_font.clone(),
                            theme.dbm_legend_text,
                        );
                    }
                }
            }
            Err(e) => log::warn!("power grid skipped: {e}"),
        }

        if cfg.features.power_legend {
            painter.rect_filled(strip, 0.0, theme.dbm_legend_strip);
        }
        if cfg.features.frequency_legend {
            painter.line_segment(
                [
                    Pos2::new(body.min.x, body.max.y),
                    Pos2::new(body.max.x, body.max.y),
                ],
                Stroke::new(1.0, theme.divider),
            );
        }
    }
}

fn to_local(pos: Pos2, origin: Pos2) -> PointerPos {
    PointerPos::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64)
}
