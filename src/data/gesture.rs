//! Drag-gesture routing: classifies a pointer drag into one axis-mutation
//! intent and streams anchor-based updates to the [`SpectrumModel`].
//!
//! The router consumes a normalized event shape ([`PointerDrag`]): phase,
//! start location, current location, per hit region. It never reads raw
//! platform events. Classification happens exactly once, on the first
//! movement of a drag, from the start location; the chosen intent is held
//! for the whole session even if the pointer wanders into another region.
//!
//! Every update is recomputed from the anchor captured at session start,
//! never accumulated incrementally: irregular event delivery and many small
//! deltas therefore cannot compound rounding error.

use crate::data::mapper::Viewport;
use crate::data::spectrum::SpectrumModel;

/// Lifecycle phase of one normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Begin,
    Changed,
    Ended,
}

/// Pointer location in pixels, relative to the grid-body origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which hit region the drag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRegion {
    /// The gridline area itself.
    GridBody,
    /// The horizontal tick-label strip below the grid.
    FrequencyLegend,
    /// The narrow vertical dBm label strip at the right edge of the grid.
    PowerLegend,
}

/// The axis-mutation intent of a drag, fixed at classification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Slide the visible window (frequency center, or the frequency span via
    /// the legend strip).
    Pan,
    /// Move only the top of the power window.
    RescaleHigh,
    /// Move only the bottom of the power window.
    RescaleLow,
    /// Move both power bounds together, span preserved.
    RescaleBoth,
}

/// One normalized drag event, as delivered by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDrag {
    pub phase: GesturePhase,
    pub region: DragRegion,
    pub start: PointerPos,
    pub current: PointerPos,
}

/// The axis value(s) captured at session start. A single owned value per
/// session: there is no way to hold a partial anchor pair.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragAnchor {
    Center(f64),
    Bandwidth(f64),
    High(f64),
    Low(f64),
    Window { high: f64, low: f64 },
}

/// State of one in-progress drag. Created on the first movement, discarded
/// unconditionally on release, never shared across gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    kind: DragKind,
    anchor: DragAnchor,
}

impl DragSession {
    pub fn kind(&self) -> DragKind {
        self.kind
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GestureRouter
// ─────────────────────────────────────────────────────────────────────────────

/// Routes a drag-event stream into clamped [`SpectrumModel`] mutations.
#[derive(Debug, Default)]
pub struct GestureRouter {
    session: Option<DragSession>,
}

impl GestureRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag session is currently active.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The intent of the active session, if any.
    pub fn active_kind(&self) -> Option<DragKind> {
        self.session.map(|s| s.kind())
    }

    /// Feed one normalized drag event. `viewport` is the pixel extent of the
    /// grid body (width drives the frequency scale, height the power scale),
    /// re-supplied on every call so a resize mid-drag is picked up.
    pub fn handle(&mut self, drag: &PointerDrag, viewport: Viewport, model: &mut SpectrumModel) {
        match drag.phase {
            // The session starts on the first movement, not on press: a
            // press that never moves must leave no trace.
            GesturePhase::Begin => {}
            GesturePhase::Changed => {
                if self.session.is_none() {
                    self.session = classify(drag, viewport, model);
                    if let Some(s) = &self.session {
                        log::debug!("drag classified as {:?} in {:?}", s.kind, drag.region);
                    }
                }
                if let Some(session) = self.session {
                    apply(&session, drag, viewport, model);
                }
            }
            // Anchors are dropped unconditionally, even when the gesture
            // never produced a movement.
            GesturePhase::Ended => {
                self.session = None;
            }
        }
    }
}

/// Decide the intent from the start location. Returns `None` only for a
/// grid-body drag with no dominant direction yet; classification is retried
/// on the next movement.
fn classify(drag: &PointerDrag, viewport: Viewport, model: &SpectrumModel) -> Option<DragSession> {
    match drag.region {
        DragRegion::GridBody => {
            let dx = (drag.start.x - drag.current.x).abs();
            let dy = (drag.start.y - drag.current.y).abs();
            if dx > dy {
                Some(DragSession {
                    kind: DragKind::Pan,
                    anchor: DragAnchor::Center(model.center()),
                })
            } else if dy > dx {
                Some(DragSession {
                    kind: DragKind::RescaleBoth,
                    anchor: DragAnchor::Window {
                        high: model.dbm_high(),
                        low: model.dbm_low(),
                    },
                })
            } else {
                None
            }
        }
        DragRegion::FrequencyLegend => Some(DragSession {
            kind: DragKind::Pan,
            anchor: DragAnchor::Bandwidth(model.bandwidth()),
        }),
        DragRegion::PowerLegend => {
            let h = viewport.height_px;
            let y = drag.start.y;
            if y < h / 3.0 {
                Some(DragSession {
                    kind: DragKind::RescaleHigh,
                    anchor: DragAnchor::High(model.dbm_high()),
                })
            } else if y >= 2.0 * h / 3.0 {
                Some(DragSession {
                    kind: DragKind::RescaleLow,
                    anchor: DragAnchor::Low(model.dbm_low()),
                })
            } else {
                Some(DragSession {
                    kind: DragKind::RescaleBoth,
                    anchor: DragAnchor::Window {
                        high: model.dbm_high(),
                        low: model.dbm_low(),
                    },
                })
            }
        }
    }
}

/// Recompute the mutated field(s) from the session anchor and the total
/// pointer displacement, and apply through the model's clamped entry points.
fn apply(session: &DragSession, drag: &PointerDrag, viewport: Viewport, model: &mut SpectrumModel) {
    match session.anchor {
        DragAnchor::Center(anchor) => {
            let Some(ppu) = freq_pixels_per_unit(model, viewport) else {
                return;
            };
            model.drag_set_center(anchor - (drag.start.x - drag.current.x) / ppu);
        }
        DragAnchor::Bandwidth(anchor) => {
            let Some(ppu) = freq_pixels_per_unit(model, viewport) else {
                return;
            };
            model.drag_set_bandwidth(anchor + (drag.start.x - drag.current.x) / ppu);
        }
        DragAnchor::High(anchor) => {
            let Some(ppd) = power_pixels_per_unit(model, viewport) else {
                return;
            };
            model.drag_set_dbm_high(anchor + (drag.start.y - drag.current.y) / ppd);
        }
        DragAnchor::Low(anchor) => {
            let Some(ppd) = power_pixels_per_unit(model, viewport) else {
                return;
            };
            model.drag_set_dbm_low(anchor + (drag.start.y - drag.current.y) / ppd);
        }
        DragAnchor::Window { high, low } => {
            let Some(ppd) = power_pixels_per_unit(model, viewport) else {
                return;
            };
            let delta = (drag.start.y - drag.current.y) / ppd;
            // Both bounds in one step: span is preserved exactly and no
            // intermediate state has high < low.
            model.drag_set_dbm_window(high + delta, low + delta);
        }
    }
}

fn freq_pixels_per_unit(model: &SpectrumModel, viewport: Viewport) -> Option<f64> {
    match model
        .freq_axis()
        .and_then(|a| a.pixels_per_unit(viewport.width_px))
    {
        Ok(ppu) => Some(ppu),
        Err(e) => {
            log::warn!("frequency drag ignored: {e}");
            None
        }
    }
}

fn power_pixels_per_unit(model: &SpectrumModel, viewport: Viewport) -> Option<f64> {
    match model
        .power_axis()
        .and_then(|a| a.pixels_per_unit(viewport.height_px))
    {
        Ok(ppd) => Some(ppd),
        Err(e) => {
            log::warn!("power drag ignored: {e}");
            None
        }
    }
}
