use std::sync::Arc;

use eframe::egui::{Align2, CursorIcon, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use facelace_core::{Color, containers::Array6, index::ColorSemantics};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::{
        layout::{ComponentUnits, LayoutScale},
        net_theme::{self, NetPalette},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Swatch {
    pub(crate) remaining: usize,
    pub(crate) selected: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct PaletteViewModel {
    swatches: Array6<Swatch, ColorSemantics>,
}

impl PaletteViewModel {
    #[must_use]
    pub(crate) fn new(swatches: Array6<Swatch, ColorSemantics>) -> Self {
        Self { swatches }
    }

    #[must_use]
    pub(crate) fn swatch(&self, color: Color) -> &Swatch {
        &self.swatches[color]
    }
}

const SWATCH_SIZE_RATIO: f32 = 0.9;
const COUNT_HEIGHT_RATIO: f32 = 0.4;

#[must_use]
pub(crate) const fn required_units() -> ComponentUnits {
    ComponentUnits::new(6.0 * 1.2, SWATCH_SIZE_RATIO + COUNT_HEIGHT_RATIO)
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &PaletteViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let cell_size = scale.cell_size;
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let palette = NetPalette::from_visuals(visuals);
    let swatch_side = cell_size * SWATCH_SIZE_RATIO;
    let base_width = f32::max(cell_size * 0.03, 1.0);

    ui.spacing_mut().item_spacing = Vec2::new(scale.spacing.x * 2.0, 0.0);
    ui.horizontal(|ui| {
        for color in Color::ALL {
            let swatch = vm.swatch(color);
            let (rect, response) = ui.allocate_exact_size(
                Vec2::new(swatch_side, swatch_side + cell_size * COUNT_HEIGHT_RATIO),
                Sense::click(),
            );
            let square = Rect::from_min_size(rect.min, Vec2::splat(swatch_side));
            let painter = ui.painter();
            painter.rect_filled(square, swatch_side * 0.1, net_theme::facelet_fill(color));

            let stroke = if swatch.selected {
                Stroke::new(base_width * 4.0, palette.border_same_color)
            } else {
                Stroke::new(base_width, palette.border_inactive)
            };
            painter.rect_stroke(square, swatch_side * 0.1, stroke, StrokeKind::Outside);

            let count_color = if swatch.remaining == 0 {
                visuals.weak_text_color()
            } else {
                visuals.text_color()
            };
            painter.text(
                square.center_bottom() + Vec2::new(0.0, cell_size * COUNT_HEIGHT_RATIO * 0.5),
                Align2::CENTER_CENTER,
                swatch.remaining.to_string(),
                FontId::proportional(cell_size * 0.3),
                count_color,
            );

            let response = response
                .on_hover_cursor(CursorIcon::PointingHand)
                .on_hover_text(format!(
                    "{} ({} left, key {})",
                    color.label(),
                    swatch.remaining,
                    color.index() + 1
                ));
            if response.clicked() {
                action_queue.request(Action::SelectColor(color));
            }
        }
    });
}
