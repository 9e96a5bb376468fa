use std::sync::Arc;

use eframe::egui::{
    Align2, CursorIcon, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use facelace_core::{
    Color, Face, FaceletPosition, Slot, containers::Array54, index::FaceletSemantics,
};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::{
        layout::{ComponentUnits, LayoutScale},
        net_theme::{self, NetPalette},
    },
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct NetVisualState: u8 {
        const CENTER = 0b0000_0001;
        const SAME_COLOR = 0b0000_0010;
        const PAINT_BLOCKED = 0b0000_0100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NetCell {
    pub(crate) color: Option<Color>,
    pub(crate) visual_state: NetVisualState,
}

#[derive(Debug, Clone)]
pub(crate) struct CubeNetViewModel {
    cells: Array54<NetCell, FaceletSemantics>,
}

impl CubeNetViewModel {
    #[must_use]
    pub(crate) fn new(cells: Array54<NetCell, FaceletSemantics>) -> Self {
        Self { cells }
    }

    #[must_use]
    pub(crate) fn cell(&self, pos: FaceletPosition) -> &NetCell {
        &self.cells[pos]
    }
}

/// Faces in the order they are drawn, top row first.
pub(crate) const NET_LAYOUT: [[Face; 3]; 2] = [
    [Face::Front, Face::Back, Face::Top],
    [Face::Bottom, Face::Left, Face::Right],
];

const FACE_GAP_RATIO: f32 = 0.4;
const LABEL_HEIGHT_RATIO: f32 = 0.5;
const BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const CENTER_BORDER_WIDTH_RATIO: f32 = 2.0;
const SAME_COLOR_BORDER_WIDTH_RATIO: f32 = 3.0;

#[must_use]
pub(crate) const fn required_units() -> ComponentUnits {
    ComponentUnits::new(
        9.0 + 2.0 * FACE_GAP_RATIO,
        2.0 * (3.0 + LABEL_HEIGHT_RATIO) + FACE_GAP_RATIO,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectiveNetVisualState(NetVisualState);

impl EffectiveNetVisualState {
    fn border(self, palette: &NetPalette, cell_size: f32) -> Stroke {
        let base_width = f32::max(cell_size * BORDER_WIDTH_BASE_RATIO, 1.0);
        if self.0.intersects(NetVisualState::SAME_COLOR) {
            Stroke::new(
                base_width * SAME_COLOR_BORDER_WIDTH_RATIO,
                palette.border_same_color,
            )
        } else if self.0.intersects(NetVisualState::CENTER) {
            Stroke::new(base_width * CENTER_BORDER_WIDTH_RATIO, palette.border_center)
        } else {
            Stroke::new(base_width, palette.border_inactive)
        }
    }

    fn cursor(self) -> Option<CursorIcon> {
        if self.0.intersects(NetVisualState::CENTER) {
            None
        } else if self.0.intersects(NetVisualState::PAINT_BLOCKED) {
            Some(CursorIcon::NotAllowed)
        } else {
            Some(CursorIcon::PointingHand)
        }
    }
}

fn face_origin(origin: Pos2, row: usize, col: usize, cell_size: f32) -> Pos2 {
    #[expect(clippy::cast_precision_loss)]
    let (row, col) = (row as f32, col as f32);
    origin
        + Vec2::new(
            col * (3.0 + FACE_GAP_RATIO) * cell_size,
            row * (3.0 + LABEL_HEIGHT_RATIO + FACE_GAP_RATIO) * cell_size,
        )
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &CubeNetViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let cell_size = scale.cell_size;
    let style = Arc::clone(ui.style());
    let palette = NetPalette::from_visuals(&style.visuals);
    let (rect, _response) = ui.allocate_exact_size(scale.size_of(required_units()), Sense::hover());

    let painter = ui.painter();
    for (row, faces) in NET_LAYOUT.iter().enumerate() {
        for (col, &face) in faces.iter().enumerate() {
            let face_min = face_origin(rect.min, row, col, cell_size);
            painter.text(
                face_min + Vec2::new(1.5 * cell_size, 0.5 * LABEL_HEIGHT_RATIO * cell_size),
                Align2::CENTER_CENTER,
                face.name(),
                FontId::proportional(cell_size * 0.35),
                palette.face_label,
            );
            let grid_min = face_min + Vec2::new(0.0, LABEL_HEIGHT_RATIO * cell_size);

            for slot in Slot::ALL {
                let pos = FaceletPosition::new(face, slot);
                let cell_min = grid_min
                    + Vec2::new(
                        f32::from(slot.col()) * cell_size,
                        f32::from(slot.row()) * cell_size,
                    );
                let cell_rect = Rect::from_min_size(cell_min, Vec2::splat(cell_size));
                draw_cell(painter, cell_rect, vm.cell(pos), &palette, cell_size);

                let vs = EffectiveNetVisualState(vm.cell(pos).visual_state);
                let Some(cursor) = vs.cursor() else {
                    continue;
                };
                let response = ui
                    .interact(cell_rect, ui.id().with(("facelet", pos.index())), Sense::click())
                    .on_hover_cursor(cursor);
                if response.clicked() {
                    action_queue.request(Action::PaintFacelet(pos));
                } else if response.secondary_clicked() {
                    action_queue.request(Action::ClearFacelet(pos));
                }
            }
        }
    }
}

fn draw_cell(painter: &Painter, rect: Rect, cell: &NetCell, palette: &NetPalette, cell_size: f32) {
    let vs = EffectiveNetVisualState(cell.visual_state);
    let fill = cell
        .color
        .map_or(palette.unset_bg, net_theme::facelet_fill);
    painter.rect_filled(rect, 0.0, fill);

    if let Some(color) = cell.color
        && cell.visual_state.contains(NetVisualState::CENTER)
    {
        painter.circle_filled(
            rect.center(),
            cell_size * 0.08,
            net_theme::contrast_text(color),
        );
    }

    if vs.0.contains(NetVisualState::PAINT_BLOCKED) && cell.color.is_none() {
        painter.rect_filled(rect.shrink(cell_size * 0.3), 0.0, palette.blocked_overlay);
    }

    painter.rect_stroke(rect, 0.0, vs.border(palette, cell_size), StrokeKind::Inside);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_covers_every_face_once() {
        let mut faces: Vec<Face> = NET_LAYOUT.iter().flatten().copied().collect();
        faces.sort_by_key(|face| face.index());
        assert_eq!(faces, Face::ALL.to_vec());
    }

    #[test]
    fn centers_are_not_interactive() {
        let vs = EffectiveNetVisualState(NetVisualState::CENTER | NetVisualState::SAME_COLOR);
        assert_eq!(vs.cursor(), None);
    }

    #[test]
    fn blocked_cells_show_not_allowed_cursor() {
        let vs = EffectiveNetVisualState(NetVisualState::PAINT_BLOCKED);
        assert_eq!(vs.cursor(), Some(CursorIcon::NotAllowed));
        let vs = EffectiveNetVisualState(NetVisualState::empty());
        assert_eq!(vs.cursor(), Some(CursorIcon::PointingHand));
    }
}
