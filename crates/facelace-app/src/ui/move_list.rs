use eframe::egui::{Button, Label, RichText, ScrollArea, Ui, Vec2, Widget as _};
use facelace_client::MovePlayback;

use crate::{
    action::{Action, ActionRequestQueue},
    ui::{
        icon,
        layout::{ComponentUnits, LayoutScale},
    },
};

#[derive(Debug, Clone)]
pub(crate) struct MoveListViewModel<'a> {
    playback: &'a MovePlayback,
    visible: bool,
}

impl<'a> MoveListViewModel<'a> {
    #[must_use]
    pub(crate) fn new(playback: &'a MovePlayback, visible: bool) -> Self {
        Self { playback, visible }
    }
}

#[must_use]
pub(crate) const fn required_units() -> ComponentUnits {
    ComponentUnits::new(0.0, 1.6)
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &MoveListViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    if !vm.visible {
        return;
    }
    let text_size = scale.cell_size * 0.3;
    let playback = vm.playback;
    let moves = playback.moves();

    ui.spacing_mut().item_spacing = Vec2::new(scale.spacing.x, scale.spacing.y * 0.5);
    ui.horizontal(|ui| {
        let prev = Button::new(RichText::new(format!("{} Prev", icon::ARROW_LEFT)).size(text_size));
        if ui.add_enabled(playback.has_previous(), prev).clicked() {
            action_queue.request(Action::PreviousMove);
        }
        let next = Button::new(RichText::new(format!("Next {}", icon::ARROW_RIGHT)).size(text_size));
        if ui.add_enabled(playback.has_next(), next).clicked() {
            action_queue.request(Action::NextMove);
        }

        let progress = match playback.current() {
            Some((index, mv)) => format!("Move {} of {}: {mv}", index + 1, moves.len()),
            None if moves.is_empty() => "(no moves)".to_owned(),
            None => format!("{} moves", moves.len()),
        };
        ui.label(RichText::new(progress).size(text_size));
    });

    ScrollArea::horizontal().show(ui, |ui| {
        ui.horizontal(|ui| {
            let visuals = ui.visuals().clone();
            for (index, mv) in moves.iter().enumerate() {
                let mut text = RichText::new(mv).size(text_size).monospace();
                if playback.is_highlighted(index) {
                    text = text
                        .strong()
                        .color(visuals.selection.stroke.color)
                        .background_color(visuals.selection.bg_fill);
                }
                Label::new(text).ui(ui);
            }
        });
    });
}
