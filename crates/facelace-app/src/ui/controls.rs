use eframe::egui::{Button, RichText, Ui, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::{
        icon,
        layout::{ComponentUnits, LayoutScale},
    },
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ControlsViewModel {
    can_submit: bool,
    requesting: bool,
    settings_open: bool,
}

impl ControlsViewModel {
    #[must_use]
    pub(crate) fn new(can_submit: bool, requesting: bool, settings_open: bool) -> Self {
        Self {
            can_submit,
            requesting,
            settings_open,
        }
    }
}

#[must_use]
pub(crate) const fn required_units() -> ComponentUnits {
    ComponentUnits::new(0.0, 0.8)
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &ControlsViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let text_size = scale.cell_size * 0.35;
    let min_size = Vec2::new(scale.cell_size * 2.0, scale.cell_size * 0.7);
    ui.spacing_mut().item_spacing = Vec2::new(scale.spacing.x * 2.0, 0.0);
    ui.horizontal(|ui| {
        let reset = Button::new(RichText::new(format!("{} Reset", icon::RESET)).size(text_size))
            .min_size(min_size);
        if ui
            .add(reset)
            .on_hover_text("Clear every painted facelet")
            .clicked()
        {
            action_queue.request(Action::Reset);
        }

        let solve_text = if vm.requesting {
            format!("{} Solving...", icon::HOURGLASS)
        } else {
            "Solve".to_owned()
        };
        let solve = Button::new(RichText::new(solve_text).size(text_size).strong())
            .min_size(min_size);
        if ui.add_enabled(vm.can_submit, solve).clicked() {
            action_queue.request(Action::Submit);
        }

        let settings = Button::selectable(
            vm.settings_open,
            RichText::new(format!("{} Settings", icon::GEAR)).size(text_size),
        )
        .min_size(min_size);
        if ui.add(settings).clicked() {
            action_queue.request(Action::ToggleSettings);
        }
    });
}
