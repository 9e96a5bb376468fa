use eframe::egui::{Label, RichText, Ui, Vec2, Widget as _};

use crate::{
    state::{MessageKind, StatusMessage},
    ui::{
        icon,
        layout::{ComponentUnits, LayoutScale},
    },
};

#[derive(Debug, Clone)]
pub(crate) struct StatusLineViewModel<'a> {
    message: Option<&'a StatusMessage>,
    requesting: bool,
}

impl<'a> StatusLineViewModel<'a> {
    #[must_use]
    pub(crate) fn new(message: Option<&'a StatusMessage>, requesting: bool) -> Self {
        Self {
            message,
            requesting,
        }
    }
}

#[must_use]
pub(crate) fn required_units() -> ComponentUnits {
    ComponentUnits::new(0.0, 0.6)
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel, scale: &LayoutScale) {
    let cell_size = scale.cell_size;
    ui.spacing_mut().item_spacing = Vec2::new(scale.spacing.x, 0.0);
    ui.horizontal(|ui| {
        let Some(message) = vm.message else {
            return;
        };
        if vm.requesting {
            ui.spinner();
        }
        let visuals = ui.visuals();
        let (glyph, color) = match message.kind {
            MessageKind::Info => (icon::INFO, visuals.text_color()),
            MessageKind::Warning => (icon::WARNING, visuals.warn_fg_color),
            MessageKind::Success => (icon::CHECK, visuals.strong_text_color()),
            MessageKind::Error => (icon::CROSS, visuals.error_fg_color),
        };
        Label::new(
            RichText::new(format!("{glyph} {}", message.text))
                .color(color)
                .size(cell_size * 0.35),
        )
        .wrap()
        .ui(ui);
    });
}
