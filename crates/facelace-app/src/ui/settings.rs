use eframe::egui::{Context, DragValue, Grid, Id, Modal, RichText, Sides, TextEdit, widgets};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{Settings, SolverSettings},
    ui::icon,
    version,
};

#[derive(Debug, Clone)]
pub(crate) struct SettingsViewModel<'a> {
    settings: &'a Settings,
}

impl<'a> SettingsViewModel<'a> {
    #[must_use]
    pub(crate) fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

pub(crate) fn show(ctx: &Context, vm: &SettingsViewModel, action_queue: &mut ActionRequestQueue) {
    let mut changed = false;
    let mut settings = vm.settings.clone();
    let mut close_clicked = false;

    let modal = Modal::new(Id::new("settings")).show(ctx, |ui| {
        ui.heading(format!("{} Settings", icon::GEAR));
        ui.add_space(4.0);

        let Settings { solver } = &mut settings;
        Grid::new("solver_settings")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Solver endpoint");
                changed |= ui
                    .add(
                        TextEdit::singleline(&mut solver.endpoint)
                            .hint_text(facelace_client::DEFAULT_ENDPOINT)
                            .desired_width(280.0),
                    )
                    .changed();
                ui.end_row();

                ui.label("Timeout");
                let timeout = DragValue::new(&mut solver.timeout_secs)
                    .range(SolverSettings::MIN_TIMEOUT_SECS..=SolverSettings::MAX_TIMEOUT_SECS)
                    .suffix(" s");
                changed |= ui.add(timeout).changed();
                ui.end_row();
            });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Theme");
            widgets::global_theme_preference_buttons(ui);
        });
        ui.add_space(8.0);

        Sides::new().show(
            ui,
            |ui| {
                ui.label(
                    RichText::new(format!("facelace {}", version::build_version()))
                        .small()
                        .weak(),
                );
            },
            |ui| {
                close_clicked = ui.button("Close").clicked();
                if ui.button("Restore defaults").clicked() {
                    *solver = SolverSettings::default();
                    changed = true;
                }
            },
        );
    });

    if changed {
        action_queue.request(Action::UpdateSettings(settings));
    }
    if close_clicked || modal.should_close() {
        action_queue.request(Action::ToggleSettings);
    }
}
