//! Facelace application shell.
//!
//! # Design Notes
//! - One frame: poll the solve request in flight, apply queued actions, read
//!   shortcuts, draw the screen, apply the actions the UI raised, persist.
//! - The cube, selected color, and settings survive restarts; submission
//!   progress and the move list do not.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};

use crate::{
    action::ActionRequestQueue,
    action_handler, async_work,
    persistence::storage,
    state::{AppState, UiState},
    ui, view_model_builder,
};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct FacelaceApp {
    app_state: AppState,
    ui_state: UiState,
}

impl FacelaceApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let app_state = cc
            .storage
            .and_then(storage::load_state)
            .unwrap_or_default();
        log::info!(
            "solver endpoint: {}",
            app_state.settings.solver.client_config().endpoint
        );
        Self {
            app_state,
            ui_state: UiState::default(),
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for FacelaceApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        storage::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        async_work::poll_in_flight(&mut self.ui_state, &mut action_queue);
        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        if !self.ui_state.settings_open && !ctx.wants_keyboard_input() {
            ctx.input(|i| {
                ui::input::handle_input(i, &mut action_queue);
                action_handler::handle_all(
                    &mut self.app_state,
                    &mut self.ui_state,
                    &mut action_queue,
                );
            });
        }

        let main_screen_vm =
            view_model_builder::build_main_screen_view_model(&self.app_state, &self.ui_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::main_screen::show(ui, &main_screen_vm, &mut action_queue);
        });

        if self.ui_state.settings_open {
            let settings_vm = view_model_builder::build_settings_view_model(&self.app_state);
            ui::settings::show(ctx, &settings_vm, &mut action_queue);
        }

        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        // The worker finishes without any input event, so keep polling.
        if self.ui_state.in_flight.is_some() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }

        self.apply_persistence(frame);
    }
}
