use facelace_core::{Color, FaceletPosition};
use facelace_store::{StoreError, encode, validate};

use crate::{
    action::{Action, ActionRequestQueue},
    async_work::{self, SolveFailure, SolveRequest, SolveResult},
    state::{AppState, MessageKind, RequestToken, Settings, UiState},
};

pub(crate) const SELECT_COLOR_FIRST: &str = "Select a color first.";

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };

    match action {
        Action::SelectColor(color) => ctx.select_color(color),
        Action::PaintFacelet(pos) => ctx.paint_facelet(pos),
        Action::ClearFacelet(pos) => ctx.clear_facelet(pos),
        Action::Reset => ctx.reset(),
        Action::Submit => ctx.submit(),
        Action::ApplySolveResponse { token, result } => ctx.apply_solve_response(token, result),
        Action::NextMove => {
            ctx.ui_state.playback.next();
        }
        Action::PreviousMove => {
            ctx.ui_state.playback.previous();
        }
        Action::UpdateSettings(settings) => ctx.update_settings(settings),
        Action::ToggleSettings => ctx.ui_state.settings_open = !ctx.ui_state.settings_open,
    }
}

impl ActionContext<'_> {
    fn select_color(&mut self, color: Color) {
        self.app_state.selected_color = Some(color);
        self.app_state.mark_dirty();
        self.ui_state.message = None;
    }

    fn paint_facelet(&mut self, pos: FaceletPosition) {
        let Some(color) = self.app_state.selected_color else {
            self.ui_state
                .set_message(MessageKind::Warning, SELECT_COLOR_FIRST);
            return;
        };
        match self.app_state.store.set_color(pos, color) {
            Ok(operation) => {
                if operation.is_set() {
                    self.app_state.mark_dirty();
                }
                self.ui_state.message = None;
            }
            Err(err @ StoreError::CapacityRejected { .. }) => {
                self.ui_state
                    .set_message(MessageKind::Warning, err.to_string());
            }
            Err(err) => log::debug!("ignored paint at {pos}: {err}"),
        }
    }

    fn clear_facelet(&mut self, pos: FaceletPosition) {
        match self.app_state.store.clear(pos) {
            Ok(operation) => {
                if operation.is_removed() {
                    self.app_state.mark_dirty();
                }
            }
            Err(err) => log::debug!("ignored clear at {pos}: {err}"),
        }
    }

    fn reset(&mut self) {
        self.app_state.store.reset();
        self.app_state.selected_color = None;
        self.app_state.mark_dirty();
        self.ui_state.message = None;
        self.ui_state.playback.clear();
        self.ui_state.submission.cancel();
        self.ui_state.in_flight = None;
    }

    fn submit(&mut self) {
        if !self.ui_state.submission.begin_validation() {
            log::info!("submit ignored: a solve request is already in flight");
            return;
        }

        let state = self.app_state.store.snapshot();
        if let Err(err) = validate(&state) {
            log::info!("submit rejected: {err}");
            self.ui_state.submission.reject_invalid();
            self.ui_state.set_message(MessageKind::Error, err.to_string());
            return;
        }

        self.ui_state.submission.begin_encoding();
        let cube = match encode(&state) {
            Ok(cube) => cube,
            Err(err) => {
                log::error!("failed to encode a validated cube: {err}");
                self.ui_state.submission.fail_encoding();
                self.ui_state
                    .set_message(MessageKind::Error, format!("Error: {err}"));
                return;
            }
        };

        let token = self.ui_state.submission.begin_request();
        let config = self.app_state.settings.solver.client_config();
        log::info!("submitting cube {cube} to {}", config.endpoint);
        self.ui_state.playback.clear();

        match async_work::enqueue(SolveRequest {
            token,
            cube,
            config,
        }) {
            Ok(handle) => {
                self.ui_state.in_flight = Some(handle);
                self.ui_state.set_message(MessageKind::Info, "Solving...");
            }
            Err(err) => self.apply_solve_response(token, Err(err.into())),
        }
    }

    fn apply_solve_response(&mut self, token: RequestToken, result: SolveResult) {
        let solved = result.is_ok();
        if !self.ui_state.submission.complete(token, solved) {
            log::warn!("dropping stale solve response {token:?}");
            return;
        }

        match result {
            Ok(solution) => {
                log::info!("solved in {} moves", solution.moves.len());
                let text = if solution.moves.is_empty() {
                    "The cube is already solved.".to_owned()
                } else {
                    format!("Solution: {}", solution.moves)
                };
                self.ui_state.playback.load(solution.moves);
                self.ui_state.set_message(MessageKind::Success, text);
            }
            Err(SolveFailure::Solve(facelace_client::SolveError::Rejected { status, message })) => {
                log::info!("solver rejected the cube (HTTP {status}): {message}");
                self.ui_state
                    .set_message(MessageKind::Error, format!("Error solving: {message}"));
            }
            Err(SolveFailure::Solve(facelace_client::SolveError::Transport(err))) => {
                log::error!("solve request failed: {err}");
                self.ui_state
                    .set_message(MessageKind::Error, format!("Error contacting solver: {err}"));
            }
            Err(SolveFailure::Work(err)) => {
                log::error!("solve request failed: {err}");
                self.ui_state
                    .set_message(MessageKind::Error, format!("Error contacting solver: {err}"));
            }
        }
    }

    fn update_settings(&mut self, settings: Settings) {
        if self.app_state.settings != settings {
            self.app_state.settings = settings;
            self.app_state.mark_dirty();
        }
    }
}
