mod app_state;
mod settings;
mod submission;
mod ui_state;

pub(crate) use self::{
    app_state::AppState,
    settings::{Settings, SolverSettings},
    submission::{RequestToken, SubmissionPhase, SubmissionTracker},
    ui_state::{MessageKind, StatusMessage, UiState},
};
