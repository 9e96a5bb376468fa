use facelace_client::MovePlayback;

use crate::{async_work::SolveHandle, state::SubmissionTracker};

// UiState holds ephemeral state (status message, submission, playback). It is not persisted.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) message: Option<StatusMessage>,
    pub(crate) submission: SubmissionTracker,
    pub(crate) playback: MovePlayback,
    pub(crate) in_flight: Option<SolveHandle>,
    pub(crate) settings_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MessageKind {
    Info,
    Warning,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusMessage {
    pub(crate) kind: MessageKind,
    pub(crate) text: String,
}

impl StatusMessage {
    #[must_use]
    pub(crate) fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl UiState {
    pub(crate) fn set_message(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.message = Some(StatusMessage::new(kind, text));
    }
}
