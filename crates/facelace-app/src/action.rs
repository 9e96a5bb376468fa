use std::mem;

use facelace_core::{Color, FaceletPosition};

use crate::{
    async_work::SolveResult,
    state::{RequestToken, Settings},
};

#[derive(Debug)]
pub(crate) enum Action {
    SelectColor(Color),
    PaintFacelet(FaceletPosition),
    ClearFacelet(FaceletPosition),
    Reset,
    Submit,
    ApplySolveResponse {
        token: RequestToken,
        result: SolveResult,
    },
    NextMove,
    PreviousMove,
    UpdateSettings(Settings),
    ToggleSettings,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::NextMove);
        queue.request(Action::Reset);

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], Action::NextMove));
        assert!(matches!(drained[1], Action::Reset));

        assert!(queue.take_all().is_empty());
    }
}
