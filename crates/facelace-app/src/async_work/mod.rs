//! Background solve requests split by platform.
//!
//! The `native` backend runs the blocking client on a thread per request
//! and reports back over a channel. The `wasm` backend spawns the async
//! client on the browser's event loop and reports back over a oneshot.
//! Either way the app polls a [`SolveHandle`] once per frame.

use facelace_client::{ClientConfig, Solution, SolveError};
use facelace_store::CubeString;

use crate::{
    action::{Action, ActionRequestQueue},
    state::{RequestToken, UiState},
};

mod platform;

pub(crate) use platform::{SolveHandle, enqueue};

/// A cube to post to the solver.
#[derive(Debug, Clone)]
pub(crate) struct SolveRequest {
    pub(crate) token: RequestToken,
    pub(crate) cube: CubeString,
    pub(crate) config: ClientConfig,
}

/// Errors from the background machinery itself, as opposed to the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum WorkError {
    #[display("background worker disconnected")]
    WorkerDisconnected,
}

/// Why a solve request produced no solution.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum SolveFailure {
    #[display("{_0}")]
    Solve(SolveError),
    #[display("{_0}")]
    Work(WorkError),
}

pub(crate) type SolveResult = Result<Solution, SolveFailure>;

/// Polls the request in flight, if any, and queues its result once it arrives.
pub(crate) fn poll_in_flight(ui_state: &mut UiState, action_queue: &mut ActionRequestQueue) {
    let Some(handle) = &mut ui_state.in_flight else {
        return;
    };
    let token = handle.token();
    let result = match handle.poll() {
        Ok(None) => return,
        Ok(Some(result)) => result.map_err(SolveFailure::from),
        Err(err) => Err(err.into()),
    };
    ui_state.in_flight = None;
    action_queue.request(Action::ApplySolveResponse { token, result });
}
