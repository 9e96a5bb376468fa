//! WASM solve backend.
//!
//! Requests run on the browser event loop through `spawn_local`; the
//! fetch-backed client never blocks the UI thread.

use facelace_client::{Solution, SolveClient, SolveError};
use futures_channel::oneshot;

use super::super::{SolveRequest, WorkError};
use crate::state::RequestToken;

/// A handle for polling a solve request.
pub(crate) struct SolveHandle {
    token: RequestToken,
    receiver: oneshot::Receiver<Result<Solution, SolveError>>,
}

impl std::fmt::Debug for SolveHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolveHandle")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl SolveHandle {
    #[must_use]
    pub(crate) fn token(&self) -> RequestToken {
        self.token
    }

    /// Returns the solver's answer once it has arrived.
    pub(crate) fn poll(&mut self) -> Result<Option<Result<Solution, SolveError>>, WorkError> {
        self.receiver
            .try_recv()
            .map_err(|oneshot::Canceled| WorkError::WorkerDisconnected)
    }
}

async fn solve(request: SolveRequest) -> Result<Solution, SolveError> {
    let client = SolveClient::new(&request.config)?;
    client.solve_async(&request.cube).await
}

/// Spawns `request` on the event loop and returns a handle for polling its answer.
#[expect(clippy::unnecessary_wraps)]
pub(crate) fn enqueue(request: SolveRequest) -> Result<SolveHandle, WorkError> {
    let token = request.token;
    let (response_tx, response_rx) = oneshot::channel();
    wasm_bindgen_futures::spawn_local(async move {
        let result = solve(request).await;
        let _ = response_tx.send(result);
    });

    Ok(SolveHandle {
        token,
        receiver: response_rx,
    })
}
