//! Native solve backend: one background thread per request, answering over a channel.
use std::{sync::mpsc, thread};

use facelace_client::{Solution, SolveClient, SolveError};

use super::super::{SolveRequest, WorkError};
use crate::state::RequestToken;

/// A handle for polling a solve request.
pub(crate) struct SolveHandle {
    token: RequestToken,
    receiver: mpsc::Receiver<Result<Solution, SolveError>>,
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
        use mpsc::TryRecvError;

        match self.receiver.try_recv() {
            Ok(result) => Ok(Some(result)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkError::WorkerDisconnected),
        }
    }
}

fn solve(request: &SolveRequest) -> Result<Solution, SolveError> {
    let client = SolveClient::new(&request.config)?;
    client.solve(&request.cube)
}

/// Runs `request` on its own thread and returns a handle for polling its answer.
///
/// A request abandoned by Reset keeps its thread until the client times out,
/// but never delays the requests issued after it.
pub(crate) fn enqueue(request: SolveRequest) -> Result<SolveHandle, WorkError> {
    let token = request.token;
    let (response_tx, response_rx) = mpsc::channel();
    thread::Builder::new()
        .name("facelace-solve".to_owned())
        .spawn(move || {
            let result = solve(&request);
            // The receiver is gone when the request was abandoned.
            let _ = response_tx.send(result);
        })
        .map_err(|err| {
            log::error!("could not start solve thread: {err}");
            WorkError::WorkerDisconnected
        })?;

    Ok(SolveHandle {
        token,
        receiver: response_rx,
    })
}
