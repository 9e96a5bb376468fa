//! Submit workflow bookkeeping.
//!
//! ```text
//! Idle -> Validating -> Invalid -> Idle
//!                    -> Encoding -> Requesting -> Solved -> Displaying
//!                                              -> Failed -> Idle
//! ```
//!
//! Every request gets a fresh [`RequestToken`]. Only a response carrying the
//! token of the request currently in `Requesting` is accepted; anything else
//! is stale.

/// Identifies one solve request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct RequestToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum SubmissionPhase {
    Idle,
    Validating,
    Invalid,
    Encoding,
    Requesting(RequestToken),
    Solved,
    Failed,
    Displaying,
}

#[derive(Debug)]
pub(crate) struct SubmissionTracker {
    phase: SubmissionPhase,
    issued: u64,
}

impl Default for SubmissionTracker {
    fn default() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            issued: 0,
        }
    }
}

impl SubmissionTracker {
    #[must_use]
    pub(crate) fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    #[must_use]
    pub(crate) fn is_requesting(&self) -> bool {
        self.phase.is_requesting()
    }

    fn transition(&mut self, next: SubmissionPhase) {
        log::debug!("submission {:?} -> {next:?}", self.phase);
        self.phase = next;
    }

    /// Starts validating a submission. Returns `false` while a request is in flight.
    pub(crate) fn begin_validation(&mut self) -> bool {
        if self.is_requesting() {
            return false;
        }
        self.transition(SubmissionPhase::Validating);
        true
    }

    pub(crate) fn reject_invalid(&mut self) {
        debug_assert!(self.phase.is_validating());
        self.transition(SubmissionPhase::Invalid);
        self.transition(SubmissionPhase::Idle);
    }

    pub(crate) fn begin_encoding(&mut self) {
        debug_assert!(self.phase.is_validating());
        self.transition(SubmissionPhase::Encoding);
    }

    pub(crate) fn fail_encoding(&mut self) {
        debug_assert!(self.phase.is_encoding());
        self.transition(SubmissionPhase::Failed);
        self.transition(SubmissionPhase::Idle);
    }

    /// Issues a new token and enters `Requesting`.
    pub(crate) fn begin_request(&mut self) -> RequestToken {
        debug_assert!(self.phase.is_encoding());
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.transition(SubmissionPhase::Requesting(token));
        token
    }

    #[must_use]
    pub(crate) fn accepts(&self, token: RequestToken) -> bool {
        self.phase == SubmissionPhase::Requesting(token)
    }

    /// Records the outcome of the request identified by `token`.
    ///
    /// Returns `false`, changing nothing, if `token` is stale.
    pub(crate) fn complete(&mut self, token: RequestToken, solved: bool) -> bool {
        if !self.accepts(token) {
            return false;
        }
        if solved {
            self.transition(SubmissionPhase::Solved);
            self.transition(SubmissionPhase::Displaying);
        } else {
            self.transition(SubmissionPhase::Failed);
            self.transition(SubmissionPhase::Idle);
        }
        true
    }

    /// Abandons any request in flight. Its response will be treated as stale.
    pub(crate) fn cancel(&mut self) {
        self.issued += 1;
        self.transition(SubmissionPhase::Idle);
    }
}
