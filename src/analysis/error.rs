// Error taxonomy for a single analysis call.
//
// Two kinds, deliberately: validation failures happen before any network
// activity and are fixed by editing the input; transport failures cover
// everything that can go wrong talking to the backend and are fixed by
// retrying once it is reachable. The session store maps each kind to its
// own fixed user-facing message — nothing here ever reaches the user raw.

use thiserror::Error;

/// Failure modes of one analysis call.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The message was empty after trimming whitespace. Raised before any
    /// network call is made.
    #[error("message is empty after trimming whitespace")]
    EmptyMessage,

    /// Network failure, unreachable backend, non-2xx status, or an
    /// unparseable response body. Never retried automatically.
    #[error("backend request failed: {0}")]
    Transport(String),
}

impl AnalysisError {
    /// True for failures the user can fix by editing their input.
    pub fn is_validation(&self) -> bool {
        matches!(self, AnalysisError::EmptyMessage)
    }
}
