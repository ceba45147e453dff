// Session store — the request lifecycle state machine and its observable state.
//
// All mutation funnels through here: the renderer calls submit / clear /
// update_draft and reads snapshots; nothing else touches SessionState. The
// analyzer call is the single suspension point, and a submit that arrives
// while one is in flight is dropped, never queued — at most one outstanding
// analysis at any time.

pub mod history;

use tracing::{debug, warn};

use crate::analysis::error::AnalysisError;
use crate::analysis::models::{AnalysisRequest, AnalysisResult};
use crate::backend::traits::MessageAnalyzer;

use self::history::{History, HistoryEntry};

/// Shown when a submit carries no text after trimming.
pub const EMPTY_MESSAGE_ERROR: &str = "Please paste a message to analyze.";

/// Shown when the analyzer call fails for any transport reason.
pub const BACKEND_ERROR: &str = "Failed to analyze message. Is the backend running?";

/// Where the session is in the request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Everything a renderer can observe. Handed out as a clone, never as a
/// live mutable reference.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub status: Status,
    pub current_message: String,
    pub latest_result: Option<AnalysisResult>,
    pub last_error: Option<String>,
    pub history: History,
}

impl SessionState {
    fn new() -> Self {
        Self {
            status: Status::Idle,
            current_message: String::new(),
            latest_result: None,
            last_error: None,
            history: History::default(),
        }
    }
}

/// Owns the session state and mediates every mutation.
pub struct SessionStore {
    analyzer: Box<dyn MessageAnalyzer>,
    state: SessionState,
}

impl SessionStore {
    pub fn new(analyzer: Box<dyn MessageAnalyzer>) -> Self {
        Self {
            analyzer,
            state: SessionState::new(),
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Cloned snapshot for renderers that outlive the borrow.
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    /// Update the draft text. Pure and synchronous — allowed in any status,
    /// including while a call is in flight.
    pub fn update_draft(&mut self, text: &str) {
        self.state.current_message = text.to_string();
    }

    /// Reset the visible result and error. History is untouched: it only
    /// ever changes through successful submissions and capacity eviction.
    pub fn clear(&mut self) {
        self.state.current_message.clear();
        self.state.latest_result = None;
        self.state.last_error = None;
        self.state.status = Status::Idle;
    }

    /// First half of a submission: the in-flight guard and the empty-input
    /// rule.
    ///
    /// Returns the request to issue, or `None` when nothing should be sent —
    /// either the submit was dropped because an analysis is already in
    /// flight, or the input failed validation and the state already reflects
    /// that.
    pub fn begin_submit(&mut self, text: &str) -> Option<AnalysisRequest> {
        if self.state.status == Status::Loading {
            debug!("Dropping submit while a request is in flight");
            return None;
        }

        self.state.current_message = text.to_string();

        match AnalysisRequest::new(text) {
            Ok(request) => {
                self.state.status = Status::Loading;
                self.state.last_error = None;
                Some(request)
            }
            Err(_) => {
                self.state.status = Status::Failed;
                self.state.last_error = Some(EMPTY_MESSAGE_ERROR.to_string());
                None
            }
        }
    }

    /// Second half of a submission: fold the analyzer outcome into the state.
    ///
    /// On success the result becomes the latest and is recorded in history
    /// with a capture timestamp; on failure the previous result stays
    /// visible and only the error message changes.
    pub fn complete_submit(
        &mut self,
        request: &AnalysisRequest,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) {
        match outcome {
            Ok(result) => {
                debug!(score = result.score(), label = result.label(), "Analysis succeeded");
                self.state.history.record(HistoryEntry {
                    message: request.message().to_string(),
                    result: result.clone(),
                    timestamp: chrono::Utc::now().to_rfc3339(),
                });
                self.state.latest_result = Some(result);
                self.state.status = Status::Succeeded;
            }
            Err(e) => {
                warn!(error = %e, "Analysis failed");
                self.state.last_error = Some(BACKEND_ERROR.to_string());
                self.state.status = Status::Failed;
            }
        }
    }

    /// Submit a message through the analyzer.
    ///
    /// The analyzer call is the only await. A submit while `Loading` is a
    /// no-op; an empty message fails locally without touching the network.
    /// Effects are observed through `state` / `snapshot`.
    pub async fn submit(&mut self, text: &str) {
        let Some(request) = self.begin_submit(text) else {
            return;
        };

        let outcome = self.analyzer.analyze(&request).await;
        self.complete_submit(&request, outcome);
    }
}
