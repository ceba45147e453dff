// Analyzer trait — the seam between the session store and the network.
//
// The session store only ever talks to this trait. The HTTP client is the
// production implementation; tests drive the store with a scripted mock.

use async_trait::async_trait;

use crate::analysis::error::AnalysisError;
use crate::analysis::models::{AnalysisRequest, AnalysisResult};

/// Trait for sending one message to the scoring service. Implementations
/// must be async because the production path is an HTTP call.
#[async_trait]
pub trait MessageAnalyzer: Send + Sync {
    /// Analyze a single message, returning the normalized result.
    ///
    /// One call, no retries, no caching: a failed call surfaces immediately
    /// to the caller.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}
