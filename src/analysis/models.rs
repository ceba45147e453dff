// Core data model — the normalized shapes that flow through a session.
//
// These are deliberately separate from the wire types in backend::client:
// the wire tolerates missing fields, while these types carry the normalized
// invariants (trimmed non-empty message, display score derived from the raw
// score at construction).

use serde::Serialize;

use super::error::AnalysisError;

/// A validated message ready to be sent for analysis.
///
/// Holds the trimmed text. Construction fails if nothing is left after
/// trimming, so a request in hand is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    message: String,
}

impl AnalysisRequest {
    pub fn new(text: &str) -> Result<Self, AnalysisError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::EmptyMessage);
        }
        Ok(Self {
            message: trimmed.to_string(),
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Class probabilities reported by the model, folded to two fractions.
///
/// The wire spells the safe class `not_scam` or `ham` depending on the
/// model build; both land in `safe` here.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Probabilities {
    pub scam: f64,
    pub safe: f64,
}

/// A normalized risk assessment for one message.
///
/// `score` is round(raw_score × 100) clamped to 0–100. It is derived once
/// at construction and the fields are private, so the two can never drift
/// apart.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    raw_score: f64,
    score: u8,
    label: String,
    reasons: Vec<String>,
    probabilities: Option<Probabilities>,
}

impl AnalysisResult {
    /// Build a result from raw model output, deriving the display score.
    pub fn new(
        raw_score: f64,
        label: String,
        reasons: Vec<String>,
        probabilities: Option<Probabilities>,
    ) -> Self {
        let score = (raw_score * 100.0).round().clamp(0.0, 100.0) as u8;
        Self {
            raw_score,
            score,
            label,
            reasons,
            probabilities,
        }
    }

    /// Model confidence as received, 0.0 to 1.0.
    pub fn raw_score(&self) -> f64 {
        self.raw_score
    }

    /// Display score, 0 to 100.
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Free-form label from the model ("scam", "not_scam", "ham", ...).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Explanation strings, source order preserved.
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn probabilities(&self) -> Option<&Probabilities> {
        self.probabilities.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_trims_surrounding_whitespace() {
        let request = AnalysisRequest::new("  urgent: verify your account  ").unwrap();
        assert_eq!(request.message(), "urgent: verify your account");
    }

    #[test]
    fn empty_request_is_rejected() {
        assert!(matches!(
            AnalysisRequest::new(""),
            Err(AnalysisError::EmptyMessage)
        ));
    }

    #[test]
    fn whitespace_only_request_is_rejected() {
        assert!(matches!(
            AnalysisRequest::new("  \t\n  "),
            Err(AnalysisError::EmptyMessage)
        ));
    }

    #[test]
    fn score_derived_at_endpoints() {
        assert_eq!(AnalysisResult::new(0.0, String::new(), vec![], None).score(), 0);
        assert_eq!(AnalysisResult::new(1.0, String::new(), vec![], None).score(), 100);
        assert_eq!(AnalysisResult::new(0.5, String::new(), vec![], None).score(), 50);
    }

    #[test]
    fn score_rounds_to_nearest() {
        assert_eq!(AnalysisResult::new(0.444, String::new(), vec![], None).score(), 44);
        assert_eq!(AnalysisResult::new(0.446, String::new(), vec![], None).score(), 45);
    }

    #[test]
    fn out_of_range_raw_score_is_clamped() {
        assert_eq!(AnalysisResult::new(1.2, String::new(), vec![], None).score(), 100);
        assert_eq!(AnalysisResult::new(-0.3, String::new(), vec![], None).score(), 0);
    }

    #[test]
    fn reasons_preserve_source_order() {
        let result = AnalysisResult::new(
            0.9,
            "scam".to_string(),
            vec!["urgency language".to_string(), "suspicious link".to_string()],
            None,
        );
        assert_eq!(result.reasons()[0], "urgency language");
        assert_eq!(result.reasons()[1], "suspicious link");
    }
}
