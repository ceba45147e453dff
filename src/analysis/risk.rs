// Pure display mappings derived from a result — no state here.
//
// The model's label is free-form; Verdict folds it into the three buckets
// the renderer knows how to color. RiskTier buckets the 0-100 display score.

use std::fmt;

/// Display classification of a free-form model label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Scam,
    Safe,
    Other,
}

impl Verdict {
    /// Case-insensitive fold of a model label. "scam" is a scam, "not_scam"
    /// and "ham" are safe, anything else is passed through as Other.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "scam" => Verdict::Scam,
            "not_scam" | "ham" => Verdict::Safe,
            _ => Verdict::Other,
        }
    }
}

/// Human-readable form of a model label. Unknown labels pass through untouched.
pub fn pretty_label(raw: &str) -> String {
    match Verdict::from_label(raw) {
        Verdict::Scam => "Scam".to_string(),
        Verdict::Safe => "Likely Safe".to_string(),
        Verdict::Other => raw.to_string(),
    }
}

/// Risk tier thresholds over the 0-100 display score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Determine the tier from a display score (0-100).
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 60 => RiskTier::High,
            s if s >= 30 => RiskTier::Medium,
            _ => RiskTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_exact_boundary_high() {
        assert_eq!(RiskTier::from_score(60), RiskTier::High);
    }

    #[test]
    fn tier_just_below_high() {
        assert_eq!(RiskTier::from_score(59), RiskTier::Medium);
    }

    #[test]
    fn tier_exact_boundary_medium() {
        assert_eq!(RiskTier::from_score(30), RiskTier::Medium);
    }

    #[test]
    fn tier_just_below_medium() {
        assert_eq!(RiskTier::from_score(29), RiskTier::Low);
    }

    #[test]
    fn tier_endpoints() {
        assert_eq!(RiskTier::from_score(0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(100), RiskTier::High);
    }

    #[test]
    fn tier_display_matches_as_str() {
        for tier in [RiskTier::Low, RiskTier::Medium, RiskTier::High] {
            assert_eq!(tier.to_string(), tier.as_str());
        }
    }

    #[test]
    fn verdict_is_case_insensitive() {
        assert_eq!(Verdict::from_label("SCAM"), Verdict::Scam);
        assert_eq!(Verdict::from_label("scam"), Verdict::Scam);
        assert_eq!(Verdict::from_label("Scam"), Verdict::Scam);
        assert_eq!(Verdict::from_label("HAM"), Verdict::Safe);
        assert_eq!(Verdict::from_label("Not_Scam"), Verdict::Safe);
    }

    #[test]
    fn unknown_label_is_other() {
        assert_eq!(Verdict::from_label("phishing"), Verdict::Other);
        assert_eq!(Verdict::from_label(""), Verdict::Other);
    }

    #[test]
    fn pretty_label_maps_known_buckets() {
        assert_eq!(pretty_label("scam"), "Scam");
        assert_eq!(pretty_label("not_scam"), "Likely Safe");
        assert_eq!(pretty_label("ham"), "Likely Safe");
    }

    #[test]
    fn pretty_label_passes_unknown_through() {
        assert_eq!(pretty_label("phishing"), "phishing");
        assert_eq!(pretty_label(""), "");
    }
}
