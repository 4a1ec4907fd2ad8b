//! Keyword-driven severity classification of free-text symptom reports.
//!
//! Three fixed keyword tiers are checked in strict priority order: any
//! critical match wins outright, then moderate, then minor. Multiple
//! matches across tiers never combine into a score; only the highest
//! matching tier is reported.
//!
//! Matching lowercases and whitespace-normalizes the input, then looks for
//! each phrase as a substring, so multi-word phrases like "chest pain"
//! match regardless of the surrounding prose.

use serde::Serialize;
use tracing::debug;

/// Phrases indicating a life-threatening presentation.
pub const CRITICAL_KEYWORDS: [&str; 5] = [
    "chest pain",
    "shortness of breath",
    "severe headache",
    "confusion",
    "bleeding",
];

/// Phrases indicating a condition that needs prompt attention.
pub const MODERATE_KEYWORDS: [&str; 5] = [
    "fever",
    "dizziness",
    "nausea",
    "weakness",
    "rapid heartbeat",
];

/// Phrases indicating a self-limiting complaint.
pub const MINOR_KEYWORDS: [&str; 5] = [
    "cough",
    "mild fever",
    "sore throat",
    "body ache",
    "fatigue",
];

/// Severity grade attached to a classified tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity tier assigned by keyword precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Critical,
    Moderate,
    Minor,
    /// No keyword from any tier matched.
    Unclassified,
}

impl Tier {
    /// Condition label shown to the operator.
    pub fn condition_label(&self) -> &'static str {
        match self {
            Tier::Critical => "Critical Condition",
            Tier::Moderate => "Moderate Condition",
            Tier::Minor => "Minor Condition",
            Tier::Unclassified => "No specific condition detected.",
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            Tier::Critical => Some(Severity::High),
            Tier::Moderate => Some(Severity::Medium),
            Tier::Minor => Some(Severity::Low),
            Tier::Unclassified => None,
        }
    }

    /// Recommendation attached to the analysis itself, before any age
    /// refinement (see [`crate::recommend`]).
    pub fn initial_recommendation(&self) -> &'static str {
        match self {
            Tier::Critical => "Advanced Life Support Ambulance",
            Tier::Moderate => "Basic Life Support Ambulance",
            Tier::Minor => "Cab Service or No Immediate Action",
            Tier::Unclassified => "Further evaluation required.",
        }
    }

    /// The labeled analysis block shown to the operator and embedded in the
    /// dispatch report.
    pub fn analysis_text(&self) -> String {
        match self.severity() {
            Some(severity) => format!(
                "{}\nSeverity: {}\nRecommendation: {}",
                self.condition_label(),
                severity,
                self.initial_recommendation()
            ),
            None => format!(
                "{}\nRecommendation: {}",
                self.condition_label(),
                self.initial_recommendation()
            ),
        }
    }
}

/// Classify a free-text symptom description into a severity tier.
///
/// Pure and deterministic; empty or unmatched input classifies as
/// [`Tier::Unclassified`].
pub fn classify(symptoms: &str) -> Tier {
    let normalized = normalize(symptoms);
    let tier = if matches_any(&normalized, &CRITICAL_KEYWORDS) {
        Tier::Critical
    } else if matches_any(&normalized, &MODERATE_KEYWORDS) {
        Tier::Moderate
    } else if matches_any(&normalized, &MINOR_KEYWORDS) {
        Tier::Minor
    } else {
        Tier::Unclassified
    };
    debug!(?tier, "classified symptom report");
    tier
}

fn matches_any(normalized: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| normalized.contains(keyword))
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
