//! Ambulance recommendation refined by patient age.

use serde::Serialize;

use crate::classify::Tier;

/// Transport recommendation for a classified case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    AdvancedLifeSupport,
    BasicLifeSupport,
    CabService,
    NoImmediateAction,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::AdvancedLifeSupport => "Advanced Life Support Ambulance",
            Recommendation::BasicLifeSupport => "Basic Life Support Ambulance",
            Recommendation::CabService => "Cab Service is sufficient",
            Recommendation::NoImmediateAction => "No immediate action required",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Refine a severity tier into a transport recommendation.
///
/// Total over `(tier, age)`. Patients under 10 or over 50 route to the
/// stronger response at every tier; everyone else steps one level down.
pub fn recommend(tier: Tier, age: u32) -> Recommendation {
    let vulnerable = age < 10 || age > 50;
    match (tier, vulnerable) {
        (Tier::Critical, true) => Recommendation::AdvancedLifeSupport,
        (Tier::Moderate, true) => Recommendation::BasicLifeSupport,
        (_, true) => Recommendation::CabService,
        (Tier::Critical, false) => Recommendation::BasicLifeSupport,
        (Tier::Moderate, false) => Recommendation::CabService,
        (_, false) => Recommendation::NoImmediateAction,
    }
}
