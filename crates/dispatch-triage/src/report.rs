//! Dispatch report assembly and writing.
//!
//! The report is an ephemeral, derived value: it is produced at the end of
//! the triage wizard and written to a single free-form text file that is
//! overwritten on every run, never appended.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::classify::{Tier, classify};
use crate::error::TriageError;
use crate::recommend::{Recommendation, recommend};

/// Outcome of a full triage pass for one patient.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    pub patient_name: String,
    pub age: u32,
    pub contact: String,
    pub symptoms: String,
    pub tier: Tier,
    /// The labeled analysis block, as shown to the operator.
    pub analysis: String,
    pub recommendation: Recommendation,
}

impl DispatchReport {
    /// Run the triage pipeline: classify the symptom text, then refine the
    /// recommendation by age.
    pub fn assess(patient_name: &str, age: u32, contact: &str, symptoms: &str) -> Self {
        let tier = classify(symptoms);
        let recommendation = recommend(tier, age);
        Self {
            patient_name: patient_name.to_string(),
            age,
            contact: contact.to_string(),
            symptoms: symptoms.to_string(),
            tier,
            analysis: tier.analysis_text(),
            recommendation,
        }
    }

    /// The labeled-line report block.
    pub fn render(&self) -> String {
        format!(
            "Dispatch Report:\n\
             Patient Name: {}\n\
             Age: {}\n\
             Contact: {}\n\
             Symptoms: {}\n\
             Analysis Result: {}\n\
             Final Recommendation: {}\n",
            self.patient_name,
            self.age,
            self.contact,
            self.symptoms,
            self.analysis,
            self.recommendation
        )
    }

    /// Overwrite `path` with the rendered report.
    pub fn write(&self, path: &Path) -> Result<(), TriageError> {
        std::fs::write(path, self.render()).map_err(|source| TriageError::io(path, source))?;
        info!(path = %path.display(), "dispatch report written");
        Ok(())
    }
}
