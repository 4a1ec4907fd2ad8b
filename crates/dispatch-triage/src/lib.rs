#![deny(unsafe_code)]

//! Symptom severity classification, ambulance recommendation, and dispatch
//! report writing.
//!
//! The whole pipeline is pure apart from the final report write: free-text
//! symptoms map to a severity tier by keyword precedence, the tier and the
//! patient's age map to a transport recommendation, and the combined
//! outcome renders as a labeled-line report.

pub mod classify;
pub mod error;
pub mod recommend;
pub mod report;

pub use classify::{Severity, Tier, classify};
pub use error::TriageError;
pub use recommend::{Recommendation, recommend};
pub use report::DispatchReport;
