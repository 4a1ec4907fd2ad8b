#![deny(unsafe_code)]

//! Core definitions for the dispatch workflow: the flat-file datasets the
//! system owns and the staff roles that operate on them.

pub mod dataset;
pub mod role;

pub use dataset::Dataset;
pub use role::Role;

#[cfg(test)]
mod tests {
    use super::{Dataset, Role};

    #[test]
    fn dataset_parses_case_insensitively() {
        assert_eq!(
            "Dispatch-Requests".parse::<Dataset>().unwrap(),
            Dataset::DispatchRequests
        );
        assert_eq!(
            "emergency cases".parse::<Dataset>().unwrap(),
            Dataset::EmergencyCases
        );
        assert!("triage".parse::<Dataset>().is_err());
    }

    #[test]
    fn every_dataset_has_matching_column_arity() {
        for dataset in Dataset::ALL {
            assert!(!dataset.columns().is_empty(), "{dataset} has no columns");
            assert!(dataset.file_name().ends_with(".csv"));
        }
    }

    #[test]
    fn role_round_trips_through_display() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn role_serializes() {
        let json = serde_json::to_string(&Role::EmergencyCoordinator).expect("serialize role");
        assert_eq!(json, "\"emergency-coordinator\"");
    }
}
