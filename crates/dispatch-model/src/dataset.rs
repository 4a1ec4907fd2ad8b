use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five flat-file tables the dispatch workflow owns.
///
/// Each dataset mirrors one comma-delimited file on disk. Column names are
/// in-memory display metadata only; the files themselves carry no header
/// line, with two historical exceptions: the user accounts file and the
/// seeded emergency file both start with a header row that plain table
/// listings show as data (only the login path skips it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    /// Hospital directory: name, location, ambulance count.
    Hospitals,
    /// Patient records across intake, diagnosis, and status updates.
    Patients,
    /// Login accounts: username, plaintext password, role.
    Users,
    /// Ambulance dispatch queue.
    DispatchRequests,
    /// Emergency cases tracked by the coordinator.
    EmergencyCases,
}

/// Column positions in the patients table.
pub mod patients {
    pub const NAME: usize = 0;
    pub const AGE: usize = 1;
    pub const SYMPTOMS: usize = 2;
    pub const CONTACT: usize = 3;
    pub const DIAGNOSIS: usize = 4;
    pub const PRESCRIPTION: usize = 5;
    pub const STATUS: usize = 6;
}

/// Column positions in the dispatch requests table.
pub mod dispatch_requests {
    pub const STATUS: usize = 3;
}

/// Column positions in the emergency cases table.
pub mod emergency_cases {
    pub const STATUS: usize = 4;
}

impl Dataset {
    pub const ALL: [Dataset; 5] = [
        Dataset::Hospitals,
        Dataset::Patients,
        Dataset::Users,
        Dataset::DispatchRequests,
        Dataset::EmergencyCases,
    ];

    /// File name of the dataset inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::Hospitals => "hospitals.csv",
            Dataset::Patients => "patient_records.csv",
            Dataset::Users => "user_accounts.csv",
            Dataset::DispatchRequests => "dispatch_requests.csv",
            Dataset::EmergencyCases => "emergency_cases.csv",
        }
    }

    /// Display column names, in on-disk field order.
    ///
    /// The patients table carries the full reconciled schema: intake fills
    /// the first four columns, diagnosis fills columns 4-5, and status
    /// updates fill column 6.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Dataset::Hospitals => &["Hospital Name", "Location", "Ambulances"],
            Dataset::Patients => &[
                "Name",
                "Age",
                "Symptoms",
                "Contact",
                "Diagnosis",
                "Prescription",
                "Status",
            ],
            Dataset::Users => &["Username", "Password", "Role"],
            Dataset::DispatchRequests => &["Patient Name", "Location", "Symptoms", "Status"],
            Dataset::EmergencyCases => &[
                "Patient Name",
                "Location",
                "Symptoms",
                "Emergency Level",
                "Status",
            ],
        }
    }

    /// Rows written when a dataset file is created on first use.
    ///
    /// Only the emergency cases file is seeded; its first row is a header
    /// line followed by sample cases, matching the file the coordinator
    /// workflow creates when none exists.
    pub fn seed_rows(&self) -> &'static [&'static [&'static str]] {
        match self {
            Dataset::EmergencyCases => &[
                &["Patient Name", "Location", "Symptoms", "Emergency Level", "Status"],
                &["John Doe", "123 Main St", "Severe Chest Pain", "Critical", "Pending"],
                &["Jane Smith", "456 Elm St", "Difficulty Breathing", "Severe", "Pending"],
                &["Bob Johnson", "789 Pine St", "Fracture", "Moderate", "Pending"],
                &["Alice Brown", "321 Oak Ave", "High Fever", "Moderate", "Pending"],
                &["Charlie White", "654 Maple Dr", "Severe Headache", "Severe", "Pending"],
            ],
            _ => &[],
        }
    }

    /// Canonical lowercase name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Hospitals => "hospitals",
            Dataset::Patients => "patients",
            Dataset::Users => "users",
            Dataset::DispatchRequests => "dispatch-requests",
            Dataset::EmergencyCases => "emergency-cases",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dataset {
    type Err = String;

    /// Parse a dataset name. Case-insensitive; spaces and underscores are
    /// treated as hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "hospitals" => Ok(Dataset::Hospitals),
            "patients" | "patient-records" => Ok(Dataset::Patients),
            "users" | "user-accounts" => Ok(Dataset::Users),
            "dispatch-requests" => Ok(Dataset::DispatchRequests),
            "emergency-cases" => Ok(Dataset::EmergencyCases),
            _ => Err(format!("Unknown dataset: {}", s)),
        }
    }
}
