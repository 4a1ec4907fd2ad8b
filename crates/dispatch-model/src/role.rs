use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Staff roles recognized at login.
///
/// A successful login routes the user to the workflow for their role. The
/// role column in the accounts file is free text; anything outside this
/// enumeration is rejected at login rather than silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    Dispatcher,
    Doctor,
    Nurse,
    Receptionist,
    ItSupport,
    EmergencyCoordinator,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::Dispatcher,
        Role::Doctor,
        Role::Nurse,
        Role::Receptionist,
        Role::ItSupport,
        Role::EmergencyCoordinator,
    ];

    /// Canonical name as stored in the accounts file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Dispatcher => "dispatcher",
            Role::Doctor => "doctor",
            Role::Nurse => "nurse",
            Role::Receptionist => "receptionist",
            Role::ItSupport => "itsupport",
            Role::EmergencyCoordinator => "emergency coordinator",
        }
    }

    /// The workflow a successful login routes this role to.
    pub fn workflow(&self) -> &'static str {
        match self {
            Role::Admin => "hospital management",
            Role::Dispatcher => "patient intake and triage",
            Role::Doctor => "patient diagnosis and search",
            Role::Nurse => "patient status updates",
            Role::Receptionist => "patient intake records",
            Role::ItSupport => "user account administration",
            Role::EmergencyCoordinator => "emergency case coordination",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Parse a role value from the accounts file. Case-insensitive; hyphens
    /// and spaces are interchangeable ("emergency coordinator" and
    /// "emergency-coordinator" both parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "admin" => Ok(Role::Admin),
            "dispatcher" => Ok(Role::Dispatcher),
            "doctor" => Ok(Role::Doctor),
            "nurse" => Ok(Role::Nurse),
            "receptionist" => Ok(Role::Receptionist),
            "itsupport" | "it support" => Ok(Role::ItSupport),
            "emergency coordinator" => Ok(Role::EmergencyCoordinator),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}
