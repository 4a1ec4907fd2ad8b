//! Credential lookup loaded from the user accounts file.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use dispatch_model::Role;

use crate::error::AuthError;

#[derive(Debug, Clone)]
struct Account {
    password: String,
    role: String,
}

/// `{username -> (password, role)}` mapping read from the accounts file.
///
/// Unlike every other dataset, a missing accounts file is a blocking error:
/// login cannot proceed without accounts, so there is no "start empty"
/// fallback here.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: HashMap<String, Account>,
}

impl AccountDirectory {
    /// Load the accounts table from `path`.
    ///
    /// The first line is a header and is skipped (the accounts file is the
    /// only dataset whose login-side reader does this; the administration
    /// listing of the same file does not). Rows without exactly three
    /// fields are ignored, and a username seen twice keeps the later row.
    pub fn load(path: &Path) -> Result<Self, AuthError> {
        if !path.exists() {
            return Err(AuthError::MissingAccountsFile { path: path.into() });
        }
        let content =
            std::fs::read_to_string(path).map_err(|source| AuthError::io(path, source))?;
        let mut accounts = HashMap::new();
        for line in content.lines().skip(1) {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 3 {
                continue;
            }
            accounts.insert(
                fields[0].to_string(),
                Account {
                    password: fields[1].to_string(),
                    role: fields[2].to_string(),
                },
            );
        }
        debug!(path = %path.display(), count = accounts.len(), "loaded user accounts");
        Ok(Self { accounts })
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Validate a login attempt by exact string equality on username and
    /// password.
    ///
    /// An account whose role column does not parse surfaces as
    /// [`AuthError::UnknownRole`], distinct from a credential failure; the
    /// role is only inspected after the password matches.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Role, AuthError> {
        let account = self
            .accounts
            .get(username)
            .ok_or(AuthError::InvalidCredentials)?;
        if account.password != password {
            debug!(user = username, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }
        match account.role.parse::<Role>() {
            Ok(role) => {
                debug!(user = username, %role, "login successful");
                Ok(role)
            }
            Err(_) => {
                warn!(user = username, role = %account.role, "unrecognized role");
                Err(AuthError::UnknownRole {
                    role: account.role.clone(),
                })
            }
        }
    }
}
