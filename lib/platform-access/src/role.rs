//! Platform roles.
//!
//! Roles form a closed set. Stored labels are matched exactly, so a
//! misspelled or differently-cased label never maps onto a real role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse-grained role attached to a user's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Learner or regular platform user.
    User,
    /// Dashboard administrator.
    Admin,
}

impl Role {
    /// Every role the platform knows about.
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    /// Returns the canonical storage label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Returns true if this role has admin privileges.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Maps an optional stored label to a role.
    ///
    /// Missing and unrecognized labels both yield `None`.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Option<Self> {
        label.and_then(|l| l.parse().ok())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role label is not one of the known roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    /// The label that failed to parse.
    pub label: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.label)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError {
                label: s.to_string(),
            })
    }
}
