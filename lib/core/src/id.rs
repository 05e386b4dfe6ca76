//! Strongly-typed identifiers for dashboard entities.
//!
//! Identifiers wrap a ULID and render with a short type prefix
//! (`usr_01H...`). `FromStr` accepts either the prefixed or the bare form;
//! stored IDs always use the prefixed form and are read back with
//! `parse_stored`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Ulid);

        impl $name {
            /// Creates a new ID with a freshly generated ULID.
            #[must_use]
            pub fn new() -> Self {
                Self(Ulid::new())
            }

            /// Wraps an existing ULID.
            #[must_use]
            pub const fn from_ulid(ulid: Ulid) -> Self {
                Self(ulid)
            }

            /// Returns the underlying ULID.
            #[must_use]
            pub const fn as_ulid(&self) -> Ulid {
                self.0
            }

            /// Display prefix for this ID type.
            #[must_use]
            pub const fn prefix() -> &'static str {
                $prefix
            }

            /// Parses an ID as persisted in the database.
            ///
            /// Only the exact `Display` form is accepted, so the parsed ID
            /// writes back as the same string.
            pub fn parse_stored(s: &str) -> Result<Self, ParseIdError> {
                let id: Self = s.parse()?;
                if id.to_string() != s {
                    return Err(ParseIdError {
                        id_type: stringify!($name),
                        reason: format!("'{s}' is not in stored form '{id}'"),
                    });
                }
                Ok(id)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}_{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let ulid_str = s
                    .strip_prefix(concat!($prefix, "_"))
                    .unwrap_or(s);

                Ulid::from_str(ulid_str)
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        reason: e.to_string(),
                    })
            }
        }
    };
}

define_id!(
    /// Unique identifier for a platform user.
    UserId,
    "usr"
);

define_id!(
    /// Unique identifier for a task authored from the dashboard.
    TaskId,
    "task"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_renders_with_prefix() {
        assert!(UserId::new().to_string().starts_with("usr_"));
        assert!(TaskId::new().to_string().starts_with("task_"));
    }

    #[test]
    fn parse_accepts_prefixed_form() {
        let id = TaskId::new();
        let parsed: TaskId = id.to_string().parse().expect("should parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_accepts_bare_ulid() {
        let ulid = Ulid::new();
        let id: UserId = ulid.to_string().parse().expect("should parse");
        assert_eq!(id.as_ulid(), ulid);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "usr_definitely-not-a-ulid"
            .parse::<UserId>()
            .expect_err("should fail");
        assert_eq!(err.id_type, "UserId");
    }

    #[test]
    fn foreign_prefix_is_rejected() {
        let task = TaskId::new();
        assert!(task.to_string().parse::<UserId>().is_err());
    }

    #[test]
    fn stored_form_round_trips() {
        let stored = UserId::new().to_string();
        let id = UserId::parse_stored(&stored).expect("should parse");
        assert_eq!(id.to_string(), stored);
    }

    #[test]
    fn stored_form_rejects_bare_and_lowercase() {
        let ulid = Ulid::new();
        assert!(UserId::parse_stored(&ulid.to_string()).is_err());

        let lowercase = format!("usr_{}", ulid.to_string().to_lowercase());
        let err = UserId::parse_stored(&lowercase).expect_err("should fail");
        assert_eq!(err.id_type, "UserId");
    }

    #[test]
    fn serializes_as_bare_ulid() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id.as_ulid()));
    }
}
