//! # Identifiers
//!
//! Numeric record identifiers. Each is a transparent newtype over `u64` so it
//! serializes as a bare number and parses from path segments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Raw numeric value.
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Authenticated user.
    UserId
);
define_id!(
    /// Workspace (tenant boundary).
    WorkspaceId
);
define_id!(
    /// Task inside a workspace.
    TaskId
);
define_id!(
    /// Subtask inside a task.
    SubtaskId
);
define_id!(
    /// Comment on a task.
    CommentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&TaskId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_id_parses_from_path_segment() {
        let id: WorkspaceId = "7".parse().unwrap();
        assert_eq!(id, WorkspaceId(7));
        assert!("seven".parse::<WorkspaceId>().is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(UserId(3).to_string(), "3");
    }
}
