//! Strongly-typed identifier value objects.
//!
//! Proposal identifiers are plain strings on the wire. Seed data uses readable
//! ids (`scenario-a`, `D001`) while ids minted at runtime are short random
//! alphanumeric strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

/// Length of a freshly generated identifier.
pub const GENERATED_ID_LEN: usize = 7;

/// Returns a short random lowercase alphanumeric identifier.
fn short_random_id() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(GENERATED_ID_LEN)
        .collect()
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier, returning error if empty.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Creates a fresh random identifier.
            pub fn generate() -> Self {
                Self(short_random_id())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a budget scenario; referenced by `selectedScenarioId`.
    ScenarioId,
    "scenario_id"
);

string_id!(
    /// Identifier of a spend channel within a scenario.
    ChannelId,
    "channel_id"
);

string_id!(
    /// Identifier of a list entry (ICP item, task, decision, milestone).
    EntryId,
    "entry_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_short_and_alphanumeric() {
        let id = ChannelId::generate();
        assert_eq!(id.as_str().len(), GENERATED_ID_LEN);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(EntryId::generate(), EntryId::generate());
    }

    #[test]
    fn new_rejects_blank_ids() {
        let result = ScenarioId::new("   ");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "scenario_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn seed_ids_are_preserved_verbatim() {
        let id = ScenarioId::new("scenario-a").unwrap();
        assert_eq!(id.to_string(), "scenario-a");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = EntryId::new("D001").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"D001\"");

        let parsed: EntryId = serde_json::from_str("\"D001\"").unwrap();
        assert_eq!(parsed, id);
    }
}
