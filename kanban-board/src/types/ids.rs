//! Identifier newtypes and the id generation oracle
//!
//! Column and task ids are opaque: equality-comparable and hashable, never
//! ordered. Persisted boards may carry string ids (`"todo"`) next to integer
//! ids, so deserialization accepts either and normalizes to a string.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ulid::Ulid;

/// Raw persisted id: a JSON string or a JSON integer
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
        }
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id value
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
            }
        }
    };
}

define_id!(
    /// Identifies a column, unique across all columns
    ColumnId
);

define_id!(
    /// Identifies a task, unique across all tasks
    TaskId
);

/// Identifies an activity log entry (always a fresh ULID)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntryId(String);

impl LogEntryId {
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LogEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LogEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of candidate identifiers for new columns and tasks.
///
/// A generator only proposes values. The context rejects any candidate that
/// is already held by a live column or task and asks again, so a generator
/// with collisions (random numbers in a small range, say) is still safe.
pub trait IdGenerator: Send {
    /// Propose a new identifier
    fn generate(&mut self) -> String;
}

/// Default generator producing ULIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UlidGenerator;

impl IdGenerator for UlidGenerator {
    fn generate(&mut self) -> String {
        Ulid::new().to_string()
    }
}

/// Deterministic generator producing `{prefix}{n}` with n counting from 1
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id-")
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String + Send,
{
    fn generate(&mut self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_string_and_integer() {
        let ids: Vec<TaskId> = serde_json::from_str(r#"["abc", 4711, -3]"#).unwrap();
        assert_eq!(ids[0].as_str(), "abc");
        assert_eq!(ids[1].as_str(), "4711");
        assert_eq!(ids[2].as_str(), "-3");
    }

    #[test]
    fn test_id_rejects_other_json() {
        let result: Result<ColumnId, _> = serde_json::from_str("1.5");
        assert!(result.is_err());
        let result: Result<ColumnId, _> = serde_json::from_str("null");
        assert!(result.is_err());
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = ColumnId::from_string("todo");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""todo""#);
        assert_eq!(id.to_string(), "todo");
    }

    #[test]
    fn test_ulid_generator() {
        let mut ids = UlidGenerator;
        let a = ids.generate();
        let b = ids.generate();
        assert_eq!(a.len(), 26);
        assert_ne!(a, b);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new("c");
        assert_eq!(ids.generate(), "c1");
        assert_eq!(ids.generate(), "c2");
    }

    #[test]
    fn test_closure_generator() {
        let mut n = 0;
        let mut ids = move || {
            n += 1;
            n.to_string()
        };
        assert_eq!(IdGenerator::generate(&mut ids), "1");
        assert_eq!(IdGenerator::generate(&mut ids), "2");
    }
}
