//! Log entry type for activity tracking

use super::ids::LogEntryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A log entry recording an applied operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID for this log entry
    pub id: LogEntryId,

    /// When the operation occurred
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "move task")
    pub op: String,

    /// The normalized input parameters
    pub input: Value,

    /// The result
    pub output: Value,

    /// Who performed the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// How long the operation took
    pub duration_ms: u64,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(
        op: impl Into<String>,
        input: Value,
        output: Value,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: LogEntryId::new(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            duration_ms,
        }
    }

    /// Set the actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_creation() {
        let entry = LogEntry::new(
            "add task",
            serde_json::json!({"column_id": "todo"}),
            serde_json::json!({"id": "abc123"}),
            None,
            3,
        );

        assert_eq!(entry.op, "add task");
        assert_eq!(entry.duration_ms, 3);
        assert!(entry.actor.is_none());
        assert_eq!(entry.id.as_str().len(), 26);
    }

    #[test]
    fn test_log_entry_with_actor() {
        let entry = LogEntry::new("move column", Value::Null, Value::Null, None, 0)
            .with_actor("alice");

        assert_eq!(entry.actor, Some("alice".into()));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["actor"], "alice");
    }
}
