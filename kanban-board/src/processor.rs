//! KanbanOperationProcessor - runs operations with write-through and logging
//!
//! Every operation that changes the board is mirrored to storage before the
//! processor returns and then recorded in the activity log. No-ops are
//! neither persisted nor logged. A failed write is reported through tracing
//! and otherwise ignored: in-memory state is kept and nothing is retried.

use crate::context::KanbanContext;
use crate::operation::{Execute, ExecutionResult};
use crate::types::LogEntry;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Applies operations to a `KanbanContext`
#[derive(Debug, Clone, Default)]
pub struct KanbanOperationProcessor {
    /// Attributed on every log entry when set
    actor: Option<String>,
}

impl KanbanOperationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute operations to an actor, e.g. `"alice"` or `"agent[session]"`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Execute an operation, persist the result and log it
    pub fn process<O>(&self, op: &O, ctx: &mut KanbanContext) -> O::Output
    where
        O: Execute<KanbanContext>,
    {
        let start = Instant::now();
        let op_string = op.op_string();

        let value = match op.execute(ctx) {
            ExecutionResult::Logged { value } => value,
            ExecutionResult::Unlogged { value } => {
                debug!(op = %op_string, "operation left the board unchanged");
                return value;
            }
        };

        if let Err(e) = ctx.persist() {
            warn!(op = %op_string, error = %e, "failed to persist board state");
        }

        let input = serde_json::to_value(op).unwrap_or(Value::Null);
        let output = serde_json::to_value(&value).unwrap_or(Value::Null);
        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            op = %op_string,
            version = ctx.store().version(),
            duration_ms,
            "applied operation"
        );
        ctx.append_activity(LogEntry::new(
            op_string,
            input,
            output,
            self.actor.clone(),
            duration_ms,
        ));

        value
    }
}
