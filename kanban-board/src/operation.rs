//! Operation and Execute traits
//!
//! Operations are structs where the fields ARE the parameters. Each one
//! names itself with a verb and a noun (`"move task"`) and executes
//! synchronously against a context.

use serde::Serialize;

/// Metadata every board operation carries
pub trait Operation: Serialize {
    /// The action, e.g. "add"
    fn verb(&self) -> &'static str;

    /// The entity kind acted on, e.g. "column"
    fn noun(&self) -> &'static str;

    /// Canonical op string, e.g. "add column"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Apply an operation to a context
pub trait Execute<C>: Operation {
    type Output: Serialize;

    fn execute(&self, ctx: &mut C) -> ExecutionResult<Self::Output>;
}

/// Result of executing an operation
///
/// Distinguishes between:
/// - Logged: the board changed and the change must be persisted and audited
/// - Unlogged: nothing changed (unknown id, self-move, ...)
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult<T> {
    /// Operation changed the board
    Logged { value: T },
    /// Operation left the board untouched
    Unlogged { value: T },
}

impl<T> ExecutionResult<T> {
    /// Extract the value
    pub fn into_value(self) -> T {
        match self {
            Self::Logged { value } | Self::Unlogged { value } => value,
        }
    }

    /// Check if this should be persisted and logged
    pub fn should_log(&self) -> bool {
        matches!(self, Self::Logged { .. })
    }
}
