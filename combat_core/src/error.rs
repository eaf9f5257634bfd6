//! Engine error taxonomy

use thiserror::Error;

/// Errors surfaced to the host application
///
/// All of these are non-fatal and leave character state untouched: an
/// operation either fully succeeds or reports one of these without having
/// mutated anything.
#[derive(Error, Debug)]
pub enum EngineError {
    /// An action names a damage modifier stat that is not one of the six
    /// attributes. Configuration error - fix the action record.
    #[error("Invalid action definition: unknown damage modifier stat '{0}'")]
    InvalidActionDefinition(String),

    /// Attacker or defender could not be found in the roster
    #[error("Target not found: '{0}'")]
    TargetNotFound(String),

    /// A modifier record is missing a per-attribute slot or holds a
    /// non-finite value. Rejected at the boundary, before aggregation.
    #[error("Malformed modifier '{name}': {reason}")]
    MalformedModifier { name: String, reason: String },

    /// A character tried to learn a modifier the library does not hold
    #[error("Unknown modifier: '{0}'")]
    UnknownModifier(String),
}
