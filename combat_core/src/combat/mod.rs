//! Combat resolver - action resolution against a defender

mod resolution;
mod result;

pub use resolution::{resolve_action, resolve_action_multi, resolve_action_with_rng};
pub use result::{ActionOutcome, OutcomeKind};
