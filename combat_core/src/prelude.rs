//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Attribute, AttributeSet};

// Data model
pub use crate::action::Action;
pub use crate::character::Character;
pub use crate::modifier::{Modifier, ModifierLibrary};

// Attribute resolver
pub use crate::stats::{derive_stats, DerivedStats, ModifierTotals};

// Combat
pub use crate::combat::{resolve_action, resolve_action_with_rng, ActionOutcome, OutcomeKind};

// Roster
pub use crate::roster::{HealthSnapshot, Roster};

// Config and errors
pub use crate::config::{default_modifiers, ConfigError};
pub use crate::error::EngineError;
