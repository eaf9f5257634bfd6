//! combat_core - Attribute derivation and combat resolution for game characters
//!
//! This library provides:
//! - Attribute Resolver: base attributes plus learned modifiers aggregated
//!   into effective attributes and derived combat stats (health, evasion,
//!   psi and regen rates)
//! - Combat Resolver: single-draw hit/miss and damage resolution of one
//!   character's action against another
//! - Roster: the host-facing registry resolving names to records
//!
//! Persistence, sessions and rendering belong to the host application; the
//! host hands in character/modifier/action records and persists the derived
//! stats and updated health this crate hands back.

pub mod action;
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod modifier;
pub mod prelude;
pub mod roster;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use action::Action;
pub use character::Character;
pub use combat::{resolve_action, resolve_action_multi, resolve_action_with_rng, ActionOutcome, OutcomeKind};
pub use config::{default_modifiers, ConfigError, DerivationConstants};
pub use error::EngineError;
pub use modifier::{Modifier, ModifierLibrary};
pub use roster::{HealthSnapshot, Roster};
pub use stats::{derive_stats, derive_stats_with_constants, DerivedStats, ModifierTotals};
pub use types::{Attribute, AttributeSet};
