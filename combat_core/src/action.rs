//! Action - A combat maneuver template unlocked by a modifier

use crate::types::Attribute;
use serde::{Deserialize, Serialize};

/// A single thing a character can do to another
///
/// Actions are owned by a [`Modifier`](crate::modifier::Modifier) and shared
/// by every character holding that modifier. The `damage_modifier_stat` is a
/// typed [`Attribute`]: unknown stat names are rejected when the definition
/// is parsed, so a malformed action can never reach combat resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Display name
    pub name: String,
    /// Flavour description
    pub description: String,
    /// Which attacker attribute scales the damage
    pub damage_modifier_stat: Attribute,
    /// Scaling applied to the attacker's effective stat value
    pub damage_modifier_multiplier: f64,
    /// Base chance component; hit chance is `accuracy * defender evasion`
    pub accuracy: f64,
    /// Flat damage before stat scaling
    pub base_damage: f64,
    /// How many defenders one invocation may address
    pub number_of_targets: u32,
}

impl Action {
    /// Damage dealt given the attacker's effective stat value
    pub fn damage_for(&self, stat_value: f64) -> f64 {
        self.base_damage + stat_value * self.damage_modifier_multiplier
    }
}
