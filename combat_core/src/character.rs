//! Character - A combatant with base attributes and derived combat stats

use crate::modifier::Modifier;
use crate::stats::{derive_stats, DerivedStats, ModifierTotals};
use crate::types::{Attribute, AttributeSet};
use serde::{Deserialize, Serialize};

/// A player-controlled or independent combatant
///
/// Base attributes are set at creation/leveling and otherwise stable. The
/// bonus/multiplier totals and the derived stat fields are recomputed via
/// [`Character::rederive`] whenever the modifier set changes; combat reads
/// the stored triple through [`Character::effective`] and never re-runs
/// aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Display name, also the lookup key in a roster
    pub name: String,
    /// Flavour description
    pub description: String,

    /// Progression
    pub level: u32,
    pub experience: u64,
    pub unassigned_stat_points: u32,

    /// Base attribute values
    pub base: AttributeSet,
    /// Aggregated totals from the last derivation
    pub totals: ModifierTotals,

    /// Derived combat statistics; combat mutates `health` only
    pub health: f64,
    pub max_health: f64,
    pub health_regen: f64,
    pub max_health_regen: f64,
    pub evasion: f64,
    pub max_evasion: f64,
    pub psi: f64,
    pub max_psi: f64,
    pub psi_regen: f64,
    pub max_psi_regen: f64,

    /// Names of learned modifiers (shared templates, not owned)
    pub modifiers: Vec<String>,

    /// Opaque owning-player identity, if any
    pub player_id: Option<String>,
}

impl Character {
    /// Create a level-1 character, deriving stats from an empty modifier set
    pub fn new(name: impl Into<String>, description: impl Into<String>, base: AttributeSet) -> Self {
        let mut character = Character {
            name: name.into(),
            description: description.into(),
            level: 1,
            experience: 0,
            unassigned_stat_points: 0,
            base,
            totals: ModifierTotals::default(),
            health: 0.0,
            max_health: 0.0,
            health_regen: 0.0,
            max_health_regen: 0.0,
            evasion: 0.0,
            max_evasion: 0.0,
            psi: 0.0,
            max_psi: 0.0,
            psi_regen: 0.0,
            max_psi_regen: 0.0,
            modifiers: Vec::new(),
            player_id: None,
        };
        character.apply_derived(derive_stats(&character.base, &[]));
        character
    }

    /// Effective attribute value from the stored triple:
    /// `base * multiplier + bonus`
    pub fn effective(&self, attr: Attribute) -> f64 {
        self.totals.effective(&self.base, attr)
    }

    /// Recompute derived stats against the given (already resolved and
    /// validated) modifier templates and store the result
    pub fn rederive(&mut self, modifiers: &[Modifier]) {
        self.apply_derived(derive_stats(&self.base, modifiers));
    }

    /// Write a derivation result onto this character
    pub fn apply_derived(&mut self, stats: DerivedStats) {
        self.totals = stats.totals;
        self.health = stats.health;
        self.max_health = stats.max_health;
        self.health_regen = stats.health_regen;
        self.max_health_regen = stats.max_health_regen;
        self.evasion = stats.evasion;
        self.max_evasion = stats.max_evasion;
        self.psi = stats.psi;
        self.max_psi = stats.max_psi;
        self.psi_regen = stats.psi_regen;
        self.max_psi_regen = stats.max_psi_regen;
    }

    /// True while current health is above zero
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soldier() -> Character {
        let mut base = AttributeSet::uniform(50.0);
        base.constitution = 100.0;
        Character::new("Soldier", "A test combatant", base)
    }

    #[test]
    fn test_new_character_current_equals_max() {
        let character = soldier();
        assert!((character.health - 100.0).abs() < f64::EPSILON);
        assert!((character.max_health - 100.0).abs() < f64::EPSILON);
        assert!((character.psi - character.max_psi).abs() < f64::EPSILON);
        assert!((character.evasion - character.max_evasion).abs() < f64::EPSILON);
        assert!(character.is_alive());
    }

    #[test]
    fn test_effective_with_no_modifiers_is_base() {
        let character = soldier();
        assert!((character.effective(Attribute::Strength) - 50.0).abs() < f64::EPSILON);
        assert!((character.effective(Attribute::Constitution) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rederive_updates_stored_totals() {
        let mut character = soldier();
        let mut bonus = AttributeSet::default();
        bonus.constitution = 20.0;
        let modifier = Modifier {
            name: "Conditioning".to_string(),
            description: String::new(),
            cost: 1,
            bonus,
            multiplier: AttributeSet::default(),
            actions: Vec::new(),
        };

        character.rederive(&[modifier]);

        assert!((character.effective(Attribute::Constitution) - 120.0).abs() < f64::EPSILON);
        assert!((character.max_health - 120.0).abs() < f64::EPSILON);
        // Rederivation resets current health to the new max
        assert!((character.health - 120.0).abs() < f64::EPSILON);
    }
}
