//! Roster - Host-facing registry of characters and modifier templates

use crate::action::Action;
use crate::character::Character;
use crate::combat::{resolve_action_with_rng, ActionOutcome};
use crate::error::EngineError;
use crate::modifier::ModifierLibrary;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One character's health, as surfaced to the host's status feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    pub name: String,
    pub health: f64,
    pub max_health: f64,
}

/// Characters by name plus the shared modifier library
///
/// This is the seam the host calls through: it resolves identities to
/// records, runs combat, and stores the single resulting mutation (the
/// defender's new health). The host must not invoke combat concurrently
/// for the same defender; the roster holds no internal locking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    characters: HashMap<String, Character>,
    library: ModifierLibrary,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Roster::default()
    }

    /// Create a roster over an existing modifier library
    pub fn with_library(library: ModifierLibrary) -> Self {
        Roster {
            characters: HashMap::new(),
            library,
        }
    }

    /// Add or replace a character
    pub fn insert(&mut self, character: Character) {
        self.characters.insert(character.name.clone(), character);
    }

    /// Look up a character by name
    pub fn get(&self, name: &str) -> Option<&Character> {
        self.characters.get(name)
    }

    /// Remove a character, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<Character> {
        self.characters.remove(name)
    }

    /// The shared modifier library
    pub fn library(&self) -> &ModifierLibrary {
        &self.library
    }

    /// Number of characters in the roster
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// True if the roster holds no characters
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Resolve an action between two named characters
    ///
    /// Both lookups happen before any randomness is drawn; a missing name
    /// is [`EngineError::TargetNotFound`] with nothing mutated. On success
    /// the defender's new health is stored and the outcome returned.
    pub fn perform_action(
        &mut self,
        attacker: &str,
        defender: &str,
        action: &Action,
        rng: &mut impl Rng,
    ) -> Result<ActionOutcome, EngineError> {
        let attacker = self
            .characters
            .get(attacker)
            .ok_or_else(|| EngineError::TargetNotFound(attacker.to_string()))?
            .clone();
        let target = self
            .characters
            .get(defender)
            .ok_or_else(|| EngineError::TargetNotFound(defender.to_string()))?;

        let (new_defender, outcome) = resolve_action_with_rng(&attacker, target, action, rng);
        self.characters.insert(defender.to_string(), new_defender);
        Ok(outcome)
    }

    /// Resolve an action against several named defenders
    ///
    /// All names are resolved up front, so an unknown defender fails the
    /// whole invocation before any draw. Defenders past the action's target
    /// count are untouched.
    pub fn perform_action_multi(
        &mut self,
        attacker: &str,
        defenders: &[&str],
        action: &Action,
        rng: &mut impl Rng,
    ) -> Result<Vec<ActionOutcome>, EngineError> {
        for name in defenders {
            if !self.characters.contains_key(*name) {
                return Err(EngineError::TargetNotFound(name.to_string()));
            }
        }

        let mut outcomes = Vec::new();
        for name in defenders.iter().take(action.number_of_targets as usize) {
            outcomes.push(self.perform_action(attacker, name, action, rng)?);
        }
        Ok(outcomes)
    }

    /// Attach a modifier template to a character and rederive its stats
    pub fn learn_modifier(&mut self, character: &str, modifier: &str) -> Result<(), EngineError> {
        if self.library.get(modifier).is_none() {
            return Err(EngineError::UnknownModifier(modifier.to_string()));
        }
        let record = self
            .characters
            .get_mut(character)
            .ok_or_else(|| EngineError::TargetNotFound(character.to_string()))?;

        if !record.modifiers.iter().any(|name| name == modifier) {
            record.modifiers.push(modifier.to_string());
        }
        self.rederive(character)
    }

    /// Detach a modifier from a character and rederive its stats
    pub fn unlearn_modifier(&mut self, character: &str, modifier: &str) -> Result<(), EngineError> {
        let record = self
            .characters
            .get_mut(character)
            .ok_or_else(|| EngineError::TargetNotFound(character.to_string()))?;

        record.modifiers.retain(|name| name != modifier);
        self.rederive(character)
    }

    /// Re-run attribute derivation for a character against the library
    pub fn rederive(&mut self, character: &str) -> Result<(), EngineError> {
        let record = self
            .characters
            .get_mut(character)
            .ok_or_else(|| EngineError::TargetNotFound(character.to_string()))?;

        let modifiers = self.library.resolve(&record.modifiers)?;
        record.rederive(&modifiers);
        Ok(())
    }

    /// Health snapshots for every character, for the host's status feed
    pub fn health_report(&self) -> Vec<HealthSnapshot> {
        let mut report: Vec<HealthSnapshot> = self
            .characters
            .values()
            .map(|character| HealthSnapshot {
                name: character.name.clone(),
                health: character.health,
                max_health: character.max_health,
            })
            .collect();
        report.sort_by(|a, b| a.name.cmp(&b.name));
        report
    }

    /// Health snapshots serialized to JSON for the host's polling endpoint
    pub fn health_report_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.health_report())
    }
}
