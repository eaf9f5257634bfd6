//! Modifier template configuration loading

use super::ConfigError;
use crate::action::Action;
use crate::error::EngineError;
use crate::modifier::{Modifier, ModifierLibrary};
use crate::types::{Attribute, AttributeSet};
use serde::Deserialize;
use std::path::Path;

/// Container for modifier definitions
#[derive(Debug, Clone, Deserialize)]
struct ModifiersConfig {
    #[serde(default)]
    modifiers: Vec<RawModifier>,
}

/// A modifier as written in TOML, before boundary validation
#[derive(Debug, Clone, Deserialize)]
struct RawModifier {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    cost: u32,
    #[serde(default)]
    bonus: RawAttributeValues,
    #[serde(default)]
    multiplier: RawAttributeValues,
    #[serde(default)]
    actions: Vec<RawAction>,
}

/// Per-attribute values with presence tracked per slot
///
/// Every slot is required in a well-formed record; a missing one is a
/// malformed modifier, caught here rather than deep inside aggregation.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawAttributeValues {
    strength: Option<f64>,
    dexterity: Option<f64>,
    constitution: Option<f64>,
    intelligence: Option<f64>,
    wisdom: Option<f64>,
    charisma: Option<f64>,
}

impl RawAttributeValues {
    fn slot(&self, attr: Attribute) -> Option<f64> {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    fn require(&self, modifier: &str, group: &str) -> Result<AttributeSet, EngineError> {
        let mut set = AttributeSet::default();
        for attr in Attribute::all() {
            let value = self
                .slot(*attr)
                .ok_or_else(|| EngineError::MalformedModifier {
                    name: modifier.to_string(),
                    reason: format!("missing {}.{}", group, attr),
                })?;
            set.set(*attr, value);
        }
        Ok(set)
    }
}

/// An action as written in TOML; the stat name is still a string here
#[derive(Debug, Clone, Deserialize)]
struct RawAction {
    name: String,
    #[serde(default)]
    description: String,
    damage_modifier_stat: String,
    damage_modifier_multiplier: f64,
    accuracy: f64,
    base_damage: f64,
    #[serde(default = "default_target_count")]
    number_of_targets: u32,
}

fn default_target_count() -> u32 {
    1
}

impl RawAction {
    fn validate(self) -> Result<Action, EngineError> {
        Ok(Action {
            damage_modifier_stat: self.damage_modifier_stat.parse()?,
            name: self.name,
            description: self.description,
            damage_modifier_multiplier: self.damage_modifier_multiplier,
            accuracy: self.accuracy,
            base_damage: self.base_damage,
            number_of_targets: self.number_of_targets,
        })
    }
}

impl RawModifier {
    fn validate(self) -> Result<Modifier, EngineError> {
        let bonus = self.bonus.require(&self.name, "bonus")?;
        let multiplier = self.multiplier.require(&self.name, "multiplier")?;
        let actions = self
            .actions
            .into_iter()
            .map(RawAction::validate)
            .collect::<Result<Vec<_>, _>>()?;

        let modifier = Modifier {
            name: self.name,
            description: self.description,
            cost: self.cost,
            bonus,
            multiplier,
            actions,
        };
        modifier.validate()?;
        Ok(modifier)
    }
}

/// Load modifier definitions from a TOML file
pub fn load_modifier_configs(path: &Path) -> Result<ModifierLibrary, ConfigError> {
    let config: ModifiersConfig = super::load_toml(path)?;
    build_library(config)
}

/// Load modifier definitions from a TOML string
pub fn parse_modifier_configs(content: &str) -> Result<ModifierLibrary, ConfigError> {
    let config: ModifiersConfig = super::parse_toml(content)?;
    build_library(config)
}

fn build_library(config: ModifiersConfig) -> Result<ModifierLibrary, ConfigError> {
    let mut library = ModifierLibrary::new();
    for raw in config.modifiers {
        let modifier = raw.validate()?;
        if library.get(&modifier.name).is_some() {
            return Err(ConfigError::ValidationError(format!(
                "duplicate modifier name '{}'",
                modifier.name
            )));
        }
        library.insert(modifier)?;
    }
    Ok(library)
}

/// Get the bundled modifier definitions
pub fn default_modifiers() -> ModifierLibrary {
    let toml = include_str!("../../config/modifiers.toml");
    parse_modifier_configs(toml).unwrap_or_else(|_| {
        ModifierLibrary::from_modifiers([Modifier {
            name: "Unarmed Training".to_string(),
            description: "Bare-handed fundamentals".to_string(),
            cost: 0,
            bonus: AttributeSet::default(),
            multiplier: AttributeSet::default(),
            actions: vec![Action {
                name: "Strike".to_string(),
                description: String::new(),
                damage_modifier_stat: Attribute::Strength,
                damage_modifier_multiplier: 0.5,
                accuracy: 0.9,
                base_damage: 2.0,
                number_of_targets: 1,
            }],
        }])
        .unwrap_or_default()
    })
}
