//! Core types - Attribute enumeration and per-attribute value sets

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six base attributes every character has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    /// Get all attributes
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Constitution,
            Attribute::Intelligence,
            Attribute::Wisdom,
            Attribute::Charisma,
        ]
    }

    /// Lowercase name, matching the serde representation
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Dexterity => "dexterity",
            Attribute::Constitution => "constitution",
            Attribute::Intelligence => "intelligence",
            Attribute::Wisdom => "wisdom",
            Attribute::Charisma => "charisma",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = EngineError;

    /// Parse an attribute name as it appears in action definitions.
    ///
    /// Unknown names are a configuration error in the action record, so this
    /// is the one place the string probe happens - everything past this
    /// boundary carries a typed [`Attribute`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strength" => Ok(Attribute::Strength),
            "dexterity" => Ok(Attribute::Dexterity),
            "constitution" => Ok(Attribute::Constitution),
            "intelligence" => Ok(Attribute::Intelligence),
            "wisdom" => Ok(Attribute::Wisdom),
            "charisma" => Ok(Attribute::Charisma),
            _ => Err(EngineError::InvalidActionDefinition(s.to_string())),
        }
    }
}

/// One `f64` slot per attribute
///
/// Used for base attributes, per-modifier bonuses/multiplier contributions,
/// and aggregated totals. `Default` is all zeroes; multiplier totals start
/// from [`AttributeSet::uniform`]`(1.0)` instead.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeSet {
    pub strength: f64,
    pub dexterity: f64,
    pub constitution: f64,
    pub intelligence: f64,
    pub wisdom: f64,
    pub charisma: f64,
}

impl AttributeSet {
    /// Create a set with every slot at the same value
    pub fn uniform(value: f64) -> Self {
        AttributeSet {
            strength: value,
            dexterity: value,
            constitution: value,
            intelligence: value,
            wisdom: value,
            charisma: value,
        }
    }

    /// Get the value for one attribute
    pub fn get(&self, attr: Attribute) -> f64 {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    /// Set the value for one attribute
    pub fn set(&mut self, attr: Attribute, value: f64) {
        match attr {
            Attribute::Strength => self.strength = value,
            Attribute::Dexterity => self.dexterity = value,
            Attribute::Constitution => self.constitution = value,
            Attribute::Intelligence => self.intelligence = value,
            Attribute::Wisdom => self.wisdom = value,
            Attribute::Charisma => self.charisma = value,
        }
    }

    /// Add to the value for one attribute
    pub fn add(&mut self, attr: Attribute, value: f64) {
        self.set(attr, self.get(attr) + value);
    }

    /// True if every slot holds a finite value
    pub fn is_finite(&self) -> bool {
        Attribute::all().iter().all(|a| self.get(*a).is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_round_trip_names() {
        for attr in Attribute::all() {
            assert_eq!(attr.name().parse::<Attribute>().unwrap(), *attr);
        }
    }

    #[test]
    fn test_attribute_unknown_name_is_invalid_action() {
        let err = "luck".parse::<Attribute>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidActionDefinition(_)));
    }

    #[test]
    fn test_attribute_set_get_set() {
        let mut set = AttributeSet::default();
        set.set(Attribute::Wisdom, 12.5);
        set.add(Attribute::Wisdom, 2.5);
        assert!((set.get(Attribute::Wisdom) - 15.0).abs() < f64::EPSILON);
        assert!((set.get(Attribute::Strength)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_uniform_fills_all_slots() {
        let set = AttributeSet::uniform(1.0);
        for attr in Attribute::all() {
            assert!((set.get(*attr) - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_is_finite_rejects_nan() {
        let mut set = AttributeSet::default();
        assert!(set.is_finite());
        set.charisma = f64::NAN;
        assert!(!set.is_finite());
    }
}
