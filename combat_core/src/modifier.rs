//! Modifier - A learnable bundle of attribute adjustments and actions

use crate::action::Action;
use crate::error::EngineError;
use crate::types::AttributeSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A reusable attribute-adjustment template
///
/// Modifiers are created administratively and attached to any number of
/// characters; the combat and derivation logic never mutates them. The
/// `multiplier` set holds *increments* to a character's running multiplier
/// total (which starts at 1.0), not standalone factors - two modifiers each
/// contributing 0.5 combine to a 2.0 multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modifier {
    /// Display name, also the lookup key in a [`ModifierLibrary`]
    pub name: String,
    /// Flavour description
    pub description: String,
    /// Acquisition cost in stat points
    pub cost: u32,
    /// Additive per-attribute bonuses
    pub bonus: AttributeSet,
    /// Additive per-attribute multiplier contributions
    pub multiplier: AttributeSet,
    /// Actions available to any character holding this modifier
    pub actions: Vec<Action>,
}

impl Modifier {
    /// Boundary validation: every per-attribute value must be finite.
    ///
    /// Derivation assumes well-formed modifiers; callers feeding external
    /// data (config files, host records) run this first.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.bonus.is_finite() {
            return Err(EngineError::MalformedModifier {
                name: self.name.clone(),
                reason: "non-finite bonus value".to_string(),
            });
        }
        if !self.multiplier.is_finite() {
            return Err(EngineError::MalformedModifier {
                name: self.name.clone(),
                reason: "non-finite multiplier value".to_string(),
            });
        }
        Ok(())
    }
}

/// Shared modifier templates, looked up by name
///
/// Characters reference modifiers by name rather than owning them; the
/// library is the single place templates live.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModifierLibrary {
    modifiers: HashMap<String, Modifier>,
}

impl ModifierLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        ModifierLibrary::default()
    }

    /// Build a library from validated templates
    pub fn from_modifiers(modifiers: impl IntoIterator<Item = Modifier>) -> Result<Self, EngineError> {
        let mut library = ModifierLibrary::new();
        for modifier in modifiers {
            library.insert(modifier)?;
        }
        Ok(library)
    }

    /// Insert a template, validating it first
    pub fn insert(&mut self, modifier: Modifier) -> Result<(), EngineError> {
        modifier.validate()?;
        self.modifiers.insert(modifier.name.clone(), modifier);
        Ok(())
    }

    /// Look up a template by name
    pub fn get(&self, name: &str) -> Option<&Modifier> {
        self.modifiers.get(name)
    }

    /// Resolve a list of names to templates, erroring on the first unknown
    pub fn resolve(&self, names: &[String]) -> Result<Vec<Modifier>, EngineError> {
        names
            .iter()
            .map(|name| {
                self.get(name)
                    .cloned()
                    .ok_or_else(|| EngineError::UnknownModifier(name.clone()))
            })
            .collect()
    }

    /// Number of templates held
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    /// True if the library holds no templates
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Iterate over all templates
    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.modifiers.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Attribute;

    fn plain_modifier(name: &str) -> Modifier {
        Modifier {
            name: name.to_string(),
            description: String::new(),
            cost: 1,
            bonus: AttributeSet::default(),
            multiplier: AttributeSet::default(),
            actions: Vec::new(),
        }
    }

    #[test]
    fn test_validate_accepts_plain_modifier() {
        assert!(plain_modifier("Training").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut modifier = plain_modifier("Broken");
        modifier.bonus.set(Attribute::Strength, f64::INFINITY);
        let err = modifier.validate().unwrap_err();
        assert!(matches!(err, EngineError::MalformedModifier { .. }));
    }

    #[test]
    fn test_library_insert_rejects_malformed() {
        let mut modifier = plain_modifier("Broken");
        modifier.multiplier.set(Attribute::Wisdom, f64::NAN);

        let mut library = ModifierLibrary::new();
        assert!(library.insert(modifier).is_err());
        assert!(library.is_empty());
    }

    #[test]
    fn test_library_resolve_unknown_name() {
        let library = ModifierLibrary::from_modifiers([plain_modifier("Training")]).unwrap();

        let err = library
            .resolve(&["Training".to_string(), "Missing".to_string()])
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownModifier(name) if name == "Missing"));
    }
}
