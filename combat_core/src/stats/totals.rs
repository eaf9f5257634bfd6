//! ModifierTotals - Aggregated bonus and multiplier totals per attribute

use crate::modifier::Modifier;
use crate::types::{Attribute, AttributeSet};
use serde::{Deserialize, Serialize};

/// Totals accumulated over a character's modifier set
///
/// Bonuses start at 0.0 and multipliers at 1.0 (the "no modifiers" baseline,
/// 100% of base). Each modifier adds its contributions to both running
/// totals - multiplier contributions accumulate linearly, they are *not*
/// compounded. Two modifiers each contributing 0.5 yield a 2.0 total, not
/// 1.5 * 1.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModifierTotals {
    /// Sum of additive bonuses per attribute
    pub bonus: AttributeSet,
    /// Running multiplier per attribute, starting from 1.0
    pub multiplier: AttributeSet,
}

impl Default for ModifierTotals {
    fn default() -> Self {
        ModifierTotals {
            bonus: AttributeSet::default(),
            multiplier: AttributeSet::uniform(1.0),
        }
    }
}

impl ModifierTotals {
    /// Aggregate totals over a modifier collection
    pub fn aggregate(modifiers: &[Modifier]) -> Self {
        let mut totals = ModifierTotals::default();
        for modifier in modifiers {
            for attr in Attribute::all() {
                totals.bonus.add(*attr, modifier.bonus.get(*attr));
                totals.multiplier.add(*attr, modifier.multiplier.get(*attr));
            }
        }
        totals
    }

    /// Effective attribute value: `base * multiplier + bonus`
    pub fn effective(&self, base: &AttributeSet, attr: Attribute) -> f64 {
        base.get(attr) * self.multiplier.get(attr) + self.bonus.get(attr)
    }
}
