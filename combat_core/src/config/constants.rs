//! Derivation curve constants

use serde::{Deserialize, Serialize};

/// Tunable constants for the derived-stat curves
///
/// Defaults reproduce the shipped balance: regen is a sigmoid crossing 0.5
/// at an effective stat of 100, evasion an inverted sigmoid in dexterity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivationConstants {
    /// Effective stat value where the regen curve crosses 0.5
    #[serde(default = "default_regen_midpoint")]
    pub regen_midpoint: f64,
    /// Width of the regen curve
    #[serde(default = "default_regen_scale")]
    pub regen_scale: f64,
    /// Dexterity scaling inside the evasion curve
    #[serde(default = "default_evasion_scale")]
    pub evasion_scale: f64,
    /// Offset inside the evasion curve
    #[serde(default = "default_evasion_offset")]
    pub evasion_offset: f64,
}

impl Default for DerivationConstants {
    fn default() -> Self {
        DerivationConstants {
            regen_midpoint: 100.0,
            regen_scale: 50.0,
            evasion_scale: 0.01,
            evasion_offset: 2.0,
        }
    }
}

fn default_regen_midpoint() -> f64 {
    100.0
}
fn default_regen_scale() -> f64 {
    50.0
}
fn default_evasion_scale() -> f64 {
    0.01
}
fn default_evasion_offset() -> f64 {
    2.0
}

impl DerivationConstants {
    /// Regen rate in (0, 1): `(tanh((stat - midpoint) / scale) + 1) / 2`
    pub fn regen_rate(&self, effective: f64) -> f64 {
        (((effective - self.regen_midpoint) / self.regen_scale).tanh() + 1.0) / 2.0
    }

    /// Evasion in (0, 1), an inverted sigmoid falling with dexterity:
    /// `1 - (tanh(dex * scale - offset) + 1) / 2`
    ///
    /// The value multiplies accuracy into the hit chance, so a lower value
    /// means a lower chance of being hit.
    pub fn evasion_rate(&self, dexterity: f64) -> f64 {
        1.0 - ((dexterity * self.evasion_scale - self.evasion_offset).tanh() + 1.0) / 2.0
    }
}
