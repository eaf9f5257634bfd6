//! DerivedStats - Combat statistics computed from effective attributes

use crate::config::DerivationConstants;
use crate::modifier::Modifier;
use crate::stats::ModifierTotals;
use crate::types::{Attribute, AttributeSet};
use serde::{Deserialize, Serialize};

/// The derived combat record produced by attribute resolution
///
/// Current values mirror the max values at derivation time; combat later
/// mutates current health only. The totals are stored alongside so combat
/// can recompute effective attribute values without re-running aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    /// Aggregated bonus/multiplier totals
    pub totals: ModifierTotals,

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
}

/// Derive combat statistics from base attributes and a modifier set
///
/// Pure function; malformed modifiers are rejected at the boundary
/// ([`Modifier::validate`]), never here. Must be re-run (and its output
/// stored on the character) whenever base attributes or the modifier set
/// change.
pub fn derive_stats(base: &AttributeSet, modifiers: &[Modifier]) -> DerivedStats {
    derive_stats_with_constants(base, modifiers, &DerivationConstants::default())
}

/// Derive combat statistics with tunable curve constants
pub fn derive_stats_with_constants(
    base: &AttributeSet,
    modifiers: &[Modifier],
    constants: &DerivationConstants,
) -> DerivedStats {
    let totals = ModifierTotals::aggregate(modifiers);

    let constitution = totals.effective(base, Attribute::Constitution);
    let dexterity = totals.effective(base, Attribute::Dexterity);
    let intelligence = totals.effective(base, Attribute::Intelligence);

    let max_health = constitution;
    let max_health_regen = constants.regen_rate(constitution);
    let max_evasion = constants.evasion_rate(dexterity);
    let max_psi = intelligence;
    let max_psi_regen = constants.regen_rate(intelligence);

    DerivedStats {
        totals,
        health: max_health,
        max_health,
        health_regen: max_health_regen,
        max_health_regen,
        evasion: max_evasion,
        max_evasion,
        psi: max_psi,
        max_psi,
        psi_regen: max_psi_regen,
        max_psi_regen,
    }
}
