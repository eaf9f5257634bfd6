//! Action resolution - Apply an Action from attacker to defender

use super::result::{ActionOutcome, OutcomeKind};
use crate::action::Action;
use crate::character::Character;
use rand::Rng;

/// Resolve an action against a defender (immutable API)
///
/// Returns the new defender state and the outcome. Both characters must
/// carry already-derived stats; this reads the attacker's stored
/// bonus/multiplier triple and never re-runs modifier aggregation.
///
/// 1. Look up the attacker's effective value for the action's damage
///    modifier stat.
/// 2. `damage = base_damage + stat_value * damage_modifier_multiplier`.
/// 3. `hit_chance = accuracy * defender current evasion`.
/// 4. One uniform draw in [0, 1): below the hit chance, the defender's
///    health drops by the damage, clamped at zero. Otherwise nothing
///    changes.
pub fn resolve_action(
    attacker: &Character,
    defender: &Character,
    action: &Action,
) -> (Character, ActionOutcome) {
    let mut rng = rand::thread_rng();
    resolve_action_with_rng(attacker, defender, action, &mut rng)
}

/// Resolve an action with a provided RNG (for deterministic replay)
pub fn resolve_action_with_rng(
    attacker: &Character,
    defender: &Character,
    action: &Action,
    rng: &mut impl Rng,
) -> (Character, ActionOutcome) {
    let mut new_defender = defender.clone();
    let health_before = new_defender.health;

    let stat_value = attacker.effective(action.damage_modifier_stat);
    let damage = action.damage_for(stat_value);
    let hit_chance = action.accuracy * new_defender.evasion;

    let outcome = if rng.gen::<f64>() < hit_chance {
        new_defender.health = (new_defender.health - damage).max(0.0);
        ActionOutcome {
            kind: OutcomeKind::Hit { damage },
            narrative: format!(
                "{} attacked {} with {}, dealing {} damage!",
                attacker.name, new_defender.name, action.name, damage
            ),
            health_before,
            health_after: new_defender.health,
            is_killing_blow: health_before > 0.0 && !new_defender.is_alive(),
        }
    } else {
        ActionOutcome {
            kind: OutcomeKind::Miss,
            narrative: format!(
                "{} missed {} with {}!",
                attacker.name, new_defender.name, action.name
            ),
            health_before,
            health_after: new_defender.health,
            is_killing_blow: false,
        }
    };

    (new_defender, outcome)
}

/// Resolve an action against several defenders
///
/// Single-target resolution runs once per defender, each consuming its own
/// draw, capped at the action's `number_of_targets`. Defenders past the cap
/// are untouched and produce no outcome.
pub fn resolve_action_multi(
    attacker: &Character,
    defenders: &[&Character],
    action: &Action,
    rng: &mut impl Rng,
) -> Vec<(Character, ActionOutcome)> {
    defenders
        .iter()
        .take(action.number_of_targets as usize)
        .map(|defender| resolve_action_with_rng(attacker, defender, action, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attribute, AttributeSet};
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// RNG state whose first f64 draw is (approximately) `value`
    fn rng_drawing(value: f64) -> StepRng {
        // gen::<f64>() keeps the high 53 bits of a u64 draw
        StepRng::new(((value * (1u64 << 53) as f64) as u64) << 11, 0)
    }

    fn attacker_with_strength(strength: f64) -> Character {
        let mut base = AttributeSet::uniform(10.0);
        base.strength = strength;
        Character::new("Korr", "attacker", base)
    }

    fn defender() -> Character {
        let mut character = Character::new("Mira", "defender", AttributeSet::uniform(100.0));
        character.evasion = 0.5;
        character
    }

    fn heavy_swing() -> Action {
        Action {
            name: "Heavy Swing".to_string(),
            description: String::new(),
            damage_modifier_stat: Attribute::Strength,
            damage_modifier_multiplier: 2.0,
            accuracy: 0.8,
            base_damage: 10.0,
            number_of_targets: 1,
        }
    }

    #[test]
    fn test_hit_below_chance_threshold() {
        // hit chance = 0.8 * 0.5 = 0.4; a 0.3 draw hits
        let attacker = attacker_with_strength(50.0);
        let target = defender();

        let (new_defender, outcome) =
            resolve_action_with_rng(&attacker, &target, &heavy_swing(), &mut rng_drawing(0.3));

        assert!(outcome.is_hit());
        assert!((outcome.damage() - 110.0).abs() < f64::EPSILON);
        assert!((new_defender.health - (target.health - 110.0).max(0.0)).abs() < f64::EPSILON);
        assert_eq!(
            outcome.narrative,
            "Korr attacked Mira with Heavy Swing, dealing 110 damage!"
        );
    }

    #[test]
    fn test_miss_at_chance_threshold() {
        // A 0.5 draw is not below 0.4: miss, health untouched
        let attacker = attacker_with_strength(50.0);
        let target = defender();

        let (new_defender, outcome) =
            resolve_action_with_rng(&attacker, &target, &heavy_swing(), &mut rng_drawing(0.5));

        assert!(!outcome.is_hit());
        assert!((new_defender.health - target.health).abs() < f64::EPSILON);
        assert_eq!(outcome.narrative, "Korr missed Mira with Heavy Swing!");
    }

    #[test]
    fn test_damage_clamps_health_at_zero() {
        let attacker = attacker_with_strength(50.0);
        let mut target = defender();
        target.health = 50.0;

        let (new_defender, outcome) =
            resolve_action_with_rng(&attacker, &target, &heavy_swing(), &mut rng_drawing(0.0));

        assert!(outcome.is_hit());
        assert!((new_defender.health - 0.0).abs() < f64::EPSILON);
        assert!(outcome.is_killing_blow);
        assert!(!new_defender.is_alive());
    }

    #[test]
    fn test_health_never_increases() {
        let attacker = attacker_with_strength(0.0);
        let mut target = defender();
        target.health = 40.0;

        let mut action = heavy_swing();
        action.base_damage = 0.0;
        action.damage_modifier_multiplier = 0.0;

        let (new_defender, _) =
            resolve_action_with_rng(&attacker, &target, &action, &mut rng_drawing(0.0));
        assert!(new_defender.health <= target.health);
    }

    #[test]
    fn test_identical_draws_identical_outcomes() {
        let attacker = attacker_with_strength(35.0);
        let target = defender();
        let action = heavy_swing();

        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            let (def_a, out_a) = resolve_action_with_rng(&attacker, &target, &action, &mut rng_a);
            let (def_b, out_b) = resolve_action_with_rng(&attacker, &target, &action, &mut rng_b);
            assert_eq!(out_a.kind, out_b.kind);
            assert_eq!(out_a.narrative, out_b.narrative);
            assert!((def_a.health - def_b.health).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_multi_target_caps_at_target_count() {
        let attacker = attacker_with_strength(50.0);
        let first = defender();
        let second = defender();
        let third = defender();

        let mut action = heavy_swing();
        action.number_of_targets = 2;

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcomes = resolve_action_multi(&attacker, &[&first, &second, &third], &action, &mut rng);

        assert_eq!(outcomes.len(), 2);
    }

    #[test]
    fn test_uses_current_evasion_not_max() {
        // Current evasion forced to 0.0: the attack can never land
        let attacker = attacker_with_strength(50.0);
        let mut target = defender();
        target.evasion = 0.0;

        let (_, outcome) =
            resolve_action_with_rng(&attacker, &target, &heavy_swing(), &mut rng_drawing(0.0));
        assert!(!outcome.is_hit());
    }
}
