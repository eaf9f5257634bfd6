//! ActionOutcome - Result of resolving one action against one defender

use serde::{Deserialize, Serialize};

/// Whether the action connected
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum OutcomeKind {
    /// The action hit, dealing `damage` before the health clamp
    Hit { damage: f64 },
    /// The action missed; no state changed
    Miss,
}

/// Result of a single action resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Hit or miss, with damage dealt on a hit
    pub kind: OutcomeKind,
    /// Human-readable description for the host's log/flash surface
    pub narrative: String,
    /// Defender health before resolution
    pub health_before: f64,
    /// Defender health after resolution, for the caller to persist
    pub health_after: f64,
    /// Whether this action dropped the defender to zero health
    pub is_killing_blow: bool,
}

impl ActionOutcome {
    /// True if the action connected
    pub fn is_hit(&self) -> bool {
        matches!(self.kind, OutcomeKind::Hit { .. })
    }

    /// Damage dealt, or 0.0 on a miss
    pub fn damage(&self) -> f64 {
        match self.kind {
            OutcomeKind::Hit { damage } => damage,
            OutcomeKind::Miss => 0.0,
        }
    }

    /// Health lost by the defender (after the zero clamp)
    pub fn health_change(&self) -> f64 {
        self.health_after - self.health_before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_deals_no_damage() {
        let outcome = ActionOutcome {
            kind: OutcomeKind::Miss,
            narrative: "A missed B with C!".to_string(),
            health_before: 80.0,
            health_after: 80.0,
            is_killing_blow: false,
        };

        assert!(!outcome.is_hit());
        assert!(outcome.damage().abs() < f64::EPSILON);
        assert!(outcome.health_change().abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_reports_damage() {
        let outcome = ActionOutcome {
            kind: OutcomeKind::Hit { damage: 110.0 },
            narrative: String::new(),
            health_before: 50.0,
            health_after: 0.0,
            is_killing_blow: true,
        };

        assert!(outcome.is_hit());
        assert!((outcome.damage() - 110.0).abs() < f64::EPSILON);
        // Clamped at zero: only 50 health was actually lost
        assert!((outcome.health_change() + 50.0).abs() < f64::EPSILON);
    }
}
