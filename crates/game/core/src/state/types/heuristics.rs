//! Per-monster item-use heuristics.
//!
//! Profiles are immutable values. Each archetype owns one, and a monster may
//! pin its own in place of its archetype's. Two monsters of different
//! archetypes can share a battle without overwriting each other's thresholds.

use crate::state::error::StateError;

/// Which probability gates the AP-recovery item check.
///
/// Monsters have always rolled their AP-recovery check against the
/// *heal* chance. `RecoverChance` selects the dedicated parameter instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecoverGate {
    #[default]
    HealChance,
    RecoverChance,
}

/// Thresholds and chances driving the item decision layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeuristicProfile {
    /// Health fraction at or below which a healing item is considered.
    heal_range: f64,
    /// Chance to actually use a healing item once in range.
    heal_chance: f64,
    /// AP fraction at or below which an AP item is considered.
    recover_range: f64,
    recover_chance: f64,
    /// Chance to use a cure while afflicted.
    cure_chance: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    recover_gate: RecoverGate,
}

impl HeuristicProfile {
    /// Builds a profile, rejecting any parameter outside `[0, 1]`.
    pub fn new(
        heal_range: f64,
        heal_chance: f64,
        recover_range: f64,
        recover_chance: f64,
        cure_chance: f64,
    ) -> Result<Self, StateError> {
        let profile = Self {
            heal_range,
            heal_chance,
            recover_range,
            recover_chance,
            cure_chance,
            recover_gate: RecoverGate::default(),
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Const constructor for built-in profiles.
    ///
    /// Out-of-range parameters fail const evaluation instead of returning an
    /// error, so presets declared as `const` are checked at compile time.
    pub const fn preset(
        heal_range: f64,
        heal_chance: f64,
        recover_range: f64,
        recover_chance: f64,
        cure_chance: f64,
    ) -> Self {
        let values = [heal_range, heal_chance, recover_range, recover_chance, cure_chance];
        let mut i = 0;
        while i < values.len() {
            assert!(
                values[i] >= 0.0 && values[i] <= 1.0,
                "heuristic parameters must lie in [0, 1]"
            );
            i += 1;
        }
        Self {
            heal_range,
            heal_chance,
            recover_range,
            recover_chance,
            cure_chance,
            recover_gate: RecoverGate::HealChance,
        }
    }

    pub fn with_recover_gate(mut self, gate: RecoverGate) -> Self {
        self.recover_gate = gate;
        self
    }

    /// Checks that every parameter is a probability.
    ///
    /// Profiles deserialized from content bypass [`HeuristicProfile::new`],
    /// so loaders call this explicitly.
    pub fn validate(&self) -> Result<(), StateError> {
        let fields = [
            ("heal_range", self.heal_range),
            ("heal_chance", self.heal_chance),
            ("recover_range", self.recover_range),
            ("recover_chance", self.recover_chance),
            ("cure_chance", self.cure_chance),
        ];
        for (field, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(StateError::InvalidProbability { field, value });
            }
        }
        Ok(())
    }

    pub fn heal_range(&self) -> f64 {
        self.heal_range
    }

    pub fn heal_chance(&self) -> f64 {
        self.heal_chance
    }

    pub fn recover_range(&self) -> f64 {
        self.recover_range
    }

    pub fn recover_chance(&self) -> f64 {
        self.recover_chance
    }

    pub fn cure_chance(&self) -> f64 {
        self.cure_chance
    }

    pub fn recover_gate(&self) -> RecoverGate {
        self.recover_gate
    }

    /// Probability used by the AP-recovery check under the given gate.
    pub fn recover_gate_chance(&self, gate: RecoverGate) -> f64 {
        match gate {
            RecoverGate::HealChance => self.heal_chance,
            RecoverGate::RecoverChance => self.recover_chance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_parameters() {
        let err = HeuristicProfile::new(0.5, 1.2, 0.3, 0.3, 0.5).unwrap_err();
        assert_eq!(
            err,
            StateError::InvalidProbability {
                field: "heal_chance",
                value: 1.2
            }
        );
        assert!(HeuristicProfile::new(0.5, 0.75, 0.3, -0.1, 0.5).is_err());
        assert!(HeuristicProfile::new(f64::NAN, 0.75, 0.3, 0.3, 0.5).is_err());
    }

    #[test]
    fn recover_gate_selects_parameter() {
        let profile = HeuristicProfile::new(0.5, 0.75, 0.3, 0.25, 0.5).unwrap();
        assert_eq!(profile.recover_gate(), RecoverGate::HealChance);
        assert_eq!(profile.recover_gate_chance(RecoverGate::HealChance), 0.75);
        assert_eq!(profile.recover_gate_chance(RecoverGate::RecoverChance), 0.25);
    }
}
