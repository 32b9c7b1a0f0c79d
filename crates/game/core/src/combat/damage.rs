//! Damage calculation and application.

use crate::state::{Combatant, StatusKind};

/// Balance parameters for [`calculate_damage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageParams {
    /// Defense is divided by this before it is subtracted.
    pub defense_divisor: i32,
    /// Multiplier on defense while the target is [`StatusKind::Defending`].
    pub defending_multiplier: i32,
    pub minimum: u32,
}

impl DamageParams {
    pub const DEFAULT: Self = Self {
        defense_divisor: 2,
        defending_multiplier: 2,
        minimum: 1,
    };
}

impl Default for DamageParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Damage dealt by an offensive ability of `magnitude` to `defender`.
///
/// # Formula
///
/// ```text
/// defense = defender.defense * (defending_multiplier if Defending else 1)
/// reduced = magnitude - defense / defense_divisor
/// final   = max(reduced, minimum)
/// ```
pub fn calculate_damage(magnitude: i32, defender: &Combatant, params: DamageParams) -> u32 {
    let mut defense = defender.stats.defense.max(0);
    if defender.statuses.has(StatusKind::Defending) {
        defense = defense.saturating_mul(params.defending_multiplier);
    }
    let reduction = defense / params.defense_divisor.max(1);
    let reduced = magnitude.max(0).saturating_sub(reduction).max(0) as u32;
    reduced.max(params.minimum)
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Ability, CombatantId, CombatantStats, StatusEffect};

    fn defender(defense: i32) -> Combatant {
        Combatant::new(
            CombatantId(9),
            "target",
            CombatantStats::new(10, 5, defense, 1),
            Ability::base_attack(1),
        )
    }

    #[test]
    fn defense_reduces_damage() {
        let params = DamageParams::default();
        assert_eq!(calculate_damage(6, &defender(3), params), 5);
        assert_eq!(calculate_damage(6, &defender(0), params), 6);
        assert_eq!(calculate_damage(1, &defender(8), params), 1);
    }

    #[test]
    fn defending_doubles_defense() {
        let mut target = defender(3);
        target
            .statuses
            .add(StatusEffect::new(StatusKind::Defending, 1, 0));
        assert_eq!(calculate_damage(6, &target, DamageParams::default()), 3);
    }

    #[test]
    fn hp_never_underflows() {
        assert_eq!(apply_damage(3, 5), 0);
        assert_eq!(apply_damage(8, 5), 3);
    }
}
