//! Default status resolver.

use game_core::{Combatant, StatusResolver};

/// Ticks every active status once and applies the summed per-turn health
/// change, clamped to the health meter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickingStatusResolver;

impl StatusResolver for TickingStatusResolver {
    fn resolve(&mut self, combatant: &mut Combatant) -> bool {
        let tick = combatant.statuses.tick();
        if tick.health_delta != 0 {
            combatant.stats.health.apply_delta(tick.health_delta);
        }
        tracing::trace!(
            combatant = %combatant.id,
            crowd_controlled = tick.crowd_controlled,
            health_delta = tick.health_delta,
            expired = tick.expired,
            "statuses resolved"
        );
        tick.crowd_controlled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Ability, CombatantId, CombatantStats, StatusEffect, StatusKind};

    fn combatant() -> Combatant {
        Combatant::new(
            CombatantId(1),
            "monster",
            CombatantStats::new(8, 5, 2, 1),
            Ability::base_attack(4),
        )
    }

    #[test]
    fn poison_ticks_damage_and_expires() {
        let mut monster = combatant();
        monster
            .statuses
            .add(StatusEffect::new(StatusKind::Poisoned, 2, -2));

        let mut resolver = TickingStatusResolver;
        assert!(!resolver.resolve(&mut monster));
        assert_eq!(monster.health(), 6);
        assert!(!resolver.resolve(&mut monster));
        assert_eq!(monster.health(), 4);
        assert!(monster.statuses.is_empty());
    }

    #[test]
    fn stun_suppresses_and_regeneration_clamps() {
        let mut monster = combatant();
        monster
            .statuses
            .add(StatusEffect::new(StatusKind::Stunned, 1, 0));
        monster
            .statuses
            .add(StatusEffect::new(StatusKind::Regenerating, 2, 1));

        let mut resolver = TickingStatusResolver;
        assert!(resolver.resolve(&mut monster));
        assert_eq!(monster.health(), 8);
        assert!(!monster.is_crowd_controlled());
    }
}
