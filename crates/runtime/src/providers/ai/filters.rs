//! Availability filters: which abilities can be paid for, which enemies can
//! be hit.

use game_core::{Ability, Affordability, Combatant};

/// Abilities the actor can pay for under `rule`, in ownership order.
///
/// The base attack is always included.
pub fn affordable_abilities(actor: &Combatant, rule: Affordability) -> Vec<&Ability> {
    let ability_points = actor.ability_points();
    actor
        .abilities
        .iter()
        .filter(|ability| rule.allows(ability, ability_points))
        .collect()
}

/// Members of `roster` with health above zero, in roster order.
pub fn living_targets<'a>(roster: impl IntoIterator<Item = &'a Combatant>) -> Vec<&'a Combatant> {
    roster
        .into_iter()
        .filter(|combatant| combatant.is_alive())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Capability, CombatantId, CombatantStats};

    fn actor(ability_points: u32) -> Combatant {
        let mut actor = Combatant::new(
            CombatantId(1),
            "tester",
            CombatantStats::new(8, 5, 2, 1),
            Ability::base_attack(4),
        );
        actor
            .abilities
            .insert(Ability::new("Lunge", Capability::OFFENSIVE, 4, 5))
            .unwrap();
        actor
            .abilities
            .insert(Ability::new("Defend", Capability::DEFENSIVE, 0, 3))
            .unwrap();
        actor.stats.ability_points.set(ability_points);
        actor
    }

    fn names(abilities: &[&Ability]) -> Vec<String> {
        abilities.iter().map(|a| a.name.clone()).collect()
    }

    #[test]
    fn cost_equal_to_ap_is_affordable_at_most() {
        let actor = actor(4);
        assert_eq!(
            names(&affordable_abilities(&actor, Affordability::AtMost)),
            ["BaseAttack", "Lunge", "Defend"]
        );
        assert_eq!(
            names(&affordable_abilities(&actor, Affordability::StrictlyBelow)),
            ["BaseAttack", "Defend"]
        );
    }

    #[test]
    fn base_attack_survives_zero_ap() {
        let actor = actor(0);
        assert_eq!(
            names(&affordable_abilities(&actor, Affordability::StrictlyBelow)),
            ["BaseAttack"]
        );
    }

    #[test]
    fn defeated_members_are_not_targets() {
        let alive = actor(1);
        let mut fallen = actor(1);
        fallen.id = CombatantId(2);
        fallen.stats.health.set(0);

        let roster = [fallen.clone(), alive.clone()];
        let living = living_targets(roster.iter());
        assert_eq!(living.len(), 1);
        assert_eq!(living[0].id, CombatantId(1));
        assert!(living_targets([&fallen]).is_empty());
        assert!(living_targets(std::iter::empty()).is_empty());
    }
}
