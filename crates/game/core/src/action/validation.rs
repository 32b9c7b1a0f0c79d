//! Pre-execution checks for a [`Decision`].
//!
//! ## Checks
//!
//! - Actor exists; the target (if any) exists and is alive
//! - Abilities are owned and affordable (the base attack always is)
//! - Items are in the actor's inventory and would change something
//!
//! Executors run this before mutating anything; the turn orchestrator runs it
//! too so a rejected decision surfaces as an error value rather than a log line.

use crate::action::{Action, Decision, ExecuteError};
use crate::state::{Ability, BattleState, Combatant, CombatantId, Item, ItemKind, Side};

/// Checks that `decision` can be applied by `actor` against the current state.
pub fn validate_decision(
    state: &BattleState,
    actor: CombatantId,
    decision: &Decision,
) -> Result<(), ExecuteError> {
    let (own_side, _) = state
        .sides_of(actor)
        .ok_or(ExecuteError::UnknownActor { actor })?;
    let Some(action) = &decision.action else {
        return Ok(());
    };
    let actor_state = own_side
        .party
        .get(actor)
        .ok_or(ExecuteError::UnknownActor { actor })?;

    let target = match decision.target {
        Some(id) => {
            let target = state
                .combatant(id)
                .ok_or(ExecuteError::UnknownTarget { target: id })?;
            if target.is_defeated() {
                return Err(ExecuteError::TargetDefeated { target: id });
            }
            Some(target)
        }
        None => None,
    };

    match action {
        Action::Ability(ability) => validate_ability(actor_state, ability),
        Action::Item(item) => validate_item(own_side, target.unwrap_or(actor_state), item),
    }
}

fn validate_ability(actor: &Combatant, ability: &Ability) -> Result<(), ExecuteError> {
    let owned = actor
        .abilities
        .get(&ability.name)
        .ok_or_else(|| ExecuteError::AbilityNotOwned {
            actor: actor.id,
            ability: ability.name.clone(),
        })?;
    if !owned.is_base_attack() && owned.cost > actor.ability_points() {
        return Err(ExecuteError::ResourceShortfall {
            actor: actor.id,
            ability: owned.name.clone(),
            cost: owned.cost,
            available: actor.ability_points(),
        });
    }
    Ok(())
}

fn validate_item(side: &Side, recipient: &Combatant, item: &Item) -> Result<(), ExecuteError> {
    if side.inventory.get(&item.name).is_none_or(|slot| slot.quantity == 0) {
        return Err(ExecuteError::ItemUnavailable {
            item: item.name.clone(),
        });
    }
    if recipient.is_defeated() {
        return Err(ExecuteError::TargetDefeated {
            target: recipient.id,
        });
    }
    let no_effect = |reason| ExecuteError::InvalidEffect {
        target: recipient.id,
        action: item.name.clone(),
        reason,
    };
    match item.kind {
        ItemKind::Health if recipient.stats.health.is_full() => {
            Err(no_effect("health is already at maximum"))
        }
        ItemKind::AbilityPoint if recipient.stats.ability_points.is_full() => {
            Err(no_effect("ability points are already at maximum"))
        }
        ItemKind::StatusCure(status) if !recipient.statuses.has(status) => {
            Err(ExecuteError::MissingStatus {
                target: recipient.id,
                status,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        AbilitySet, Capability, CombatantStats, Inventory, Party, StatusEffect, StatusKind,
    };

    fn fighter(id: u32) -> Combatant {
        let mut combatant = Combatant::new(
            CombatantId(id),
            format!("fighter-{id}"),
            CombatantStats::new(8, 5, 2, 1),
            Ability::base_attack(4),
        );
        combatant
            .abilities
            .insert(Ability::new("HamString", Capability::OFFENSIVE, 4, 6))
            .unwrap();
        combatant
    }

    fn battle(inventory: Inventory) -> BattleState {
        let ai = Side::new(Party::from_members([fighter(1)]).unwrap(), inventory);
        let human = Side::new(Party::from_members([fighter(10)]).unwrap(), Inventory::empty());
        BattleState::new(ai, human).unwrap()
    }

    #[test]
    fn empty_decision_is_always_valid() {
        let state = battle(Inventory::empty());
        assert_eq!(
            validate_decision(&state, CombatantId(1), &Decision::empty()),
            Ok(())
        );
        assert_eq!(
            validate_decision(&state, CombatantId(99), &Decision::empty()),
            Err(ExecuteError::UnknownActor {
                actor: CombatantId(99)
            })
        );
    }

    #[test]
    fn ability_cost_is_checked_against_current_ap() {
        let mut state = battle(Inventory::empty());
        let ham = fighter(1).abilities.get("HamString").cloned().unwrap();
        let decision = Decision::ability(ham, Some(CombatantId(10)));
        assert!(validate_decision(&state, CombatantId(1), &decision).is_ok());

        state
            .combatant_mut(CombatantId(1))
            .unwrap()
            .stats
            .ability_points
            .set(3);
        assert_eq!(
            validate_decision(&state, CombatantId(1), &decision),
            Err(ExecuteError::ResourceShortfall {
                actor: CombatantId(1),
                ability: "HamString".into(),
                cost: 4,
                available: 3,
            })
        );

        let base = AbilitySet::new(Ability::base_attack(4)).base_attack().clone();
        let decision = Decision::ability(base, Some(CombatantId(10)));
        state
            .combatant_mut(CombatantId(1))
            .unwrap()
            .stats
            .ability_points
            .set(0);
        assert!(validate_decision(&state, CombatantId(1), &decision).is_ok());
    }

    #[test]
    fn healing_at_full_health_has_no_effect() {
        let potion = Item::new("Potion", ItemKind::Health, 5);
        let mut inventory = Inventory::empty();
        inventory.add(potion.clone(), 1).unwrap();
        let state = battle(inventory);

        let err = validate_decision(&state, CombatantId(1), &Decision::item(potion)).unwrap_err();
        assert!(matches!(err, ExecuteError::InvalidEffect { .. }));
    }

    #[test]
    fn cure_requires_the_status() {
        let antidote = Item::new("Antidote", ItemKind::StatusCure(StatusKind::Poisoned), 1);
        let mut inventory = Inventory::empty();
        inventory.add(antidote.clone(), 1).unwrap();
        let mut state = battle(inventory);
        let decision = Decision::item(antidote);

        assert_eq!(
            validate_decision(&state, CombatantId(1), &decision),
            Err(ExecuteError::MissingStatus {
                target: CombatantId(1),
                status: StatusKind::Poisoned
            })
        );

        state
            .combatant_mut(CombatantId(1))
            .unwrap()
            .statuses
            .add(StatusEffect::new(StatusKind::Poisoned, 2, -2));
        assert!(validate_decision(&state, CombatantId(1), &decision).is_ok());
    }

    #[test]
    fn defeated_targets_are_rejected() {
        let mut state = battle(Inventory::empty());
        state
            .combatant_mut(CombatantId(10))
            .unwrap()
            .stats
            .health
            .set(0);
        let base = fighter(1).base_attack().clone();
        assert_eq!(
            validate_decision(
                &state,
                CombatantId(1),
                &Decision::ability(base, Some(CombatantId(10)))
            ),
            Err(ExecuteError::TargetDefeated {
                target: CombatantId(10)
            })
        );
    }
}
