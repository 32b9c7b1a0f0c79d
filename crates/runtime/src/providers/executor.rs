//! Default combat rules for applying decisions.

use game_content::catalog::statuses;
use game_core::{
    Ability, Action, BattleState, Capability, CombatantId, DamageParams, Decision, ExecuteError,
    Item, ItemKind, apply_damage, calculate_damage, validate_decision,
};

use crate::api::ActionExecutor;

/// Applies decisions with the built-in combat rules.
///
/// - Offensive abilities deal [`calculate_damage`] to the target, then apply
///   their status if the target survives.
/// - Other abilities apply their status to the target (or the caster), or
///   heal by their magnitude when they carry no status.
/// - Items are consumed from the caster's side inventory and restore health,
///   restore AP or remove a status.
///
/// Every decision is validated before anything is mutated; AP is spent only
/// once the effect is known to apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardExecutor {
    pub damage: DamageParams,
}

impl StandardExecutor {
    pub fn new(damage: DamageParams) -> Self {
        Self { damage }
    }

    fn apply_ability(
        &self,
        state: &mut BattleState,
        actor: CombatantId,
        target: Option<CombatantId>,
        requested: &Ability,
    ) -> Result<(), ExecuteError> {
        let ability = state
            .combatant(actor)
            .and_then(|caster| caster.abilities.get(&requested.name))
            .cloned()
            .ok_or_else(|| ExecuteError::AbilityNotOwned {
                actor,
                ability: requested.name.clone(),
            })?;
        let offensive = ability.has(Capability::OFFENSIVE);
        let recipient_id = match (offensive, target) {
            (_, Some(target)) => target,
            (false, None) => actor,
            (true, None) => {
                return Err(ExecuteError::InvalidEffect {
                    target: actor,
                    action: ability.name,
                    reason: "offensive ability without a target",
                });
            }
        };
        let recipient = state
            .combatant(recipient_id)
            .ok_or(ExecuteError::UnknownTarget {
                target: recipient_id,
            })?;
        let heals = !offensive && ability.applies.is_none();
        if heals && recipient.stats.health.is_full() {
            return Err(ExecuteError::InvalidEffect {
                target: recipient_id,
                action: ability.name,
                reason: "health is already at maximum",
            });
        }

        if !ability.is_base_attack() {
            let caster = state
                .combatant_mut(actor)
                .ok_or(ExecuteError::UnknownActor { actor })?;
            caster
                .stats
                .ability_points
                .apply_delta(-i32::try_from(ability.cost).unwrap_or(i32::MAX));
        }

        let recipient = state
            .combatant_mut(recipient_id)
            .ok_or(ExecuteError::UnknownTarget {
                target: recipient_id,
            })?;
        if offensive {
            let damage = calculate_damage(ability.magnitude, recipient, self.damage);
            let remaining = apply_damage(recipient.health(), damage);
            recipient.stats.health.set(remaining);
            tracing::debug!(
                "Combatant {} hits {} with {} for {} damage ({} HP left)",
                actor,
                recipient_id,
                ability.name,
                damage,
                remaining
            );
        } else if heals {
            recipient.stats.health.apply_delta(ability.magnitude);
            tracing::debug!(
                "Combatant {} heals {} with {} ({} HP)",
                actor,
                recipient_id,
                ability.name,
                recipient.health()
            );
        }

        if let Some(kind) = ability.applies {
            if recipient.is_alive() {
                recipient.statuses.add(statuses::effect(kind));
                tracing::debug!("Combatant {} is now {}", recipient_id, kind);
            }
        }
        Ok(())
    }

    fn apply_item(
        &self,
        state: &mut BattleState,
        actor: CombatantId,
        target: Option<CombatantId>,
        requested: &Item,
    ) -> Result<(), ExecuteError> {
        let side = state
            .side_of_mut(actor)
            .ok_or(ExecuteError::UnknownActor { actor })?;
        let item = side
            .inventory
            .get(&requested.name)
            .map(|slot| slot.item.clone())
            .ok_or_else(|| ExecuteError::ItemUnavailable {
                item: requested.name.clone(),
            })?;
        side.inventory.consume(&item.name);

        let recipient_id = target.unwrap_or(actor);
        let recipient = state
            .combatant_mut(recipient_id)
            .ok_or(ExecuteError::UnknownTarget {
                target: recipient_id,
            })?;
        let strength = i32::try_from(item.strength).unwrap_or(i32::MAX);
        match item.kind {
            ItemKind::Health => recipient.stats.health.apply_delta(strength),
            ItemKind::AbilityPoint => recipient.stats.ability_points.apply_delta(strength),
            ItemKind::StatusCure(status) => {
                recipient.statuses.remove(status);
            }
        }
        tracing::debug!(
            "Combatant {} used {} on {} (HP {}, AP {})",
            actor,
            item.name,
            recipient_id,
            recipient.health(),
            recipient.ability_points()
        );
        Ok(())
    }
}

impl ActionExecutor for StandardExecutor {
    fn execute(
        &mut self,
        state: &mut BattleState,
        actor: CombatantId,
        decision: &Decision,
    ) -> Result<(), ExecuteError> {
        validate_decision(state, actor, decision)?;
        match &decision.action {
            None => Ok(()),
            Some(Action::Ability(ability)) => {
                self.apply_ability(state, actor, decision.target, ability)
            }
            Some(Action::Item(item)) => self.apply_item(state, actor, decision.target, item),
        }
    }
}
