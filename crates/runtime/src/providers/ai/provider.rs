//! Archetype-driven AI decision provider.

use game_content::ArchetypeRegistry;
use game_core::{BattleState, CombatantId, Decision, DrawSource, GameConfig};

use super::items::{self, ItemCheck};
use super::policy::{self, PolicyBranch};
use crate::api::{Result, RuntimeError};
use crate::providers::ai::AiContext;

/// Which layer produced a turn's decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionSource {
    Item(ItemCheck),
    Policy(PolicyBranch),
}

/// A decision for an eligible monster, with its provenance.
#[derive(Clone, Debug, PartialEq)]
pub struct AiDecision {
    pub decision: Decision,
    pub source: DecisionSource,
}

/// Decides turns for monsters from their archetype.
///
/// Two layers run in order:
///
/// 1. **Items**: heal, cure and recover checks against the monster's pinned
///    heuristic profile, or its archetype's when it has none
/// 2. **Policy**: the archetype's tier table, evaluated by one generic
///    evaluator
///
/// The provider only reads the battle. Status resolution and execution
/// belong to the turn orchestrator.
#[derive(Debug, Clone)]
pub struct ArchetypeAiProvider {
    config: GameConfig,
    registry: ArchetypeRegistry,
}

impl ArchetypeAiProvider {
    pub fn new(config: GameConfig, registry: ArchetypeRegistry) -> Self {
        Self { config, registry }
    }

    /// Provider backed by the built-in archetype presets.
    pub fn builtin(config: GameConfig) -> Self {
        let registry = ArchetypeRegistry::builtin(&config);
        Self::new(config, registry)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &ArchetypeRegistry {
        &self.registry
    }

    /// Decides the turn of an eligible monster.
    ///
    /// `explicit_draw` fixes the tier draw; item gates and random picks still
    /// pull from `draws`.
    pub fn decide(
        &self,
        state: &BattleState,
        actor: CombatantId,
        draws: &mut dyn DrawSource,
        explicit_draw: Option<f64>,
    ) -> Result<AiDecision> {
        let kind = state
            .combatant(actor)
            .ok_or(RuntimeError::UnknownActor(actor))?
            .archetype
            .ok_or(RuntimeError::NotAMonster(actor))?;
        let archetype = self
            .registry
            .get(kind)
            .ok_or(RuntimeError::MissingArchetype(kind))?;
        let ctx = AiContext::new(state, actor, &self.config, &archetype.profile)?;

        tracing::debug!(
            "Monster {} ({}) deciding: HP {}/{}, AP {}/{}",
            actor,
            kind,
            ctx.actor.health(),
            ctx.actor.stats.health.maximum(),
            ctx.actor.ability_points(),
            ctx.actor.stats.ability_points.maximum()
        );

        if let Some(chosen) = items::choose_item(&ctx, draws) {
            return Ok(AiDecision {
                decision: Decision::item(chosen.item),
                source: DecisionSource::Item(chosen.check),
            });
        }

        let choice = policy::evaluate(
            &archetype.table,
            ctx.actor,
            ctx.opponents,
            draws,
            explicit_draw,
        );
        Ok(AiDecision {
            decision: choice.decision,
            source: DecisionSource::Policy(choice.branch),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::catalog::{default_hero_party, default_monster_side};
    use game_core::{Inventory, ScriptedDraws, Side};

    fn battle() -> BattleState {
        BattleState::new(
            default_monster_side().unwrap(),
            Side::new(default_hero_party().unwrap(), Inventory::empty()),
        ).unwrap()
    }

    #[test]
    fn heroes_are_not_driven() {
        let provider = ArchetypeAiProvider::builtin(GameConfig::default());
        let err = provider
            .decide(&battle(), CombatantId(101), &mut ScriptedDraws::new([]), None)
            .unwrap_err();
        assert_eq!(err, RuntimeError::NotAMonster(CombatantId(101)));

        let err = provider
            .decide(&battle(), CombatantId(77), &mut ScriptedDraws::new([]), None)
            .unwrap_err();
        assert_eq!(err, RuntimeError::UnknownActor(CombatantId(77)));
    }

    #[test]
    fn missing_archetype_is_reported() {
        let provider = ArchetypeAiProvider::new(GameConfig::default(), ArchetypeRegistry::new());
        let err = provider
            .decide(&battle(), CombatantId(1), &mut ScriptedDraws::new([]), None)
            .unwrap_err();
        assert!(matches!(err, RuntimeError::MissingArchetype(_)));
    }

    #[test]
    fn healthy_monster_goes_straight_to_policy() {
        let provider = ArchetypeAiProvider::builtin(GameConfig::default());
        let mut draws = ScriptedDraws::new([]);
        let decided = provider
            .decide(&battle(), CombatantId(1), &mut draws, Some(1.0))
            .unwrap();
        assert!(matches!(decided.source, DecisionSource::Policy(PolicyBranch::Tier(0))));
        assert_eq!(draws.consumed(), 0);
    }
}
