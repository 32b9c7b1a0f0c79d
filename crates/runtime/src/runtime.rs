//! Turn orchestrator.
//!
//! Drives one monster turn through its two states:
//!
//! - **Suspended**: statuses were resolved and the actor is defeated or
//!   crowd-controlled. The turn ends with an empty decision.
//! - **Eligible**: the AI provider decides, the decision is validated and
//!   handed to the executor.
//!
//! Every turn ends after exactly one of: suspension, an item, an ability.

use game_content::ArchetypeRegistry;
use game_core::{
    BattleState, CombatantId, Decision, DrawSource, ExecuteError, GameConfig, GameError, PcgRng,
    validate_decision,
};

use crate::api::{ActionExecutor, Result, RuntimeError, StatusResolver};
use crate::providers::ai::{AiDecision, ArchetypeAiProvider, DecisionSource};
use crate::providers::{StandardExecutor, TickingStatusResolver};

/// Why a turn was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SuspendReason {
    CrowdControlled,
    Defeated,
}

/// Result of the decision half of a turn.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnPlan {
    Suspended(SuspendReason),
    Decided(AiDecision),
}

impl TurnPlan {
    /// The decision handed to the executor; empty when suspended.
    pub fn decision(&self) -> Decision {
        match self {
            Self::Suspended(_) => Decision::empty(),
            Self::Decided(decided) => decided.decision.clone(),
        }
    }
}

/// Result of a whole turn.
///
/// Execution failures do not abort the turn: they come back in `result`.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnOutcome {
    Suspended(SuspendReason),
    Acted {
        decision: Decision,
        source: DecisionSource,
        result: std::result::Result<(), ExecuteError>,
    },
}

impl TurnOutcome {
    pub fn decision(&self) -> Decision {
        match self {
            Self::Suspended(_) => Decision::empty(),
            Self::Acted { decision, .. } => decision.clone(),
        }
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self, Self::Suspended(_))
    }
}

/// Runs monster turns against a [`BattleState`].
///
/// Generic over the two collaborators that mutate the battle: the status
/// resolver (start of turn) and the action executor (end of turn).
#[derive(Debug, Clone)]
pub struct TurnOrchestrator<R = TickingStatusResolver, E = StandardExecutor> {
    provider: ArchetypeAiProvider,
    resolver: R,
    executor: E,
}

impl TurnOrchestrator {
    /// Built-in archetypes with the default resolver and executor.
    pub fn builtin(config: GameConfig) -> Self {
        Self::new(
            ArchetypeAiProvider::builtin(config),
            TickingStatusResolver,
            StandardExecutor::default(),
        )
    }

    pub fn with_registry(config: GameConfig, registry: ArchetypeRegistry) -> Self {
        Self::new(
            ArchetypeAiProvider::new(config, registry),
            TickingStatusResolver,
            StandardExecutor::default(),
        )
    }
}

impl<R: StatusResolver, E: ActionExecutor> TurnOrchestrator<R, E> {
    pub fn new(provider: ArchetypeAiProvider, resolver: R, executor: E) -> Self {
        Self {
            provider,
            resolver,
            executor,
        }
    }

    pub fn provider(&self) -> &ArchetypeAiProvider {
        &self.provider
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    /// Resolves the actor's statuses and decides its turn without executing.
    ///
    /// Statuses are ticked exactly once, suspended or not.
    pub fn decide_turn(
        &mut self,
        state: &mut BattleState,
        actor: CombatantId,
        draws: &mut dyn DrawSource,
        explicit_draw: Option<f64>,
    ) -> Result<TurnPlan> {
        tracing::debug!("Turn start: combatant {} (round {})", actor, state.round);

        let combatant = state
            .combatant_mut(actor)
            .ok_or(RuntimeError::UnknownActor(actor))?;
        let crowd_controlled = self.resolver.resolve(combatant);

        let suspended = if combatant.is_defeated() {
            Some(SuspendReason::Defeated)
        } else if crowd_controlled {
            Some(SuspendReason::CrowdControlled)
        } else {
            None
        };
        if let Some(reason) = suspended {
            tracing::debug!("Combatant {} suspended: {}", actor, reason);
            return Ok(TurnPlan::Suspended(reason));
        }

        let decided = self.provider.decide(state, actor, draws, explicit_draw)?;
        Ok(TurnPlan::Decided(decided))
    }

    /// Decides, validates and executes one turn.
    ///
    /// Only failures to start the turn are errors. A decision rejected by
    /// validation or by the executor is logged and reported in the outcome's
    /// `result`.
    pub fn take_turn(
        &mut self,
        state: &mut BattleState,
        actor: CombatantId,
        draws: &mut dyn DrawSource,
        explicit_draw: Option<f64>,
    ) -> Result<TurnOutcome> {
        let AiDecision { decision, source } =
            match self.decide_turn(state, actor, draws, explicit_draw)? {
                TurnPlan::Suspended(reason) => return Ok(TurnOutcome::Suspended(reason)),
                TurnPlan::Decided(decided) => decided,
            };

        let result = validate_decision(state, actor, &decision)
            .and_then(|()| self.executor.execute(state, actor, &decision));
        if let Err(err) = &result {
            tracing::warn!(
                code = err.error_code(),
                severity = err.severity().as_str(),
                "Combatant {} could not apply {:?}: {}",
                actor,
                decision.action.as_ref().map(|action| action.name()),
                err
            );
        }

        Ok(TurnOutcome::Acted {
            decision,
            source,
            result,
        })
    }

    /// Plays one round for every living monster, then advances the round.
    ///
    /// Monsters act by speed (fastest first), ties broken by id. Each turn
    /// draws from [`PcgRng::for_turn`], so a round is reproducible from the
    /// battle seed and the state it started from.
    pub fn take_round(
        &mut self,
        state: &mut BattleState,
    ) -> Result<Vec<(CombatantId, TurnOutcome)>> {
        let mut order: Vec<(i32, CombatantId)> = state
            .ai
            .party
            .iter()
            .filter(|monster| monster.is_alive() && monster.archetype.is_some())
            .map(|monster| (monster.stats.speed, monster.id))
            .collect();
        order.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        let mut outcomes = Vec::with_capacity(order.len());
        for (_, actor) in order {
            let mut draws = PcgRng::for_turn(state.battle_seed, state.round, actor.0);
            let outcome = self.take_turn(state, actor, &mut draws, None)?;
            outcomes.push((actor, outcome));
        }

        state.round += 1;
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RecordingExecutor;
    use game_content::catalog::{default_hero_party, default_monster_side};
    use game_core::{Inventory, ScriptedDraws, Side, StatusEffect, StatusKind};

    fn battle() -> BattleState {
        BattleState::new(
            default_monster_side().unwrap(),
            Side::new(default_hero_party().unwrap(), Inventory::empty()),
        ).unwrap()
        .with_seed(11)
    }

    fn recording() -> TurnOrchestrator<TickingStatusResolver, RecordingExecutor> {
        TurnOrchestrator::new(
            ArchetypeAiProvider::builtin(GameConfig::default()),
            TickingStatusResolver,
            RecordingExecutor::default(),
        )
    }

    #[test]
    fn stunned_monster_is_suspended_and_ticked() {
        let mut state = battle();
        state
            .combatant_mut(CombatantId(2))
            .unwrap()
            .statuses
            .add(StatusEffect::new(StatusKind::Stunned, 2, 0));

        let mut orchestrator = recording();
        let outcome = orchestrator
            .take_turn(&mut state, CombatantId(2), &mut ScriptedDraws::new([]), None)
            .unwrap();
        assert_eq!(outcome, TurnOutcome::Suspended(SuspendReason::CrowdControlled));
        assert_eq!(
            state
                .combatant(CombatantId(2))
                .unwrap()
                .statuses
                .iter()
                .next()
                .unwrap()
                .remaining_turns,
            1
        );
        assert!(orchestrator.executor().executed.is_empty());
    }

    #[test]
    fn unknown_actor_is_an_error() {
        let mut state = battle();
        let err = recording()
            .take_turn(&mut state, CombatantId(50), &mut ScriptedDraws::new([]), None)
            .unwrap_err();
        assert_eq!(err, RuntimeError::UnknownActor(CombatantId(50)));
    }

    #[test]
    fn round_order_is_speed_then_id() {
        let mut state = battle();
        let outcomes = recording().take_round(&mut state).unwrap();
        let order: Vec<u32> = outcomes.iter().map(|(id, _)| id.0).collect();
        assert_eq!(order, [1, 2, 3, 4]);
        assert_eq!(state.round, 1);
    }
}
