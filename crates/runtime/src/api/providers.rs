//! Collaborator traits the turn orchestrator hands decisions to.
//!
//! Runtime users plug in [`ActionExecutor`] implementations so decisions can
//! be applied by the real combat rules, an animation bridge, or a test
//! recorder. Status ticking goes through [`StatusResolver`].
use game_core::{BattleState, CombatantId, Decision, ExecuteError};

pub use game_core::StatusResolver;

/// Applies a decision to the battle.
///
/// Implementations own every mutation that follows a decision: damage,
/// healing, AP spending, item removal and status application.
pub trait ActionExecutor {
    fn execute(
        &mut self,
        state: &mut BattleState,
        actor: CombatantId,
        decision: &Decision,
    ) -> std::result::Result<(), ExecuteError>;
}

impl<E: ActionExecutor + ?Sized> ActionExecutor for &mut E {
    fn execute(
        &mut self,
        state: &mut BattleState,
        actor: CombatantId,
        decision: &Decision,
    ) -> std::result::Result<(), ExecuteError> {
        (**self).execute(state, actor, decision)
    }
}

/// Executor that applies nothing and records what it was handed.
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    pub executed: Vec<(CombatantId, Decision)>,
}

impl ActionExecutor for RecordingExecutor {
    fn execute(
        &mut self,
        _state: &mut BattleState,
        actor: CombatantId,
        decision: &Decision,
    ) -> std::result::Result<(), ExecuteError> {
        self.executed.push((actor, decision.clone()));
        Ok(())
    }
}
