//! Unified error types surfaced by the runtime API.
//!
//! Covers failures to *start* a turn: unknown combatants, combatants with no
//! policy, and state assembly errors. Failures to *apply* a decision are not
//! runtime errors; they travel inside [`TurnOutcome`](crate::TurnOutcome).
use game_core::{ArchetypeKind, CombatantId, StateError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("combatant {0} is not in the battle")]
    UnknownActor(CombatantId),

    #[error("combatant {0} has no archetype and cannot be driven by the AI")]
    NotAMonster(CombatantId),

    #[error("no policy registered for archetype {0}")]
    MissingArchetype(ArchetypeKind),

    #[error(transparent)]
    State(#[from] StateError),
}
