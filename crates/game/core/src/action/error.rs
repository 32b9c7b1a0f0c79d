//! Action execution errors.
//!
//! Raised by executors (and [`validate_decision`](super::validate_decision))
//! when a decision cannot be applied. The decision layer is built never to
//! emit these; seeing one means either stale state or a policy defect.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CombatantId, StatusKind};

/// Errors that can occur while applying a decision.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    /// The action would change nothing, e.g. healing at full health.
    #[error("{action} would have no effect on {target}: {reason}")]
    InvalidEffect {
        target: CombatantId,
        action: String,
        reason: &'static str,
    },

    /// Ability cost exceeds the actor's current AP.
    #[error("{actor} cannot afford {ability} (cost {cost}, has {available} AP)")]
    ResourceShortfall {
        actor: CombatantId,
        ability: String,
        cost: u32,
        available: u32,
    },

    /// A cure was aimed at a status the target does not have.
    #[error("{target} is not {status}")]
    MissingStatus {
        target: CombatantId,
        status: StatusKind,
    },

    /// The target has already been defeated.
    #[error("target {target} is defeated")]
    TargetDefeated { target: CombatantId },

    /// The target is on neither side.
    #[error("target {target} is not in the battle")]
    UnknownTarget { target: CombatantId },

    /// The actor is on neither side.
    #[error("actor {actor} is not in the battle")]
    UnknownActor { actor: CombatantId },

    /// The actor does not own the ability.
    #[error("{actor} does not know {ability}")]
    AbilityNotOwned { actor: CombatantId, ability: String },

    /// The actor's side has none of this item left.
    #[error("no {item} left in the inventory")]
    ItemUnavailable { item: String },
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        use ExecuteError::*;
        match self {
            InvalidEffect { .. } | MissingStatus { .. } | TargetDefeated { .. } => {
                ErrorSeverity::Recoverable
            }
            UnknownTarget { .. } | UnknownActor { .. } => ErrorSeverity::Validation,
            ResourceShortfall { .. } | AbilityNotOwned { .. } | ItemUnavailable { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use ExecuteError::*;
        match self {
            InvalidEffect { .. } => "EXECUTE_INVALID_EFFECT",
            ResourceShortfall { .. } => "EXECUTE_RESOURCE_SHORTFALL",
            MissingStatus { .. } => "EXECUTE_MISSING_STATUS",
            TargetDefeated { .. } => "EXECUTE_TARGET_DEFEATED",
            UnknownTarget { .. } => "EXECUTE_UNKNOWN_TARGET",
            UnknownActor { .. } => "EXECUTE_UNKNOWN_ACTOR",
            AbilityNotOwned { .. } => "EXECUTE_ABILITY_NOT_OWNED",
            ItemUnavailable { .. } => "EXECUTE_ITEM_UNAVAILABLE",
        }
    }
}
