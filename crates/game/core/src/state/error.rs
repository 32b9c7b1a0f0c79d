//! State management errors.
//!
//! Errors related to building battle state: capacity limits, duplicate keys
//! and invalid heuristic parameters.

use crate::error::{ErrorSeverity, GameError};
use crate::state::CombatantId;

/// Errors that occur while assembling or mutating battle state.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StateError {
    /// Party is full (max capacity reached).
    #[error("Party is full (max: {max})")]
    PartyFull {
        /// Maximum capacity.
        max: usize,
    },

    /// Ability set is full.
    #[error("Ability set is full (max: {max})")]
    AbilityListFull {
        /// Maximum capacity.
        max: usize,
    },

    /// Inventory has no free slot for a new item.
    #[error("Inventory is full (max: {max} slots)")]
    InventoryFull {
        /// Maximum capacity.
        max: usize,
    },

    /// A combatant with this id is already on this side or the other one.
    #[error("Combatant {id} is already in the battle")]
    DuplicateCombatant {
        /// The duplicated id.
        id: CombatantId,
    },

    /// An ability with this name is already owned.
    #[error("Ability '{name}' is already owned")]
    DuplicateAbility {
        /// The duplicated name.
        name: String,
    },

    /// A heuristic parameter is not a probability.
    #[error("{field} must lie in [0, 1], got {value}")]
    InvalidProbability {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            PartyFull { .. } => "STATE_PARTY_FULL",
            AbilityListFull { .. } => "STATE_ABILITY_LIST_FULL",
            InventoryFull { .. } => "STATE_INVENTORY_FULL",
            DuplicateCombatant { .. } => "STATE_DUPLICATE_COMBATANT",
            DuplicateAbility { .. } => "STATE_DUPLICATE_ABILITY",
            InvalidProbability { .. } => "STATE_INVALID_PROBABILITY",
        }
    }
}
