//! Turn decisions and the checks an executor applies before honoring them.
//!
//! A [`Decision`] is the immutable `(target, action)` pair produced for one
//! turn. The decision layer only reads state; an executor applies decisions,
//! and [`validate_decision`] is the shared guard both sides can run.
mod error;
mod validation;

pub use error::ExecuteError;
pub use validation::validate_decision;

use crate::state::{Ability, CombatantId, Item};

/// What the actor does this turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Ability(Ability),
    Item(Item),
}

impl Action {
    pub fn name(&self) -> &str {
        match self {
            Self::Ability(ability) => &ability.name,
            Self::Item(item) => &item.name,
        }
    }

    pub fn as_ability(&self) -> Option<&Ability> {
        match self {
            Self::Ability(ability) => Some(ability),
            Self::Item(_) => None,
        }
    }

    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Self::Item(item) => Some(item),
            Self::Ability(_) => None,
        }
    }
}

/// One turn's outcome, handed to the executor.
///
/// `target` is `None` for self-targeted or targetless actions (items are
/// always consumed on the actor). Both fields are `None` for a skipped turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub target: Option<CombatantId>,
    pub action: Option<Action>,
}

impl Decision {
    /// The decision of a suspended turn.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn ability(ability: Ability, target: Option<CombatantId>) -> Self {
        Self {
            target,
            action: Some(Action::Ability(ability)),
        }
    }

    /// Consume an item on oneself.
    pub fn item(item: Item) -> Self {
        Self {
            target: None,
            action: Some(Action::Item(item)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.action.is_none()
    }
}
