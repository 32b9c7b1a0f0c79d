use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::error::StateError;
use crate::state::{Combatant, CombatantId};

/// The combatants on one side of a battle, keyed by [`CombatantId`].
///
/// Iteration follows insertion order, which is the order selectors use to
/// break ties.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    members: ArrayVec<Combatant, { GameConfig::MAX_PARTY_SIZE }>,
}

impl Party {
    pub fn empty() -> Self {
        Self {
            members: ArrayVec::new(),
        }
    }

    /// Builds a party from combatants, rejecting duplicate ids and overflow.
    pub fn from_members(members: impl IntoIterator<Item = Combatant>) -> Result<Self, StateError> {
        let mut party = Self::empty();
        for member in members {
            party.insert(member)?;
        }
        Ok(party)
    }

    pub fn insert(&mut self, combatant: Combatant) -> Result<(), StateError> {
        if self.get(combatant.id).is_some() {
            return Err(StateError::DuplicateCombatant { id: combatant.id });
        }
        self.members
            .try_push(combatant)
            .map_err(|_| StateError::PartyFull {
                max: GameConfig::MAX_PARTY_SIZE,
            })
    }

    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.members.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.members.iter_mut().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Combatant> {
        self.members.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
