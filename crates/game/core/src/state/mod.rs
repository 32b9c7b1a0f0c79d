//! Battle state representation.
//!
//! This module owns the data structures that describe combatants, their
//! inventories and the two sides of a battle. The decision layer only reads
//! this state; collaborators (status resolver, action executor) mutate it.
pub mod error;
pub mod types;

pub use error::StateError;
pub use types::{
    Ability, AbilitySet, Capability, Combatant, CombatantId, CombatantStats, HeuristicProfile,
    Inventory, InventorySlot, Item, ItemKind, Party, RecoverGate, ResourceMeter, StatKind,
    StatusEffect, StatusEffects, StatusKind, StatusTick,
};

/// One side of a battle: its combatants and their shared inventory.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Side {
    pub party: Party,
    pub inventory: Inventory,
}

impl Side {
    pub fn new(party: Party, inventory: Inventory) -> Self {
        Self { party, inventory }
    }
}

/// Canonical snapshot of a battle in progress.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// Seed for deterministic draws; combined with the round and actor id.
    pub battle_seed: u64,
    /// Number of completed rounds.
    pub round: u64,
    /// Computer-controlled side.
    pub ai: Side,
    /// Human-controlled side.
    pub human: Side,
}

impl BattleState {
    /// Pairs two sides. Ids must be unique across both of them.
    pub fn new(ai: Side, human: Side) -> Result<Self, StateError> {
        if let Some(shared) = ai
            .party
            .iter()
            .find(|monster| human.party.get(monster.id).is_some())
        {
            return Err(StateError::DuplicateCombatant { id: shared.id });
        }
        Ok(Self {
            battle_seed: 0,
            round: 0,
            ai,
            human,
        })
    }

    pub fn with_seed(mut self, battle_seed: u64) -> Self {
        self.battle_seed = battle_seed;
        self
    }

    /// Looks a combatant up on either side.
    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.ai.party.get(id).or_else(|| self.human.party.get(id))
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        if self.ai.party.get(id).is_some() {
            self.ai.party.get_mut(id)
        } else {
            self.human.party.get_mut(id)
        }
    }

    /// The side the combatant fights on.
    pub fn side_of_mut(&mut self, id: CombatantId) -> Option<&mut Side> {
        if self.ai.party.get(id).is_some() {
            Some(&mut self.ai)
        } else if self.human.party.get(id).is_some() {
            Some(&mut self.human)
        } else {
            None
        }
    }

    /// Returns the side that owns the combatant and the opposing side.
    pub fn sides_of(&self, id: CombatantId) -> Option<(&Side, &Side)> {
        if self.ai.party.get(id).is_some() {
            Some((&self.ai, &self.human))
        } else if self.human.party.get(id).is_some() {
            Some((&self.human, &self.ai))
        } else {
            None
        }
    }
}
