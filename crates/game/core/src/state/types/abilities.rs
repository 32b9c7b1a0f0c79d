//! Combat abilities and their capability flags.
//!
//! # Design
//!
//! - **Capability**: Offensive / Defensive / CrowdControl / StatusEffect flags.
//!   An ability may carry any combination (ShieldBash is all of Offensive,
//!   StatusEffect and CrowdControl).
//! - **Ability**: A named command with an AP cost and an effect magnitude.
//! - **AbilitySet**: The abilities a combatant owns. Slot 0 always holds the
//!   base attack, which is never filtered out by affordability.

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::GameConfig;
use crate::state::StatusKind;
use crate::state::error::StateError;

bitflags! {
    /// Capability tags attached to an ability.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Capability: u8 {
        const OFFENSIVE     = 1 << 0;
        const DEFENSIVE     = 1 << 1;
        const CROWD_CONTROL = 1 << 2;
        const STATUS_EFFECT = 1 << 3;
    }
}

/// A combat ability owned by a combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub name: String,
    pub capabilities: Capability,
    /// AP spent on use.
    pub cost: u32,
    /// Damage, healing or stat change, interpreted by the executor.
    pub magnitude: i32,
    /// Status applied to the target (or the caster for defensive abilities).
    pub applies: Option<StatusKind>,
    base_attack: bool,
}

impl Ability {
    pub fn new(name: impl Into<String>, capabilities: Capability, cost: u32, magnitude: i32) -> Self {
        Self {
            name: name.into(),
            capabilities,
            cost,
            magnitude,
            applies: None,
            base_attack: false,
        }
    }

    /// The guaranteed fallback attack. Costs nothing.
    pub fn base_attack(attack_power: i32) -> Self {
        Self {
            name: "BaseAttack".into(),
            capabilities: Capability::OFFENSIVE,
            cost: 0,
            magnitude: attack_power,
            applies: None,
            base_attack: true,
        }
    }

    pub fn applying(mut self, status: StatusKind) -> Self {
        self.applies = Some(status);
        self
    }

    pub fn is_base_attack(&self) -> bool {
        self.base_attack
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }
}

/// Abilities owned by a combatant, base attack first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilitySet {
    abilities: ArrayVec<Ability, { GameConfig::MAX_ABILITIES }>,
}

impl AbilitySet {
    /// Creates a set holding only the given base attack.
    pub fn new(base_attack: Ability) -> Self {
        let mut abilities = ArrayVec::new();
        abilities.push(Ability {
            base_attack: true,
            ..base_attack
        });
        Self { abilities }
    }

    /// Adds an ability. Names are unique within a set.
    pub fn insert(&mut self, ability: Ability) -> Result<(), StateError> {
        if self.abilities.iter().any(|a| a.name == ability.name) {
            return Err(StateError::DuplicateAbility { name: ability.name });
        }
        self.abilities
            .try_push(Ability {
                base_attack: false,
                ..ability
            })
            .map_err(|_| StateError::AbilityListFull {
                max: GameConfig::MAX_ABILITIES,
            })
    }

    pub fn base_attack(&self) -> &Ability {
        &self.abilities[0]
    }

    pub fn get(&self, name: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ability> {
        self.abilities.iter()
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    /// Never true: the base attack is always present.
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_attack_occupies_first_slot() {
        let mut set = AbilitySet::new(Ability::base_attack(5));
        set.insert(Ability::new("Lunge", Capability::OFFENSIVE, 4, 5))
            .unwrap();

        assert!(set.base_attack().is_base_attack());
        assert_eq!(set.base_attack().cost, 0);
        assert_eq!(set.len(), 2);
        assert!(!set.get("Lunge").unwrap().is_base_attack());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut set = AbilitySet::new(Ability::base_attack(3));
        let bash = Ability::new("ShieldBash", Capability::OFFENSIVE, 3, 2);
        set.insert(bash.clone()).unwrap();
        assert_eq!(
            set.insert(bash),
            Err(StateError::DuplicateAbility {
                name: "ShieldBash".into()
            })
        );
    }

    #[test]
    fn abilities_carry_several_tags() {
        let bash = Ability::new(
            "ShieldBash",
            Capability::OFFENSIVE | Capability::STATUS_EFFECT | Capability::CROWD_CONTROL,
            3,
            2,
        );
        assert!(bash.has(Capability::CROWD_CONTROL));
        assert!(bash.has(Capability::OFFENSIVE | Capability::STATUS_EFFECT));
        assert!(!bash.has(Capability::DEFENSIVE));
    }
}
