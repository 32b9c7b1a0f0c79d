//! Combatant state.
//!
//! A combatant is any participant in a battle: a hero controlled by the
//! human player or a monster controlled by the AI. Monsters additionally carry
//! an archetype (which tier table drives them) and may carry their own
//! item-use profile in place of the archetype's.

use crate::policy::ArchetypeKind;
use crate::state::{
    Ability, AbilitySet, CombatantId, HeuristicProfile, ResourceMeter, StatusEffects,
};

/// Numeric stats a target selector can rank combatants by.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Health,
    #[strum(serialize = "ability_points", serialize = "abilityPoints", serialize = "ap")]
    AbilityPoints,
    #[strum(serialize = "defense", serialize = "defenseRating", serialize = "defense_rating")]
    Defense,
    Speed,
}

/// Health, ability points and the flat combat ratings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantStats {
    pub health: ResourceMeter,
    pub ability_points: ResourceMeter,
    pub defense: i32,
    /// Turn-order tiebreak, consumed by whoever schedules turns.
    pub speed: i32,
}

impl CombatantStats {
    /// Stats starting at full health and AP.
    pub fn new(max_health: u32, max_ability_points: u32, defense: i32, speed: i32) -> Self {
        Self {
            health: ResourceMeter::full(max_health),
            ability_points: ResourceMeter::full(max_ability_points),
            defense,
            speed,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub stats: CombatantStats,
    pub statuses: StatusEffects,
    pub abilities: AbilitySet,
    /// Set for AI-controlled combatants.
    pub archetype: Option<ArchetypeKind>,
    /// Per-monster item-use profile. `None` defers to the archetype's.
    pub heuristics: Option<HeuristicProfile>,
}

impl Combatant {
    /// Creates a hero (no archetype, no item-use profile).
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        stats: CombatantStats,
        base_attack: Ability,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            stats,
            statuses: StatusEffects::empty(),
            abilities: AbilitySet::new(base_attack),
            archetype: None,
            heuristics: None,
        }
    }

    /// Turns this combatant into an AI-controlled monster.
    pub fn controlled_by(mut self, archetype: ArchetypeKind) -> Self {
        self.archetype = Some(archetype);
        self
    }

    /// Pins an item-use profile on this combatant, overriding its archetype's.
    pub fn with_heuristics(mut self, heuristics: HeuristicProfile) -> Self {
        self.heuristics = Some(heuristics);
        self
    }

    pub fn health(&self) -> u32 {
        self.stats.health.current()
    }

    pub fn ability_points(&self) -> u32 {
        self.stats.ability_points.current()
    }

    /// Defeated combatants never act and are never valid targets.
    pub fn is_defeated(&self) -> bool {
        self.stats.health.is_empty()
    }

    pub fn is_alive(&self) -> bool {
        !self.is_defeated()
    }

    pub fn is_crowd_controlled(&self) -> bool {
        self.statuses.has_crowd_control()
    }

    pub fn base_attack(&self) -> &Ability {
        self.abilities.base_attack()
    }

    /// Reads a stat by kind, widened so every stat compares on one scale.
    pub fn stat(&self, kind: StatKind) -> i64 {
        match kind {
            StatKind::Health => i64::from(self.stats.health.current()),
            StatKind::AbilityPoints => i64::from(self.stats.ability_points.current()),
            StatKind::Defense => i64::from(self.stats.defense),
            StatKind::Speed => i64::from(self.stats.speed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_names_accept_legacy_spellings() {
        assert_eq!("health".parse::<StatKind>(), Ok(StatKind::Health));
        assert_eq!("abilityPoints".parse::<StatKind>(), Ok(StatKind::AbilityPoints));
        assert_eq!("defenseRating".parse::<StatKind>(), Ok(StatKind::Defense));
        assert!("charisma".parse::<StatKind>().is_err());
    }

    #[test]
    fn zero_health_is_defeated() {
        let mut hero = Combatant::new(
            CombatantId(1),
            "Paladin",
            CombatantStats::new(10, 4, 2, 3),
            Ability::base_attack(3),
        );
        assert!(hero.is_alive());
        hero.stats.health.set(0);
        assert!(hero.is_defeated());
        assert_eq!(hero.stat(StatKind::Health), 0);
        assert_eq!(hero.stat(StatKind::Defense), 2);
    }
}
