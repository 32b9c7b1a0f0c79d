//! Default rosters.
//!
//! Spawned monsters carry no item-use profile of their own, so the
//! archetype registry driving them decides when they use items. Ids below 100 belong to monsters, ids from 100 up to heroes.

use game_core::{
    Ability, ArchetypeKind, Combatant, CombatantId, CombatantStats, Party, Side, StateError,
};

use crate::catalog::{abilities, items};

/// Stat line and attack power of one roster entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatBlock {
    pub health: u32,
    pub ability_points: u32,
    pub defense: i32,
    pub speed: i32,
    pub attack_power: i32,
}

impl StatBlock {
    pub const fn new(
        health: u32,
        ability_points: u32,
        defense: i32,
        speed: i32,
        attack_power: i32,
    ) -> Self {
        Self {
            health,
            ability_points,
            defense,
            speed,
            attack_power,
        }
    }

    fn stats(&self) -> CombatantStats {
        CombatantStats::new(self.health, self.ability_points, self.defense, self.speed)
    }
}

pub const SKELETON_BOSS: StatBlock = StatBlock::new(8, 5, 3, 2, 5);
pub const SKELETON_SPEARMAN: StatBlock = StatBlock::new(6, 5, 2, 1, 4);
pub const SKELETON_ARCHER: StatBlock = StatBlock::new(6, 5, 3, 1, 4);
pub const SKELETON_WARRIOR: StatBlock = StatBlock::new(6, 5, 2, 1, 4);
pub const PALADIN: StatBlock = StatBlock::new(10, 6, 3, 2, 4);
pub const SOLDIER: StatBlock = StatBlock::new(9, 5, 2, 3, 5);

fn combatant(
    id: u32,
    name: &str,
    block: StatBlock,
    loadout: impl IntoIterator<Item = Ability>,
) -> Result<Combatant, StateError> {
    let mut combatant = Combatant::new(
        CombatantId(id),
        name,
        block.stats(),
        Ability::base_attack(block.attack_power),
    );
    for ability in loadout {
        combatant.abilities.insert(ability)?;
    }
    Ok(combatant)
}

/// Spawns a skeleton of the given archetype with its standard loadout.
///
/// Capability archetypes have no skeleton body; they get a soldier loadout
/// on the spearman's stat line.
pub fn monster(id: u32, kind: ArchetypeKind) -> Result<Combatant, StateError> {
    use abilities::*;

    let spawned = match kind {
        ArchetypeKind::SkeletonBoss => combatant(
            id,
            "Skeleton Boss",
            SKELETON_BOSS,
            [ham_string(), defend(DEFEND_STRENGTH), shield_bash()],
        )?,
        ArchetypeKind::SkeletonSpearman => combatant(
            id,
            "Skeleton Spearman",
            SKELETON_SPEARMAN,
            [lunge(), defend(DEFEND_STRENGTH), shield_bash()],
        )?,
        ArchetypeKind::SkeletonArcher => combatant(
            id,
            "Skeleton Archer",
            SKELETON_ARCHER,
            [snipe(), poison_shot(), multi_shot()],
        )?,
        ArchetypeKind::SkeletonWarrior => combatant(
            id,
            "Skeleton Warrior",
            SKELETON_WARRIOR,
            [ham_string(), defend(DEFEND_STRENGTH), shield_bash()],
        )?,
        ArchetypeKind::Controller
        | ArchetypeKind::Defender
        | ArchetypeKind::Punisher
        | ArchetypeKind::Weakener => combatant(
            id,
            kind.as_ref(),
            SKELETON_SPEARMAN,
            [lunge(), poison_shot(), defend(DEFEND_STRENGTH), shield_bash()],
        )?,
    };
    Ok(spawned.controlled_by(kind))
}

/// Boss, spearman, archer and warrior, with ids 1 to 4.
pub fn default_monster_party() -> Result<Party, StateError> {
    Party::from_members([
        monster(1, ArchetypeKind::SkeletonBoss)?,
        monster(2, ArchetypeKind::SkeletonSpearman)?,
        monster(3, ArchetypeKind::SkeletonArcher)?,
        monster(4, ArchetypeKind::SkeletonWarrior)?,
    ])
}

/// Paladin and soldier, ids 101 and 102.
pub fn default_hero_party() -> Result<Party, StateError> {
    use abilities::*;

    Party::from_members([
        combatant(
            101,
            "Paladin",
            PALADIN,
            [holy_smite(), defend(DEFEND_STRENGTH), heal()],
        )?,
        combatant(
            102,
            "Soldier",
            SOLDIER,
            [ham_string(), shield_bash(), defend(DEFEND_STRENGTH)],
        )?,
    ])
}

/// The monster side of a default battle, inventory included.
pub fn default_monster_side() -> Result<Side, StateError> {
    Ok(Side::new(
        default_monster_party()?,
        items::default_monster_inventory()?,
    ))
}
