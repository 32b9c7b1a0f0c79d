//! Consumable presets.

use game_core::{Inventory, Item, ItemKind, StateError, StatusKind};

pub const HEALTH_POTION: &str = "HealthPotion";
pub const ABILITY_TONIC: &str = "AbilityTonic";

pub fn health_potion() -> Item {
    Item::new(HEALTH_POTION, ItemKind::Health, 2)
}

pub fn ability_tonic() -> Item {
    Item::new(ABILITY_TONIC, ItemKind::AbilityPoint, 2)
}

/// Cure for a harmful or crowd-control status. Buffs have none.
pub fn cure(status: StatusKind) -> Option<Item> {
    let name = match status {
        StatusKind::Stunned => "SmellingSalts",
        StatusKind::Frozen => "Thaw",
        StatusKind::Asleep => "Alarm",
        StatusKind::Poisoned => "Antidote",
        StatusKind::Burning => "BurnSalve",
        StatusKind::Weakened => "Restorative",
        StatusKind::Defending | StatusKind::Regenerating => return None,
    };
    Some(Item::new(name, ItemKind::StatusCure(status), 1))
}

/// Stock carried by the monster side of a default battle.
pub fn default_monster_inventory() -> Result<Inventory, StateError> {
    let mut inventory = Inventory::empty();
    inventory.add(health_potion(), 2)?;
    inventory.add(ability_tonic(), 1)?;
    for status in [StatusKind::Poisoned, StatusKind::Burning] {
        if let Some(item) = cure(status) {
            inventory.add(item, 1)?;
        }
    }
    Ok(inventory)
}
