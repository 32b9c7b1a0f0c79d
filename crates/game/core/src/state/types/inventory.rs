//! Inventory owned by one side of a battle.
//!
//! Slots keep insertion order; every query below iterates in that order, so
//! "first seen" is well defined for tie-breaking.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::error::StateError;
use crate::state::{Item, ItemKind};

/// Inventory slot containing an item and its quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub item: Item,
    pub quantity: u16,
}

impl InventorySlot {
    pub fn new(item: Item, quantity: u16) -> Self {
        Self { item, quantity }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: ArrayVec<InventorySlot, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self {
            slots: ArrayVec::new(),
        }
    }

    /// Adds `quantity` of an item, stacking onto an existing slot with the same name.
    pub fn add(&mut self, item: Item, quantity: u16) -> Result<(), StateError> {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.item.name == item.name) {
            slot.quantity = slot.quantity.saturating_add(quantity);
            return Ok(());
        }
        self.slots
            .try_push(InventorySlot::new(item, quantity))
            .map_err(|_| StateError::InventoryFull {
                max: GameConfig::MAX_INVENTORY_SLOTS,
            })
    }

    /// Consumes one unit of the named item, dropping the slot when it runs out.
    ///
    /// Returns false if no such item is held.
    pub fn consume(&mut self, name: &str) -> bool {
        let Some(index) = self.slots.iter().position(|s| s.item.name == name) else {
            return false;
        };
        let slot = &mut self.slots[index];
        slot.quantity = slot.quantity.saturating_sub(1);
        if slot.quantity == 0 {
            self.slots.remove(index);
        }
        true
    }

    pub fn get(&self, name: &str) -> Option<&InventorySlot> {
        self.slots.iter().find(|s| s.item.name == name)
    }

    /// Items in stock, in slot order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.slots
            .iter()
            .filter(|s| s.quantity > 0)
            .map(|s| &s.item)
    }

    /// Items in stock of the given kind.
    pub fn of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &Item> {
        self.items().filter(move |item| item.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusKind;

    #[test]
    fn stacking_and_consuming() {
        let mut inventory = Inventory::empty();
        let potion = Item::new("Potion", ItemKind::Health, 2);
        inventory.add(potion.clone(), 1).unwrap();
        inventory.add(potion, 1).unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get("Potion").unwrap().quantity, 2);

        assert!(inventory.consume("Potion"));
        assert!(inventory.consume("Potion"));
        assert!(inventory.is_empty());
        assert!(!inventory.consume("Potion"));
    }

    #[test]
    fn queries_filter_by_kind() {
        let mut inventory = Inventory::empty();
        inventory
            .add(Item::new("Potion", ItemKind::Health, 2), 1)
            .unwrap();
        inventory
            .add(
                Item::new("Antidote", ItemKind::StatusCure(StatusKind::Poisoned), 1),
                1,
            )
            .unwrap();

        assert_eq!(inventory.of_kind(ItemKind::Health).count(), 1);
        assert_eq!(inventory.of_kind(ItemKind::AbilityPoint).count(), 0);
        assert_eq!(
            inventory
                .of_kind(ItemKind::StatusCure(StatusKind::Poisoned))
                .next()
                .map(|i| i.name.as_str()),
            Some("Antidote")
        );
        assert_eq!(
            inventory
                .of_kind(ItemKind::StatusCure(StatusKind::Burning))
                .count(),
            0
        );
    }
}
