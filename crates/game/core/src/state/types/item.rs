//! Consumable item types.

use crate::state::StatusKind;

/// What a consumable does when used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Restores health.
    Health,
    /// Restores ability points.
    AbilityPoint,
    /// Removes one specific status.
    StatusCure(StatusKind),
}

/// A consumable item definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    /// Amount restored; used to rank candidates of the same kind.
    pub strength: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, strength: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            strength,
        }
    }

    /// The status this item removes, if it is a cure.
    pub fn cures(&self) -> Option<StatusKind> {
        match self.kind {
            ItemKind::StatusCure(status) => Some(status),
            _ => None,
        }
    }
}
