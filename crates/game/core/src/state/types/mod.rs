pub mod abilities;
pub mod combatant;
pub mod common;
pub mod heuristics;
pub mod inventory;
pub mod item;
pub mod party;
pub mod status;

// Re-export ability types
pub use abilities::{Ability, AbilitySet, Capability};

// Re-export combatant types
pub use combatant::{Combatant, CombatantStats, StatKind};

// Re-export common types
pub use common::{CombatantId, ResourceMeter};

// Re-export item-use heuristics
pub use heuristics::{HeuristicProfile, RecoverGate};

// Re-export item and inventory types
pub use inventory::{Inventory, InventorySlot};
pub use item::{Item, ItemKind};

// Re-export party
pub use party::Party;

// Re-export status effects
pub use status::{StatusEffect, StatusEffects, StatusKind, StatusTick};
