//! Deterministic battle data types and rules shared by the decision engine.
//!
//! `game-core` defines the canonical battle state (combatants, abilities,
//! items, statuses, sides), the archetype tier-table data model, decisions and
//! their validation, and the draw sources every probabilistic choice goes
//! through. It performs no I/O; the `runtime` crate evaluates policies against
//! the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod policy;
pub mod state;

pub use action::{Action, Decision, ExecuteError, validate_decision};
pub use combat::{DamageParams, apply_damage, calculate_damage};
pub use config::GameConfig;
pub use env::{DrawSource, PcgRng, ScriptedDraws, StatusResolver, compute_seed, pick_one};
pub use error::{ErrorSeverity, GameError};
pub use policy::{
    Affordability, AbilityChoice, Archetype, ArchetypeKind, CapabilityQuery, MissPolicy,
    PolicyError, Tier, TierTable, TargetRule,
};
pub use state::{
    Ability, AbilitySet, BattleState, Capability, Combatant, CombatantId, CombatantStats,
    HeuristicProfile, Inventory, InventorySlot, Item, ItemKind, Party, RecoverGate,
    ResourceMeter, Side, StateError, StatKind, StatusEffect, StatusEffects, StatusKind,
    StatusTick,
};
