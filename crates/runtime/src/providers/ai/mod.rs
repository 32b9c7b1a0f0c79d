//! Archetype AI for monsters.
//!
//! A monster's turn is decided in two layers:
//!
//! 1. **Item layer** ([`items`]): heal, cure and recover checks gated by the
//!    monster's heuristic profile. The first check that finds an item ends
//!    the turn.
//! 2. **Policy** ([`policy`]): one generic evaluator walks the archetype's
//!    tier table against a single draw and picks an ability plus a target.
//!
//! # Core Components
//!
//! - [`ArchetypeAiProvider`]: runs both layers for one monster
//! - [`AiContext`]: the read-only view both layers work from
//! - [`filters`] and [`targeting`]: affordability, liveness and target rules

pub mod context;
pub mod filters;
pub mod items;
pub mod policy;
pub mod provider;
pub mod targeting;

pub use context::AiContext;
pub use items::{ItemCheck, ItemUse, choose_item};
pub use policy::{PolicyBranch, PolicyChoice, evaluate};
pub use provider::{AiDecision, ArchetypeAiProvider, DecisionSource};
