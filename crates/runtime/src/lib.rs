//! Monster turn runtime for the battle decision engine.
//!
//! This crate wires the archetype AI, the status resolver and the action
//! executor into a turn orchestrator. Consumers hold a [`TurnOrchestrator`]
//! and call it once per monster turn, or once per round.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the turn orchestrator
//! - [`api`] exposes the error type and the collaborator traits
//! - [`providers`] holds the AI provider and the default collaborators
//! - [`rng`] provides an entropy-backed draw source
pub mod api;
pub mod providers;
pub mod rng;
pub mod runtime;

pub use api::{ActionExecutor, RecordingExecutor, Result, RuntimeError, StatusResolver};
pub use providers::ai::{
    AiContext, AiDecision, ArchetypeAiProvider, DecisionSource, ItemCheck, ItemUse,
    PolicyBranch, PolicyChoice,
};
pub use providers::{StandardExecutor, TickingStatusResolver};
pub use rng::EntropyDraws;
pub use runtime::{SuspendReason, TurnOrchestrator, TurnOutcome, TurnPlan};
