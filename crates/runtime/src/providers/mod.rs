//! Provider implementations the turn orchestrator plugs together.

pub mod ai;
pub mod executor;
pub mod status;

pub use executor::StandardExecutor;
pub use status::TickingStatusResolver;
