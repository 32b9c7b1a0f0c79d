//! Public API surface of the runtime.
//!
//! Re-exports the error type and the collaborator traits so consumers can
//! depend on `runtime::api::*` without reaching into internal modules.
mod errors;
mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{ActionExecutor, RecordingExecutor, StatusResolver};
