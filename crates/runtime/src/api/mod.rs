//! Public runtime API surface.
//!
//! Re-exports the action provider seam and the runtime error type so
//! clients can depend on a single module.
mod errors;
mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{
    ActionProvider, FnActionProvider, RepeatActionProvider, ScriptedActionProvider,
};
