//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine rejections and action provider failures so clients can bubble
//! them up with consistent context.
use battle_core::{ErrorSeverity, GameError, Side, TurnError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("action provider not set")]
    ProviderNotSet,

    #[error("{side} combatant not set")]
    CombatantNotSet { side: Side },

    #[error("action provider ran out of actions at turn {turn}")]
    ProviderExhausted { turn: u32 },

    #[error(transparent)]
    Turn(#[from] TurnError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::ProviderNotSet | RuntimeError::CombatantNotSet { .. } => {
                ErrorSeverity::Validation
            }
            RuntimeError::ProviderExhausted { .. } => ErrorSeverity::Fatal,
            RuntimeError::Turn(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::ProviderNotSet => "RUNTIME_PROVIDER_NOT_SET",
            RuntimeError::CombatantNotSet { .. } => "RUNTIME_COMBATANT_NOT_SET",
            RuntimeError::ProviderExhausted { .. } => "RUNTIME_PROVIDER_EXHAUSTED",
            RuntimeError::Turn(err) => err.error_code(),
        }
    }
}
