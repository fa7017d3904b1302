//! Error types for turn resolution.

use crate::action::{ActionUnavailable, PlayerAction};
use crate::error::{ErrorSeverity, GameError};

/// Errors surfaced while driving a battle through [`Battle`](super::Battle).
///
/// A rejected request never mutates battle state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("battle already finished after turn {turn}")]
    BattleFinished { turn: u32 },

    #[error("battle still in progress at turn {turn}")]
    BattleInProgress { turn: u32 },

    #[error("{action} is unavailable: {reason}")]
    ActionUnavailable {
        action: PlayerAction,
        reason: ActionUnavailable,
    },
}

impl TurnError {
    pub fn action_unavailable(action: PlayerAction, reason: ActionUnavailable) -> Self {
        Self::ActionUnavailable { action, reason }
    }
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            TurnError::BattleFinished { .. } | TurnError::BattleInProgress { .. } => {
                ErrorSeverity::Validation
            }
            TurnError::ActionUnavailable { reason, .. } => reason.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            TurnError::BattleFinished { .. } => "TURN_BATTLE_FINISHED",
            TurnError::BattleInProgress { .. } => "TURN_BATTLE_IN_PROGRESS",
            TurnError::ActionUnavailable { reason, .. } => reason.error_code(),
        }
    }
}
