//! Player actions.
//!
//! The player picks exactly one action per turn. The opponent has no choice:
//! it always attacks.

use crate::error::{ErrorSeverity, GameError};

/// Action the player declares for a turn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlayerAction {
    /// Strike the opponent; consumes a pending charge.
    Attack,
    /// Halve incoming damage this turn and act first.
    Defend,
    /// Skip dealing damage to triple the next attack.
    Charge,
}

impl PlayerAction {
    /// All actions in menu order.
    pub const ALL: [PlayerAction; 3] = [
        PlayerAction::Attack,
        PlayerAction::Defend,
        PlayerAction::Charge,
    ];

    /// Short menu description.
    pub const fn description(&self) -> &'static str {
        match self {
            PlayerAction::Attack => "Strike your enemy",
            PlayerAction::Defend => "Reduce incoming damage by half",
            PlayerAction::Charge => "Skip turn to triple next attack",
        }
    }

    /// Whether this action grants first-action priority regardless of speed.
    pub const fn has_priority(&self) -> bool {
        matches!(self, PlayerAction::Defend)
    }
}

/// Why an action cannot be chosen right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionUnavailable {
    /// A charge is already pending delivery.
    #[error("already charging")]
    AlreadyCharging,

    /// The one-turn cooldown after a charge has not elapsed.
    #[error("charge is on cooldown")]
    ChargeOnCooldown,
}

impl GameError for ActionUnavailable {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            ActionUnavailable::AlreadyCharging => "ACTION_ALREADY_CHARGING",
            ActionUnavailable::ChargeOnCooldown => "ACTION_CHARGE_ON_COOLDOWN",
        }
    }
}
