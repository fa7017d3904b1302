//! Turn order.
//!
//! Who resolves first is a pure function of the player's declared action and
//! both total speeds, so the four branch combinations (player/opponent first,
//! defending or not) collapse into one ordered pair that the engine executes
//! generically.

use crate::action::PlayerAction;
use crate::combatant::Side;

/// Why a side was scheduled first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum OrderReason {
    /// Defending always grants the player priority.
    DefendPriority,
    /// The first side has strictly greater total speed.
    FasterSpeed,
    /// Equal speeds; ties go to the player.
    SpeedTie,
}

/// Resolution order for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOrder {
    pub first: Side,
    pub reason: OrderReason,
}

impl ExecutionOrder {
    /// Determines who acts first this turn.
    ///
    /// - Defend: player first, unconditionally.
    /// - Otherwise: strictly faster side first; ties resolve to the player.
    pub fn determine(action: PlayerAction, player_speed: i32, opponent_speed: i32) -> Self {
        if action.has_priority() {
            return Self {
                first: Side::Player,
                reason: OrderReason::DefendPriority,
            };
        }

        match player_speed.cmp(&opponent_speed) {
            core::cmp::Ordering::Greater => Self {
                first: Side::Player,
                reason: OrderReason::FasterSpeed,
            },
            core::cmp::Ordering::Less => Self {
                first: Side::Opponent,
                reason: OrderReason::FasterSpeed,
            },
            core::cmp::Ordering::Equal => Self {
                first: Side::Player,
                reason: OrderReason::SpeedTie,
            },
        }
    }

    /// Both sides in resolution order.
    pub fn sides(&self) -> [Side; 2] {
        [self.first, self.first.opposite()]
    }

    pub fn player_first(&self) -> bool {
        self.first == Side::Player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn defend_goes_first_regardless_of_speed() {
        for (player_speed, opponent_speed) in [(1, 100), (50, 50), (100, 1)] {
            let order = ExecutionOrder::determine(PlayerAction::Defend, player_speed, opponent_speed);
            assert_eq!(order.first, Side::Player);
            assert_eq!(order.reason, OrderReason::DefendPriority);
        }
    }

    #[test]
    fn faster_side_goes_first() {
        let order = ExecutionOrder::determine(PlayerAction::Attack, 45, 40);
        assert_eq!(order.sides(), [Side::Player, Side::Opponent]);

        let order = ExecutionOrder::determine(PlayerAction::Charge, 10, 40);
        assert_eq!(order.sides(), [Side::Opponent, Side::Player]);
        assert_eq!(order.reason, OrderReason::FasterSpeed);
    }

    #[test]
    fn ties_go_to_the_player_every_time() {
        for action in PlayerAction::iter() {
            for _ in 0..3 {
                let order = ExecutionOrder::determine(action, 30, 30);
                assert!(order.player_first());
            }
        }
    }
}
