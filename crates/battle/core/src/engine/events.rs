//! Observable output of the engine.
//!
//! Every turn yields a [`TurnReport`] listing what happened, in order, so
//! presentation layers never have to diff combatant state themselves.

use crate::action::PlayerAction;
use crate::combat::DamageMultiplier;
use crate::combatant::{AttackOutcome, CombatantSnapshot, Side};
use crate::environment::{Environment, EnvironmentEffect};
use crate::result::BattleOutcome;

use super::turns::ExecutionOrder;

/// Phase of the turn state machine.
///
/// A turn walks `AwaitingAction -> ResolvingActions -> ApplyingEnvironment ->
/// CheckingTermination` and then lands on `Finished` or back on
/// `AwaitingAction`. Only those two are visible between calls to
/// [`Battle::resolve_turn`](super::Battle::resolve_turn).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    #[default]
    AwaitingAction,
    ResolvingActions,
    ApplyingEnvironment,
    CheckingTermination,
    Finished,
}

impl TurnPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::Finished)
    }

    /// Phase after `self`. `battle_over` only matters when leaving
    /// `CheckingTermination`.
    pub fn next(self, battle_over: bool) -> Self {
        match self {
            TurnPhase::AwaitingAction => TurnPhase::ResolvingActions,
            TurnPhase::ResolvingActions => TurnPhase::ApplyingEnvironment,
            TurnPhase::ApplyingEnvironment => TurnPhase::CheckingTermination,
            TurnPhase::CheckingTermination if battle_over => TurnPhase::Finished,
            TurnPhase::CheckingTermination => TurnPhase::AwaitingAction,
            TurnPhase::Finished => TurnPhase::Finished,
        }
    }
}

/// One thing that happened during a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    Attack {
        attacker: Side,
        outcome: AttackOutcome,
    },
    Defend {
        side: Side,
        multiplier: DamageMultiplier,
    },
    Charge {
        side: Side,
    },
    Environment {
        side: Side,
        effect: EnvironmentEffect,
    },
    /// `side` reached 0 HP.
    Knockout {
        side: Side,
    },
}

/// Everything that happened in one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub turn: u32,
    pub action: PlayerAction,
    pub order: ExecutionOrder,
    pub events: Vec<TurnEvent>,
    pub player_hp: u32,
    pub opponent_hp: u32,
    /// Set when this turn ended the battle.
    pub outcome: Option<BattleOutcome>,
}

impl TurnReport {
    /// Total damage dealt by `attacker` this turn.
    pub fn damage_by(&self, attacker: Side) -> u32 {
        self.events
            .iter()
            .filter_map(|event| match event {
                TurnEvent::Attack {
                    attacker: side,
                    outcome,
                } if *side == attacker => Some(outcome.damage),
                _ => None,
            })
            .sum()
    }

    pub fn ended_battle(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Read-only view of the whole battle for presentation layers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStatus {
    pub turn: u32,
    pub phase: TurnPhase,
    pub environment: Environment,
    pub player: CombatantSnapshot,
    pub opponent: CombatantSnapshot,
    pub outcome: Option<BattleOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(battle_over: bool) -> Vec<TurnPhase> {
        let mut phase = TurnPhase::AwaitingAction;
        let mut seen = vec![phase];
        for _ in 0..3 {
            phase = phase.next(false);
            seen.push(phase);
        }
        seen.push(phase.next(battle_over));
        seen
    }

    #[test]
    fn turn_passes_through_every_phase() {
        assert_eq!(
            walk(false),
            vec![
                TurnPhase::AwaitingAction,
                TurnPhase::ResolvingActions,
                TurnPhase::ApplyingEnvironment,
                TurnPhase::CheckingTermination,
                TurnPhase::AwaitingAction,
            ]
        );
    }

    #[test]
    fn termination_check_can_finish_the_battle() {
        assert_eq!(walk(true).last(), Some(&TurnPhase::Finished));
        assert!(TurnPhase::Finished.is_terminal());
    }

    #[test]
    fn finished_is_absorbing() {
        assert_eq!(TurnPhase::Finished.next(false), TurnPhase::Finished);
        assert_eq!(TurnPhase::Finished.next(true), TurnPhase::Finished);
    }

    #[test]
    fn battle_over_is_ignored_mid_turn() {
        assert_eq!(
            TurnPhase::AwaitingAction.next(true),
            TurnPhase::ResolvingActions
        );
        assert_eq!(
            TurnPhase::ApplyingEnvironment.next(true),
            TurnPhase::CheckingTermination
        );
    }

    #[test]
    fn phases_display_in_snake_case() {
        assert_eq!(TurnPhase::ApplyingEnvironment.to_string(), "applying_environment");
    }
}
