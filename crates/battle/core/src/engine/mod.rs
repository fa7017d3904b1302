//! Battle orchestration.
//!
//! [`Battle`] owns both combatants, the environment and the statistics logger,
//! and is the only place battle state changes. A turn runs through fixed
//! phases:
//!
//! 1. validate the player's declared action (rejections mutate nothing)
//! 2. resolve both actions in [`ExecutionOrder`], skipping a side that fell
//! 3. apply the environment to each combatant still alive, player first
//! 4. refresh the player's charge availability and record the turn
//! 5. check termination
mod errors;
mod events;
mod turns;

pub use errors::TurnError;
pub use events::{BattleStatus, TurnEvent, TurnPhase, TurnReport};
pub use turns::{ExecutionOrder, OrderReason};

use crate::action::PlayerAction;
use crate::combat::DamageMultiplier;
use crate::combatant::{Combatant, Side};
use crate::config::BattleConfig;
use crate::environment::Environment;
use crate::log::BattleLogger;
use crate::result::{BattleOutcome, BattleResult};

/// One battle between the player and an opponent.
#[derive(Clone, Debug)]
pub struct Battle {
    player: Combatant,
    opponent: Combatant,
    environment: Environment,
    config: BattleConfig,
    turn: u32,
    phase: TurnPhase,
    logger: BattleLogger,
    outcome: Option<BattleOutcome>,
}

impl Battle {
    /// Starts a battle at turn 0.
    ///
    /// `player` and `opponent` are placed on their sides regardless of the
    /// side they were built with, so environment effects always target the
    /// right combatant.
    pub fn new(
        player: Combatant,
        opponent: Combatant,
        environment: Environment,
        config: BattleConfig,
    ) -> Self {
        Self {
            player: player.with_side(Side::Player),
            opponent: opponent.with_side(Side::Opponent),
            environment,
            config,
            turn: 0,
            phase: TurnPhase::AwaitingAction,
            logger: BattleLogger::new(),
            outcome: None,
        }
    }

    /// Starts a battle with [`BattleConfig::default`].
    pub fn with_defaults(player: Combatant, opponent: Combatant, environment: Environment) -> Self {
        Self::new(player, opponent, environment, BattleConfig::default())
    }

    // ========================================================================
    // Turn resolution
    // ========================================================================

    /// Resolves one full turn with the player's declared `action`.
    pub fn resolve_turn(&mut self, action: PlayerAction) -> Result<TurnReport, TurnError> {
        if self.is_finished() {
            return Err(TurnError::BattleFinished { turn: self.turn });
        }
        self.player
            .can_choose(action)
            .map_err(|reason| TurnError::action_unavailable(action, reason))?;

        self.turn += 1;
        let mut events = Vec::new();

        self.phase = self.phase.next(false);
        let order = ExecutionOrder::determine(
            action,
            self.player.total_speed(),
            self.opponent.total_speed(),
        );
        let mut player_multiplier = DamageMultiplier::FULL;
        for side in order.sides() {
            if !self.player.is_alive() || !self.opponent.is_alive() {
                break;
            }
            match side {
                Side::Player => {
                    player_multiplier = self.execute_player_action(action, &mut events);
                }
                Side::Opponent => self.execute_opponent_attack(player_multiplier, &mut events),
            }
        }

        self.phase = self.phase.next(false);
        self.apply_environment(&mut events);
        self.player.update_charge_availability();
        self.logger.log_turn(
            self.turn,
            self.player.current_hp(),
            self.opponent.current_hp(),
        );

        self.phase = self.phase.next(false);
        let outcome = self.check_termination();
        self.outcome = outcome;
        self.phase = self.phase.next(outcome.is_some());

        Ok(TurnReport {
            turn: self.turn,
            action,
            order,
            events,
            player_hp: self.player.current_hp(),
            opponent_hp: self.opponent.current_hp(),
            outcome,
        })
    }

    /// Returns the multiplier the player receives damage with this turn.
    fn execute_player_action(
        &mut self,
        action: PlayerAction,
        events: &mut Vec<TurnEvent>,
    ) -> DamageMultiplier {
        match action {
            PlayerAction::Attack => {
                let outcome =
                    self.player
                        .attack(&mut self.opponent, DamageMultiplier::FULL, &self.config);
                self.logger.log_player_attack(outcome.damage, outcome.charged);
                events.push(TurnEvent::Attack {
                    attacker: Side::Player,
                    outcome,
                });
                if !self.opponent.is_alive() {
                    events.push(TurnEvent::Knockout {
                        side: Side::Opponent,
                    });
                }
                DamageMultiplier::FULL
            }
            PlayerAction::Defend => {
                let multiplier = self.player.defend(&self.config);
                self.logger.log_player_defend();
                events.push(TurnEvent::Defend {
                    side: Side::Player,
                    multiplier,
                });
                multiplier
            }
            PlayerAction::Charge => {
                // Availability was validated before the turn started.
                if self.player.charge() {
                    self.logger.log_player_charge();
                    events.push(TurnEvent::Charge { side: Side::Player });
                }
                DamageMultiplier::FULL
            }
        }
    }

    fn execute_opponent_attack(
        &mut self,
        player_multiplier: DamageMultiplier,
        events: &mut Vec<TurnEvent>,
    ) {
        let outcome = self
            .opponent
            .attack(&mut self.player, player_multiplier, &self.config);
        self.logger.log_opponent_attack(outcome.damage);
        events.push(TurnEvent::Attack {
            attacker: Side::Opponent,
            outcome,
        });
        if !self.player.is_alive() {
            events.push(TurnEvent::Knockout { side: Side::Player });
        }
    }

    fn apply_environment(&mut self, events: &mut Vec<TurnEvent>) {
        let environment = self.environment;
        for combatant in [&mut self.player, &mut self.opponent] {
            if !combatant.is_alive() {
                continue;
            }
            let side = combatant.side();
            let effect = combatant.apply_environment_effect(environment);
            if effect.is_none() {
                continue;
            }
            if side == Side::Player && effect.hp_loss > 0 {
                self.logger.log_environment_damage(effect.hp_loss);
            }
            events.push(TurnEvent::Environment { side, effect });
            if !combatant.is_alive() {
                events.push(TurnEvent::Knockout { side });
            }
        }
    }

    fn check_termination(&self) -> Option<BattleOutcome> {
        let outcome =
            BattleOutcome::from_liveness(self.player.is_alive(), self.opponent.is_alive());
        if outcome.is_some() {
            return outcome;
        }
        match self.config.turn_limit() {
            Some(limit) if self.turn >= limit => Some(BattleOutcome::TurnLimitReached),
            _ => None,
        }
    }

    /// Produces the final record. Only valid once the battle has ended.
    pub fn finish(&self, duration_ms: u64) -> Result<BattleResult, TurnError> {
        let outcome = self
            .outcome
            .ok_or(TurnError::BattleInProgress { turn: self.turn })?;

        Ok(BattleResult {
            outcome,
            player_victory: outcome.is_player_victory(),
            turns_elapsed: self.turn,
            duration_ms,
            final_player_hp: self.player.current_hp(),
            final_opponent_hp: self.opponent.current_hp(),
            total_damage_dealt: self.logger.total_damage_dealt(),
            total_damage_taken: self.logger.total_damage_taken(),
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn opponent(&self) -> &Combatant {
        &self.opponent
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn logger(&self) -> &BattleLogger {
        &self.logger
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Actions the player may declare next. Empty once the battle is over.
    pub fn available_actions(&self) -> Vec<PlayerAction> {
        if self.is_finished() {
            return Vec::new();
        }
        PlayerAction::ALL
            .into_iter()
            .filter(|action| self.player.can_choose(*action).is_ok())
            .collect()
    }

    pub fn status(&self) -> BattleStatus {
        BattleStatus {
            turn: self.turn,
            phase: self.phase,
            environment: self.environment,
            player: self.player.snapshot(),
            opponent: self.opponent.snapshot(),
            outcome: self.outcome,
        }
    }
}
