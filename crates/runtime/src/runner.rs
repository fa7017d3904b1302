//! Battle runner.
//!
//! The runner owns one [`Battle`] and the [`ActionProvider`] that speaks for
//! the player, and loops `provide_action → resolve_turn` on the calling thread
//! until the battle ends.

use std::time::Instant;

use battle_core::{
    Battle, BattleConfig, BattleOutcome, BattleResult, Combatant, Environment, Side, TurnError,
    TurnReport,
};
use tracing::{debug, info, warn};

use crate::api::{ActionProvider, Result, RuntimeError};

/// Runner configuration.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    pub battle: BattleConfig,
}

/// Drives one battle to completion.
pub struct BattleRunner {
    battle: Battle,
    provider: Box<dyn ActionProvider>,
    started_at: Option<Instant>,
}

impl BattleRunner {
    /// Create a new runner builder
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    /// Wraps an already constructed battle.
    pub fn new(battle: Battle, provider: impl ActionProvider + 'static) -> Self {
        Self {
            battle,
            provider: Box::new(provider),
            started_at: None,
        }
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    /// Resolves a single turn with the provider's action.
    pub fn step(&mut self) -> Result<TurnReport> {
        if self.battle.is_finished() {
            return Err(TurnError::BattleFinished {
                turn: self.battle.turn(),
            }
            .into());
        }
        self.started_at.get_or_insert_with(Instant::now);

        let status = self.battle.status();
        let available = self.battle.available_actions();
        let action = self.provider.provide_action(&status, &available)?;

        let report = self.battle.resolve_turn(action).inspect_err(|err| {
            warn!(turn = status.turn + 1, %action, %err, "action rejected");
        })?;

        debug!(
            turn = report.turn,
            %action,
            first = %report.order.first,
            reason = %report.order.reason,
            dealt = report.damage_by(Side::Player),
            taken = report.damage_by(Side::Opponent),
            player_hp = report.player_hp,
            opponent_hp = report.opponent_hp,
            "turn resolved"
        );

        Ok(report)
    }

    /// Runs the battle to completion.
    pub fn run(&mut self) -> Result<BattleResult> {
        self.run_with_observer(|_| {})
    }

    /// Runs the battle to completion, handing every turn report to `observer`.
    pub fn run_with_observer(
        &mut self,
        mut observer: impl FnMut(&TurnReport),
    ) -> Result<BattleResult> {
        let span = tracing::info_span!(
            "battle",
            opponent = self.battle.opponent().name(),
            environment = %self.battle.environment(),
        );
        let _guard = span.enter();

        info!(
            player_speed = self.battle.player().total_speed(),
            opponent_speed = self.battle.opponent().total_speed(),
            max_turns = self.battle.config().max_turns,
            "battle started"
        );

        while !self.battle.is_finished() {
            let report = self.step()?;
            observer(&report);
        }

        self.finish()
    }

    /// Builds the result of a finished battle, timed from the first step.
    pub fn finish(&self) -> Result<BattleResult> {
        let elapsed = self
            .started_at
            .map(|started_at| started_at.elapsed())
            .unwrap_or_default();
        let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let result = self.battle.finish(duration_ms)?;

        if result.outcome == BattleOutcome::TurnLimitReached {
            warn!(
                turns = result.turns_elapsed,
                player_hp = result.final_player_hp,
                opponent_hp = result.final_opponent_hp,
                "battle stopped at turn limit"
            );
        } else {
            info!(
                outcome = %result.outcome,
                turns = result.turns_elapsed,
                duration_ms = result.duration_ms,
                "battle finished"
            );
        }

        Ok(result)
    }
}

/// Builder for [`BattleRunner`].
pub struct RunnerBuilder {
    config: RunnerConfig,
    player: Option<Combatant>,
    opponent: Option<Combatant>,
    environment: Environment,
    provider: Option<Box<dyn ActionProvider>>,
}

impl RunnerBuilder {
    fn new() -> Self {
        Self {
            config: RunnerConfig::default(),
            player: None,
            opponent: None,
            environment: Environment::default(),
            provider: None,
        }
    }

    /// Set runner configuration
    pub fn config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player(mut self, player: Combatant) -> Self {
        self.player = Some(player);
        self
    }

    pub fn opponent(mut self, opponent: Combatant) -> Self {
        self.opponent = Some(opponent);
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the player action provider
    pub fn provider(mut self, provider: impl ActionProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the runner.
    ///
    /// Requires both combatants and a provider.
    pub fn build(self) -> Result<BattleRunner> {
        let player = self.player.ok_or(RuntimeError::CombatantNotSet { side: Side::Player })?;
        let opponent = self.opponent.ok_or(RuntimeError::CombatantNotSet {
            side: Side::Opponent,
        })?;
        let provider = self.provider.ok_or(RuntimeError::ProviderNotSet)?;

        let battle = Battle::new(player, opponent, self.environment, self.config.battle);
        Ok(BattleRunner {
            battle,
            provider,
            started_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{RepeatActionProvider, ScriptedActionProvider};
    use battle_core::{Loadout, OpponentKind, PlayerAction, WeaponKind};

    #[test]
    fn builder_requires_provider_and_combatants() {
        let missing_opponent = BattleRunner::builder()
            .player(Combatant::warrior(Loadout::empty()))
            .provider(RepeatActionProvider::new(PlayerAction::Attack))
            .build();
        assert!(matches!(
            missing_opponent,
            Err(RuntimeError::CombatantNotSet {
                side: Side::Opponent
            })
        ));

        let missing_provider = BattleRunner::builder()
            .player(Combatant::warrior(Loadout::empty()))
            .opponent(Combatant::opponent(OpponentKind::Thief))
            .build();
        assert!(matches!(missing_provider, Err(RuntimeError::ProviderNotSet)));
    }

    #[test]
    fn step_after_finish_is_rejected() {
        let dagger = Loadout::builder().weapon(WeaponKind::Dagger).build();
        let mut runner = BattleRunner::builder()
            .player(Combatant::warrior(dagger))
            .opponent(Combatant::opponent(OpponentKind::Thief).with_current_hp(1))
            .provider(RepeatActionProvider::new(PlayerAction::Attack))
            .build()
            .unwrap();

        let result = runner.run().unwrap();
        assert_eq!(result.outcome, BattleOutcome::Victory);

        assert!(matches!(
            runner.step(),
            Err(RuntimeError::Turn(TurnError::BattleFinished { turn: 1 }))
        ));
    }

    #[test]
    fn exhausted_script_stops_the_run() {
        let mut runner = BattleRunner::builder()
            .player(Combatant::warrior(Loadout::empty()))
            .opponent(Combatant::opponent(OpponentKind::Minotaur))
            .provider(ScriptedActionProvider::new([PlayerAction::Defend]))
            .build()
            .unwrap();

        let err = runner.run().unwrap_err();

        assert!(matches!(err, RuntimeError::ProviderExhausted { turn: 2 }));
        assert_eq!(runner.battle().turn(), 1);
    }
}
