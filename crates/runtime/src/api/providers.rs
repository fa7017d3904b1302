//! Abstraction for sourcing the player's intent.
//!
//! Runtime users plug in [`ActionProvider`] implementations so a battle can
//! run with human input, scripted fixtures, or simple policies.
use std::collections::VecDeque;

use battle_core::{BattleStatus, PlayerAction};

use super::errors::{Result, RuntimeError};

/// Trait for providing the player's action based on the current battle status.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Scripted/replayed actions
/// - Testing fixtures
///
/// The call blocks the battle loop until it returns; it is the only
/// suspension point of a battle.
pub trait ActionProvider: Send {
    /// Provide the action for the coming turn.
    ///
    /// # Arguments
    /// * `status` - Read-only snapshot of the battle between turns
    /// * `available` - Actions the engine will accept this turn
    ///
    /// # Returns
    /// The action to execute, or an error if no action can be determined
    fn provide_action(
        &mut self,
        status: &BattleStatus,
        available: &[PlayerAction],
    ) -> Result<PlayerAction>;
}

impl<P: ActionProvider + ?Sized> ActionProvider for Box<P> {
    fn provide_action(
        &mut self,
        status: &BattleStatus,
        available: &[PlayerAction],
    ) -> Result<PlayerAction> {
        (**self).provide_action(status, available)
    }
}

/// Replays a fixed sequence of actions.
///
/// Actions are returned as written, even when the engine will reject them.
/// Once the sequence runs out the fallback is used; without one the provider
/// reports [`RuntimeError::ProviderExhausted`].
#[derive(Clone, Debug)]
pub struct ScriptedActionProvider {
    actions: VecDeque<PlayerAction>,
    fallback: Option<PlayerAction>,
}

impl ScriptedActionProvider {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: PlayerAction) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Scripted actions not yet handed out.
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl ActionProvider for ScriptedActionProvider {
    fn provide_action(
        &mut self,
        status: &BattleStatus,
        _available: &[PlayerAction],
    ) -> Result<PlayerAction> {
        self.actions
            .pop_front()
            .or(self.fallback)
            .ok_or(RuntimeError::ProviderExhausted {
                turn: status.turn + 1,
            })
    }
}

/// Always picks the same action, attacking whenever that action is unavailable.
#[derive(Clone, Copy, Debug)]
pub struct RepeatActionProvider {
    action: PlayerAction,
}

impl RepeatActionProvider {
    pub fn new(action: PlayerAction) -> Self {
        Self { action }
    }
}

impl ActionProvider for RepeatActionProvider {
    fn provide_action(
        &mut self,
        _status: &BattleStatus,
        available: &[PlayerAction],
    ) -> Result<PlayerAction> {
        if available.contains(&self.action) {
            Ok(self.action)
        } else {
            Ok(PlayerAction::Attack)
        }
    }
}

/// Adapts a closure into a provider.
pub struct FnActionProvider<F> {
    select: F,
}

impl<F> FnActionProvider<F>
where
    F: FnMut(&BattleStatus, &[PlayerAction]) -> PlayerAction + Send,
{
    pub fn new(select: F) -> Self {
        Self { select }
    }
}

impl<F> ActionProvider for FnActionProvider<F>
where
    F: FnMut(&BattleStatus, &[PlayerAction]) -> PlayerAction + Send,
{
    fn provide_action(
        &mut self,
        status: &BattleStatus,
        available: &[PlayerAction],
    ) -> Result<PlayerAction> {
        Ok((self.select)(status, available))
    }
}
