//! Runtime orchestration for battles.
//!
//! This crate drives a [`battle_core::Battle`] to completion: it asks an
//! [`ActionProvider`] for the player's action each turn, times the battle,
//! and traces what happens. Consumers build a [`BattleRunner`] and call
//! [`BattleRunner::run`] to get a [`battle_core::BattleResult`].
//!
//! Modules are organized by responsibility:
//! - [`runner`] hosts the battle loop and its builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`stats`] aggregates results across a session of battles
pub mod api;
pub mod runner;
pub mod stats;

pub use api::{
    ActionProvider, FnActionProvider, RepeatActionProvider, Result, RuntimeError,
    ScriptedActionProvider,
};
pub use runner::{BattleRunner, RunnerBuilder, RunnerConfig};
pub use stats::SessionStats;
