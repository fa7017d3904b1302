//! Data-driven battle content and loaders.
//!
//! This crate reads the files that set up a battle:
//! - Battle rules (`BattleConfig`, data-driven via TOML)
//! - Scenarios: loadout, opponent, environment and a scripted action plan
//!   (data-driven via RON)
//!
//! The equipment, opponent and environment catalogs themselves are closed
//! enums in battle-core; files only pick from them by name.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, Scenario, ScenarioLoader};
