//! Deterministic battle rules shared by the runtime and offline tools.
//!
//! `battle-core` defines the canonical rules for a one-on-one, turn-based
//! battle (equipment, environments, combatants, damage, turn order) and
//! exposes pure APIs with no I/O. All battle state mutation flows through
//! [`engine::Battle`], and supporting crates depend on the types re-exported
//! here.
pub mod action;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod engine;
pub mod environment;
pub mod equipment;
pub mod error;
pub mod log;
pub mod result;

pub use action::{ActionUnavailable, PlayerAction};
pub use combat::{DamageMultiplier, apply_damage, calculate_damage};
pub use combatant::{
    AttackOutcome, BaseStats, ChargeState, Combatant, CombatantSnapshot, EnvironmentModifiers,
    OpponentKind, Side,
};
pub use config::BattleConfig;
pub use engine::{
    Battle, BattleStatus, ExecutionOrder, OrderReason, TurnError, TurnEvent, TurnPhase,
    TurnReport,
};
pub use environment::{Environment, EnvironmentEffect};
pub use equipment::{ArmorKind, ArmorModifier, Loadout, LoadoutBuilder, WeaponKind, WeaponModifier};
pub use error::{ErrorSeverity, GameError};
pub use log::{BattleLogger, TurnRecord};
pub use result::{BattleOutcome, BattleResult};
