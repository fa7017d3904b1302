use crate::combat::DamageMultiplier;

/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Percentage of incoming damage a defending combatant still receives.
    pub defend_multiplier_percent: u32,

    /// Factor applied to total attack by a charged attack.
    pub charge_multiplier: i32,

    /// Turn after which an unresolved battle is stopped. `0` disables the limit.
    pub max_turns: u32,
}

impl BattleConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DEFEND_MULTIPLIER_PERCENT: u32 = 50;
    pub const DEFAULT_CHARGE_MULTIPLIER: i32 = 3;
    pub const DEFAULT_MAX_TURNS: u32 = 1000;

    pub fn new() -> Self {
        Self {
            defend_multiplier_percent: Self::DEFAULT_DEFEND_MULTIPLIER_PERCENT,
            charge_multiplier: Self::DEFAULT_CHARGE_MULTIPLIER,
            max_turns: Self::DEFAULT_MAX_TURNS,
        }
    }

    pub fn with_max_turns(max_turns: u32) -> Self {
        Self {
            max_turns,
            ..Self::new()
        }
    }

    /// Multiplier applied to damage received while defending.
    pub fn defend_multiplier(&self) -> DamageMultiplier {
        DamageMultiplier::from_percent(self.defend_multiplier_percent)
    }

    /// Returns the turn limit, or `None` when battles may run indefinitely.
    pub fn turn_limit(&self) -> Option<u32> {
        (self.max_turns > 0).then_some(self.max_turns)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
