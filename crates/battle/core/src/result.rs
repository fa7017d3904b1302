//! Battle outcome and final result record.

/// How a battle ended.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleOutcome {
    /// The opponent fell and the player is still standing.
    Victory,
    /// The player fell and the opponent is still standing.
    Defeat,
    /// Both sides reached 0 HP in the same turn. Counts as a loss.
    MutualKnockout,
    /// The configured turn limit was reached with both sides alive. Counts as
    /// a loss.
    TurnLimitReached,
}

impl BattleOutcome {
    /// Decides the outcome from the liveness of both sides.
    ///
    /// Returns `None` while both are alive.
    pub const fn from_liveness(player_alive: bool, opponent_alive: bool) -> Option<Self> {
        match (player_alive, opponent_alive) {
            (true, true) => None,
            (true, false) => Some(BattleOutcome::Victory),
            (false, true) => Some(BattleOutcome::Defeat),
            (false, false) => Some(BattleOutcome::MutualKnockout),
        }
    }

    /// Only a clean victory counts as a win for the player.
    pub const fn is_player_victory(&self) -> bool {
        matches!(self, BattleOutcome::Victory)
    }
}

/// Immutable record produced exactly once when a battle ends.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub outcome: BattleOutcome,
    pub player_victory: bool,
    pub turns_elapsed: u32,
    pub duration_ms: u64,
    pub final_player_hp: u32,
    pub final_opponent_hp: u32,
    /// Damage the player dealt with attacks.
    pub total_damage_dealt: u32,
    /// Damage the player took from opponent attacks.
    pub total_damage_taken: u32,
}

impl BattleResult {
    /// Dealt / taken. When nothing was taken the dealt total is returned, so
    /// a flawless battle still ranks by damage.
    pub fn damage_ratio(&self) -> f64 {
        if self.total_damage_taken > 0 {
            f64::from(self.total_damage_dealt) / f64::from(self.total_damage_taken)
        } else {
            f64::from(self.total_damage_dealt)
        }
    }
}
