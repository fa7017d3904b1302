//! Statistics across a session of battles.

use battle_core::BattleResult;
use serde::{Deserialize, Serialize};

/// Running totals over every battle recorded in a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    total_battles: u32,
    victories: u32,
    defeats: u32,
    total_turns: u64,
    total_duration_ms: u64,
    total_damage_dealt: u64,
    total_damage_taken: u64,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished battle. Anything but a victory counts as a defeat.
    pub fn record(&mut self, result: &BattleResult) {
        self.total_battles += 1;
        self.total_turns += u64::from(result.turns_elapsed);
        self.total_duration_ms += result.duration_ms;
        self.total_damage_dealt += u64::from(result.total_damage_dealt);
        self.total_damage_taken += u64::from(result.total_damage_taken);

        if result.player_victory {
            self.victories += 1;
        } else {
            self.defeats += 1;
        }
    }

    pub fn total_battles(&self) -> u32 {
        self.total_battles
    }

    pub fn victories(&self) -> u32 {
        self.victories
    }

    pub fn defeats(&self) -> u32 {
        self.defeats
    }

    pub fn total_damage_dealt(&self) -> u64 {
        self.total_damage_dealt
    }

    pub fn total_damage_taken(&self) -> u64 {
        self.total_damage_taken
    }

    /// Victories as a percentage of battles; 0 before the first battle.
    pub fn win_rate(&self) -> f64 {
        self.per_battle(u64::from(self.victories)) * 100.0
    }

    pub fn average_turns(&self) -> f64 {
        self.per_battle(self.total_turns)
    }

    pub fn average_duration_ms(&self) -> f64 {
        self.per_battle(self.total_duration_ms)
    }

    /// Overall dealt / taken, or `None` while no damage has been taken.
    pub fn damage_ratio(&self) -> Option<f64> {
        (self.total_damage_taken > 0)
            .then(|| self.total_damage_dealt as f64 / self.total_damage_taken as f64)
    }

    fn per_battle(&self, total: u64) -> f64 {
        if self.total_battles == 0 {
            return 0.0;
        }
        total as f64 / f64::from(self.total_battles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::BattleOutcome;

    fn result(outcome: BattleOutcome, turns: u32, dealt: u32, taken: u32) -> BattleResult {
        BattleResult {
            outcome,
            player_victory: outcome.is_player_victory(),
            turns_elapsed: turns,
            duration_ms: 100,
            final_player_hp: 0,
            final_opponent_hp: 0,
            total_damage_dealt: dealt,
            total_damage_taken: taken,
        }
    }

    #[test]
    fn empty_session_has_zero_rates() {
        let stats = SessionStats::new();
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.average_turns(), 0.0);
        assert_eq!(stats.damage_ratio(), None);
    }

    #[test]
    fn aggregates_results() {
        let mut stats = SessionStats::new();
        stats.record(&result(BattleOutcome::Victory, 6, 150, 0));
        stats.record(&result(BattleOutcome::Defeat, 3, 0, 100));
        stats.record(&result(BattleOutcome::MutualKnockout, 1, 1, 0));
        stats.record(&result(BattleOutcome::Victory, 10, 250, 50));

        assert_eq!(stats.total_battles(), 4);
        assert_eq!(stats.victories(), 2);
        assert_eq!(stats.defeats(), 2);
        assert_eq!(stats.win_rate(), 50.0);
        assert_eq!(stats.average_turns(), 5.0);
        assert_eq!(stats.average_duration_ms(), 100.0);
        assert_eq!(stats.damage_ratio(), Some(401.0 / 150.0));
    }
}
