//! Battle statistics aggregation.
//!
//! The logger only counts. It never makes decisions and is read once at the
//! end of a battle to build the [`BattleResult`](crate::result::BattleResult).

/// HP of both sides at the end of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    pub turn: u32,
    pub player_hp: u32,
    pub opponent_hp: u32,
}

/// Running totals for one battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLogger {
    total_damage_dealt: u32,
    total_damage_taken: u32,
    environment_damage_taken: u32,
    player_attacks: u32,
    charged_attacks: u32,
    player_defends: u32,
    player_charges: u32,
    opponent_attacks: u32,
    turns: Vec<TurnRecord>,
}

impl BattleLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_player_attack(&mut self, damage: u32, charged: bool) {
        self.total_damage_dealt += damage;
        self.player_attacks += 1;
        if charged {
            self.charged_attacks += 1;
        }
    }

    pub fn log_player_defend(&mut self) {
        self.player_defends += 1;
    }

    pub fn log_player_charge(&mut self) {
        self.player_charges += 1;
    }

    pub fn log_opponent_attack(&mut self, damage: u32) {
        self.total_damage_taken += damage;
        self.opponent_attacks += 1;
    }

    /// Records HP drained from the player by the environment.
    ///
    /// Kept apart from `total_damage_taken`, which only counts opponent hits.
    pub fn log_environment_damage(&mut self, amount: u32) {
        self.environment_damage_taken += amount;
    }

    pub fn log_turn(&mut self, turn: u32, player_hp: u32, opponent_hp: u32) {
        self.turns.push(TurnRecord {
            turn,
            player_hp,
            opponent_hp,
        });
    }

    pub fn total_damage_dealt(&self) -> u32 {
        self.total_damage_dealt
    }

    pub fn total_damage_taken(&self) -> u32 {
        self.total_damage_taken
    }

    pub fn environment_damage_taken(&self) -> u32 {
        self.environment_damage_taken
    }

    pub fn player_attacks(&self) -> u32 {
        self.player_attacks
    }

    pub fn charged_attacks(&self) -> u32 {
        self.charged_attacks
    }

    pub fn player_defends(&self) -> u32 {
        self.player_defends
    }

    pub fn player_charges(&self) -> u32 {
        self.player_charges
    }

    pub fn opponent_attacks(&self) -> u32 {
        self.opponent_attacks
    }

    /// One record per completed turn, in order.
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }
}
