//! Opponent catalog.

use super::BaseStats;

/// Opponent variants and their fixed stat lines.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OpponentKind {
    /// Fast and fragile.
    Thief,
    /// Balanced stats across the board.
    Viking,
    /// Slow, durable and hard hitting.
    Minotaur,
}

impl OpponentKind {
    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            OpponentKind::Thief => "Thief",
            OpponentKind::Viking => "Viking",
            OpponentKind::Minotaur => "Minotaur",
        }
    }

    /// Flavor text.
    pub const fn description(&self) -> &'static str {
        match self {
            OpponentKind::Thief => "Swift and cunning, strikes from shadows",
            OpponentKind::Viking => "Fierce warrior with balanced combat skills",
            OpponentKind::Minotaur => "Massive beast with devastating power",
        }
    }

    /// Base stats: HP, attack, defense, speed.
    pub const fn base_stats(&self) -> BaseStats {
        match self {
            OpponentKind::Thief => BaseStats::new(150, 20, 20, 40),
            OpponentKind::Viking => BaseStats::new(250, 30, 30, 30),
            OpponentKind::Minotaur => BaseStats::new(350, 40, 40, 20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tougher_opponents_are_slower() {
        let kinds: Vec<_> = OpponentKind::iter().collect();
        for pair in kinds.windows(2) {
            let (weaker, stronger) = (pair[0].base_stats(), pair[1].base_stats());
            assert!(stronger.max_hp > weaker.max_hp);
            assert!(stronger.speed < weaker.speed);
        }
    }

    #[test]
    fn thief_stat_line() {
        let stats = OpponentKind::Thief.base_stats();
        assert_eq!(stats, BaseStats::new(150, 20, 20, 40));
    }
}
