//! Battle-wide environments.
//!
//! An environment is selected once per battle and applies a fixed stat delta
//! to every surviving combatant at the end of each turn. Deltas accumulate
//! without decay: after N turns the total effect is N times the per-turn
//! effect.

use crate::combatant::Side;

/// Environment variants.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum Environment {
    /// No effect for either side (the Arena).
    #[default]
    Neutral,
    /// Drains the player and feeds the opponent (the Swamp).
    Attrition,
    /// Pumps the player up and wears the opponent down (the Colosseum).
    Energizing,
}

impl Environment {
    /// Display name of the battlefield.
    pub const fn name(&self) -> &'static str {
        match self {
            Environment::Neutral => "Arena",
            Environment::Attrition => "Swamp",
            Environment::Energizing => "Colosseum",
        }
    }

    /// Flavor text of the battlefield.
    pub const fn description(&self) -> &'static str {
        match self {
            Environment::Neutral => "Neutral battleground",
            Environment::Attrition => "Treacherous marshland",
            Environment::Energizing => "Roaring crowd energizes you",
        }
    }

    /// Human readable summary of the per-turn effects.
    pub const fn effects_summary(&self) -> &'static str {
        match self {
            Environment::Neutral => "No penalties for either combatant",
            Environment::Attrition => "Player: -1 HP/turn | Opponent: +1 Atk/turn",
            Environment::Energizing => "Player: +1 Atk/turn | Opponent: -1 Def/turn",
        }
    }

    /// Per-turn stat delta for the given side.
    pub const fn effect_for(&self, side: Side) -> EnvironmentEffect {
        match (self, side) {
            (Environment::Neutral, _) => EnvironmentEffect::NONE,
            (Environment::Attrition, Side::Player) => EnvironmentEffect {
                hp_loss: 1,
                ..EnvironmentEffect::NONE
            },
            (Environment::Attrition, Side::Opponent) => EnvironmentEffect {
                attack_gain: 1,
                ..EnvironmentEffect::NONE
            },
            (Environment::Energizing, Side::Player) => EnvironmentEffect {
                attack_gain: 1,
                ..EnvironmentEffect::NONE
            },
            (Environment::Energizing, Side::Opponent) => EnvironmentEffect {
                defense_loss: 1,
                ..EnvironmentEffect::NONE
            },
        }
    }
}

/// Stat delta applied to one combatant for one turn.
///
/// All fields are magnitudes; the direction is fixed by the field name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentEffect {
    pub hp_loss: u32,
    pub attack_gain: i32,
    pub defense_loss: i32,
}

impl EnvironmentEffect {
    pub const NONE: Self = Self {
        hp_loss: 0,
        attack_gain: 0,
        defense_loss: 0,
    };

    /// Returns true if applying this effect changes nothing.
    pub const fn is_none(&self) -> bool {
        self.hp_loss == 0 && self.attack_gain == 0 && self.defense_loss == 0
    }
}
