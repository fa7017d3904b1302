//! Battle scenario loader.
//!
//! A scenario describes one battle: the warrior's loadout, the opponent, the
//! environment, and the actions a scripted player will take.

use std::path::Path;

use battle_core::{
    ArmorKind, Battle, BattleConfig, Combatant, Environment, Loadout, OpponentKind, PlayerAction,
    WeaponKind,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One battle setup.
///
/// RON format:
///
/// ```ron
/// (
///     weapon: Some(Dagger),
///     armor: Some(Light),
///     opponent: Thief,
///     environment: Neutral,
///     actions: [Charge, Attack],
///     fallback: Attack,
/// )
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub weapon: Option<WeaponKind>,
    #[serde(default)]
    pub armor: Option<ArmorKind>,
    pub opponent: OpponentKind,
    #[serde(default)]
    pub environment: Environment,
    /// Actions taken in order, one per turn.
    #[serde(default)]
    pub actions: Vec<PlayerAction>,
    /// Action taken once `actions` runs out.
    #[serde(default = "Scenario::default_fallback")]
    pub fallback: PlayerAction,
}

impl Scenario {
    fn default_fallback() -> PlayerAction {
        PlayerAction::Attack
    }

    pub fn loadout(&self) -> Loadout {
        Loadout {
            weapon: self.weapon,
            armor: self.armor,
        }
    }

    pub fn player(&self) -> Combatant {
        Combatant::warrior(self.loadout())
    }

    pub fn opponent(&self) -> Combatant {
        Combatant::opponent(self.opponent)
    }

    /// Builds a fresh battle for this scenario.
    pub fn battle(&self, config: BattleConfig) -> Battle {
        Battle::new(self.player(), self.opponent(), self.environment, config)
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    /// Parse a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_scenario() {
        let scenario = ScenarioLoader::parse(
            r#"(
                weapon: Some(Sword),
                armor: None,
                opponent: Viking,
                environment: Attrition,
                actions: [Defend, Charge, Attack],
                fallback: Defend,
            )"#,
        )
        .unwrap();

        assert_eq!(scenario.weapon, Some(WeaponKind::Sword));
        assert_eq!(scenario.armor, None);
        assert_eq!(scenario.opponent, OpponentKind::Viking);
        assert_eq!(scenario.environment, Environment::Attrition);
        assert_eq!(scenario.actions.len(), 3);
        assert_eq!(scenario.fallback, PlayerAction::Defend);
    }

    #[test]
    fn optional_fields_default() {
        let scenario = ScenarioLoader::parse("(opponent: Minotaur)").unwrap();

        assert_eq!(scenario.loadout(), Loadout::empty());
        assert_eq!(scenario.environment, Environment::Neutral);
        assert!(scenario.actions.is_empty());
        assert_eq!(scenario.fallback, PlayerAction::Attack);
    }

    #[test]
    fn unknown_opponent_is_rejected() {
        let err = ScenarioLoader::parse("(opponent: Dragon)").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse scenario RON"));
    }

    #[test]
    fn builds_battle_with_loadout() {
        let scenario = Scenario {
            weapon: Some(WeaponKind::Dagger),
            armor: Some(ArmorKind::Light),
            opponent: OpponentKind::Thief,
            environment: Environment::Energizing,
            actions: Vec::new(),
            fallback: PlayerAction::Attack,
        };

        let battle = scenario.battle(BattleConfig::default());

        assert_eq!(battle.player().total_attack(), 21);
        assert_eq!(battle.opponent().name(), "Thief");
        assert_eq!(battle.environment(), Environment::Energizing);
    }
}
