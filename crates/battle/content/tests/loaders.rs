use std::io::Write;

use battle_content::{ConfigLoader, ScenarioLoader};
use battle_core::{BattleConfig, Environment, OpponentKind, PlayerAction, WeaponKind};

const THIEF_CHARGE: &str = include_str!("../data/scenarios/thief_charge.ron");
const SWAMP_MINOTAUR: &str = include_str!("../data/scenarios/swamp_minotaur.ron");
const BATTLE_TOML: &str = include_str!("../data/battle.toml");

#[test]
fn bundled_scenarios_parse() {
    let thief = ScenarioLoader::parse(THIEF_CHARGE).unwrap();
    assert_eq!(thief.opponent, OpponentKind::Thief);
    assert_eq!(thief.weapon, Some(WeaponKind::Dagger));
    assert_eq!(thief.actions.first(), Some(&PlayerAction::Charge));

    let swamp = ScenarioLoader::parse(SWAMP_MINOTAUR).unwrap();
    assert_eq!(swamp.environment, Environment::Attrition);
}

#[test]
fn bundled_config_matches_defaults() {
    assert_eq!(ConfigLoader::parse(BATTLE_TOML).unwrap(), BattleConfig::default());
}

#[test]
fn loads_scenario_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(THIEF_CHARGE.as_bytes()).unwrap();

    let scenario = ScenarioLoader::load(file.path()).unwrap();
    let mut battle = scenario.battle(BattleConfig::default());
    battle.resolve_turn(scenario.actions[0]).unwrap();

    assert!(battle.player().is_charging());
}

#[test]
fn loads_config_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_turns = 5").unwrap();

    let config = ConfigLoader::load(file.path()).unwrap();
    assert_eq!(config.turn_limit(), Some(5));
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.ron");

    let err = ScenarioLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.ron"));
}
