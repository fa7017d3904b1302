use battle_core::{
    ArmorKind, Battle, BattleConfig, BattleOutcome, Combatant, Environment, GameError, Loadout,
    OpponentKind, PlayerAction, Side, TurnError, TurnEvent, WeaponKind,
};

fn warrior(weapon: WeaponKind, armor: ArmorKind) -> Combatant {
    Combatant::warrior(Loadout::builder().weapon(weapon).armor(armor).build())
}

/// Drives a battle to completion, cycling Charge/Attack whenever Charge is allowed.
fn run_charge_cycle(battle: &mut Battle) -> u32 {
    while !battle.is_finished() {
        let action = if battle.available_actions().contains(&PlayerAction::Charge) {
            PlayerAction::Charge
        } else {
            PlayerAction::Attack
        };
        battle.resolve_turn(action).unwrap();
    }
    battle.turn()
}

#[test]
fn sword_warrior_beats_thief_with_charged_attacks() {
    let mut battle = Battle::with_defaults(
        warrior(WeaponKind::Sword, ArmorKind::Medium),
        Combatant::opponent(OpponentKind::Thief),
        Environment::Neutral,
    );

    let turns = run_charge_cycle(&mut battle);
    let result = battle.finish(5).unwrap();

    // 31 * 3 - 20 = 73 per charged attack; the third charged hit finishes.
    assert_eq!(result.outcome, BattleOutcome::Victory);
    assert!(result.player_victory);
    assert_eq!(turns, 6);
    assert_eq!(result.turns_elapsed, turns);
    assert_eq!(result.final_opponent_hp, 0);
    assert_eq!(result.total_damage_taken, 0);
    assert_eq!(result.total_damage_dealt, 219);
}

#[test]
fn identical_inputs_give_identical_battles() {
    let run = || {
        let mut battle = Battle::with_defaults(
            warrior(WeaponKind::BattleAxe, ArmorKind::Light),
            Combatant::opponent(OpponentKind::Viking),
            Environment::Attrition,
        );
        run_charge_cycle(&mut battle);
        (battle.finish(0).unwrap(), battle.logger().turns().to_vec())
    };

    assert_eq!(run(), run());
}

#[test]
fn colosseum_wears_down_opponent_defense() {
    let mut battle = Battle::with_defaults(
        warrior(WeaponKind::Dagger, ArmorKind::Light),
        Combatant::opponent(OpponentKind::Minotaur),
        Environment::Energizing,
    );

    let mut dealt = Vec::new();
    for _ in 0..4 {
        let report = battle.resolve_turn(PlayerAction::Attack).unwrap();
        dealt.push(report.damage_by(Side::Player));
        assert!(report.events.iter().any(|event| matches!(
            event,
            TurnEvent::Environment {
                side: Side::Opponent,
                ..
            }
        )));
    }

    // Attack grows by one and defense drops by one per turn.
    assert_eq!(dealt, vec![0, 0, 0, 0]);
    assert_eq!(battle.player().total_attack(), 25);
    assert_eq!(battle.opponent().total_defense(), 36);
}

#[test]
fn minotaur_overpowers_unarmored_warrior() {
    let mut battle = Battle::with_defaults(
        Combatant::warrior(Loadout::empty()),
        Combatant::opponent(OpponentKind::Minotaur),
        Environment::Neutral,
    );

    while !battle.is_finished() {
        battle.resolve_turn(PlayerAction::Attack).unwrap();
    }
    let result = battle.finish(0).unwrap();

    // 39 damage per hit: 100 -> 61 -> 22 -> 0. The last hit still counts in full.
    assert_eq!(result.outcome, BattleOutcome::Defeat);
    assert_eq!(result.turns_elapsed, 3);
    assert_eq!(result.final_player_hp, 0);
    assert_eq!(result.total_damage_taken, 117);
}

#[test]
fn errors_carry_codes_and_severity() {
    let mut battle = Battle::new(
        warrior(WeaponKind::Dagger, ArmorKind::Light),
        Combatant::opponent(OpponentKind::Thief),
        Environment::Neutral,
        BattleConfig::with_max_turns(1),
    );
    battle.resolve_turn(PlayerAction::Charge).unwrap();

    let err = battle.resolve_turn(PlayerAction::Attack).unwrap_err();
    assert_eq!(err, TurnError::BattleFinished { turn: 1 });
    assert_eq!(err.error_code(), "TURN_BATTLE_FINISHED");
    assert!(!err.severity().is_recoverable());
}
