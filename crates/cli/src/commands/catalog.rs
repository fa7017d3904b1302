//! Print the built-in content catalogs.

use anyhow::Result;
use battle_core::{ArmorKind, BaseStats, Environment, OpponentKind, WeaponKind};
use clap::Parser;
use strum::IntoEnumIterator;

/// List every weapon, armor, opponent and environment by scenario name
#[derive(Parser)]
pub struct Catalog {}

impl Catalog {
    pub fn execute(self) -> Result<()> {
        let warrior = BaseStats::WARRIOR;
        println!(
            "Warrior: {} HP, ATK {}, DEF {}, SPD {}",
            warrior.max_hp, warrior.attack, warrior.defense, warrior.speed
        );

        println!("\nWeapons:");
        for weapon in WeaponKind::iter() {
            let modifier = weapon.modifier();
            println!(
                "  {:<10} {:<12} ATK {:+}, SPD {:+}  {}",
                format!("{weapon:?}"),
                weapon.name(),
                modifier.attack_bonus,
                modifier.speed_penalty,
                weapon.description()
            );
        }

        println!("\nArmor:");
        for armor in ArmorKind::iter() {
            let modifier = armor.modifier();
            println!(
                "  {:<10} {:<12} DEF {:+}, SPD {:+}  {}",
                format!("{armor:?}"),
                armor.name(),
                modifier.defense_bonus,
                modifier.speed_penalty,
                armor.description()
            );
        }

        println!("\nOpponents:");
        for opponent in OpponentKind::iter() {
            let stats = opponent.base_stats();
            println!(
                "  {:<10} {} HP, ATK {}, DEF {}, SPD {}  {}",
                format!("{opponent:?}"),
                stats.max_hp,
                stats.attack,
                stats.defense,
                stats.speed,
                opponent.description()
            );
        }

        println!("\nEnvironments:");
        for environment in Environment::iter() {
            println!(
                "  {:<10} {:<12} {}",
                format!("{environment:?}"),
                environment.name(),
                environment.effects_summary()
            );
        }

        Ok(())
    }
}
