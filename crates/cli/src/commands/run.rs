//! Run a scenario file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_content::{ConfigLoader, Scenario, ScenarioLoader};
use battle_core::{BattleConfig, BattleResult, TurnReport};
use clap::Parser;
use runtime::{BattleRunner, RunnerConfig, ScriptedActionProvider, SessionStats};
use serde::Serialize;

/// Run a scenario and print the result
#[derive(Parser)]
pub struct Run {
    /// Scenario file (RON)
    #[arg(short, long, value_name = "FILE")]
    scenario: PathBuf,

    /// Battle rules (TOML). Built-in defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run the scenario this many times and add session statistics
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    repeat: u32,

    /// Include every turn report in the output
    #[arg(long)]
    turns: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Short human-readable summary
    Summary,
}

#[derive(Serialize)]
struct BattleOutput {
    result: BattleResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    turns: Vec<TurnReport>,
}

#[derive(Serialize)]
struct SessionOutput {
    battles: Vec<BattleOutput>,
    stats: SessionStats,
    win_rate: f64,
    average_turns: f64,
    damage_ratio: Option<f64>,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let scenario = ScenarioLoader::load(&self.scenario)?;
        let config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => BattleConfig::default(),
        };

        tracing::info!(
            scenario = %self.scenario.display(),
            opponent = %scenario.opponent,
            environment = %scenario.environment,
            repeat = self.repeat,
            "running scenario"
        );

        let mut battles = Vec::new();
        let mut stats = SessionStats::new();
        for _ in 0..self.repeat {
            let battle = self.run_once(&scenario, &config)?;
            stats.record(&battle.result);
            battles.push(battle);
        }

        match self.format {
            OutputFormat::Json => print_json(battles, stats),
            OutputFormat::Summary => {
                for battle in &battles {
                    print_summary(&battle.result);
                }
                if battles.len() > 1 {
                    print_session(&stats);
                }
                Ok(())
            }
        }
    }

    fn run_once(&self, scenario: &Scenario, config: &BattleConfig) -> Result<BattleOutput> {
        let provider =
            ScriptedActionProvider::new(scenario.actions.clone()).with_fallback(scenario.fallback);
        let mut runner = BattleRunner::builder()
            .config(RunnerConfig {
                battle: config.clone(),
            })
            .player(scenario.player())
            .opponent(scenario.opponent())
            .environment(scenario.environment)
            .provider(provider)
            .build()?;

        let mut turns = Vec::new();
        let result = runner
            .run_with_observer(|report| {
                if self.turns {
                    turns.push(report.clone());
                }
            })
            .with_context(|| format!("Scenario {} failed", self.scenario.display()))?;

        Ok(BattleOutput { result, turns })
    }
}

fn print_json(mut battles: Vec<BattleOutput>, stats: SessionStats) -> Result<()> {
    let json = if battles.len() == 1 {
        let battle = battles.remove(0);
        serde_json::to_string_pretty(&battle)?
    } else {
        serde_json::to_string_pretty(&SessionOutput {
            battles,
            win_rate: stats.win_rate(),
            average_turns: stats.average_turns(),
            damage_ratio: stats.damage_ratio(),
            stats,
        })?
    };
    println!("{json}");
    Ok(())
}

fn print_summary(result: &BattleResult) {
    let verdict = if result.player_victory {
        "player wins"
    } else {
        "player loses"
    };
    println!("Outcome:      {} ({verdict})", result.outcome);
    println!("Turns:        {}", result.turns_elapsed);
    println!("Duration:     {} ms", result.duration_ms);
    println!("Player HP:    {}", result.final_player_hp);
    println!("Opponent HP:  {}", result.final_opponent_hp);
    println!(
        "Damage:       {} dealt / {} taken (ratio {:.2})",
        result.total_damage_dealt,
        result.total_damage_taken,
        result.damage_ratio()
    );
    println!();
}

fn print_session(stats: &SessionStats) {
    println!("Battles:      {}", stats.total_battles());
    println!(
        "Record:       {} won / {} lost ({:.1}%)",
        stats.victories(),
        stats.defeats(),
        stats.win_rate()
    );
    println!("Avg turns:    {:.1}", stats.average_turns());
    println!("Avg duration: {:.1} ms", stats.average_duration_ms());
    if let Some(ratio) = stats.damage_ratio() {
        println!("Damage ratio: {ratio:.2}");
    }
}
