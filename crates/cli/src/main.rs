//! Headless battle runner.
//!
//! Run with: `battle-cli <command>`. Logs go to stderr (filter with
//! `RUST_LOG`), results to stdout.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Catalog, Run};

/// Turn-based warrior battles
#[derive(Parser)]
#[command(name = "battle-cli")]
#[command(about = "Run warrior battle scenarios", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run a scenario file and print the result
    Run(Run),

    /// List weapons, armor, opponents and environments
    Catalog(Catalog),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Catalog(cmd) => cmd.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_arguments() {
        let cli = Cli::try_parse_from([
            "battle-cli",
            "run",
            "--scenario",
            "thief.ron",
            "--config",
            "battle.toml",
            "--repeat",
            "3",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Run(_)));
    }

    #[test]
    fn rejects_zero_repeats() {
        let parsed = Cli::try_parse_from(["battle-cli", "run", "-s", "thief.ron", "-r", "0"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn scenario_is_required() {
        assert!(Cli::try_parse_from(["battle-cli", "run"]).is_err());
        assert!(Cli::try_parse_from(["battle-cli", "catalog"]).is_ok());
    }
}
