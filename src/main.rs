use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pool_standings::output::OutputFormat;
use pool_standings::roster::PlayerRecord;
use pool_standings::scoring::ScoringConfig;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank fantasy teams by total points (default if no subcommand)
    Standings {
        /// Player snapshot (JSON array or object); stdin when omitted or "-"
        input: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (defaults to the config file's, then json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show each player's points, grouped by team
    Players {
        /// Player snapshot (JSON array or object); stdin when omitted or "-"
        input: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (defaults to the config file's, then json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Recompute stale points-before-acquiring from an acquisition-time stats snapshot
    Refresh {
        /// Roster to update
        #[arg(long)]
        roster: PathBuf,

        /// Stats snapshot taken when the players were acquired
        #[arg(long)]
        stats: PathBuf,

        /// Write the updated roster here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write a config file with the default scoring weights
    Init {
        /// Where to write it (defaults to ~/.config/pool-standings/config.yaml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "pool-standings")]
#[command(about = "Playoff fantasy-hockey pool standings", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/pool-standings/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let command = cli.command.unwrap_or(Commands::Standings {
        input: None,
        output: None,
        format: None,
    });

    let result = match command {
        Commands::Init { path, force } => {
            match pool_standings::config::write_default_config(path, force) {
                Ok(written) => {
                    println!("Config written to {}", written.display());
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            }
        }
        Commands::Standings {
            input,
            output,
            format,
        } => {
            let (scoring, default_format) = load_scoring(cli.config);
            let players = load_input(input.as_deref());
            let use_colors = output.is_none() && pool_standings::output::should_use_colors();
            render_standings(&players, &scoring, format.unwrap_or(default_format), use_colors)
                .and_then(|doc| pool_standings::output::write_document(output.as_deref(), &doc))
        }
        Commands::Players {
            input,
            output,
            format,
        } => {
            let (scoring, default_format) = load_scoring(cli.config);
            let players = load_input(input.as_deref());
            let use_colors = output.is_none() && pool_standings::output::should_use_colors();
            render_players(&players, &scoring, format.unwrap_or(default_format), use_colors)
                .and_then(|doc| pool_standings::output::write_document(output.as_deref(), &doc))
        }
        Commands::Refresh {
            roster,
            stats,
            output,
        } => {
            let (scoring, _) = load_scoring(cli.config);
            let mut roster = load_input(Some(&roster));
            let snapshot = load_input(Some(&stats));
            let summary =
                pool_standings::refresh::refresh_pre_acquisition(&mut roster, &snapshot, &scoring);
            eprintln!(
                "Refresh complete: {} updated, {} skipped, {} missing from snapshot",
                summary.updated, summary.skipped, summary.missing
            );
            pool_standings::output::render_json(&roster)
                .and_then(|doc| pool_standings::output::write_document(output.as_deref(), &doc))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_FAILURE);
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load and validate the config, or exit with the config error code.
/// Returns the scoring weights and the default output format.
fn load_scoring(path: Option<PathBuf>) -> (ScoringConfig, OutputFormat) {
    let config = match pool_standings::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.scoring.unwrap_or_default();
    if let Err(errors) = pool_standings::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    (scoring, config.format.unwrap_or_default())
}

/// Load a player document or exit with the input error code
fn load_input(path: Option<&Path>) -> Vec<PlayerRecord> {
    match pool_standings::roster::load_players(path) {
        Ok(players) => players,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn render_standings(
    players: &[PlayerRecord],
    scoring: &ScoringConfig,
    format: OutputFormat,
    use_colors: bool,
) -> anyhow::Result<String> {
    let standings = pool_standings::standings::aggregate_with(players, scoring);
    match format {
        OutputFormat::Json => pool_standings::output::render_json(&standings),
        OutputFormat::Table => Ok(pool_standings::output::format_standings_table(
            &standings, use_colors,
        )),
        OutputFormat::Tsv => Ok(pool_standings::output::format_standings_tsv(&standings)),
    }
}

fn render_players(
    players: &[PlayerRecord],
    scoring: &ScoringConfig,
    format: OutputFormat,
    use_colors: bool,
) -> anyhow::Result<String> {
    let rows = pool_standings::standings::score_players(players, scoring);
    match format {
        OutputFormat::Json => pool_standings::output::render_json(&rows),
        OutputFormat::Table => Ok(pool_standings::output::format_player_table(
            &rows, use_colors,
        )),
        OutputFormat::Tsv => Ok(pool_standings::output::format_player_tsv(&rows)),
    }
}
