//! Command-line entry point for the Elo engine
//!
//! Runs one-off rating calculations against the configured engine and prints
//! the results as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use elo_engine::config::AppConfig;
use elo_engine::game::{recent_form, settle_game, Game, TieScore};
use elo_engine::matchup::analyze_matchup;
use elo_engine::rating::{bookmaker_odds, EloEngine};
use elo_engine::types::{GoalDifferential, Outcome, Rating};
use elo_engine::utils::current_timestamp;
use std::path::PathBuf;
use tracing::{debug, info};

/// Elo Engine - rating exchanges and match odds for head-to-head games
#[derive(Parser)]
#[command(
    name = "elo-engine",
    version,
    about = "Elo rating exchanges and match odds for head-to-head team games",
    long_about = "Elo Engine computes the rating points two teams exchange after a game, \
                 scaled by the aggregate goal differential, and the win/draw/loss \
                 probabilities and stakes of a prospective matchup."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        global = true,
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// K-factor override
    #[arg(long, value_name = "K", global = true, help = "Override the K-factor")]
    k_factor: Option<f64>,

    /// Disable goal-differential scaling
    #[arg(long, global = true, help = "Ignore the goal differential")]
    no_goal_scaling: bool,

    /// Enable debug mode
    #[arg(short, long, global = true, help = "Enable debug mode with verbose logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Points the first team gains or loses for a result
    Exchange {
        #[arg(allow_negative_numbers = true)]
        rating_a: Rating,
        #[arg(allow_negative_numbers = true)]
        rating_b: Rating,
        /// Result from the first team's perspective (win, draw, loss)
        #[arg(short, long, default_value = "win")]
        outcome: Outcome,
        /// Absolute aggregate score margin
        #[arg(short, long, default_value_t = 0)]
        goal_differential: GoalDifferential,
    },
    /// Win/draw/loss probabilities and fractional odds
    Odds {
        #[arg(allow_negative_numbers = true)]
        rating_a: Rating,
        #[arg(allow_negative_numbers = true)]
        rating_b: Rating,
    },
    /// Matchup analysis: percentages and points at stake
    Matchup {
        #[arg(allow_negative_numbers = true)]
        team1_rating: Rating,
        #[arg(allow_negative_numbers = true)]
        team2_rating: Rating,
    },
    /// Settle a fully scored two-leg game
    Settle {
        #[arg(allow_negative_numbers = true)]
        team1_rating: Rating,
        #[arg(allow_negative_numbers = true)]
        team2_rating: Rating,
        leg1_team1: u32,
        leg1_team2: u32,
        leg2_team1: u32,
        leg2_team2: u32,
        /// Hosting team name
        #[arg(long, default_value = "team1")]
        team1: String,
        /// Receiving team name
        #[arg(long, default_value = "team2")]
        team2: String,
    },
    /// Recent results of a team from a JSON file of games, most recent first
    Form {
        team: String,
        /// JSON array of games
        #[arg(long, value_name = "FILE")]
        games: PathBuf,
        /// Number of games to show (defaults to the configured form length)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Print the effective configuration
    Config,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(k_factor) = args.k_factor {
        config.elo.k_factor = k_factor;
    }

    if args.no_goal_scaling {
        config.elo.goal_differential = None;
    }

    elo_engine::config::validate_config(&config)?;
    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(command: Command, config: AppConfig) -> Result<()> {
    let engine = EloEngine::new(config.elo.clone())?;

    match command {
        Command::Exchange {
            rating_a,
            rating_b,
            outcome,
            goal_differential,
        } => {
            let delta = engine.points_exchange(rating_a, rating_b, outcome, goal_differential);
            print_json(&serde_json::json!({
                "rating_a": rating_a,
                "rating_b": rating_b,
                "outcome": outcome,
                "goal_differential": goal_differential,
                "expected_score": engine.expected_score(rating_a, rating_b),
                "delta": delta,
                "new_rating": rating_a.saturating_add(delta),
            }))
        }
        Command::Odds { rating_a, rating_b } => {
            let odds = engine.match_odds(rating_a, rating_b);
            // Labels are omitted rather than failing when a side has no positive probability
            let labels = bookmaker_odds(&odds).ok();
            print_json(&serde_json::json!({
                "probabilities": odds,
                "bookmaker_odds": labels,
            }))
        }
        Command::Matchup {
            team1_rating,
            team2_rating,
        } => print_json(&analyze_matchup(&engine, team1_rating, team2_rating)),
        Command::Settle {
            team1_rating,
            team2_rating,
            leg1_team1,
            leg1_team2,
            leg2_team1,
            leg2_team2,
            team1,
            team2,
        } => {
            let game = Game::new(
                team1,
                team2,
                TieScore::new((leg1_team1, leg1_team2), (leg2_team1, leg2_team2)),
            );
            debug!("Settling game {} ({})", game.id, game.score);

            let settlement =
                settle_game(&engine, &game, team1_rating, team2_rating, current_timestamp())?;
            print_json(&settlement)
        }
        Command::Form { team, games, count } => {
            let contents = std::fs::read_to_string(&games)
                .with_context(|| format!("Failed to read games file {}", games.display()))?;
            let games: Vec<Game> = serde_json::from_str(&contents)
                .with_context(|| format!("Invalid games file {}", games.display()))?;

            let count = count.unwrap_or(config.service.form_length);
            print_json(&recent_form(&team, &games, count))
        }
        Command::Config => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "{} v{} (K = {}, goal scaling {})",
        config.service.name,
        elo_engine::VERSION,
        config.elo.k_factor,
        if config.elo.goal_differential.is_some() {
            "on"
        } else {
            "off"
        }
    );

    run(args.command, config)
}
