//! Cricket Simulation CLI
//!
//! Thin presentation layer over `oc_core`: runs a match, narrates the
//! buffered event log, and renders text charts from the read-only
//! reporting interface.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use oc_core::models::{EventType, MatchEvent, MatchResult, Player};
use oc_core::{report, MatchEngine, MatchRequest, DEFAULT_OVERS};

#[derive(Parser)]
#[command(name = "oc_cli")]
#[command(about = "Simulate a limited-overs cricket match", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a match and print narration and charts
    Simulate {
        /// Overs per innings
        #[arg(long)]
        overs: Option<u32>,

        /// Simulation seed (same seed = same match)
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Roster file in MatchRequest JSON format; built-in squads when omitted
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Print the raw MatchResult JSON instead of narration
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    match cli.command {
        Commands::Simulate { overs, seed, roster, json } => {
            let request = load_request(roster.as_deref(), overs, seed)?;
            let plan = oc_core::build_plan(request).map_err(|e| anyhow!(e))?;
            let total_overs = plan.overs;

            let mut engine = MatchEngine::new(plan)?;
            let result = engine.simulate()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                narrate(&result);
                print_charts(&result, total_overs);
            }
        }
    }

    Ok(())
}

fn load_request(
    roster: Option<&std::path::Path>,
    overs: Option<u32>,
    seed: u64,
) -> Result<MatchRequest> {
    let mut request: MatchRequest = match roster {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read roster file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid roster file {}", path.display()))?
        }
        None => serde_json::from_value(default_request())?,
    };

    // CLI flags win over file values.
    if let Some(overs) = overs {
        request.overs = overs;
    }
    request.seed = seed;
    Ok(request)
}

fn default_request() -> serde_json::Value {
    serde_json::json!({
        "schema_version": 1,
        "seed": 0,
        "overs": DEFAULT_OVERS,
        "team_a": {
            "name": "Team A",
            "players": [
                {"name": "Player A1", "age": 30, "role": "batsman"},
                {"name": "Player A2", "age": 28, "role": "bowler"},
                {"name": "Player A3", "age": 27, "role": "all_rounder"},
                {"name": "Player A4", "age": 29, "role": "wicket_keeper"}
            ]
        },
        "team_b": {
            "name": "Team B",
            "players": [
                {"name": "Player B1", "age": 31, "role": "batsman"},
                {"name": "Player B2", "age": 26, "role": "bowler"},
                {"name": "Player B3", "age": 28, "role": "all_rounder"},
                {"name": "Player B4", "age": 30, "role": "wicket_keeper"}
            ]
        }
    })
}

fn narrate(result: &MatchResult) {
    println!(
        "Starting match between {} and {}  ({})",
        result.team_a.name,
        result.team_b.name,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let mut current_over = 0;
    let mut current_innings = 0;
    for event in &result.events {
        match event.event_type {
            EventType::Delivery => {
                if event.innings != current_innings || event.over != current_over {
                    current_innings = event.innings;
                    current_over = event.over;
                    println!("\n--- Over {} ---", event.over);
                }
                narrate_delivery(event);
            }
            EventType::OverComplete => {
                if let Some(details) = &event.details {
                    println!(
                        "Over {} completed. Runs this over: {}. Wickets this over: {}.",
                        event.over,
                        details.runs.unwrap_or(0),
                        details.wickets.unwrap_or(0)
                    );
                }
            }
            EventType::InningsComplete => {
                if let Some(details) = &event.details {
                    let heading =
                        if event.innings == 1 { "Innings Break" } else { "Match End" };
                    println!(
                        "\n--- {} ---\n{} scored {} runs for {} wickets in {} overs.",
                        heading,
                        details.team.as_deref().unwrap_or("?"),
                        details.runs.unwrap_or(0),
                        details.wickets.unwrap_or(0),
                        details.overs.unwrap_or(0)
                    );
                }
            }
            EventType::MatchEnd => {
                println!("\n{}!", result.outcome);
            }
        }
    }
}

fn narrate_delivery(event: &MatchEvent) {
    if let Some(details) = &event.details {
        println!(
            "Runs scored: {}, Wicket: {}",
            details.runs.unwrap_or(0),
            details.wicket.unwrap_or(false)
        );
    }
}

fn print_charts(result: &MatchResult, total_overs: u32) {
    let series_a = report::runs_per_over_series(&result.team_a, total_overs);
    let series_b = report::runs_per_over_series(&result.team_b, total_overs);
    let max_runs = series_a.iter().chain(series_b.iter()).copied().max().unwrap_or(0);

    println!("\nRuns per over");
    println!("  Over  {:<24}  {}", result.team_a.name, result.team_b.name);
    for over in 0..total_overs as usize {
        println!(
            "  {:>4}  {:<24}  {}",
            over + 1,
            bar(series_a[over], max_runs),
            bar(series_b[over], max_runs)
        );
    }

    let mut players: Vec<Player> = result
        .team_a
        .players
        .iter()
        .chain(result.team_b.players.iter())
        .cloned()
        .collect();
    for player in &mut players {
        player.update_all_rates();
    }

    println!("\nBatting averages");
    for entry in report::batting_average_bars(&players) {
        println!("  {:<20} {:>6.1}", entry.name, entry.value);
    }

    println!("\nBowling averages");
    for entry in report::bowling_average_bars(&players) {
        println!("  {:<20} {:>6.1}", entry.name, entry.value);
    }
}

fn bar(value: u32, max: u32) -> String {
    const WIDTH: u32 = 16;
    let filled = if max == 0 { 0 } else { value * WIDTH / max };
    format!("{:#<width$} {}", "", value, width = filled as usize)
}
