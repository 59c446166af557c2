//! Self-play simulator CLI - plays complete games in memory with random
//! legal moves and writes per-game metrics.
//!
//! Useful for soak-testing the rules engine and for eyeballing score and
//! round-length distributions under different configurations.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use i151_engine::{CallPolicy, GameConfig};
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "i151-simulator")]
#[command(about = "In-memory self-play simulator for the I151 rules engine")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// JSON game config file; the flags below override what it sets
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seats at the table (2-4)
    #[arg(short, long)]
    players: Option<usize>,

    /// Cards dealt to each player
    #[arg(long)]
    hand_size: Option<usize>,

    /// Elimination threshold
    #[arg(long)]
    point_limit: Option<i32>,

    /// Only offer a draw when the hand holds no legal play
    #[arg(long)]
    strict_calls: bool,

    /// Base seed (game N uses seed + N); random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Stop a game after this many rounds even if several players remain
    #[arg(long, default_value = "200")]
    max_rounds: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
            None => GameConfig::default(),
        };
        if let Some(players) = self.players {
            config.num_players = players;
        }
        if let Some(hand_size) = self.hand_size {
            config.initial_hand_size = hand_size;
        }
        if let Some(limit) = self.point_limit {
            config.point_limit = limit;
        }
        if self.strict_calls {
            config.call_policy = CallPolicy::WhenNoPlay;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.game_config()?;
    let base_seed = args.seed.unwrap_or_else(rand::random);
    if args.show_output {
        info!(
            games = args.games,
            players = config.num_players,
            base_seed,
            "Starting simulator"
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = base_seed.wrapping_add(u64::from(game_num));
        let game_res = Simulator::new(config.clone(), game_seed, !game_seed, args.max_rounds)
            .and_then(Simulator::simulate_game);

        match game_res {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics =
                    build_game_metrics(game_num, game_seed, &config, &result, duration_ms);
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!(
                        "Game {} completed: scores={:?}",
                        game_num, result.final_scores
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.cloned(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games, config.num_players);
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    errors: u32,
    elapsed: Duration,
    total: u32,
    num_players: usize,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let rounds: usize = results.iter().map(|r| r.rounds.len()).sum();
    let ceiling_hits = results
        .iter()
        .flat_map(|r| &r.rounds)
        .filter(|r| r.ceiling_hit)
        .count();
    let unfinished = results.iter().filter(|r| r.winner.is_none()).count();
    println!(
        "Rounds: {} (avg {:.1}/game), move ceiling hit: {}, no single winner: {}",
        rounds,
        rounds as f64 / results.len() as f64,
        ceiling_hits,
        unfinished
    );

    let mut wins = vec![0u32; num_players];
    let mut total_scores = vec![0i64; num_players];
    for result in results {
        if let Some(winner) = result.winner {
            wins[winner as usize] += 1;
        }
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_scores[seat] += i64::from(score);
        }
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..num_players {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {}: avg={:.1}, wins={} ({:.1}%)",
            seat, avg_score, wins[seat], win_rate
        );
    }
}
