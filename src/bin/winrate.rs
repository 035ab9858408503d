use std::collections::HashMap;
use std::error::Error;
use std::process;
use std::time::Instant;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use unobot::game::{DEFAULT_HAND_SIZE, MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use unobot::{Game, label_for_spec, participant_from_spec};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;

#[derive(Parser, Debug)]
#[command(
    name = "winrate",
    about = "Run multiple bot-only games and report per-strategy win rates."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 200)]
    games: usize,

    /// Base RNG seed (deck and bot RNGs are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Safety cap on turns per game; games exceeding this are aborted
    #[arg(long = "max-turns", default_value_t = 2000)]
    max_turns: usize,

    /// Cards dealt to every participant
    #[arg(long = "hand-size", default_value_t = DEFAULT_HAND_SIZE)]
    hand_size: usize,

    /// Strategy specs: e.g., heuristic random (2-10 total)
    bots: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&args.bots.len()) {
        return Err(format!(
            "expected between {MIN_PARTICIPANTS} and {MAX_PARTICIPANTS} bot specs, received {}",
            args.bots.len()
        )
        .into());
    }
    // Human seats would block waiting for input.
    if args.bots.iter().any(|spec| label_for_spec(spec) == "human") {
        return Err("human participants are not supported in winrate runs".into());
    }

    let mut wins_per_label: HashMap<String, usize> = HashMap::new();
    let mut seats_per_label: HashMap<String, usize> = HashMap::new();
    let mut aborted_games = 0usize;
    let mut total_turns = 0usize;
    let started = Instant::now();

    for game_index in 0..args.games {
        let game_seed = args.seed.wrapping_add(game_index as u64);
        // Rotate seats so no strategy always moves first.
        let offset = game_index % args.bots.len();
        let seating: Vec<&String> = args
            .bots
            .iter()
            .cycle()
            .skip(offset)
            .take(args.bots.len())
            .collect();

        let mut builder = Game::builder()
            .with_seed(game_seed)
            .with_hand_size(args.hand_size);
        for (index, spec) in seating.iter().enumerate() {
            builder = builder.participants([participant_from_spec(spec, index, game_seed)?]);
            *seats_per_label.entry(label_for_spec(spec)).or_default() += 1;
        }
        let mut game = builder.build()?;

        while !game.is_finished() && game.turns_played() < args.max_turns {
            game.execute_turn()?;
        }
        total_turns += game.turns_played();
        match game.winner() {
            Some(winner) => {
                *wins_per_label
                    .entry(label_for_spec(seating[winner]))
                    .or_default() += 1;
            }
            None => {
                aborted_games += 1;
                info!(game = game_index, "game aborted at turn cap");
            }
        }
    }

    let elapsed = started.elapsed();
    let finished = args.games - aborted_games;
    println!(
        "Simulated {} games in {:.2?} ({} finished, {} aborted, {:.1} turns/game)",
        args.games,
        elapsed,
        finished,
        aborted_games,
        if args.games == 0 {
            0.0
        } else {
            total_turns as f64 / args.games as f64
        }
    );
    let mut labels: Vec<&String> = seats_per_label.keys().collect();
    labels.sort();
    println!("{:<12} {:>8} {:>8} {:>10}", "strategy", "seats", "wins", "win/seat");
    for label in labels {
        let seats = seats_per_label[label];
        let wins = wins_per_label.get(label).copied().unwrap_or(0);
        let rate = if seats == 0 {
            0.0
        } else {
            wins as f64 / seats as f64 * 100.0
        };
        println!("{label:<12} {seats:>8} {wins:>8} {rate:>9.1}%");
    }
    Ok(())
}
