use std::error::Error;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use unobot::game::{DEFAULT_HAND_SIZE, MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use unobot::visualize::render_state_with_options;
use unobot::{Game, VisualOptions, describe_outcome, label_for_spec, participant_from_spec};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play a single game on the console.")]
struct Args {
    /// Show the table before every turn
    #[arg(long = "visualize")]
    visualize: bool,

    /// Seed for shuffling and bot decisions
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Stop after the specified number of turns
    #[arg(long = "max-turns")]
    max_turns: Option<usize>,

    /// Cards dealt to every participant
    #[arg(long = "hand-size", default_value_t = DEFAULT_HAND_SIZE)]
    hand_size: usize,

    /// Participants (2-10): human[:name], heuristic[:seed], random[:seed].
    /// Defaults to one human and one heuristic bot.
    participants: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
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
    let mut specs = args.participants;
    if specs.is_empty() {
        specs = vec![String::from("human"), String::from("heuristic")];
    }
    if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&specs.len()) {
        return Err(format!(
            "expected between {MIN_PARTICIPANTS} and {MAX_PARTICIPANTS} participants, received {}",
            specs.len()
        )
        .into());
    }

    let mut builder = Game::builder()
        .with_seed(args.seed)
        .with_hand_size(args.hand_size);
    for (index, spec) in specs.iter().enumerate() {
        builder = builder.participants([participant_from_spec(spec, index, args.seed)?]);
    }
    let mut game = builder.build()?;
    let human_seats: Vec<bool> = specs
        .iter()
        .map(|spec| label_for_spec(spec) == "human")
        .collect();
    let has_human = human_seats.contains(&true);

    println!("Starting game with {} participants.", specs.len());
    println!("Opening card: {}\n", game.top_card());
    loop {
        if game.is_finished() {
            break;
        }
        if let Some(limit) = args.max_turns {
            if game.turns_played() >= limit {
                println!("Max turn limit {limit} reached. Stopping simulation.");
                break;
            }
        }
        let current = game.current_participant();
        if args.visualize {
            // Bot hands stay hidden while a human is at the table.
            let options = VisualOptions {
                show_hand: human_seats[current] || !has_human,
                ..VisualOptions::default()
            };
            println!(
                "{}",
                render_state_with_options(&game.state_view(current)?, options)
            );
        }
        let outcome = game.execute_turn()?;
        print!("{}", describe_outcome(&game.state_view(current)?, &outcome));
    }

    match game.winner() {
        Some(winner) => println!(
            "\nGame finished after {} turns. Winner: {}.",
            game.turns_played(),
            game.participant(winner)?.name()
        ),
        None => println!("\nSimulation stopped before completion."),
    }
    Ok(())
}
