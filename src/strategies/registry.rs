use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::ParticipantSpec;
use crate::strategies::{HeuristicStrategy, HumanStrategy, RandomStrategy};

/// Returns a normalized label for a strategy spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

fn seed_for(spec: &str, index: usize, seed: u64) -> u64 {
    spec.split_once(':')
        .and_then(|(_, value)| value.trim().parse::<u64>().ok())
        .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9))
}

/// Create a seat from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - heuristic[:seed]
/// - random[:seed]
pub fn participant_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<ParticipantSpec, Box<dyn Error>> {
    match label_for_spec(spec).as_str() {
        "human" => {
            let name = spec
                .split_once(':')
                .map(|(_, name)| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| format!("Human {index}"));
            let strategy = HumanStrategy::new(name.clone());
            Ok(ParticipantSpec::new(name, Box::new(strategy)))
        }
        "heuristic" => {
            let rng = StdRng::seed_from_u64(seed_for(spec, index, seed));
            Ok(ParticipantSpec::new(
                format!("Heuristic {index}"),
                Box::new(HeuristicStrategy::new(rng)),
            ))
        }
        "random" => {
            let rng = StdRng::seed_from_u64(seed_for(spec, index, seed));
            Ok(ParticipantSpec::new(
                format!("Random {index}"),
                Box::new(RandomStrategy::new(rng)),
            ))
        }
        _ => Err(format!("unrecognized strategy spec: {spec}").into()),
    }
}
