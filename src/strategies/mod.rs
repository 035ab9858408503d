pub mod heuristic;
pub mod human;
pub mod random;
pub mod registry;

pub use heuristic::HeuristicStrategy;
pub use human::HumanStrategy;
pub use random::RandomStrategy;
