//! # maze_robot
//!
//! A robot that walks a text-described maze until it finds an exit or gets stuck.
//! Two navigation strategies are available: a random walk that prefers to keep
//! going straight, and the classic right-hand wall follower.

pub mod direction;
pub use direction::Direction;
pub use direction::Position;

pub mod error;
pub use error::LoadError;

pub mod grid;
pub use grid::Cell;
pub use grid::Grid;

pub mod simulation;
pub use simulation::FinishedReason;
pub use simulation::Simulation;
pub use simulation::SimulationConfig;
pub use simulation::SimulationState;

pub mod random_walk;
pub use random_walk::RandomWalk;

pub mod right_hand_rule;
pub use right_hand_rule::RightHandRule;

pub mod strategy;
pub use strategy::Outcome;
pub use strategy::Strategy;
pub use strategy::StrategyKind;
