use crate::direction::{Direction, Position};
use crate::grid::Grid;
use crate::random_walk::RandomWalk;
use crate::right_hand_rule::RightHandRule;
use clap::ValueEnum;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// The result of asking a strategy for its next move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The robot stepped onto the given position.
    Moved(Position),
    /// The robot is already standing on an exit.
    Arrived,
    /// No neighbouring cell can be entered.
    Stuck,
}

/// The navigation strategies the robot can be driven by.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, ValueEnum)]
pub enum StrategyKind {
    /// Keep going straight, pick a random open direction when blocked.
    RandomWalk,
    /// Follow the wall on the right-hand side.
    RightHandRule,
}

impl StrategyKind {
    /// Maps an answer from the interactive menu ("1" or "2") to a strategy.
    pub fn from_menu_choice(choice: &str) -> Option<StrategyKind> {
        match choice.trim() {
            "1" => Some(StrategyKind::RandomWalk),
            "2" => Some(StrategyKind::RightHandRule),
            _ => None,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::RandomWalk => write!(f, "random walk"),
            StrategyKind::RightHandRule => write!(f, "right-hand rule"),
        }
    }
}

/// A navigation strategy together with the heading it remembers between moves.
#[derive(Clone, Debug)]
pub enum Strategy {
    RandomWalk(RandomWalk),
    RightHandRule(RightHandRule),
}

impl Strategy {
    pub fn new(kind: StrategyKind) -> Strategy {
        match kind {
            StrategyKind::RandomWalk => Strategy::RandomWalk(RandomWalk::new()),
            StrategyKind::RightHandRule => Strategy::RightHandRule(RightHandRule::new()),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::RandomWalk(_) => StrategyKind::RandomWalk,
            Strategy::RightHandRule(_) => StrategyKind::RightHandRule,
        }
    }

    /// Decides where the robot standing on `position` goes next.
    ///
    /// # Arguments
    /// * `grid` - The maze being walked.
    /// * `position` - The current position of the robot.
    /// * `rng` - The random source shared across the whole run. Only the random walk draws from it.
    pub fn decide<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        position: Position,
        rng: &mut R,
    ) -> Outcome {
        match self {
            Strategy::RandomWalk(strategy) => strategy.decide(grid, position, rng),
            Strategy::RightHandRule(strategy) => strategy.decide(grid, position),
        }
    }

    pub fn current_direction(&self) -> Direction {
        match self {
            Strategy::RandomWalk(strategy) => strategy.current_direction(),
            Strategy::RightHandRule(strategy) => strategy.current_direction(),
        }
    }
}
