use crate::direction::Position;
use crate::grid::Grid;
use crate::strategy::{Outcome, Strategy, StrategyKind};
use crossterm::{cursor::Show, execute};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

/// Settings for a single run of the robot.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// The number of moves after which the run is abandoned.
    pub max_steps: usize,
    /// The seed for the random number generator. Seeded from the OS when `None`.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            max_steps: 10_000,
            seed: None,
        }
    }
}

/// Represents the reason the run finished.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum FinishedReason {
    /// The robot stands on an exit.
    ReachedExit,
    /// The robot has no open cell around it.
    Stuck,
    /// The maximum number of moves was made without reaching an exit.
    StepLimitReached,
}

/// Represents the state of the run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationState {
    /// The strategy driving the robot.
    pub strategy: StrategyKind,
    /// The number of moves made so far.
    pub steps: usize,
    /// The current position of the robot.
    pub position: Position,
    /// Whether the run has finished.
    pub finished: bool,
    /// The reason the run finished. `None` while it is still going.
    pub finished_reason: Option<FinishedReason>,
}

/// A robot walking a maze.
/// Main entry point for running a simulation.
pub struct Simulation {
    grid: Grid,
    strategy: Strategy,
    position: Position,
    steps: usize,
    max_steps: usize,
    finished: bool,
    finished_reason: Option<FinishedReason>,
    rng: StdRng,
}

impl Simulation {
    /// Creates a new simulation with the robot standing on the start cell.
    ///
    /// # Arguments
    /// * `grid` - The maze to walk.
    /// * `kind` - The strategy that drives the robot.
    /// * `config` - The step limit and random seed for the run.
    pub fn new(grid: Grid, kind: StrategyKind, config: &SimulationConfig) -> Simulation {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Simulation {
            position: grid.start(),
            grid,
            strategy: Strategy::new(kind),
            steps: 0,
            max_steps: config.max_steps,
            finished: false,
            finished_reason: None,
            rng,
        }
    }

    /// Puts the robot back on the start cell and forgets its heading.
    ///
    /// The random number generator keeps its state so repeated runs differ.
    pub fn start(&mut self) -> SimulationState {
        self.position = self.grid.start();
        self.steps = 0;
        self.finished = false;
        self.finished_reason = None;
        self.strategy = Strategy::new(self.strategy.kind());

        info!(
            strategy = %self.strategy.kind(),
            start = ?self.position,
            "Starting simulation"
        );

        self.state()
    }

    /// Lets the strategy make a single move.
    ///
    /// Once the run has finished this is a no-op returning the final state.
    pub fn update(&mut self) -> SimulationState {
        if self.finished {
            return self.state();
        }

        if self.steps >= self.max_steps {
            warn!(steps = self.steps, "Step limit reached before finding an exit");
            self.finish(FinishedReason::StepLimitReached);
            return self.state();
        }

        match self
            .strategy
            .decide(&self.grid, self.position, &mut self.rng)
        {
            Outcome::Moved(next) => {
                self.position = next;
                self.steps += 1;

                if self.grid.is_exit(next) {
                    self.finish(FinishedReason::ReachedExit);
                }
            }
            Outcome::Arrived => self.finish(FinishedReason::ReachedExit),
            Outcome::Stuck => self.finish(FinishedReason::Stuck),
        }

        self.state()
    }

    /// Runs from the start until the robot exits, gets stuck or hits the step limit.
    ///
    /// `on_step` is called with the initial state and after every move.
    pub fn run<E>(
        &mut self,
        mut on_step: impl FnMut(&Simulation, &SimulationState) -> Result<(), E>,
    ) -> Result<SimulationState, E> {
        let mut state = self.start();
        on_step(self, &state)?;

        while !state.finished {
            state = self.update();
            on_step(self, &state)?;
        }

        Ok(state)
    }

    /// Runs like [`Simulation::run`], drawing every frame to `out` and pausing `delay` after each.
    ///
    /// The cursor hidden while drawing is shown again however the run ends.
    pub fn play<W: Write>(&mut self, out: &mut W, delay: Duration) -> io::Result<SimulationState> {
        let result = self.run(|simulation, _| -> io::Result<()> {
            simulation.draw(out)?;
            thread::sleep(delay);
            Ok(())
        });

        execute!(out, Show)?;
        result
    }

    /// Draws the maze and the robot to `out`.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.grid.draw(out, self.position, self.steps)
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> SimulationState {
        SimulationState {
            strategy: self.strategy.kind(),
            steps: self.steps,
            position: self.position,
            finished: self.finished,
            finished_reason: self.finished_reason,
        }
    }
}

impl Simulation {
    fn finish(&mut self, reason: FinishedReason) {
        self.finished = true;
        self.finished_reason = Some(reason);

        info!(
            reason = ?reason,
            steps = self.steps,
            position = ?self.position,
            "Simulation finished"
        );
    }
}
