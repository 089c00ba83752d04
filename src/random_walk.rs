use crate::direction::{Direction, Position};
use crate::grid::Grid;
use crate::strategy::Outcome;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Wanders the maze at random, but keeps its heading for as long as it can.
///
/// Holding the heading produces long straight runs, which escape open areas far
/// more often than choosing a fresh direction on every step.
#[derive(Clone, Debug, Default)]
pub struct RandomWalk {
    current_direction: Direction,
    visited: Vec<Position>,
}

impl RandomWalk {
    pub fn new() -> RandomWalk {
        RandomWalk::default()
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    /// Every position the walk has stepped onto, in order.
    pub fn visited(&self) -> &[Position] {
        &self.visited
    }

    pub fn decide<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        position: Position,
        rng: &mut R,
    ) -> Outcome {
        if grid.is_exit(position) {
            return Outcome::Arrived;
        }

        if !grid.is_traversable(position) {
            return Outcome::Stuck;
        }

        if self.current_direction != Direction::None {
            let ahead = self.current_direction.step(position);
            if grid.is_traversable(ahead) {
                return self.move_to(ahead);
            }
        }

        let mut directions = Direction::CARDINAL;
        directions.shuffle(rng);

        let open = directions
            .into_iter()
            .find(|direction| grid.is_traversable(direction.step(position)));

        match open {
            Some(direction) => {
                debug!(
                    "RandomWalk: Heading changed from {:?} to {:?} at {:?}",
                    self.current_direction, direction, position
                );
                self.current_direction = direction;
                self.move_to(direction.step(position))
            }
            None => {
                debug!("RandomWalk: No open neighbour at {:?}", position);
                self.current_direction = Direction::None;
                Outcome::Stuck
            }
        }
    }

    fn move_to(&mut self, position: Position) -> Outcome {
        self.visited.push(position);
        Outcome::Moved(position)
    }
}
