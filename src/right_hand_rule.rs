use crate::direction::{Direction, Position};
use crate::grid::Grid;
use crate::strategy::Outcome;
use tracing::debug;

/// Follows the wall on the robot's right-hand side.
///
/// Only walls connected to the one first touched are ever followed, so a maze
/// whose exit is not on that wall can keep the robot circling forever.
#[derive(Clone, Debug)]
pub struct RightHandRule {
    current_direction: Direction,
}

impl Default for RightHandRule {
    fn default() -> Self {
        RightHandRule {
            current_direction: Direction::Up,
        }
    }
}

impl RightHandRule {
    pub fn new() -> RightHandRule {
        RightHandRule::default()
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn decide(&mut self, grid: &Grid, position: Position) -> Outcome {
        if grid.is_exit(position) {
            return Outcome::Arrived;
        }

        if !grid.is_traversable(position) {
            return Outcome::Stuck;
        }

        // Back on the start cell, face the first wall found clockwise from up
        if position == grid.start() {
            if let Some(wall) = Direction::CARDINAL
                .into_iter()
                .find(|direction| !grid.is_traversable(direction.step(position)))
            {
                self.current_direction = wall;
            }
        }

        let heading = self.current_direction;
        let candidates = [
            heading,
            heading.turn_right(),
            heading.turn_left(),
            heading.opposite(),
        ];

        let open = candidates
            .into_iter()
            .find(|direction| grid.is_traversable(direction.step(position)));

        match open {
            Some(direction) => {
                if direction != heading {
                    debug!(
                        "RightHandRule: Turning from {:?} to {:?} at {:?}",
                        heading, direction, position
                    );
                }
                self.current_direction = direction;
                Outcome::Moved(direction.step(position))
            }
            None => {
                debug!("RightHandRule: Walled in at {:?}", position);
                Outcome::Stuck
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn follow(grid: &Grid, max_steps: usize) -> (Vec<Position>, Outcome) {
        let mut strategy = RightHandRule::new();
        let mut position = grid.start();
        let mut path = vec![];

        for _ in 0..max_steps {
            match strategy.decide(grid, position) {
                Outcome::Moved(next) => {
                    position = next;
                    path.push(next);
                }
                outcome => return (path, outcome),
            }
        }

        (path, Outcome::Moved(position))
    }

    #[test]
    fn when_the_start_touches_a_wall_above_the_robot_faces_up() {
        let grid = Grid::parse("***\n*S \n***").unwrap();
        let mut strategy = RightHandRule::new();

        // Facing up into the wall, the right turn is the only way on
        assert_eq!(strategy.decide(&grid, (1, 1)), Outcome::Moved((1, 2)));
        assert_eq!(strategy.current_direction(), Direction::Right);
    }

    #[test]
    fn when_the_first_wall_is_on_the_right_the_robot_faces_right() {
        let grid = Grid::parse("* *\n*S*\n*E*").unwrap();
        let mut strategy = RightHandRule::new();

        // Facing right into the wall, turning right leads down before left leads up
        assert_eq!(strategy.decide(&grid, (1, 1)), Outcome::Moved((2, 1)));
        assert_eq!(strategy.current_direction(), Direction::Down);
    }

    #[test]
    fn when_the_start_is_open_on_all_sides_the_robot_keeps_facing_up() {
        let grid = Grid::parse("*****\n*   *\n* S *\n*   *\n*****").unwrap();
        let mut strategy = RightHandRule::new();

        assert_eq!(strategy.decide(&grid, (2, 2)), Outcome::Moved((1, 2)));
        assert_eq!(strategy.current_direction(), Direction::Up);
    }

    #[test]
    fn when_reaching_a_junction_turning_right_wins_over_turning_left() {
        let grid = Grid::parse("*****\n*   *\n** **\n**S**").unwrap();
        let (path, _) = follow(&grid, 3);

        assert_eq!(path, vec![(2, 2), (1, 2), (1, 3)]);
    }

    #[test]
    fn when_walled_in_the_heading_is_kept() {
        let grid = Grid::parse("*****\n*S* *\n*****").unwrap();
        let mut strategy = RightHandRule {
            current_direction: Direction::Left,
        };

        assert_eq!(strategy.decide(&grid, (1, 3)), Outcome::Stuck);
        assert_eq!(strategy.current_direction(), Direction::Left);
        assert_eq!(strategy.decide(&grid, (1, 3)), Outcome::Stuck);
    }

    #[test]
    fn when_following_a_loop_free_corridor_the_exit_is_reached_along_the_wall() {
        let grid = Grid::parse("*****\n*S  *\n*** *\n***E*").unwrap();
        let (path, outcome) = follow(&grid, 100);

        assert_eq!(outcome, Outcome::Arrived);
        assert_eq!(path, vec![(1, 2), (1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn when_started_inside_a_closed_loop_the_robot_circles_forever() {
        // The exit opens off the top corridor, but no wall the robot follows leads into it
        let grid = Grid::parse("***E***\n*S    *\n* *** *\n* *** *\n*     *\n*******").unwrap();
        let (path, outcome) = follow(&grid, 1000);

        assert_eq!(path.len(), 1000);
        assert_eq!(outcome, Outcome::Moved(path[999]));
        assert!(grid.is_exit((0, 3)));
        assert!(path.contains(&(1, 3)));
        assert!(!path.iter().any(|&position| grid.is_exit(position)));

        assert_eq!(path[13], grid.start());
        assert_eq!(path[14..28], path[..14]);
    }
}
