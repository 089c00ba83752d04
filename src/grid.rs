use crate::direction::Position;
use crate::error::LoadError;
use crossterm::{
    cursor::{Hide, MoveTo},
    execute,
    style::{Color, Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::iter;
use std::path::Path;
use tracing::info;

const AGENT_CHAR: char = 'R';

/// A single cell of the maze.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Wall,
    Floor,
    Start,
    Exit,
}

impl Cell {
    pub fn from_byte(value: u8) -> Cell {
        match value {
            b'*' => Cell::Wall,
            b'S' => Cell::Start,
            b'E' => Cell::Exit,
            // Anything else is walkable, whatever its encoding
            _ => Cell::Floor,
        }
    }

    pub fn char(&self) -> char {
        match self {
            Cell::Wall => '*',
            Cell::Floor => ' ',
            Cell::Start => 'S',
            Cell::Exit => 'E',
        }
    }

    fn color(&self) -> Color {
        match self {
            Cell::Wall => Color::DarkGrey,
            Cell::Floor => Color::Reset,
            Cell::Start => Color::Yellow,
            Cell::Exit => Color::Green,
        }
    }
}

/// The maze the robot walks in.
///
/// Rows keep the length they had in the source text, so every lookup is checked
/// against the length of the row it falls in rather than a common width.
/// Each byte of a line is one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    start: Position,
    exits: HashSet<Position>,
}

impl Grid {
    /// Parses a maze from its textual representation, one line per row.
    pub fn parse(contents: &str) -> Result<Grid, LoadError> {
        Grid::from_bytes(contents.as_bytes())
    }

    /// Parses a maze from raw bytes, one line per row.
    ///
    /// Both `\n` and `\r\n` line endings are accepted.
    pub fn from_bytes(contents: &[u8]) -> Result<Grid, LoadError> {
        let mut cells = Vec::new();
        let mut start: Option<Position> = None;
        let mut exits = HashSet::new();

        let lines = contents.split_inclusive(|&byte| byte == b'\n').map(|line| {
            let line = line.strip_suffix(b"\n").unwrap_or(line);
            line.strip_suffix(b"\r").unwrap_or(line)
        });

        for (row, line) in lines.enumerate() {
            let mut row_cells = Vec::with_capacity(line.len());

            for (col, &value) in line.iter().enumerate() {
                let cell = Cell::from_byte(value);
                let position = (row as isize, col as isize);

                match cell {
                    Cell::Start => {
                        if let Some(first) = start {
                            return Err(LoadError::DuplicateStart {
                                first,
                                second: position,
                            });
                        }
                        start = Some(position);
                    }
                    Cell::Exit => {
                        exits.insert(position);
                    }
                    Cell::Wall | Cell::Floor => {}
                }

                row_cells.push(cell);
            }

            cells.push(row_cells);
        }

        if cells.is_empty() {
            return Err(LoadError::Empty);
        }

        let start = start.ok_or(LoadError::NoStartDefined)?;

        Ok(Grid {
            cells,
            start,
            exits,
        })
    }

    /// Reads and parses the maze stored in `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let grid = Grid::from_bytes(&contents)?;
        info!(
            path = %path.display(),
            rows = grid.rows(),
            exits = grid.exits().len(),
            "Loaded maze"
        );

        Ok(grid)
    }

    /// Whether the robot may stand on `position`.
    pub fn is_traversable(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|cell| cell != Cell::Wall)
    }

    pub fn is_exit(&self, position: Position) -> bool {
        self.exits.contains(&position)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn exits(&self) -> &HashSet<Position> {
        &self.exits
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// The cell at `position`, or `None` if it falls outside its row.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        let (row, col) = position;
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;

        self.cells.get(row)?.get(col).copied()
    }

    /// Renders the maze as text with the robot drawn at `agent`.
    pub fn render(&self, agent: Position) -> String {
        self.glyphs(agent).map(|(value, _)| value).collect()
    }

    /// Draws the maze to `out` with the robot at `agent`, clearing the screen first.
    pub fn draw<W: Write>(&self, out: &mut W, agent: Position, steps: usize) -> io::Result<()> {
        execute!(
            out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Hide,
            Print("Robot at "),
            Print(format!("({}, {})", agent.0, agent.1)),
            Print(" after "),
            Print(steps.to_string()),
            Print(" moves\n\n")
        )?;

        for (value, color) in self.glyphs(agent) {
            execute!(
                out,
                SetForegroundColor(color),
                Print(value),
                SetForegroundColor(Color::Reset)
            )?;
        }

        out.flush()
    }

    // Every cell as it is drawn, row by row, with a newline closing each row
    fn glyphs(&self, agent: Position) -> impl Iterator<Item = (char, Color)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| {
                    if (row as isize, col as isize) == agent {
                        (AGENT_CHAR, Color::Red)
                    } else {
                        (cell.char(), cell.color())
                    }
                })
                .chain(iter::once(('\n', Color::Reset)))
        })
    }
}
