//! Errors raised while loading a maze.

use crate::direction::Position;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The maze file could not be opened or read.
    #[error("could not read maze file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The maze source has no rows at all.
    #[error("maze source is empty")]
    Empty,
    /// No cell is marked with `S`.
    #[error("maze has no start cell marked 'S'")]
    NoStartDefined,
    /// More than one cell is marked with `S`.
    #[error("maze has more than one start cell: {first:?} and {second:?}")]
    DuplicateStart { first: Position, second: Position },
}
