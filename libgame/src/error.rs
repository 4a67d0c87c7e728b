use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Grid dimensions must be positive and fit in memory, got {rows}x{cols}.")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Expected a {}x{} grid, got {}x{}.", .expected.0, .expected.1, .found.0, .found.1)]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Grid needs {expected} cells, got {found}.")]
    TileCountMismatch { expected: usize, found: usize },

    #[error("Malformed grid data on line {line}: {reason}.")]
    MalformedGridData { line: usize, reason: MalformedReason },

    #[error("Couldn't access grid file {path:?}.")]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("no rows")]
    Empty,

    #[error("empty row")]
    EmptyRow,

    #[error("expected {expected} cells, found {found}")]
    InconsistentRowLength { expected: usize, found: usize },

    #[error("invalid cell character {0:?}")]
    InvalidCharacter(char),
}

impl GameError {
    pub(crate) fn malformed(line: usize, reason: MalformedReason) -> Self {
        Self::MalformedGridData { line, reason }
    }
}
