use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    #[error("unsupported grid size {rows}x{columns}, each side needs at least 2 cells")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("fill percent must be between 0 and 100, got {0}")]
    InvalidPercent(u8),
    #[error("neighbors of cell ({row}, {column}) have not been linked")]
    NeighborsNotLinked { row: usize, column: usize },
    #[error("neighbor {index} of cell ({row}, {column}) is not in the given generation")]
    ForeignGeneration {
        row: usize,
        column: usize,
        index: usize,
    },
    #[error("pattern is empty")]
    EmptyPattern,
    #[error("pattern row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}
