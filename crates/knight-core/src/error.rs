use std::fmt;

use crate::geom::Cell;

/// Errors raised when a board or a position on it is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The requested board size is outside `1..=Board::MAX_SIZE`.
    InvalidSize(i32),
    /// A cell lies outside `[1, size]` on at least one axis.
    InvalidCell { cell: Cell, size: i32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(size) => write!(f, "board: invalid size {size}"),
            Self::InvalidCell { cell, size } => {
                write!(f, "board: cell {cell} is outside the {size}x{size} board")
            }
        }
    }
}

impl std::error::Error for BoardError {}
