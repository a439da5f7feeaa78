//! The [`Board`] type: a square grid of side `size` with 1-indexed cells.
//!
//! A board holds no per-cell state. It is a dimension plus the validity
//! predicate, together with the dense row-major indexing that search maps
//! use for their storage.

use crate::error::BoardError;
use crate::geom::Cell;

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A `size` x `size` board. Valid cells satisfy `1 <= row, col <= size`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: i32,
}

impl Board {
    /// Largest accepted side length; `size * size` still fits in an `i32`.
    pub const MAX_SIZE: i32 = 46_340;

    /// Create a board of the given side length.
    pub fn new(size: i32) -> Result<Self, BoardError> {
        if !(1..=Self::MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self { size })
    }

    /// Side length of the board.
    #[inline]
    pub const fn size(self) -> i32 {
        self.size
    }

    /// Total number of cells on the board.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Whether both coordinates of `c` lie in `[1, size]`.
    #[inline]
    pub const fn is_valid(self, c: Cell) -> bool {
        c.row >= 1 && c.row <= self.size && c.col >= 1 && c.col <= self.size
    }

    /// Reject cells that are not on the board.
    #[inline]
    pub fn check(self, c: Cell) -> Result<(), BoardError> {
        if self.is_valid(c) {
            Ok(())
        } else {
            Err(BoardError::InvalidCell {
                cell: c,
                size: self.size,
            })
        }
    }

    /// Convert a cell to its row-major index. Returns `None` if off the board.
    #[inline]
    pub fn idx(self, c: Cell) -> Option<usize> {
        if !self.is_valid(c) {
            return None;
        }
        let r = (c.row - 1) as usize;
        let col = (c.col - 1) as usize;
        Some(r * self.size as usize + col)
    }

    /// Convert a row-major index back to a cell.
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let w = self.size as usize;
        Cell::new((idx / w) as i32 + 1, (idx % w) as i32 + 1)
    }

    /// Row-major iterator over every cell of the board.
    #[inline]
    pub fn iter(self) -> BoardIter {
        BoardIter {
            board: self,
            next: 0,
        }
    }
}

impl IntoIterator for Board {
    type Item = Cell;
    type IntoIter = BoardIter;
    #[inline]
    fn into_iter(self) -> BoardIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.size.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let size = i32::deserialize(deserializer)?;
        Board::new(size).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// BoardIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`Board`].
#[derive(Clone, Debug)]
pub struct BoardIter {
    board: Board,
    next: usize,
}

impl Iterator for BoardIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.board.len() {
            return None;
        }
        let c = self.board.cell(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.board.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for BoardIter {}
