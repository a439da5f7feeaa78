//! Geometry primitives: [`Cell`] and [`Jump`].
//!
//! Coordinates are 1-indexed. A [`Cell`] is a board position, a [`Jump`] is
//! the relative offset between two positions.

use std::fmt;
use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A board position as a (row, column) pair, both starting at 1.
///
/// With the `serde` feature the row is written as `x` and the column as `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    #[cfg_attr(feature = "serde", serde(rename = "x"))]
    pub row: i32,
    #[cfg_attr(feature = "serde", serde(rename = "y"))]
    pub col: i32,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add<Jump> for Cell {
    type Output = Cell;
    #[inline]
    fn add(self, j: Jump) -> Cell {
        self.shift(j.dr, j.dc)
    }
}

impl Sub for Cell {
    type Output = Jump;
    /// The offset that leads from `rhs` to `self`.
    #[inline]
    fn sub(self, rhs: Cell) -> Jump {
        Jump::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Jump
// ---------------------------------------------------------------------------

/// A relative (row, column) offset between two cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Jump {
    pub dr: i32,
    pub dc: i32,
}

impl Jump {
    /// Create a new offset.
    #[inline]
    pub const fn new(dr: i32, dc: i32) -> Self {
        Self { dr, dc }
    }

    /// Whether the offset is a knight move: one axis by 1, the other by 2.
    #[inline]
    pub const fn is_knight(self) -> bool {
        let (a, b) = (self.dr.abs(), self.dc.abs());
        (a == 1 && b == 2) || (a == 2 && b == 1)
    }

    /// The offset leading from `from` to `to`, if it is a knight move.
    #[inline]
    pub fn between(from: Cell, to: Cell) -> Option<Jump> {
        let j = to - from;
        j.is_knight().then_some(j)
    }
}

impl Neg for Jump {
    type Output = Jump;
    #[inline]
    fn neg(self) -> Jump {
        Jump::new(-self.dr, -self.dc)
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dr, self.dc)
    }
}
