use std::fmt;

use knight_core::{Board, BoardError, Cell};

/// A cell with the number of jumps needed to reach it, returned from
/// [`KnightPaths::jump_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub cell: Cell,
    pub jumps: u32,
}

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: u32 = u32::MAX;

/// The three path searches, for reporting and timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchKind {
    /// Breadth-first shortest path.
    Shortest,
    /// Breadth-first shortest path with the target-distance bound.
    Bounded,
    /// Depth-first search for any path within a jump budget.
    Feasible,
}

impl SearchKind {
    pub const ALL: [SearchKind; 3] = [Self::Shortest, Self::Bounded, Self::Feasible];

    /// Whether the search always returns a path with the fewest jumps.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Feasible)
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shortest => "shortest",
            Self::Bounded => "bounded",
            Self::Feasible => "feasible",
        })
    }
}

/// Work done by one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    /// Cells taken off the frontier (or pushed on the DFS stack).
    pub(crate) expanded: usize,
    /// Cells whose distance was recorded (or DFS children tried).
    pub(crate) discovered: usize,
    /// Relaxations refused by the bounded search.
    pub(crate) pruned: usize,
}

// ---------------------------------------------------------------------------
// KnightPaths
// ---------------------------------------------------------------------------

/// Entry point for knight-move searches on one board.
///
/// `KnightPaths` keeps nothing but the board. Each search builds fresh
/// distance, parent and visited maps, so calls never observe each other and
/// the value may be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnightPaths {
    board: Board,
}

impl KnightPaths {
    /// Create a search entry point for `board`.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// The board being searched.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Reject endpoints that are off the board.
    pub(crate) fn check_endpoints(&self, start: Cell, target: Cell) -> Result<(), BoardError> {
        self.board.check(start)?;
        self.board.check(target)
    }
}
