//! Per-search scratch maps, stored densely by board index.
//!
//! Each search builds its own maps and drops them on return. Nothing here
//! outlives a single call.

use knight_core::{Board, Cell};

use crate::path::Path;
use crate::paths::UNREACHABLE;

/// Jump count from the search start, written at most once per cell.
pub(crate) struct DistanceMap {
    board: Board,
    dist: Vec<u32>,
}

impl DistanceMap {
    pub(crate) fn new(board: Board) -> Self {
        Self {
            board,
            dist: vec![UNREACHABLE; board.len()],
        }
    }

    /// Distance of `c`, or [`UNREACHABLE`] if unset or off the board.
    #[inline]
    pub(crate) fn at(&self, c: Cell) -> u32 {
        match self.board.idx(c) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    #[inline]
    pub(crate) fn is_set(&self, c: Cell) -> bool {
        self.at(c) != UNREACHABLE
    }

    #[inline]
    pub(crate) fn set(&mut self, c: Cell, d: u32) {
        if let Some(i) = self.board.idx(c) {
            debug_assert_eq!(self.dist[i], UNREACHABLE, "distance of {c} written twice");
            self.dist[i] = d;
        }
    }
}

/// The cell each cell was first discovered from.
pub(crate) struct ParentMap {
    board: Board,
    parent: Vec<usize>,
}

impl ParentMap {
    pub(crate) fn new(board: Board) -> Self {
        Self {
            board,
            parent: vec![usize::MAX; board.len()],
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, child: Cell, parent: Cell) {
        if let (Some(ci), Some(pi)) = (self.board.idx(child), self.board.idx(parent)) {
            self.parent[ci] = pi;
        }
    }

    #[inline]
    pub(crate) fn get(&self, c: Cell) -> Option<Cell> {
        let i = self.board.idx(c)?;
        match self.parent[i] {
            usize::MAX => None,
            pi => Some(self.board.cell(pi)),
        }
    }

    /// Walk parent pointers from `target` back to `start`, both included.
    pub(crate) fn trace(&self, start: Cell, target: Cell) -> Path {
        let mut cells = vec![target];
        let mut cur = target;
        while cur != start {
            let Some(p) = self.get(cur) else {
                break;
            };
            cells.push(p);
            cur = p;
        }
        Path::from_traced(cells)
    }
}

/// Cells on the current branch of a depth-first search.
pub(crate) struct VisitedSet {
    board: Board,
    marks: Vec<bool>,
}

impl VisitedSet {
    pub(crate) fn new(board: Board) -> Self {
        Self {
            board,
            marks: vec![false; board.len()],
        }
    }

    #[inline]
    pub(crate) fn contains(&self, c: Cell) -> bool {
        self.board.idx(c).is_some_and(|i| self.marks[i])
    }

    #[inline]
    pub(crate) fn mark(&mut self, c: Cell) {
        if let Some(i) = self.board.idx(c) {
            self.marks[i] = true;
        }
    }

    #[inline]
    pub(crate) fn unmark(&mut self, c: Cell) {
        if let Some(i) = self.board.idx(c) {
            self.marks[i] = false;
        }
    }
}
