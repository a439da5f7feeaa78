use std::collections::VecDeque;

use knight_core::{BoardError, Cell};

use crate::KnightPaths;
use crate::maps::{DistanceMap, ParentMap};
use crate::moves::neighbors;
use crate::path::Path;
use crate::paths::{PathNode, SearchStats};

impl KnightPaths {
    /// Compute a path with the fewest jumps from `start` to `target`.
    ///
    /// Plain breadth-first search: every cell is discovered once, at its
    /// true distance, and enqueued at most once. Neighbors are tried in
    /// [`KNIGHT_JUMPS`](crate::KNIGHT_JUMPS) order, so the returned path is
    /// the same on every call.
    ///
    /// Returns `Ok(None)` when `target` cannot be reached, and an error when
    /// either endpoint is off the board. If `start == target` the path holds
    /// that single cell.
    pub fn shortest_path(&self, start: Cell, target: Cell) -> Result<Option<Path>, BoardError> {
        self.check_endpoints(start, target)?;
        let (path, stats) = self.bfs_path(start, target);
        log::debug!(
            "shortest {start} -> {target}: expanded {}, discovered {}",
            stats.expanded,
            stats.discovered
        );
        Ok(path)
    }

    pub(crate) fn bfs_path(&self, start: Cell, target: Cell) -> (Option<Path>, SearchStats) {
        let board = self.board();
        let mut stats = SearchStats::default();
        let mut dist = DistanceMap::new(board);
        let mut parents = ParentMap::new(board);
        let mut frontier: VecDeque<Cell> = VecDeque::new();

        dist.set(start, 0);
        frontier.push_back(start);

        while let Some(cur) = frontier.pop_front() {
            stats.expanded += 1;
            if cur == target {
                return (Some(parents.trace(start, target)), stats);
            }

            let next = dist.at(cur) + 1;
            for n in neighbors(board, cur) {
                if dist.is_set(n) {
                    continue;
                }
                dist.set(n, next);
                parents.set(n, cur);
                frontier.push_back(n);
                stats.discovered += 1;
            }
        }

        (None, stats)
    }

    /// Compute only the minimum number of jumps from `start` to `target`.
    ///
    /// Same search as [`shortest_path`](Self::shortest_path) without parent
    /// tracking. Returns `Ok(None)` when `target` cannot be reached.
    pub fn min_jumps(&self, start: Cell, target: Cell) -> Result<Option<u32>, BoardError> {
        self.check_endpoints(start, target)?;
        let board = self.board();
        let mut dist = DistanceMap::new(board);
        let mut frontier: VecDeque<Cell> = VecDeque::new();

        dist.set(start, 0);
        frontier.push_back(start);

        while let Some(cur) = frontier.pop_front() {
            let d = dist.at(cur);
            if cur == target {
                return Ok(Some(d));
            }
            for n in neighbors(board, cur) {
                if !dist.is_set(n) {
                    dist.set(n, d + 1);
                    frontier.push_back(n);
                }
            }
        }

        Ok(None)
    }

    /// Compute the jump distance from `start` to every cell reachable within
    /// `max_jumps`.
    ///
    /// Returns the reached cells in discovery order, `start` first with zero
    /// jumps. Pass [`UNREACHABLE`](crate::UNREACHABLE) to explore the whole
    /// component.
    pub fn jump_map(&self, start: Cell, max_jumps: u32) -> Result<Vec<PathNode>, BoardError> {
        self.board().check(start)?;
        let board = self.board();
        let mut dist = DistanceMap::new(board);
        let mut frontier: VecDeque<Cell> = VecDeque::new();
        let mut nodes = vec![PathNode {
            cell: start,
            jumps: 0,
        }];

        dist.set(start, 0);
        frontier.push_back(start);

        while let Some(cur) = frontier.pop_front() {
            let nd = dist.at(cur) + 1;
            if nd > max_jumps {
                continue;
            }
            for n in neighbors(board, cur) {
                if dist.is_set(n) {
                    continue;
                }
                dist.set(n, nd);
                frontier.push_back(n);
                nodes.push(PathNode { cell: n, jumps: nd });
            }
        }

        Ok(nodes)
    }
}
