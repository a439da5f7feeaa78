//! Depth-first backtracking search for any path within a jump budget.

use knight_core::{BoardError, Cell};

use crate::KnightPaths;
use crate::maps::VisitedSet;
use crate::moves::KNIGHT_JUMPS;
use crate::path::Path;
use crate::paths::SearchStats;

/// One level of the depth-first search: the cell being explored, the jumps
/// still allowed from it, and the next offset to try.
struct Frame {
    cell: Cell,
    budget: u32,
    next: usize,
}

impl KnightPaths {
    /// Find some path from `start` to `target` using at most `budget` jumps.
    ///
    /// Neighbors are tried depth first in [`KNIGHT_JUMPS`] order and the
    /// first path that reaches `target` is returned, which is usually not
    /// the shortest one. A cell is marked visited while it is on the current
    /// branch and unmarked when every jump from it has failed, so another
    /// branch may pass through it later.
    ///
    /// Returns `Ok(None)` if no path within the budget avoids revisiting a
    /// cell on its own branch. If `start == target` the single-cell path is
    /// returned regardless of the budget.
    pub fn feasible_path(
        &self,
        start: Cell,
        target: Cell,
        budget: u32,
    ) -> Result<Option<Path>, BoardError> {
        self.check_endpoints(start, target)?;
        let (path, stats) = self.backtrack(start, target, budget);
        log::debug!(
            "feasible {start} -> {target} within {budget}: expanded {}, tried {}",
            stats.expanded,
            stats.discovered
        );
        Ok(path)
    }

    /// Iterative form of the recursive backtracking search. The stack holds
    /// the current branch, bottom frame first.
    pub(crate) fn backtrack(
        &self,
        start: Cell,
        target: Cell,
        budget: u32,
    ) -> (Option<Path>, SearchStats) {
        let board = self.board();
        let mut stats = SearchStats::default();

        if start == target {
            return (Some(Path::from_traced(vec![target])), stats);
        }
        if budget == 0 {
            log::trace!("feasible {start} -> {target}: no jumps allowed");
            return (None, stats);
        }

        let mut visited = VisitedSet::new(board);
        visited.mark(start);
        stats.expanded += 1;
        let mut stack = vec![Frame {
            cell: start,
            budget,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let mut child = None;
            while frame.next < KNIGHT_JUMPS.len() {
                let n = frame.cell + KNIGHT_JUMPS[frame.next];
                frame.next += 1;
                if board.is_valid(n) && !visited.contains(n) {
                    child = Some(n);
                    break;
                }
            }

            let Some(n) = child else {
                // Every jump from this cell failed.
                visited.unmark(frame.cell);
                stack.pop();
                continue;
            };
            let remaining = frame.budget - 1;
            stats.discovered += 1;

            if n == target {
                let mut traced = Vec::with_capacity(stack.len() + 1);
                traced.push(target);
                traced.extend(stack.iter().rev().map(|f| f.cell));
                return (Some(Path::from_traced(traced)), stats);
            }
            if remaining == 0 {
                continue;
            }

            visited.mark(n);
            stats.expanded += 1;
            stack.push(Frame {
                cell: n,
                budget: remaining,
                next: 0,
            });
        }

        log::trace!("feasible {start} -> {target}: budget {budget} exhausted");
        (None, stats)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use knight_core::Board;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn kp(size: i32) -> KnightPaths {
        KnightPaths::new(Board::new(size).unwrap())
    }

    fn c(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    fn assert_valid(p: &Path, s: Cell, t: Cell, budget: u32) {
        assert_eq!(p.start(), s);
        assert_eq!(p.target(), t);
        assert!(p.is_connected());
        assert!(p.len() <= budget as usize + 1);
        let distinct: HashSet<_> = p.iter().collect();
        assert_eq!(distinct.len(), p.len(), "path revisits a cell: {p}");
    }

    #[test]
    fn first_path_in_offset_order() {
        // From (1, 1) the search goes to (2, 3) first; with one jump left it
        // skips (3, 5) and then hits (4, 4).
        let p = kp(8).feasible_path(c(1, 1), c(4, 4), 2).unwrap().unwrap();
        assert_eq!(p.traced(), &[c(4, 4), c(2, 3), c(1, 1)]);
    }

    #[test]
    fn same_start_and_target_ignores_budget() {
        let p = kp(4).feasible_path(c(2, 2), c(2, 2), 0).unwrap().unwrap();
        assert_eq!(p.traced(), &[c(2, 2)]);
    }

    #[test]
    fn zero_budget_fails() {
        assert_eq!(kp(8).feasible_path(c(1, 1), c(2, 3), 0).unwrap(), None);
        assert!(kp(8).feasible_path(c(1, 1), c(2, 3), 1).unwrap().is_some());
    }

    #[test]
    fn budget_below_shortest_fails() {
        let k = kp(8);
        assert_eq!(k.feasible_path(c(1, 1), c(8, 8), 5).unwrap(), None);
        let p = k.feasible_path(c(1, 1), c(8, 8), 6).unwrap().unwrap();
        assert_valid(&p, c(1, 1), c(8, 8), 6);
        assert_eq!(p.jumps(), 6);
    }

    #[test]
    fn unreachable_target() {
        assert_eq!(kp(3).feasible_path(c(1, 1), c(2, 2), 50).unwrap(), None);
        assert_eq!(kp(2).feasible_path(c(1, 1), c(2, 2), 50).unwrap(), None);
    }

    #[test]
    fn three_by_three_ring() {
        let k = kp(3);
        assert_eq!(k.feasible_path(c(1, 1), c(3, 3), 3).unwrap(), None);
        let p = k.feasible_path(c(1, 1), c(3, 3), 4).unwrap().unwrap();
        assert_valid(&p, c(1, 1), c(3, 3), 4);
        let long = k.feasible_path(c(1, 1), c(3, 3), 100).unwrap().unwrap();
        assert_valid(&long, c(1, 1), c(3, 3), 100);
    }

    #[test]
    fn generous_budget_is_not_optimal() {
        let k = kp(8);
        let p = k.feasible_path(c(1, 1), c(8, 8), 64).unwrap().unwrap();
        assert_valid(&p, c(1, 1), c(8, 8), 64);
        assert!(p.jumps() > 6);
    }

    #[test]
    fn agrees_with_shortest_distance() {
        let mut rng = StdRng::seed_from_u64(3);
        for size in [4, 5, 6] {
            let k = kp(size);
            for _ in 0..15 {
                let s = c(rng.random_range(1..=size), rng.random_range(1..=size));
                let t = c(rng.random_range(1..=size), rng.random_range(1..=size));
                let Some(d) = k.min_jumps(s, t).unwrap() else {
                    assert_eq!(k.feasible_path(s, t, 8).unwrap(), None);
                    continue;
                };
                for budget in [d, d + 1] {
                    let p = k.feasible_path(s, t, budget).unwrap();
                    let p = p.unwrap_or_else(|| panic!("{s} -> {t} within {budget}"));
                    assert_valid(&p, s, t, budget);
                }
                if d > 0 {
                    assert_eq!(k.feasible_path(s, t, d - 1).unwrap(), None);
                }
            }
        }
    }

    #[test]
    fn deep_budget_does_not_recurse() {
        let k = kp(60);
        let budget = k.board().len() as u32;
        let p = k.feasible_path(c(1, 1), c(60, 60), budget).unwrap().unwrap();
        assert_valid(&p, c(1, 1), c(60, 60), budget);
    }

    #[test]
    fn rejects_off_board_endpoints() {
        assert!(kp(8).feasible_path(c(1, 1), c(0, 0), 10).is_err());
    }
}
