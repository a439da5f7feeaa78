use std::collections::VecDeque;

use knight_core::{BoardError, Cell};

use crate::KnightPaths;
use crate::maps::{DistanceMap, ParentMap};
use crate::moves::neighbors;
use crate::path::Path;
use crate::paths::SearchStats;

impl KnightPaths {
    /// Compute a path with the fewest jumps, refusing relaxations that
    /// cannot beat the target's known distance.
    ///
    /// The skeleton is the breadth-first search of
    /// [`shortest_path`](Self::shortest_path). A neighbor is recorded and
    /// enqueued only while its candidate distance is strictly below the
    /// distance already recorded for `target`; before the target is
    /// discovered that distance is [`UNREACHABLE`](crate::UNREACHABLE) and
    /// nothing is refused. On a uniform-cost board the returned path is the
    /// same as `shortest_path`'s, but the cells left in the frontier after
    /// the target is discovered no longer grow it.
    pub fn bounded_shortest_path(
        &self,
        start: Cell,
        target: Cell,
    ) -> Result<Option<Path>, BoardError> {
        self.check_endpoints(start, target)?;
        let (path, stats) = self.bounded_path(start, target);
        log::debug!(
            "bounded {start} -> {target}: expanded {}, discovered {}, pruned {}",
            stats.expanded,
            stats.discovered,
            stats.pruned
        );
        Ok(path)
    }

    pub(crate) fn bounded_path(&self, start: Cell, target: Cell) -> (Option<Path>, SearchStats) {
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
                if next >= dist.at(target) {
                    stats.pruned += 1;
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
}
