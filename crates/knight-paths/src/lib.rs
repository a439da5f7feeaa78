//! Knight-move path searches on square boards.
//!
//! This crate provides three independent searches over the graph whose
//! vertices are the cells of a [`Board`](knight_core::Board) and whose edges
//! are knight jumps:
//!
//! - **BFS** shortest path ([`KnightPaths::shortest_path`])
//! - **Bounded BFS** that stops relaxing cells once the target's distance is
//!   known ([`KnightPaths::bounded_shortest_path`])
//! - **Backtracking DFS** for any path within a jump budget
//!   ([`KnightPaths::feasible_path`])
//!
//! plus the count-only [`KnightPaths::min_jumps`] and the distance map
//! [`KnightPaths::jump_map`].
//!
//! Every search allocates its own distance, parent and visited maps, so a
//! single [`KnightPaths`] can be shared between threads.

mod backtrack;
mod bfs;
mod bounded;
mod maps;
mod moves;
mod path;
mod paths;

pub use moves::{KNIGHT_JUMPS, is_knight_jump, neighbors};
pub use path::Path;
pub use paths::{KnightPaths, PathNode, SearchKind, UNREACHABLE};
