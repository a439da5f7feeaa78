//! **knight-core** — square board geometry for knight-move searches.
//!
//! This crate provides the types shared by the search and command-line
//! crates: 1-indexed [`Cell`] positions, relative [`Jump`] offsets, and the
//! [`Board`] validity predicate with its dense cell indexing.

pub mod board;
pub mod error;
pub mod geom;

pub use board::{Board, BoardIter};
pub use error::BoardError;
pub use geom::{Cell, Jump};
