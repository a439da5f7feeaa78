use knight_core::{Board, Cell, Jump};

/// The eight knight offsets, in the order every search tries them.
///
/// Searches break ties by this order, so changing it changes which of
/// several equally short paths is returned.
pub const KNIGHT_JUMPS: [Jump; 8] = [
    Jump::new(1, 2),
    Jump::new(2, 1),
    Jump::new(2, -1),
    Jump::new(1, -2),
    Jump::new(-1, -2),
    Jump::new(-2, -1),
    Jump::new(-2, 1),
    Jump::new(-1, 2),
];

/// Whether `j` is one of the eight knight offsets.
#[inline]
pub fn is_knight_jump(j: Jump) -> bool {
    j.is_knight()
}

/// Cells reachable from `c` with one knight jump, in [`KNIGHT_JUMPS`] order,
/// keeping only those that lie on `board`.
#[inline]
pub fn neighbors(board: Board, c: Cell) -> impl Iterator<Item = Cell> {
    KNIGHT_JUMPS
        .into_iter()
        .map(move |j| c + j)
        .filter(move |&n| board.is_valid(n))
}
