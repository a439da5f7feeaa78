use std::fmt;

use knight_core::{Cell, Jump};

/// A non-empty sequence of cells joined by knight jumps.
///
/// Searches build paths backwards, so the cells are stored in *traced*
/// order: target first, start last. [`traced`](Self::traced) exposes that
/// order directly while [`iter`](Self::iter) and [`to_vec`](Self::to_vec)
/// walk from start to target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    traced: Vec<Cell>,
}

impl Path {
    /// Wrap cells given target first. The vector must not be empty.
    pub(crate) fn from_traced(traced: Vec<Cell>) -> Self {
        debug_assert!(!traced.is_empty());
        Self { traced }
    }

    /// Build a path from cells listed start first. Returns `None` for an
    /// empty list. Adjacency is not checked; see
    /// [`is_connected`](Self::is_connected).
    pub fn from_cells(mut cells: Vec<Cell>) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        cells.reverse();
        Some(Self { traced: cells })
    }

    /// Cells from target back to start.
    #[inline]
    pub fn traced(&self) -> &[Cell] {
        &self.traced
    }

    /// Cells from start to target.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Cell> + ExactSizeIterator + '_ {
        self.traced.iter().rev().copied()
    }

    /// Cells from start to target, collected.
    pub fn to_vec(&self) -> Vec<Cell> {
        self.iter().collect()
    }

    /// First cell of the path.
    #[inline]
    pub fn start(&self) -> Cell {
        self.traced[self.traced.len() - 1]
    }

    /// Last cell of the path.
    #[inline]
    pub fn target(&self) -> Cell {
        self.traced[0]
    }

    /// Number of cells, one more than the number of jumps.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.traced.len()
    }

    /// Number of jumps.
    #[inline]
    pub fn jumps(&self) -> u32 {
        (self.traced.len() - 1) as u32
    }

    /// Whether `c` lies on the path.
    pub fn contains(&self, c: Cell) -> bool {
        self.traced.contains(&c)
    }

    /// Whether each consecutive pair of cells is one knight jump apart.
    pub fn is_connected(&self) -> bool {
        self.traced
            .windows(2)
            .all(|w| Jump::between(w[1], w[0]).is_some())
    }

    /// Position of `c` counted in jumps from the start, if it is on the path.
    pub fn step_of(&self, c: Cell) -> Option<u32> {
        let i = self.traced.iter().position(|&x| x == c)?;
        Some((self.traced.len() - 1 - i) as u32)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells = Vec::<Cell>::deserialize(deserializer)?;
        Path::from_cells(cells).ok_or_else(|| serde::de::Error::custom("path: no cells"))
    }
}
