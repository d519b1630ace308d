//! Cell addressing on the 5×5 card.

use tracing::instrument;

/// Number of cells along one side of the card.
pub const GRID_SIDE: usize = 5;

/// Total number of cells on a card.
pub const CELL_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Index of a cell on the card (0-24), row-major.
///
/// Out-of-range indices cannot be constructed, so every operation that
/// takes a `CellIndex` is total over the 25-cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct CellIndex(u8);

impl CellIndex {
    /// The reserved free-space cell in the middle of the card.
    pub const CENTER: CellIndex = CellIndex(12);

    /// Creates a cell index, or `None` if `index` is outside 0-24.
    #[instrument]
    pub fn new(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then_some(CellIndex(index as u8))
    }

    /// Creates a cell index from a row and column (each 0-4).
    #[instrument]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIDE && col < GRID_SIDE {
            Self::new(row * GRID_SIDE + col)
        } else {
            None
        }
    }

    /// Const constructor for the line table. Caller guarantees `index < 25`.
    pub(crate) const fn from_raw(index: u8) -> Self {
        CellIndex(index)
    }

    /// Returns the row-major index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0-4).
    pub fn row(self) -> usize {
        self.index() / GRID_SIDE
    }

    /// Returns the column (0-4).
    pub fn col(self) -> usize {
        self.index() % GRID_SIDE
    }

    /// Returns true for the free-space cell.
    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }

    /// Iterates over all 25 cells in row-major order.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..CELL_COUNT as u8).map(CellIndex)
    }
}

impl From<CellIndex> for usize {
    fn from(cell: CellIndex) -> Self {
        cell.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(CellIndex::new(0).map(CellIndex::index), Some(0));
        assert_eq!(CellIndex::new(24).map(CellIndex::index), Some(24));
        assert_eq!(CellIndex::new(25), None);
    }

    #[test]
    fn test_row_col_round_trip() {
        let cell = CellIndex::from_row_col(3, 1).expect("in range");
        assert_eq!(cell.index(), 16);
        assert_eq!((cell.row(), cell.col()), (3, 1));
        assert_eq!(CellIndex::from_row_col(5, 0), None);
    }

    #[test]
    fn test_center_is_twelve() {
        assert_eq!(CellIndex::CENTER.index(), 12);
        assert_eq!((CellIndex::CENTER.row(), CellIndex::CENTER.col()), (2, 2));
        assert_eq!(CellIndex::all().filter(|c| c.is_center()).count(), 1);
    }
}
