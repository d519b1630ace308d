//! Win detection for bingo.
//!
//! The twelve winning lines (five rows, five columns, two diagonals) live
//! in a static table built at compile time.

use crate::cell::{CellIndex, GRID_SIDE};
use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Identifies one of the twelve winning lines.
///
/// Displays 1-based, e.g. `Row 1` for the top row.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum WinLineId {
    /// Horizontal line, 0 is the top row.
    #[display("Row {}", _0 + 1)]
    Row(u8),
    /// Vertical line, 0 is the leftmost column.
    #[display("Column {}", _0 + 1)]
    Column(u8),
    /// Top-left to bottom-right.
    #[display("Diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("Anti-diagonal")]
    AntiDiagonal,
}

impl WinLineId {
    /// Looks the line up in the static table. `None` for an out-of-range row or column.
    pub fn line(self) -> Option<&'static WinLine> {
        WIN_LINES.iter().find(|line| line.id == self)
    }
}

/// A winning line: five cells that complete a bingo when all are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    id: WinLineId,
    cells: [CellIndex; GRID_SIDE],
}

impl WinLine {
    /// Returns the line id.
    pub fn id(&self) -> WinLineId {
        self.id
    }

    /// Returns the five cells of the line.
    pub fn cells(&self) -> &[CellIndex; GRID_SIDE] {
        &self.cells
    }

    /// Returns true if every cell of the line is marked.
    pub fn is_complete(&self, selection: &SelectionState) -> bool {
        self.cells.iter().all(|cell| selection.contains(*cell))
    }
}

/// The twelve winning lines: rows 0-4, columns 0-4, diagonal, anti-diagonal.
pub static WIN_LINES: [WinLine; 2 * GRID_SIDE + 2] = build_lines();

const fn build_lines() -> [WinLine; 2 * GRID_SIDE + 2] {
    let blank = WinLine {
        id: WinLineId::Diagonal,
        cells: [CellIndex::CENTER; GRID_SIDE],
    };
    let mut lines = [blank; 2 * GRID_SIDE + 2];
    let mut diagonal = [CellIndex::CENTER; GRID_SIDE];
    let mut anti_diagonal = [CellIndex::CENTER; GRID_SIDE];

    let mut i = 0;
    while i < GRID_SIDE {
        let mut row = [CellIndex::CENTER; GRID_SIDE];
        let mut column = [CellIndex::CENTER; GRID_SIDE];
        let mut j = 0;
        while j < GRID_SIDE {
            row[j] = CellIndex::from_raw((i * GRID_SIDE + j) as u8);
            column[j] = CellIndex::from_raw((j * GRID_SIDE + i) as u8);
            j += 1;
        }
        lines[i] = WinLine {
            id: WinLineId::Row(i as u8),
            cells: row,
        };
        lines[GRID_SIDE + i] = WinLine {
            id: WinLineId::Column(i as u8),
            cells: column,
        };
        diagonal[i] = CellIndex::from_raw((i * GRID_SIDE + i) as u8);
        anti_diagonal[i] = CellIndex::from_raw((i * GRID_SIDE + (GRID_SIDE - 1 - i)) as u8);
        i += 1;
    }

    lines[2 * GRID_SIDE] = WinLine {
        id: WinLineId::Diagonal,
        cells: diagonal,
    };
    lines[2 * GRID_SIDE + 1] = WinLine {
        id: WinLineId::AntiDiagonal,
        cells: anti_diagonal,
    };
    lines
}

/// Returns the ids of every line fully contained in `selection`.
#[instrument(skip(selection), fields(marked = selection.len()))]
pub fn evaluate(selection: &SelectionState) -> BTreeSet<WinLineId> {
    let complete: BTreeSet<WinLineId> = WIN_LINES
        .iter()
        .filter(|line| line.is_complete(selection))
        .map(WinLine::id)
        .collect();
    debug!(complete = complete.len(), "Evaluated winning lines");
    complete
}

/// Returns the union of the cells of the given lines.
pub fn winning_cells(lines: &BTreeSet<WinLineId>) -> BTreeSet<CellIndex> {
    lines
        .iter()
        .filter_map(|id| id.line())
        .flat_map(|line| line.cells().iter().copied())
        .collect()
}
