//! Marked cells on a card.

use crate::cell::CellIndex;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// The set of cells a player has marked.
///
/// A fresh card and a reset card both start from [`SelectionState::initial`],
/// which marks only the free space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    marked: BTreeSet<CellIndex>,
}

impl SelectionState {
    /// Selection with only the free space marked.
    pub fn initial() -> Self {
        let mut selection = Self::default();
        selection.reset();
        selection
    }

    /// Selection with nothing marked.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Flips a cell's mark. Returns true if the cell is now marked.
    ///
    /// The free space is not exempt; a player may unmark it.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, cell: CellIndex) -> bool {
        let marked = if self.marked.remove(&cell) {
            false
        } else {
            self.marked.insert(cell);
            true
        };
        debug!(cell = %cell, marked, "Toggled cell");
        marked
    }

    /// Clears every mark, then marks the free space again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.marked.clear();
        self.marked.insert(CellIndex::CENTER);
    }

    /// Returns true if the cell is marked.
    pub fn contains(&self, cell: CellIndex) -> bool {
        self.marked.contains(&cell)
    }

    /// Returns the marked cells.
    pub fn marked(&self) -> &BTreeSet<CellIndex> {
        &self.marked
    }

    /// Returns the number of marked cells.
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    /// Returns true if nothing is marked.
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}
