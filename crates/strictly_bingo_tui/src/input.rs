//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use strictly_bingo::{CellIndex, GRID_SIDE};

/// Moves the cursor one cell for arrow keys or `h`/`j`/`k`/`l`. Stops at the edges.
pub fn move_cursor(cursor: CellIndex, key: KeyCode) -> CellIndex {
    let (row, col) = (cursor.row(), cursor.col());
    let last = GRID_SIDE - 1;

    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(last)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(last), col),
        _ => (row, col),
    };

    CellIndex::from_row_col(row, col).unwrap_or(cursor)
}
