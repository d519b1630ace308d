//! Plain-text rendering of a card and of load failures.

use strictly_bingo::{BingoCard, CardError, CellIndex, GRID_SIDE};

/// Width of a cell's text column in the plain-text card.
const CELL_WIDTH: usize = 16;

/// Renders a card as a text table.
///
/// Marked cells are prefixed with `[x]`, unmarked with `[ ]`, and cells on a
/// completed line with `[*]`.
pub fn render_text<R>(card: &BingoCard<R>) -> String {
    let winning = card.winning_cells();
    let separator = format!(
        "+{}",
        format!("{}+", "-".repeat(CELL_WIDTH + 5)).repeat(GRID_SIDE)
    );

    let mut out = String::new();
    if let Some(name) = card.show().name() {
        out.push_str(name);
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');

    for (row, cells) in card.grid().rows().enumerate() {
        out.push('|');
        for (col, text) in cells.iter().enumerate() {
            let Some(cell) = CellIndex::from_row_col(row, col) else {
                continue;
            };
            let mark = if winning.contains(&cell) {
                "[*]"
            } else if card.is_marked(cell) {
                "[x]"
            } else {
                "[ ]"
            };
            out.push_str(&format!(" {} {:<width$} |", mark, truncate(text), width = CELL_WIDTH));
        }
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
    }

    let lines = card.current_winning_lines();
    if !lines.is_empty() {
        let names: Vec<String> = lines.iter().map(ToString::to_string).collect();
        out.push_str(&format!("Lines: {}\n", names.join(", ")));
    }
    if card.alert_visible() {
        out.push_str("BINGO!\n");
    }
    out
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= CELL_WIDTH {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(CELL_WIDTH - 1).collect();
        short.push('…');
        short
    }
}

/// Message shown to the player when a card could not be loaded.
pub fn failure_message(error: &CardError) -> String {
    match error {
        CardError::InsufficientPhrases { found } => format!(
            "This show has only {} phrases; a card needs 24. Add more phrases to the show and try again.",
            found
        ),
        CardError::NotFound(id) => format!("No show named '{}' was found.", id),
        CardError::Fetch(reason) => format!("Could not load the show: {}", reason),
    }
}
