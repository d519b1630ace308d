//! Application state and key handling.

use crate::input::move_cursor;
use crate::ui;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use strictly_bingo::{BingoCard, CellIndex};
use tracing::{debug, info};

/// Main application state.
#[derive(Debug)]
pub struct App {
    card: BingoCard,
    cursor: CellIndex,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates the app around a ready card. The cursor starts on the free space.
    pub fn new(card: BingoCard) -> Self {
        Self {
            card,
            cursor: CellIndex::CENTER,
            status_message: "Space marks a cell. g: new card, r: reset, q: quit".to_string(),
            should_quit: false,
        }
    }

    /// Returns the card.
    pub fn card(&self) -> &BingoCard {
        &self.card
    }

    /// Returns the cell under the cursor.
    pub fn cursor(&self) -> CellIndex {
        self.cursor
    }

    /// Returns the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the player asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, "Handling key");

        match key {
            KeyCode::Char('q') => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_cursor(),
            KeyCode::Char('g') => {
                self.card.regenerate();
                self.status_message = "Dealt a new card.".to_string();
            }
            KeyCode::Char('r') => {
                self.card.reset();
                self.status_message = "Card cleared.".to_string();
            }
            KeyCode::Esc | KeyCode::Char('d') => self.dismiss_alert(),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    /// Handles a mouse click at `(column, row)` on a screen of the given
    /// size. A click on the bingo banner dismisses it.
    pub fn handle_click(&mut self, screen: Rect, column: u16, row: u16) {
        if self.card.alert_visible() && ui::hits_banner(screen, column, row) {
            self.dismiss_alert();
        } else {
            debug!(column, row, "Click outside the banner");
        }
    }

    fn toggle_cursor(&mut self) {
        let outcome = self.card.toggle(self.cursor);
        let text = self.card.grid().cell(self.cursor);
        self.status_message = if outcome.bingo {
            format!("BINGO! {} line(s) complete.", outcome.lines)
        } else if outcome.marked {
            format!("Marked \"{}\"", text)
        } else {
            format!("Unmarked \"{}\"", text)
        };
    }

    fn dismiss_alert(&mut self) {
        if self.card.alert_visible() {
            self.card.dismiss_alert();
            self.status_message = "Keep playing!".to_string();
        }
    }
}
