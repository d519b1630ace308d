//! Strictly Bingo - pure bingo card logic.
//!
//! Turns a pool of user-authored phrases into a randomized 5×5 card,
//! tracks marked cells, and detects completed rows, columns and diagonals.
//!
//! # Architecture
//!
//! - **Grid**: Fisher-Yates deal of 24 phrases around a free-space center
//! - **Selection**: the set of marked cells, seeded with the free space
//! - **Lines**: the static table of 12 winning lines and their evaluation
//! - **Alert**: edge-triggered bingo notification
//! - **Card**: the controller that owns all of the above, plus the load lifecycle
//!
//! # Example
//!
//! ```
//! use strictly_bingo::{BingoCard, CellIndex, ShowRecord, WinLineId};
//!
//! let phrases = (1..=24).map(|i| format!("Phrase {i}")).collect();
//! let mut card = BingoCard::seeded(ShowRecord::new(phrases, None), 42)?;
//!
//! for i in 0..5 {
//!     card.toggle_index(i);
//! }
//! assert!(card.current_winning_lines().contains(&WinLineId::Row(0)));
//! assert!(card.alert_visible());
//!
//! card.reset();
//! assert_eq!(card.current_selection().len(), 1);
//! assert!(card.is_marked(CellIndex::CENTER));
//! # Ok::<(), strictly_bingo::CardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod alert;
mod card;
mod cell;
mod error;
mod grid;
mod invariants;
mod lines;
mod selection;
mod show;

pub use alert::{AlertCoordinator, AlertVisibility};
pub use card::{BingoCard, CardPhase, ToggleOutcome};
pub use cell::{CELL_COUNT, CellIndex, GRID_SIDE};
pub use error::CardError;
pub use grid::{
    DEFAULT_CENTER_LABEL, Grid, PHRASES_PER_CARD, PhrasePool, center_label, fisher_yates,
};
pub use invariants::{
    AlertTracksLinesInvariant, CardInvariants, GridShapeInvariant, Invariant, InvariantSet,
    InvariantViolation, WinningLinesCurrentInvariant,
};
pub use lines::{WIN_LINES, WinLine, WinLineId, evaluate, winning_cells};
pub use selection::SelectionState;
pub use show::{InMemoryShowProvider, ShowId, ShowProvider, ShowRecord};

/// Re-exported so callers can seed cards without naming `rand` themselves.
pub use rand::rngs::StdRng;
