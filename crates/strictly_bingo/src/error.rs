//! Errors surfaced while loading or dealing a card.

use crate::show::ShowId;

/// Error that can occur when loading a show or dealing a card from it.
///
/// None of these are retried automatically; the caller decides what to
/// show the player.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CardError {
    /// The phrase pool has fewer than the 24 phrases a card needs.
    #[display("A bingo card needs at least 24 phrases, but this show only has {}", found)]
    InsufficientPhrases {
        /// Number of phrases the show actually has.
        found: usize,
    },

    /// The show provider has no record with this id.
    #[display("Show '{}' was not found", _0)]
    NotFound(ShowId),

    /// The show provider could not be reached or returned garbage.
    #[display("Failed to fetch show: {}", _0)]
    Fetch(String),
}

impl CardError {
    /// Returns true if the player can fix this by editing the show.
    pub fn is_editable(&self) -> bool {
        matches!(self, CardError::InsufficientPhrases { .. })
    }
}

impl std::error::Error for CardError {}
