//! Dealing a 5×5 card from a phrase pool.
//!
//! Dealing is a Fisher-Yates shuffle of the whole pool followed by taking
//! the first 24 phrases, so a pool larger than 24 yields an independent
//! random subset on every deal. The free-space label always lands on the
//! center cell.

use crate::cell::{CELL_COUNT, CellIndex, GRID_SIDE};
use crate::error::CardError;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Label used for the free space when a show does not provide one.
pub const DEFAULT_CENTER_LABEL: &str = "FREE SPACE";

/// Number of phrases placed on a card (every cell but the center).
pub const PHRASES_PER_CARD: usize = CELL_COUNT - 1;

/// A phrase pool that is large enough to deal a card from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasePool {
    phrases: Vec<String>,
}

impl PhrasePool {
    /// Validates a phrase pool.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InsufficientPhrases`] if there are fewer than 24 phrases.
    #[instrument(skip(phrases), fields(pool = phrases.len()))]
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Result<Self, CardError> {
        if phrases.len() < PHRASES_PER_CARD {
            warn!(found = phrases.len(), "Phrase pool too small for a card");
            return Err(CardError::InsufficientPhrases {
                found: phrases.len(),
            });
        }

        Ok(Self {
            phrases: phrases.iter().map(|p| p.as_ref().to_string()).collect(),
        })
    }

    /// Returns the phrases in their original order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Returns the number of phrases in the pool.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always false; a valid pool holds at least 24 phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// The 25 cell texts of a dealt card, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    cells: Vec<String>,
}

impl Grid {
    /// Deals a grid from an unvalidated phrase list.
    ///
    /// `center` of `None` (or blank) uses [`DEFAULT_CENTER_LABEL`].
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InsufficientPhrases`] if there are fewer than 24 phrases.
    #[instrument(skip(phrases, rng), fields(pool = phrases.len()))]
    pub fn generate<S: AsRef<str>, R: Rng>(
        phrases: &[S],
        center: Option<&str>,
        rng: &mut R,
    ) -> Result<Self, CardError> {
        let pool = PhrasePool::new(phrases)?;
        Ok(Self::deal(&pool, center_label(center), rng))
    }

    /// Deals a grid from a validated pool. Cannot fail.
    #[instrument(skip(pool, rng), fields(pool = pool.len()))]
    pub fn deal<R: Rng>(pool: &PhrasePool, center: &str, rng: &mut R) -> Self {
        let mut cells = pool.phrases.clone();
        fisher_yates(&mut cells, rng);
        cells.truncate(PHRASES_PER_CARD);
        cells.insert(CellIndex::CENTER.index(), center.to_string());
        debug_assert_eq!(cells.len(), CELL_COUNT);

        debug!(center, "Dealt new grid");
        Self { cells }
    }

    /// Returns the text of a cell.
    pub fn cell(&self, index: CellIndex) -> &str {
        &self.cells[index.index()]
    }

    /// Returns the free-space label.
    pub fn center(&self) -> &str {
        self.cell(CellIndex::CENTER)
    }

    /// Returns all 25 cells in row-major order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Iterates over the five rows.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.chunks(GRID_SIDE)
    }

    /// Iterates over the 24 phrase cells, skipping the center.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != CellIndex::CENTER.index())
            .map(|(_, text)| text.as_str())
    }
}

/// Resolves the free-space label. A missing or empty label means the default;
/// any other label, whitespace included, is used as given.
pub fn center_label(center: Option<&str>) -> &str {
    match center {
        Some(label) if !label.is_empty() => label,
        _ => DEFAULT_CENTER_LABEL,
    }
}

/// Shuffles `items` in place into a uniformly random permutation.
///
/// Walks from the last index down to 1, swapping each element with one at
/// a uniformly chosen index in `[0, i]`.
pub fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
