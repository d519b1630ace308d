//! The playable card and its load lifecycle.
//!
//! [`BingoCard`] owns every piece of per-card state (grid, marks, completed
//! lines, alert) plus the random source used to deal it. Commands mutate
//! that state synchronously; queries read it. [`CardPhase`] wraps the one
//! asynchronous step, fetching the show, and settles into `Ready` or
//! `Failed`.

use crate::alert::{AlertCoordinator, AlertVisibility};
use crate::cell::CellIndex;
use crate::error::CardError;
use crate::grid::{Grid, PhrasePool};
use crate::invariants::{CardInvariants, InvariantSet};
use crate::lines::{self, WinLineId};
use crate::selection::SelectionState;
use crate::show::{ShowId, ShowProvider, ShowRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// What a single toggle changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Whether the cell is marked after the toggle.
    pub marked: bool,
    /// Number of completed lines after the toggle.
    pub lines: usize,
    /// Whether this toggle raised the bingo alert.
    pub bingo: bool,
}

/// A dealt bingo card and everything the player has done to it.
#[derive(Debug, Clone)]
pub struct BingoCard<R = StdRng> {
    pub(crate) show: ShowRecord,
    pub(crate) pool: PhrasePool,
    pub(crate) grid: Grid,
    pub(crate) selection: SelectionState,
    pub(crate) winning_lines: BTreeSet<WinLineId>,
    pub(crate) alert: AlertCoordinator,
    rng: R,
}

impl BingoCard<StdRng> {
    /// Deals a card with a deterministic random source.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InsufficientPhrases`] if the show has fewer than 24 phrases.
    pub fn seeded(show: ShowRecord, seed: u64) -> Result<Self, CardError> {
        Self::new(show, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BingoCard<R> {
    /// Deals a card from a show using the given random source.
    ///
    /// The card starts with only the free space marked and the alert hidden.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InsufficientPhrases`] if the show has fewer than 24 phrases.
    #[instrument(skip(show, rng), fields(phrases = show.phrases().len()))]
    pub fn new(show: ShowRecord, mut rng: R) -> Result<Self, CardError> {
        let pool = PhrasePool::new(show.phrases())?;
        let grid = Grid::deal(&pool, show.center_label(), &mut rng);
        let selection = SelectionState::initial();
        let winning_lines = lines::evaluate(&selection);

        info!(center = show.center_label(), "Dealt new card");
        let card = Self {
            show,
            pool,
            grid,
            selection,
            winning_lines,
            alert: AlertCoordinator::new(),
            rng,
        };
        card.check_invariants();
        Ok(card)
    }

    /// Marks or unmarks a cell, re-evaluates the winning lines, and raises
    /// the alert if a new line was completed.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, cell: CellIndex) -> ToggleOutcome {
        let previous = std::mem::take(&mut self.winning_lines);
        let marked = self.selection.toggle(cell);
        self.winning_lines = lines::evaluate(&self.selection);
        let bingo = self.alert.on_result(&previous, &self.winning_lines);

        debug!(marked, lines = self.winning_lines.len(), bingo, "Toggle applied");
        self.check_invariants();
        ToggleOutcome {
            marked,
            lines: self.winning_lines.len(),
            bingo,
        }
    }

    /// Toggles a cell by raw index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside 0-24. A 25-cell card has no other cells,
    /// so this is a caller bug rather than a runtime condition.
    pub fn toggle_index(&mut self, index: usize) -> ToggleOutcome {
        let Some(cell) = CellIndex::new(index) else {
            panic!("cell index {index} is outside the 5x5 card");
        };
        self.toggle(cell)
    }

    /// Deals a new grid from the same phrase pool and starts over with only
    /// the free space marked.
    #[instrument(skip(self))]
    pub fn regenerate(&mut self) {
        self.grid = Grid::deal(&self.pool, self.show.center_label(), &mut self.rng);
        self.start_fresh();
        info!("Card regenerated");
    }

    /// Keeps the grid but clears every mark except the free space.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.start_fresh();
        info!("Card reset");
    }

    /// Hides the bingo alert.
    #[instrument(skip(self))]
    pub fn dismiss_alert(&mut self) {
        self.alert.dismiss();
    }

    fn start_fresh(&mut self) {
        self.selection.reset();
        self.winning_lines = lines::evaluate(&self.selection);
        self.alert.clear();
        self.check_invariants();
    }
}

impl<R> BingoCard<R> {
    /// Returns the show the card was dealt from.
    pub fn show(&self) -> &ShowRecord {
        &self.show
    }

    /// Returns the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the marked cells.
    pub fn current_selection(&self) -> &BTreeSet<CellIndex> {
        self.selection.marked()
    }

    /// Returns the selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Returns true if the cell is marked.
    pub fn is_marked(&self, cell: CellIndex) -> bool {
        self.selection.contains(cell)
    }

    /// Returns the completed lines.
    pub fn current_winning_lines(&self) -> &BTreeSet<WinLineId> {
        &self.winning_lines
    }

    /// Returns every cell that belongs to a completed line.
    pub fn winning_cells(&self) -> BTreeSet<CellIndex> {
        lines::winning_cells(&self.winning_lines)
    }

    /// Returns true if the bingo alert is showing.
    pub fn alert_visible(&self) -> bool {
        self.alert.is_visible()
    }

    /// Returns the alert state.
    pub fn alert(&self) -> AlertVisibility {
        self.alert.visibility()
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = CardInvariants::check_all(self)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Card invariant violated: {descriptions}");
        }
    }
}

/// Where a card is in its load lifecycle.
#[derive(Debug)]
pub enum CardPhase<R = StdRng> {
    /// Waiting on the show provider.
    Loading,
    /// Card dealt and playable.
    Ready(BingoCard<R>),
    /// Fetch or deal failed. Terminal for this load attempt.
    Failed(CardError),
}

impl<R: Rng> CardPhase<R> {
    /// Fetches a show and deals a card from it.
    ///
    /// Makes exactly one fetch attempt. A missing show, a transport failure,
    /// or a pool with fewer than 24 phrases all land in [`CardPhase::Failed`].
    #[instrument(skip(provider, rng), fields(show_id = %id))]
    pub async fn load<P>(provider: &P, id: &ShowId, rng: R) -> Self
    where
        P: ShowProvider + ?Sized,
    {
        info!("Loading show");
        let result = match provider.get_show(id).await {
            Ok(show) => BingoCard::new(show, rng),
            Err(e) => Err(e),
        };

        match result {
            Ok(card) => {
                info!("Card ready");
                CardPhase::Ready(card)
            }
            Err(e) => {
                warn!(error = %e, "Card failed to load");
                CardPhase::Failed(e)
            }
        }
    }
}

impl<R> CardPhase<R> {
    /// Returns true once a card has been dealt.
    pub fn is_ready(&self) -> bool {
        matches!(self, CardPhase::Ready(_))
    }

    /// Returns the card if ready.
    pub fn card(&self) -> Option<&BingoCard<R>> {
        match self {
            CardPhase::Ready(card) => Some(card),
            _ => None,
        }
    }

    /// Returns the card mutably if ready.
    pub fn card_mut(&mut self) -> Option<&mut BingoCard<R>> {
        match self {
            CardPhase::Ready(card) => Some(card),
            _ => None,
        }
    }

    /// Returns the failure if the load failed.
    pub fn error(&self) -> Option<&CardError> {
        match self {
            CardPhase::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Converts a settled phase into a result. `Loading` has no card yet and
    /// maps to `None`.
    pub fn into_result(self) -> Option<Result<BingoCard<R>, CardError>> {
        match self {
            CardPhase::Loading => None,
            CardPhase::Ready(card) => Some(Ok(card)),
            CardPhase::Failed(e) => Some(Err(e)),
        }
    }
}

impl<R> Default for CardPhase<R> {
    fn default() -> Self {
        CardPhase::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(n: usize) -> ShowRecord {
        ShowRecord::new((1..=n).map(|i| format!("P{i}")).collect(), None)
    }

    #[test]
    fn test_new_card_starts_with_center_marked() {
        let card = BingoCard::seeded(show(24), 1).expect("enough phrases");
        assert_eq!(card.current_selection(), &BTreeSet::from([CellIndex::CENTER]));
        assert!(card.current_winning_lines().is_empty());
        assert!(!card.alert_visible());
        assert_eq!(card.grid().center(), "FREE SPACE");
    }

    #[test]
    fn test_toggle_reports_outcome() {
        let mut card = BingoCard::seeded(show(24), 1).expect("enough phrases");
        for i in 0..4 {
            let outcome = card.toggle_index(i);
            assert!(outcome.marked);
            assert!(!outcome.bingo);
        }
        let outcome = card.toggle_index(4);
        assert_eq!(
            outcome,
            ToggleOutcome {
                marked: true,
                lines: 1,
                bingo: true
            }
        );
    }

    #[test]
    #[should_panic(expected = "outside the 5x5 card")]
    fn test_toggle_index_out_of_range_panics() {
        let mut card = BingoCard::seeded(show(24), 1).expect("enough phrases");
        card.toggle_index(25);
    }

    #[test]
    fn test_reset_keeps_grid() {
        let mut card = BingoCard::seeded(show(40), 5).expect("enough phrases");
        let grid = card.grid().clone();
        card.toggle_index(0);
        card.reset();
        assert_eq!(card.grid(), &grid);
        assert_eq!(card.selection(), &SelectionState::initial());
    }

    #[test]
    fn test_regenerate_matches_fresh_card_state() {
        let mut card = BingoCard::seeded(show(40), 5).expect("enough phrases");
        for i in [0, 6, 18, 24] {
            card.toggle_index(i);
        }
        assert!(card.alert_visible());

        card.regenerate();
        let fresh = BingoCard::seeded(show(40), 5).expect("enough phrases");
        assert_eq!(card.selection(), fresh.selection());
        assert_eq!(card.current_winning_lines(), fresh.current_winning_lines());
        assert_eq!(card.alert(), fresh.alert());
    }

    #[test]
    fn test_phase_accessors() {
        let phase: CardPhase = CardPhase::default();
        assert!(!phase.is_ready());
        assert!(phase.card().is_none());
        assert!(phase.into_result().is_none());

        let failed: CardPhase = CardPhase::Failed(CardError::Fetch("offline".to_string()));
        assert_eq!(failed.error(), Some(&CardError::Fetch("offline".to_string())));
    }
}
