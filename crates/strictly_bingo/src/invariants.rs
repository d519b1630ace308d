//! First-class invariants for a bingo card.
//!
//! Every command on [`BingoCard`] re-checks these in debug builds.

use crate::card::BingoCard;
use crate::cell::CELL_COUNT;
use crate::lines;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the grid has 25 cells and the center holds the free-space label.
pub struct GridShapeInvariant;

impl<R> Invariant<BingoCard<R>> for GridShapeInvariant {
    fn holds(card: &BingoCard<R>) -> bool {
        card.grid.cells().len() == CELL_COUNT && card.grid.center() == card.show.center_label()
    }

    fn description() -> &'static str {
        "Grid has 25 cells with the free-space label at the center"
    }
}

/// Invariant: the cached winning lines match a fresh evaluation of the marks.
pub struct WinningLinesCurrentInvariant;

impl<R> Invariant<BingoCard<R>> for WinningLinesCurrentInvariant {
    fn holds(card: &BingoCard<R>) -> bool {
        card.winning_lines == lines::evaluate(&card.selection)
    }

    fn description() -> &'static str {
        "Winning lines reflect the current selection"
    }
}

/// Invariant: the alert has observed the current number of winning lines.
pub struct AlertTracksLinesInvariant;

impl<R> Invariant<BingoCard<R>> for AlertTracksLinesInvariant {
    fn holds(card: &BingoCard<R>) -> bool {
        card.alert.last_count() == card.winning_lines.len()
    }

    fn description() -> &'static str {
        "Alert line count matches the winning lines"
    }
}

/// All card invariants as a composable set.
pub type CardInvariants = (
    GridShapeInvariant,
    WinningLinesCurrentInvariant,
    AlertTracksLinesInvariant,
);
