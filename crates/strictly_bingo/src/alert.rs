//! Edge-triggered "bingo" notification.

use crate::lines::WinLineId;
use std::collections::BTreeSet;
use tracing::{info, instrument};

/// Visibility of the bingo notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
pub enum AlertVisibility {
    /// No notification showing.
    #[default]
    Hidden,
    /// The player just completed a new line.
    Visible,
}

/// Raises the bingo notification when the number of completed lines grows.
///
/// `Hidden -> Visible` happens only on an increase in the line count;
/// `Visible -> Hidden` only on [`dismiss`](Self::dismiss) or
/// [`clear`](Self::clear).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertCoordinator {
    visibility: AlertVisibility,
    last_count: usize,
}

impl AlertCoordinator {
    /// Creates a hidden alert with no lines observed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result of a toggle. Returns true if the alert was raised
    /// by this call.
    #[instrument(skip_all, fields(before = previous.len(), after = current.len()))]
    pub fn on_result(
        &mut self,
        previous: &BTreeSet<WinLineId>,
        current: &BTreeSet<WinLineId>,
    ) -> bool {
        self.last_count = current.len();
        if current.len() > previous.len() {
            info!(lines = current.len(), "Bingo!");
            self.visibility = AlertVisibility::Visible;
            true
        } else {
            false
        }
    }

    /// Hides the notification. Line count is kept.
    #[instrument(skip(self))]
    pub fn dismiss(&mut self) {
        self.visibility = AlertVisibility::Hidden;
    }

    /// Hides the notification and forgets the line count, for a fresh card.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the current visibility.
    pub fn visibility(&self) -> AlertVisibility {
        self.visibility
    }

    /// Returns true if the notification is showing.
    pub fn is_visible(&self) -> bool {
        self.visibility == AlertVisibility::Visible
    }

    /// Returns the most recently observed number of completed lines.
    pub fn last_count(&self) -> usize {
        self.last_count
    }
}
