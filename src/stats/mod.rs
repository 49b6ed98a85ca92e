//! Win/loss statistics and their persistence
//!
//! Stats are read and written through the [`StatsStore`] capability so the
//! game screens never touch the filesystem directly.

mod store;

pub use store::{JsonFileStore, MemoryStore, STATS_KEY, StatsStore, StoreError};

use serde::{Deserialize, Serialize};

/// Lifetime win/loss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
}

impl Stats {
    /// Games played
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.wins.saturating_add(self.losses)
    }

    /// Percentage of games won, rounded to the nearest integer
    ///
    /// Zero when no games have been played.
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (f64::from(self.wins) / f64::from(total) * 100.0).round() as u32
    }

    /// Stats with one more game counted
    ///
    /// Counters stop at `u32::MAX`.
    #[must_use]
    pub const fn with_result(self, won: bool) -> Self {
        if won {
            Self {
                wins: self.wins.saturating_add(1),
                ..self
            }
        } else {
            Self {
                losses: self.losses.saturating_add(1),
                ..self
            }
        }
    }
}

/// Count a finished game and persist the result
///
/// # Errors
/// Returns the store's error if reading or writing fails.
pub fn record_result<S: StatsStore + ?Sized>(store: &S, won: bool) -> Result<Stats, StoreError> {
    let stats = store.load()?.with_result(won);
    store.save(&stats)?;
    tracing::info!(wins = stats.wins, losses = stats.losses, "Recorded game result");
    Ok(stats)
}
