use serde::{Deserialize, Serialize};

use super::roster::BENCH_SLOT;

/// One rostered player inside a single team-week snapshot.
///
/// Immutable for the duration of a week's computation. `points` is
/// required; a snapshot missing it fails deserialization and aborts
/// the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub points: f64,
    pub eligible_positions: Vec<String>,
    /// Slot the manager actually assigned, or `BN` for the bench.
    pub selected_position: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub bye_week: Option<u32>,
}

impl Player {
    pub fn is_starter(&self) -> bool {
        self.selected_position != BENCH_SLOT
    }

    pub fn is_benched(&self) -> bool {
        self.selected_position == BENCH_SLOT
    }
}
