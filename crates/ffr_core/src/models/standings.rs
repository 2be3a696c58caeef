//! League standings reshaping.
//!
//! Standings arrive precomputed from the data provider; the engine only
//! condenses them into the row shape the rendering layer consumes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreakType {
    #[serde(rename = "win")]
    Win,
    #[serde(rename = "loss")]
    Loss,
    #[serde(rename = "tie")]
    Tie,
}

impl StreakType {
    pub fn letter(&self) -> &'static str {
        match self {
            StreakType::Win => "W",
            StreakType::Loss => "L",
            StreakType::Tie => "T",
        }
    }
}

/// Provider-supplied season record for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub rank: u32,
    pub team: String,
    pub manager: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub percentage: f64,
    pub points_for: f64,
    pub points_against: f64,
    pub streak_type: StreakType,
    pub streak_length: u32,
    pub waiver_priority: u32,
    pub moves: u32,
    pub trades: u32,
}

/// One standings table row, ready for document assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub rank: u32,
    pub team: String,
    pub manager: String,
    /// `W-L-T (pct)`, e.g. `6-2-0 (0.750)`.
    pub record: String,
    pub points_for: f64,
    pub points_against: f64,
    /// `W-3`, `L-1`, ...
    pub streak: String,
    pub waiver_priority: u32,
    pub moves: u32,
    pub trades: u32,
}

/// Reshape provider records into standings rows, preserving the
/// provider's rank order.
pub fn standings_table(records: &[TeamRecord]) -> Vec<StandingsRow> {
    records
        .iter()
        .map(|record| StandingsRow {
            rank: record.rank,
            team: record.team.clone(),
            manager: record.manager.clone(),
            record: format!(
                "{}-{}-{} ({:.3})",
                record.wins, record.losses, record.ties, record.percentage
            ),
            points_for: record.points_for,
            points_against: record.points_against,
            streak: format!(
                "{}-{}",
                record.streak_type.letter(),
                record.streak_length
            ),
            waiver_priority: record.waiver_priority,
            moves: record.moves,
            trades: record.trades,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_streak_are_condensed() {
        let records = vec![TeamRecord {
            rank: 1,
            team: "The Hosers".to_string(),
            manager: "sam".to_string(),
            wins: 6,
            losses: 2,
            ties: 0,
            percentage: 0.75,
            points_for: 812.4,
            points_against: 701.2,
            streak_type: StreakType::Win,
            streak_length: 3,
            waiver_priority: 8,
            moves: 11,
            trades: 1,
        }];

        let rows = standings_table(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record, "6-2-0 (0.750)");
        assert_eq!(rows[0].streak, "W-3");
        assert_eq!(rows[0].rank, 1);
    }
}
