use serde::{Deserialize, Serialize};

use super::player::Player;

/// Win/loss/tie symbol for one side of a matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchupOutcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "T")]
    Tie,
}

impl MatchupOutcome {
    pub fn letter(&self) -> &'static str {
        match self {
            MatchupOutcome::Win => "W",
            MatchupOutcome::Loss => "L",
            MatchupOutcome::Tie => "T",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupSide {
    pub team_id: String,
    pub outcome: MatchupOutcome,
}

/// One week's head-to-head pairing. The pair is unordered; each side
/// carries its own outcome symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub sides: [MatchupSide; 2],
}

/// Implied record of a team's score compared against every other
/// team's score in the same week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBreakdown {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

/// Points attributed to a single roster slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionPoints {
    pub position: String,
    pub points: f64,
}

/// One team's normalized data for a single week, plus the metric
/// fields the engine fills in during that week's computation.
///
/// Snapshots are created fresh each week and discarded once season
/// accumulation has captured their values; the computed fields are
/// written once per week and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamWeek {
    pub team_id: String,
    pub name: String,
    pub manager: String,
    pub players: Vec<Player>,
    pub score: f64,
    pub bench_score: f64,
    /// Active slot names the manager actually filled this week.
    pub positions_filled_active: Vec<String>,

    #[serde(default)]
    pub coaching_efficiency: Option<f64>,
    #[serde(default)]
    pub optimal_score: Option<f64>,
    #[serde(default)]
    pub efficiency_disqualified: bool,
    #[serde(default)]
    pub luck: Option<f64>,
    #[serde(default)]
    pub breakdown: Option<WeeklyBreakdown>,
    #[serde(default)]
    pub points_by_position: Option<Vec<PositionPoints>>,
}

impl TeamWeek {
    pub fn starters(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| player.is_starter())
    }

    pub fn bench_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| player.is_benched())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matchup_outcome_round_trips_as_letters() {
        let outcome: MatchupOutcome = serde_json::from_str("\"W\"").unwrap();
        assert_eq!(outcome, MatchupOutcome::Win);
        assert_eq!(serde_json::to_string(&outcome).unwrap(), "\"W\"");
        assert_eq!(MatchupOutcome::Tie.letter(), "T");
    }

    #[test]
    fn computed_fields_default_to_unset() {
        let team: TeamWeek = serde_json::from_str(
            r#"{
                "team_id": "1",
                "name": "The Hosers",
                "manager": "sam",
                "players": [],
                "score": 98.5,
                "bench_score": 31.0,
                "positions_filled_active": ["QB", "WR", "WR"]
            }"#,
        )
        .unwrap();
        assert!(team.coaching_efficiency.is_none());
        assert!(team.luck.is_none());
        assert!(team.breakdown.is_none());
        assert!(!team.efficiency_disqualified);
    }
}
