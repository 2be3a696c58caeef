//! Schedule luck.
//!
//! A team's implied record compares its score against every other
//! team's score the same week. Luck measures how far the actual
//! matchup outcome diverged from that implied strength: a win carried
//! by a soft schedule is positive luck, a loss despite a strong score
//! is negative. A team that would have beaten (or lost to) the entire
//! field earned its outcome outright, so its luck is zero.

use std::collections::HashMap;

use crate::error::{MetricsError, Result};
use crate::models::{Matchup, MatchupOutcome, TeamWeek, WeeklyBreakdown};

pub struct ScheduleLuckCalculator;

impl ScheduleLuckCalculator {
    /// Fill `breakdown` and `luck` on every team from the frozen set of
    /// week scores plus each team's actual matchup outcome.
    ///
    /// Scores are snapshotted before any team is written, so team order
    /// does not matter.
    pub fn execute(
        &self,
        teams: &mut [TeamWeek],
        matchups: &[Matchup],
    ) -> Result<()> {
        let scores: Vec<(String, f64)> = teams
            .iter()
            .map(|team| (team.team_id.clone(), team.score))
            .collect();

        let outcomes: HashMap<&str, MatchupOutcome> = matchups
            .iter()
            .flat_map(|matchup| matchup.sides.iter())
            .map(|side| (side.team_id.as_str(), side.outcome))
            .collect();

        for team in teams.iter_mut() {
            let record = implied_record(&team.team_id, team.score, &scores);

            // number of opponents in the full-field comparison
            let field = (scores.len() - 1) as f64;

            let luck = if record.wins != 0 && record.losses != 0 {
                let outcome = outcomes
                    .get(team.team_id.as_str())
                    .copied()
                    .ok_or_else(|| MetricsError::MissingMatchup {
                        team: team.name.clone(),
                    })?;
                match outcome {
                    MatchupOutcome::Win | MatchupOutcome::Tie => {
                        f64::from(record.losses + record.ties) / field
                    }
                    MatchupOutcome::Loss => {
                        -f64::from(record.wins + record.ties) / field
                    }
                }
            } else {
                0.0
            };

            team.breakdown = Some(record);
            team.luck = Some(luck * 100.0);
        }

        Ok(())
    }
}

/// Win/loss/tie tally of `score` against every other team's score.
pub fn implied_record(
    team_id: &str,
    score: f64,
    scores: &[(String, f64)],
) -> WeeklyBreakdown {
    let mut record = WeeklyBreakdown::default();
    for (other_id, other_score) in scores {
        if other_id == team_id {
            continue;
        }
        if score > *other_score {
            record.wins += 1;
        } else if score < *other_score {
            record.losses += 1;
        } else {
            record.ties += 1;
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchupSide;

    fn team(id: &str, score: f64) -> TeamWeek {
        TeamWeek {
            team_id: id.to_string(),
            name: format!("team {id}"),
            manager: format!("manager {id}"),
            players: Vec::new(),
            score,
            bench_score: 0.0,
            positions_filled_active: Vec::new(),
            coaching_efficiency: None,
            optimal_score: None,
            efficiency_disqualified: false,
            luck: None,
            breakdown: None,
            points_by_position: None,
        }
    }

    fn matchup(a: &str, oa: MatchupOutcome, b: &str, ob: MatchupOutcome) -> Matchup {
        Matchup {
            sides: [
                MatchupSide { team_id: a.to_string(), outcome: oa },
                MatchupSide { team_id: b.to_string(), outcome: ob },
            ],
        }
    }

    #[test]
    fn undefeated_implied_record_has_zero_luck() {
        // {120, 120, 80, 80}: each pair ties itself and sweeps (or is
        // swept by) the other, so nobody has both an implied win and an
        // implied loss.
        let mut teams = vec![
            team("a", 120.0),
            team("b", 120.0),
            team("c", 80.0),
            team("d", 80.0),
        ];
        let matchups = vec![
            matchup("a", MatchupOutcome::Win, "c", MatchupOutcome::Loss),
            matchup("b", MatchupOutcome::Loss, "d", MatchupOutcome::Win),
        ];

        ScheduleLuckCalculator
            .execute(&mut teams, &matchups)
            .unwrap();

        for t in &teams {
            assert_eq!(t.luck, Some(0.0), "{}", t.name);
        }
        assert_eq!(
            teams[0].breakdown,
            Some(WeeklyBreakdown { wins: 2, losses: 0, ties: 1 })
        );
        assert_eq!(
            teams[3].breakdown,
            Some(WeeklyBreakdown { wins: 0, losses: 2, ties: 1 })
        );
    }

    #[test]
    fn lucky_win_counts_implied_losses_against_the_field() {
        let mut teams = vec![
            team("a", 100.0),
            team("b", 90.0),
            team("c", 110.0),
            team("d", 120.0),
        ];
        // "a" beat the one team it could beat.
        let matchups = vec![
            matchup("a", MatchupOutcome::Win, "b", MatchupOutcome::Loss),
            matchup("c", MatchupOutcome::Loss, "d", MatchupOutcome::Win),
        ];

        ScheduleLuckCalculator
            .execute(&mut teams, &matchups)
            .unwrap();

        // a: implied 1-2-0, actual win -> luck = 2/3.
        let luck = teams[0].luck.unwrap();
        assert!((luck - (2.0 / 3.0) * 100.0).abs() < 1e-9);

        // c: implied 2-1-0, actual loss -> luck = -2/3.
        let luck = teams[2].luck.unwrap();
        assert!((luck + (2.0 / 3.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn missing_matchup_is_an_error_only_when_needed() {
        // Mixed implied record but no matchup entry for "a".
        let mut teams =
            vec![team("a", 100.0), team("b", 90.0), team("c", 110.0)];
        let err = ScheduleLuckCalculator
            .execute(&mut teams, &[])
            .unwrap_err();
        assert!(matches!(err, MetricsError::MissingMatchup { .. }));

        // All-win implied record never consults the matchup list.
        let mut teams = vec![team("a", 100.0), team("b", 90.0)];
        ScheduleLuckCalculator.execute(&mut teams, &[]).unwrap();
        assert_eq!(teams[0].luck, Some(0.0));
    }
}
