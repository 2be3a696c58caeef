//! Composite power ranking.
//!
//! Each team is ranked independently by weekly score, coaching
//! efficiency, and luck (descending; ties share the average of the
//! positions they span). The power rank is the rank of the arithmetic
//! mean of those three ranks, ascending; lower is better.

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, Result};
use crate::models::TeamWeek;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerRanking {
    pub score_rank: f64,
    pub coach_rank: f64,
    pub luck_rank: f64,
    pub power_rank: f64,
}

pub struct PowerRankingComposer;

impl PowerRankingComposer {
    /// Per-team rank columns, in the order the teams were given.
    pub fn execute(
        &self,
        teams: &[TeamWeek],
    ) -> Result<Vec<(String, PowerRanking)>> {
        let scores: Vec<f64> = teams.iter().map(|team| team.score).collect();
        let efficiencies = teams
            .iter()
            .map(|team| {
                team.coaching_efficiency.ok_or_else(|| {
                    MetricsError::MissingMetric {
                        team: team.name.clone(),
                        metric: "coaching_efficiency",
                    }
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        let lucks = teams
            .iter()
            .map(|team| {
                team.luck.ok_or_else(|| MetricsError::MissingMetric {
                    team: team.name.clone(),
                    metric: "luck",
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        let score_ranks = average_ranks(&scores, true);
        let coach_ranks = average_ranks(&efficiencies, true);
        let luck_ranks = average_ranks(&lucks, true);

        let means: Vec<f64> = (0..teams.len())
            .map(|i| (score_ranks[i] + coach_ranks[i] + luck_ranks[i]) / 3.0)
            .collect();
        let power_ranks = average_ranks(&means, false);

        Ok(teams
            .iter()
            .enumerate()
            .map(|(i, team)| {
                (
                    team.name.clone(),
                    PowerRanking {
                        score_rank: score_ranks[i],
                        coach_rank: coach_ranks[i],
                        luck_rank: luck_ranks[i],
                        power_rank: power_ranks[i],
                    },
                )
            })
            .collect())
    }
}

/// 1-based ranks with ties sharing the average of the positions the
/// group spans. `descending` ranks the largest value first.
pub fn average_ranks(values: &[f64], descending: bool) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|a, b| {
        let cmp = values[*a]
            .partial_cmp(&values[*b])
            .unwrap_or(std::cmp::Ordering::Equal);
        if descending {
            cmp.reverse()
        } else {
            cmp
        }
    });

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len()
            && values[order[end + 1]] == values[order[start]]
        {
            end += 1;
        }
        // positions start+1 ..= end+1 share their mean
        let shared = (start + 1 + end + 1) as f64 / 2.0;
        for &index in &order[start..=end] {
            ranks[index] = shared;
        }
        start = end + 1;
    }
    ranks
}
