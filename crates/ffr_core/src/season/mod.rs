//! Season-to-date aggregation.
//!
//! Weekly values are folded into append-only per-team series as the
//! caller works through the season in order; averages are O(weeks)
//! overall rather than recomputed from scratch per week.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::engine::{TeamPositionPoints, WeekReport};
use crate::models::PositionPoints;
use crate::tables::{RankedRow, SeasonAnnotation};

/// Per-team ordered `(week, value)` sequences for one metric.
#[derive(Debug, Clone, Default)]
pub struct SeasonSeries {
    series: BTreeMap<String, Vec<(u32, f64)>>,
}

/// One team's season-to-date mean, with its rank among all teams.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonAverage {
    pub team: String,
    pub average: f64,
    pub rank: u32,
}

impl SeasonSeries {
    pub fn push(&mut self, team: &str, week: u32, value: f64) {
        self.series
            .entry(team.to_string())
            .or_default()
            .push((week, value));
    }

    /// Arithmetic mean per team over all folded weeks, ranked. The
    /// mean depends only on the multiset of values, not the fold
    /// order.
    pub fn averages(&self, descending: bool) -> Vec<SeasonAverage> {
        let mut averages: Vec<(String, f64)> = self
            .series
            .iter()
            .map(|(team, values)| {
                let sum: f64 =
                    values.iter().map(|(_, value)| value).sum();
                (team.clone(), sum / values.len() as f64)
            })
            .collect();
        averages.sort_by(|a, b| {
            let cmp = a
                .1
                .partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal);
            if descending {
                cmp.reverse()
            } else {
                cmp
            }
        });
        averages
            .into_iter()
            .enumerate()
            .map(|(index, (team, average))| SeasonAverage {
                team,
                average,
                rank: index as u32 + 1,
            })
            .collect()
    }
}

/// Attach season averages to already-built weekly rows by team name.
pub fn annotate_rows(rows: &mut [RankedRow], averages: &[SeasonAverage]) {
    for row in rows.iter_mut() {
        if let Some(entry) =
            averages.iter().find(|average| average.team == row.team)
        {
            row.season = Some(SeasonAnnotation {
                average: entry.average,
                rank: entry.rank,
            });
        }
    }
}

/// Folds a season's worth of [`WeekReport`]s, one week at a time.
#[derive(Debug, Default)]
pub struct SeasonTracker {
    weeks: u32,
    scores: SeasonSeries,
    coaching_efficiency: SeasonSeries,
    luck: SeasonSeries,
    /// team -> slot -> summed weekly points
    points_by_position: BTreeMap<String, BTreeMap<String, f64>>,
}

impl SeasonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    /// Fold one computed week. Weeks must arrive in chronological
    /// order to keep the series ordered.
    pub fn absorb(&mut self, report: &WeekReport) {
        self.weeks += 1;
        for team in &report.teams {
            self.scores.push(&team.name, report.week, team.score);
            if let Some(efficiency) = team.coaching_efficiency {
                self.coaching_efficiency.push(
                    &team.name,
                    report.week,
                    efficiency,
                );
            }
            if let Some(luck) = team.luck {
                self.luck.push(&team.name, report.week, luck);
            }
            if let Some(breakdown) = &team.points_by_position {
                let slots = self
                    .points_by_position
                    .entry(team.name.clone())
                    .or_default();
                for entry in breakdown {
                    *slots.entry(entry.position.clone()).or_insert(0.0) +=
                        entry.points;
                }
            }
        }
    }

    /// Merge the season-to-date figures into a week's ranked rows.
    pub fn annotate(&self, report: &mut WeekReport) {
        annotate_rows(&mut report.scores, &self.scores.averages(true));
        annotate_rows(
            &mut report.coaching_efficiency,
            &self.coaching_efficiency.averages(true),
        );
        annotate_rows(&mut report.luck, &self.luck.averages(true));
    }

    /// Per-team per-slot weekly sums divided by the number of weeks
    /// folded, sorted by slot name.
    pub fn points_by_position_averages(&self) -> Vec<TeamPositionPoints> {
        let weeks = self.weeks.max(1) as f64;
        self.points_by_position
            .iter()
            .map(|(team, slots)| TeamPositionPoints {
                team: team.clone(),
                positions: slots
                    .iter()
                    .map(|(position, total)| PositionPoints {
                        position: position.clone(),
                        points: total / weeks,
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_mean_is_order_invariant() {
        let mut forward = SeasonSeries::default();
        forward.push("a", 1, 100.0);
        forward.push("a", 2, 80.0);
        forward.push("a", 3, 90.0);

        let mut shuffled = SeasonSeries::default();
        shuffled.push("a", 3, 90.0);
        shuffled.push("a", 1, 100.0);
        shuffled.push("a", 2, 80.0);

        assert_eq!(
            forward.averages(true)[0].average,
            shuffled.averages(true)[0].average
        );
    }

    #[test]
    fn averages_rank_descending_by_default() {
        let mut series = SeasonSeries::default();
        series.push("low", 1, 80.0);
        series.push("high", 1, 120.0);
        series.push("mid", 1, 100.0);

        let averages = series.averages(true);
        assert_eq!(averages[0].team, "high");
        assert_eq!(averages[0].rank, 1);
        assert_eq!(averages[2].team, "low");
        assert_eq!(averages[2].rank, 3);
    }

    #[test]
    fn annotate_rows_matches_by_team_name() {
        use crate::tables::{Rank, RankedRow};

        let mut rows = vec![RankedRow {
            rank: Rank::Place(1),
            team: "a".to_string(),
            manager: "m".to_string(),
            value: 100.0,
            bench_value: None,
            season: None,
        }];
        let averages = vec![SeasonAverage {
            team: "a".to_string(),
            average: 95.5,
            rank: 2,
        }];
        annotate_rows(&mut rows, &averages);
        let season = rows[0].season.unwrap();
        assert_eq!(season.average, 95.5);
        assert_eq!(season.rank, 2);
    }

    #[test]
    fn position_sums_divide_by_weeks_observed() {
        let mut tracker = SeasonTracker::new();
        // Hand-rolled reports would be noise here; drive the tracker
        // through its own series instead.
        tracker.weeks = 2;
        tracker
            .points_by_position
            .entry("a".to_string())
            .or_default()
            .insert("WR".to_string(), 50.0);

        let averages = tracker.points_by_position_averages();
        assert_eq!(averages[0].positions[0].points, 25.0);
    }
}
