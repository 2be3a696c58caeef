//! Week-level orchestration.
//!
//! One [`WeekEngine::compute`] call runs every metric pass for a
//! single week, in order: coaching efficiency (parallel across teams),
//! schedule luck, points by position, the three ranked tables, and the
//! composite power ranking. Weeks are independent of each other; the
//! caller sequences them chronologically and feeds the reports to a
//! [`crate::season::SeasonTracker`].

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ReportConfig;
use crate::error::{MetricsError, Result};
use crate::metrics::{
    CoachingEfficiency, PointsByPosition, PowerRanking,
    PowerRankingComposer, ScheduleLuckCalculator,
};
use crate::models::{
    standings_table, Matchup, PositionPoints, RosterSettings, StandingsRow,
    TeamRecord, TeamWeek,
};
use crate::tables::{Metric, RankedEntry, RankedRow, RankedTableBuilder};

/// Everything the upstream data collaborator supplies for one week.
#[derive(Debug, Clone, Deserialize)]
pub struct WeekInput {
    pub week: u32,
    pub roster: RosterSettings,
    pub teams: Vec<TeamWeek>,
    pub matchups: Vec<Matchup>,
    /// Provider-computed season standings, if the caller wants the
    /// standings table reshaped alongside the metrics.
    #[serde(default)]
    pub records: Option<Vec<TeamRecord>>,
}

/// Tied-row counts per table, reported for diagnostics only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TieCounts {
    pub score: usize,
    pub coaching_efficiency: usize,
    pub luck: usize,
    pub power_rank: usize,
}

/// One team's weekly points-by-position breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamPositionPoints {
    pub team: String,
    pub positions: Vec<PositionPoints>,
}

/// Everything the rendering collaborator consumes for one week.
#[derive(Debug, Clone, Serialize)]
pub struct WeekReport {
    pub week: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standings: Option<Vec<StandingsRow>>,
    pub scores: Vec<RankedRow>,
    pub coaching_efficiency: Vec<RankedRow>,
    pub luck: Vec<RankedRow>,
    pub power_rankings: Vec<RankedRow>,
    pub power_rank_columns: Vec<(String, PowerRanking)>,
    pub points_by_position: Vec<TeamPositionPoints>,
    pub tie_counts: TieCounts,
    /// Post-computation snapshots, keyed by name for downstream lookup.
    pub teams: Vec<TeamWeek>,
}

pub struct WeekEngine {
    config: ReportConfig,
}

impl WeekEngine {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn compute(&self, input: WeekInput) -> Result<WeekReport> {
        let WeekInput { week, roster, mut teams, matchups, records } = input;

        if teams.is_empty() {
            return Err(MetricsError::EmptyWeek { week });
        }
        debug!(week, teams = teams.len(), "computing weekly metrics");

        let roster = roster.pruned();
        let active_slots = roster.active_slots();

        // Coaching efficiency. Teams are independent here; the pass
        // runs in parallel and the results are written back in order.
        let engine = CoachingEfficiency::new(&roster);
        let results: Vec<_> = teams
            .par_iter()
            .map(|team| {
                engine.execute(
                    team,
                    week,
                    &active_slots,
                    self.config.disqualification_enabled,
                )
            })
            .collect();
        for (team, result) in teams.iter_mut().zip(results) {
            team.coaching_efficiency = Some(result.efficiency);
            team.optimal_score = Some(result.optimal_score);
            team.efficiency_disqualified = result.disqualified;
        }

        // Manual override: one configured team loses its efficiency for
        // one configured week, regardless of the computed value.
        if let Some(override_team) = self.config.override_team.clone() {
            if self.config.override_week == Some(week) {
                let team = teams
                    .iter_mut()
                    .find(|team| team.name == override_team)
                    .ok_or(MetricsError::UnknownTeam {
                        team: override_team,
                    })?;
                team.coaching_efficiency = Some(0.0);
                team.efficiency_disqualified = true;
            }
        }

        ScheduleLuckCalculator.execute(&mut teams, &matchups)?;

        let points_by_position = PointsByPosition::new(&roster);
        for team in teams.iter_mut() {
            team.points_by_position =
                Some(points_by_position.execute(team));
        }

        let builder = RankedTableBuilder::new(self.config.resolve_top_ties);
        let mut tie_counts = TieCounts::default();

        // Score table: places, top-tie marking, then the bench-score
        // group resolution.
        let mut scores = builder.build(sorted_entries(
            &teams,
            |team| team.score,
            true,
            true,
        ));
        tie_counts.score =
            builder.mark_top_ties(&mut scores, Metric::Score, week);
        let scores = builder.resolve_score_ties(scores);

        let mut coaching = builder.build(sorted_entries(
            &teams,
            |team| team.coaching_efficiency.unwrap_or(0.0),
            true,
            false,
        ));
        tie_counts.coaching_efficiency = builder.mark_top_ties(
            &mut coaching,
            Metric::CoachingEfficiency,
            week,
        );

        let mut luck = builder.build(sorted_entries(
            &teams,
            |team| team.luck.unwrap_or(0.0),
            true,
            false,
        ));
        tie_counts.luck =
            builder.mark_top_ties(&mut luck, Metric::Luck, week);

        // Power ranking: the table value is the composite rank itself,
        // ascending (lower is better).
        let power_rank_columns = PowerRankingComposer.execute(&teams)?;
        let mut power_entries: Vec<RankedEntry> = teams
            .iter()
            .zip(power_rank_columns.iter())
            .map(|(team, (_, ranking))| RankedEntry {
                team: team.name.clone(),
                manager: team.manager.clone(),
                value: ranking.power_rank,
                bench_value: None,
            })
            .collect();
        power_entries.sort_by(|a, b| {
            a.value
                .partial_cmp(&b.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut power_rankings = builder.build(power_entries);
        tie_counts.power_rank = builder.mark_top_ties(
            &mut power_rankings,
            Metric::PowerRank,
            week,
        );

        let points_by_position = teams
            .iter()
            .map(|team| TeamPositionPoints {
                team: team.name.clone(),
                positions: team
                    .points_by_position
                    .clone()
                    .unwrap_or_default(),
            })
            .collect();

        Ok(WeekReport {
            week,
            standings: records.as_deref().map(standings_table),
            scores,
            coaching_efficiency: coaching,
            luck,
            power_rankings,
            power_rank_columns,
            points_by_position,
            tie_counts,
            teams,
        })
    }
}

/// Ranked-table entries for one metric, sorted descending (or
/// ascending), with the bench column attached for score tables.
fn sorted_entries<F>(
    teams: &[TeamWeek],
    metric: F,
    descending: bool,
    with_bench: bool,
) -> Vec<RankedEntry>
where
    F: Fn(&TeamWeek) -> f64,
{
    let mut entries: Vec<RankedEntry> = teams
        .iter()
        .map(|team| RankedEntry {
            team: team.name.clone(),
            manager: team.manager.clone(),
            value: metric(team),
            bench_value: with_bench.then_some(team.bench_score),
        })
        .collect();
    entries.sort_by(|a, b| {
        let cmp = a
            .value
            .partial_cmp(&b.value)
            .unwrap_or(std::cmp::Ordering::Equal);
        if descending {
            cmp.reverse()
        } else {
            cmp
        }
    });
    entries
}
