//! Ranked metric tables and tie resolution.
//!
//! Two independent tie strategies coexist:
//!
//! * **Top-tie marking** (all metrics): the leading rows sharing the
//!   first row's value all keep a shared `1*` marker. The score table
//!   of a league running in "resolve top ties" mode gets sequential
//!   ranks instead.
//! * **Score-tie resolution** (score table only): consecutive rows with
//!   equal scores are re-sorted by bench score, descending, and places
//!   are reassigned sequentially across the whole table. The leading
//!   group keeps whatever the top-tie marking assigned unless the
//!   league resolves top ties.
//!
//! The leading-group asymmetry (only the first group ever keeps shared
//! markers, every later group always gets sequential places) is
//! long-standing observed behavior and is kept as-is.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::info;

/// Rank cell of a table row: a dense 1-based place, or the shared
/// marker for an unresolved tie at the top of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Place(u32),
    SharedFirst,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Place(place) => write!(f, "{place}"),
            Rank::SharedFirst => write!(f, "1*"),
        }
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Which metric a ranked table carries; score tables get the extra
/// bench column and the bench-based tie resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Score,
    CoachingEfficiency,
    Luck,
    PowerRank,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Score => "score",
            Metric::CoachingEfficiency => "coaching efficiency",
            Metric::Luck => "luck",
            Metric::PowerRank => "power rank",
        }
    }
}

/// Season figure attached to a weekly row once the season aggregator
/// has folded enough weeks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonAnnotation {
    pub average: f64,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub rank: Rank,
    pub team: String,
    pub manager: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bench_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<SeasonAnnotation>,
}

/// Input entry for [`RankedTableBuilder::build`]; must arrive already
/// sorted on the metric.
#[derive(Debug, Clone)]
pub struct RankedEntry {
    pub team: String,
    pub manager: String,
    pub value: f64,
    pub bench_value: Option<f64>,
}

pub struct RankedTableBuilder {
    resolve_top_ties: bool,
}

/// Ties are judged at display precision (two decimals), matching the
/// formatted values the rendering layer prints.
fn tie_key(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

impl RankedTableBuilder {
    pub fn new(resolve_top_ties: bool) -> Self {
        Self { resolve_top_ties }
    }

    /// Assign sequential places to an already-sorted entry list.
    pub fn build(&self, entries: Vec<RankedEntry>) -> Vec<RankedRow> {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| RankedRow {
                rank: Rank::Place(index as u32 + 1),
                team: entry.team,
                manager: entry.manager,
                value: entry.value,
                bench_value: entry.bench_value,
                season: None,
            })
            .collect()
    }

    /// Detect how many leading rows share the first row's value and
    /// re-rank them: shared `1*` markers by default, sequential places
    /// for the score table in "resolve top ties" mode.
    ///
    /// Returns the number of tied rows beyond the first, for
    /// diagnostics. An all-equal table is not an error; it degrades to
    /// a single shared rank.
    pub fn mark_top_ties(
        &self,
        rows: &mut [RankedRow],
        metric: Metric,
        week: u32,
    ) -> usize {
        let Some(first) = rows.first() else {
            return 0;
        };
        let top = tie_key(first.value);
        let group = rows
            .iter()
            .take_while(|row| tie_key(row.value) == top)
            .count();
        let num_ties = group - 1;

        if num_ties > 0 {
            info!(
                metric = metric.label(),
                week,
                tied_rows = num_ties,
                "tie at the top of the table"
            );
            for (index, row) in rows[..group].iter_mut().enumerate() {
                row.rank = if self.resolve_top_ties
                    && metric == Metric::Score
                {
                    Rank::Place(index as u32 + 1)
                } else {
                    Rank::SharedFirst
                };
            }
        } else {
            info!(metric = metric.label(), week, "no ties");
        }

        num_ties
    }

    /// Re-sort every group of equal scores by bench score (descending)
    /// and reassign places sequentially across the table. The leading
    /// group keeps its existing ranks unless the league resolves top
    /// ties.
    pub fn resolve_score_ties(
        &self,
        rows: Vec<RankedRow>,
    ) -> Vec<RankedRow> {
        let mut resolved: Vec<RankedRow> = Vec::with_capacity(rows.len());
        let mut place: u32 = 1;
        let mut group_index = 0;

        let mut rows = rows.into_iter().peekable();
        while let Some(first) = rows.next() {
            let key = tie_key(first.value);
            let mut group = vec![first];
            while let Some(row) =
                rows.next_if(|row| tie_key(row.value) == key)
            {
                group.push(row);
            }

            // stable: equal bench scores keep their incoming order
            group.sort_by(|a, b| {
                b.bench_value
                    .unwrap_or(0.0)
                    .partial_cmp(&a.bench_value.unwrap_or(0.0))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            for mut row in group {
                if group_index != 0 || self.resolve_top_ties {
                    row.rank = Rank::Place(place);
                }
                resolved.push(row);
                place += 1;
            }
            group_index += 1;
        }

        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(rows: &[(&str, f64, f64)]) -> Vec<RankedEntry> {
        rows.iter()
            .map(|(team, value, bench)| RankedEntry {
                team: team.to_string(),
                manager: format!("manager {team}"),
                value: *value,
                bench_value: Some(*bench),
            })
            .collect()
    }

    #[test]
    fn build_assigns_sequential_places() {
        let builder = RankedTableBuilder::new(false);
        let rows = builder.build(entries(&[
            ("a", 50.0, 0.0),
            ("b", 40.0, 0.0),
        ]));
        assert_eq!(rows[0].rank, Rank::Place(1));
        assert_eq!(rows[1].rank, Rank::Place(2));
    }

    #[test]
    fn top_ties_share_a_marker_by_default() {
        let builder = RankedTableBuilder::new(false);
        let mut rows = builder.build(entries(&[
            ("a", 50.0, 10.0),
            ("b", 50.0, 20.0),
            ("c", 40.0, 5.0),
        ]));

        let num_ties = builder.mark_top_ties(&mut rows, Metric::Luck, 3);
        assert_eq!(num_ties, 1);
        assert_eq!(rows[0].rank, Rank::SharedFirst);
        assert_eq!(rows[1].rank, Rank::SharedFirst);
        assert_eq!(rows[2].rank, Rank::Place(3));
    }

    #[test]
    fn resolve_mode_ranks_score_ties_sequentially() {
        let builder = RankedTableBuilder::new(true);
        let mut rows = builder.build(entries(&[
            ("a", 50.0, 10.0),
            ("b", 50.0, 20.0),
            ("c", 40.0, 5.0),
        ]));

        let num_ties = builder.mark_top_ties(&mut rows, Metric::Score, 3);
        assert_eq!(num_ties, 1);
        assert_eq!(rows[0].rank, Rank::Place(1));
        assert_eq!(rows[1].rank, Rank::Place(2));

        // ...but a non-score metric keeps the shared marker even in
        // resolve mode.
        let mut luck_rows = builder.build(entries(&[
            ("a", 50.0, 10.0),
            ("b", 50.0, 20.0),
        ]));
        builder.mark_top_ties(&mut luck_rows, Metric::Luck, 3);
        assert_eq!(luck_rows[0].rank, Rank::SharedFirst);
    }

    #[test]
    fn score_resolution_sorts_groups_by_bench_score() {
        let builder = RankedTableBuilder::new(false);
        let mut rows = builder.build(entries(&[
            ("a", 50.0, 10.0),
            ("b", 50.0, 20.0),
            ("c", 40.0, 5.0),
            ("d", 40.0, 15.0),
        ]));
        builder.mark_top_ties(&mut rows, Metric::Score, 3);
        let rows = builder.resolve_score_ties(rows);

        // Leading group: bench re-sort happens but the shared markers
        // survive outside resolve mode.
        assert_eq!(rows[0].team, "b");
        assert_eq!(rows[0].rank, Rank::SharedFirst);
        assert_eq!(rows[1].team, "a");
        assert_eq!(rows[1].rank, Rank::SharedFirst);

        // Later groups always get sequential places.
        assert_eq!(rows[2].team, "d");
        assert_eq!(rows[2].rank, Rank::Place(3));
        assert_eq!(rows[3].team, "c");
        assert_eq!(rows[3].rank, Rank::Place(4));
    }

    #[test]
    fn resolve_mode_reranks_the_leading_group_too() {
        let builder = RankedTableBuilder::new(true);
        let mut rows = builder.build(entries(&[
            ("a", 50.0, 10.0),
            ("b", 50.0, 20.0),
        ]));
        builder.mark_top_ties(&mut rows, Metric::Score, 3);
        let rows = builder.resolve_score_ties(rows);
        assert_eq!(rows[0].team, "b");
        assert_eq!(rows[0].rank, Rank::Place(1));
        assert_eq!(rows[1].team, "a");
        assert_eq!(rows[1].rank, Rank::Place(2));
    }

    #[test]
    fn all_equal_table_degrades_to_one_shared_rank() {
        let builder = RankedTableBuilder::new(false);
        let mut rows = builder.build(entries(&[
            ("a", 50.0, 1.0),
            ("b", 50.0, 2.0),
            ("c", 50.0, 3.0),
        ]));
        let num_ties =
            builder.mark_top_ties(&mut rows, Metric::CoachingEfficiency, 1);
        assert_eq!(num_ties, 2);
        assert!(rows.iter().all(|row| row.rank == Rank::SharedFirst));
    }

    #[test]
    fn ties_are_judged_at_display_precision() {
        let builder = RankedTableBuilder::new(false);
        let mut rows = builder.build(entries(&[
            ("a", 50.001, 1.0),
            ("b", 50.004, 2.0),
        ]));
        let num_ties = builder.mark_top_ties(&mut rows, Metric::Luck, 1);
        assert_eq!(num_ties, 1);
    }

    #[test]
    fn shared_marker_serializes_as_one_star() {
        let json = serde_json::to_string(&Rank::SharedFirst).unwrap();
        assert_eq!(json, "\"1*\"");
        let json = serde_json::to_string(&Rank::Place(3)).unwrap();
        assert_eq!(json, "\"3\"");
    }
}
