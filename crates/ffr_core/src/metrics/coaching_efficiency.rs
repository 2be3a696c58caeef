//! Coaching efficiency: actual score as a percentage of the optimal
//! lineup score, with league-mode disqualification rules.

use std::collections::BTreeMap;

use tracing::warn;

use crate::metrics::optimal_lineup::OptimalLineupSolver;
use crate::models::{RosterSettings, TeamWeek};

/// Availability statuses that make a bench player ineligible for the
/// efficiency calculation.
pub const PROHIBITED_STATUSES: [&str; 4] = ["PUP-P", "SUSP", "O", "IR"];

/// Bench players on a prohibited status or on bye beyond this count
/// disqualify the team (when disqualification is enabled).
const MAX_INELIGIBLE_BENCH_PLAYERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyResult {
    pub efficiency: f64,
    pub optimal_score: f64,
    pub disqualified: bool,
}

pub struct CoachingEfficiency<'a> {
    roster: &'a RosterSettings,
}

impl<'a> CoachingEfficiency<'a> {
    pub fn new(roster: &'a RosterSettings) -> Self {
        Self { roster }
    }

    /// Compute one team's coaching efficiency for `week`.
    ///
    /// A zero optimal score (no eligible players at all) is a defined
    /// edge case yielding 0.0, not a division fault. When
    /// `dq_eligible` is set, an invalid roster or too many inactive
    /// bench players force the result to exactly 0.0; table formatting
    /// renders that as `DQ`.
    pub fn execute(
        &self,
        team: &TeamWeek,
        week: u32,
        league_active_slots: &[String],
        dq_eligible: bool,
    ) -> EfficiencyResult {
        let optimal =
            OptimalLineupSolver::new(self.roster).solve(&team.players);

        let mut efficiency = if optimal.score > 0.0 {
            (team.score / optimal.score) * 100.0
        } else {
            0.0
        };

        let mut disqualified = false;
        if dq_eligible {
            let ineligible_count = team
                .bench_players()
                .filter(|player| is_ineligible(player, week))
                .count();

            if counter(league_active_slots)
                != counter(&team.positions_filled_active)
            {
                warn!(
                    team = %team.name,
                    week,
                    "roster invalid: starting lineup does not fill the league's active slots"
                );
                disqualified = true;
            } else if ineligible_count > MAX_INELIGIBLE_BENCH_PLAYERS {
                warn!(
                    team = %team.name,
                    week,
                    ineligible_count,
                    "roster invalid: too many inactive players on the bench"
                );
                disqualified = true;
            }

            if disqualified {
                efficiency = 0.0;
            }
        }

        EfficiencyResult {
            efficiency,
            optimal_score: optimal.score,
            disqualified,
        }
    }
}

fn is_ineligible(player: &crate::models::Player, week: u32) -> bool {
    let prohibited = player
        .status
        .as_deref()
        .map(|status| PROHIBITED_STATUSES.contains(&status))
        .unwrap_or(false);
    prohibited || player.bye_week == Some(week)
}

/// Multiset view of a slot-name list.
fn counter(slots: &[String]) -> BTreeMap<&str, u32> {
    let mut counts = BTreeMap::new();
    for slot in slots {
        *counts.entry(slot.as_str()).or_insert(0) += 1;
    }
    counts
}
