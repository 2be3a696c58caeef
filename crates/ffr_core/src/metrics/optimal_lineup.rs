//! Optimal lineup selection.
//!
//! Two-phase greedy fill:
//! 1. every non-flex slot takes its top-capacity players by fantasy
//!    points from that slot's eligible pool;
//! 2. every flex slot takes the best remaining candidates after the
//!    players already chosen for its base slots are removed.
//!
//! Phase 1 optimizes each slot independently before flex allocation
//! runs, so the result is a greedy approximation rather than a
//! guaranteed global optimum when a player's best use trades off
//! against flex eligibility. Downstream efficiency figures depend on
//! this exact fill order; do not swap in an assignment-problem solver.

use std::collections::{HashMap, HashSet};

use crate::metrics::eligibility::eligible_slots;
use crate::models::{Player, RosterSettings, BENCH_SLOT};

/// The highest-scoring legal lineup the two-phase fill produces.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalLineup {
    pub players: Vec<Player>,
    pub score: f64,
}

pub struct OptimalLineupSolver<'a> {
    roster: &'a RosterSettings,
}

impl<'a> OptimalLineupSolver<'a> {
    pub fn new(roster: &'a RosterSettings) -> Self {
        Self { roster }
    }

    pub fn solve(&self, players: &[Player]) -> OptimalLineup {
        // Pool every player under each slot in its widened eligibility.
        // Pools hold indices so point ties keep stable input order.
        let mut pools: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, player) in players.iter().enumerate() {
            for slot in eligible_slots(self.roster, player) {
                pools.entry(slot).or_default().push(index);
            }
        }

        let mut selected: Vec<usize> = Vec::new();
        let mut selected_by_slot: HashMap<&str, Vec<usize>> = HashMap::new();

        // Phase 1: non-flex slots, in roster declaration order.
        for slot in &self.roster.slots {
            if slot.name == BENCH_SLOT || self.roster.is_flex(&slot.name) {
                continue;
            }
            let picks = top_by_points(
                players,
                pools.get(slot.name.as_str()),
                slot.count as usize,
            );
            selected.extend(&picks);
            selected_by_slot.insert(slot.name.as_str(), picks);
        }

        // Phase 2: flex slots from whatever their base slots left over.
        for flex in self.roster.flex_slots() {
            let mut allocated: HashSet<usize> = HashSet::new();
            for base in &flex.base_slots {
                if let Some(picks) = selected_by_slot.get(base.as_str()) {
                    allocated.extend(picks);
                }
            }

            let remaining: Vec<usize> = pools
                .get(flex.name.as_str())
                .map(|pool| {
                    pool.iter()
                        .copied()
                        .filter(|index| !allocated.contains(index))
                        .collect()
                })
                .unwrap_or_default();

            let picks = top_by_points(
                players,
                Some(&remaining),
                self.roster.capacity(&flex.name) as usize,
            );
            selected.extend(picks);
        }

        // Union of all picks; a player never counts twice.
        let mut seen: HashSet<usize> = HashSet::new();
        let mut lineup: Vec<Player> = Vec::new();
        let mut score = 0.0;
        for index in selected {
            if seen.insert(index) {
                score += players[index].points;
                lineup.push(players[index].clone());
            }
        }

        OptimalLineup { players: lineup, score }
    }
}

/// Top `count` pool members by points, descending. The sort is stable,
/// so point ties resolve in input order.
fn top_by_points(
    players: &[Player],
    pool: Option<&Vec<usize>>,
    count: usize,
) -> Vec<usize> {
    let mut ordered: Vec<usize> = pool.cloned().unwrap_or_default();
    ordered.sort_by(|a, b| {
        players[*b]
            .points
            .partial_cmp(&players[*a].points)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ordered.truncate(count);
    ordered
}
