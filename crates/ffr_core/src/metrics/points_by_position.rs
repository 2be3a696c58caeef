//! Points scored by roster position.
//!
//! Starters only; a player credits every base position they are
//! eligible for, so dual-eligible players appear under each of their
//! positions.
//! Flex and bench slots are excluded from the breakdown.

use crate::models::{PositionPoints, RosterSettings, TeamWeek, BENCH_SLOT};

pub struct PointsByPosition<'a> {
    roster: &'a RosterSettings,
}

impl<'a> PointsByPosition<'a> {
    pub fn new(roster: &'a RosterSettings) -> Self {
        Self { roster }
    }

    /// One team-week's starter points summed per active non-flex slot,
    /// sorted by slot name.
    pub fn execute(&self, team: &TeamWeek) -> Vec<PositionPoints> {
        let mut breakdown: Vec<PositionPoints> = self
            .roster
            .slots
            .iter()
            .filter(|slot| {
                slot.name != BENCH_SLOT && !self.roster.is_flex(&slot.name)
            })
            .map(|slot| PositionPoints {
                position: slot.name.clone(),
                points: team
                    .starters()
                    .filter(|player| {
                        player
                            .eligible_positions
                            .iter()
                            .any(|position| *position == slot.name)
                    })
                    .map(|player| player.points)
                    .sum(),
            })
            .collect();

        breakdown.sort_by(|a, b| a.position.cmp(&b.position));
        breakdown
    }
}
