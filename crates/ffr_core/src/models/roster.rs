use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Sentinel slot name for benched players.
pub const BENCH_SLOT: &str = "BN";

fn default_umbrella() -> String {
    "D".to_string()
}

/// A named roster slot and its starting capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotCount {
    pub name: String,
    pub count: u32,
}

/// A flex slot and the base slots it can absorb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexSlot {
    pub name: String,
    pub base_slots: Vec<String>,
}

/// Static per-league roster configuration.
///
/// Slot order is the league's declaration order and is preserved: the
/// lineup solver fills slots in exactly this order, so reordering slots
/// can change which player lands in which slot on point ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSettings {
    pub slots: Vec<SlotCount>,
    pub flex: Vec<FlexSlot>,
    /// Umbrella position that every defensive player natively carries.
    /// It is never a directly assignable slot; defensive players reach
    /// the defensive flex through it.
    #[serde(default = "default_umbrella")]
    pub defensive_umbrella: String,
}

impl RosterSettings {
    /// Drop zero-capacity slots and any flex definition left without a
    /// corresponding slot entry.
    pub fn pruned(mut self) -> Self {
        self.slots.retain(|slot| slot.count > 0);
        let kept: HashSet<&str> =
            self.slots.iter().map(|slot| slot.name.as_str()).collect();
        self.flex.retain(|flex| kept.contains(flex.name.as_str()));
        self
    }

    pub fn capacity(&self, name: &str) -> u32 {
        self.slots
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| slot.count)
            .unwrap_or(0)
    }

    pub fn is_flex(&self, name: &str) -> bool {
        self.flex.iter().any(|flex| flex.name == name)
    }

    pub fn flex_slots(&self) -> &[FlexSlot] {
        &self.flex
    }

    /// The league's active-slot template: every non-bench slot name
    /// repeated capacity times. A valid starting lineup fills exactly
    /// this multiset of slots.
    pub fn active_slots(&self) -> Vec<String> {
        let mut active = Vec::new();
        for slot in &self.slots {
            if slot.name == BENCH_SLOT {
                continue;
            }
            for _ in 0..slot.count {
                active.push(slot.name.clone());
            }
        }
        active
    }

    /// Total starting capacity across all non-bench slots.
    pub fn active_capacity(&self) -> u32 {
        self.slots
            .iter()
            .filter(|slot| slot.name != BENCH_SLOT)
            .map(|slot| slot.count)
            .sum()
    }
}

/// Shared roster fixture for unit tests across the crate.
#[cfg(test)]
pub(crate) fn sample_roster() -> RosterSettings {
    RosterSettings {
        slots: vec![
            SlotCount { name: "QB".to_string(), count: 1 },
            SlotCount { name: "WR".to_string(), count: 2 },
            SlotCount { name: "RB".to_string(), count: 2 },
            SlotCount { name: "TE".to_string(), count: 1 },
            SlotCount { name: "FLEX".to_string(), count: 1 },
            SlotCount { name: "DB".to_string(), count: 1 },
            SlotCount { name: "DL".to_string(), count: 1 },
            SlotCount { name: "D".to_string(), count: 1 },
            SlotCount { name: "K".to_string(), count: 0 },
            SlotCount { name: "BN".to_string(), count: 6 },
        ],
        flex: vec![
            FlexSlot {
                name: "FLEX".to_string(),
                base_slots: vec![
                    "WR".to_string(),
                    "RB".to_string(),
                    "TE".to_string(),
                ],
            },
            FlexSlot {
                name: "D".to_string(),
                base_slots: vec![
                    "D".to_string(),
                    "DB".to_string(),
                    "DL".to_string(),
                    "LB".to_string(),
                    "DT".to_string(),
                    "DE".to_string(),
                    "S".to_string(),
                    "CB".to_string(),
                ],
            },
        ],
        defensive_umbrella: "D".to_string(),
    }
}
