//! Roster slot eligibility widening.
//!
//! A player's native eligibility list names base positions. The roster
//! settings widen that list: any flex slot whose base set contains a
//! native position is also legal. The defensive umbrella position is a
//! marker, not an assignable slot, so it is never added directly; it
//! only routes defensive players into the defensive flex.

use crate::models::{Player, RosterSettings};

/// All roster slots `player` may legally occupy, in roster declaration
/// order, without duplicates. An empty result is valid: the player fits
/// nowhere and is effectively bench-only.
pub fn eligible_slots(roster: &RosterSettings, player: &Player) -> Vec<String> {
    let mut eligible: Vec<String> = Vec::new();

    let mut add = |slot: &str, eligible: &mut Vec<String>| {
        if !eligible.iter().any(|existing| existing == slot) {
            eligible.push(slot.to_string());
        }
    };

    for slot in &roster.slots {
        if !player
            .eligible_positions
            .iter()
            .any(|position| *position == slot.name)
        {
            continue;
        }

        if slot.name != roster.defensive_umbrella {
            add(&slot.name, &mut eligible);
        }

        for flex in roster.flex_slots() {
            if flex
                .base_slots
                .iter()
                .any(|base| *base == slot.name)
            {
                add(&flex.name, &mut eligible);
            }
        }
    }

    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roster::sample_roster;

    fn player(positions: &[&str]) -> Player {
        Player {
            name: "test".to_string(),
            points: 0.0,
            eligible_positions: positions
                .iter()
                .map(|p| p.to_string())
                .collect(),
            selected_position: "BN".to_string(),
            status: None,
            bye_week: None,
        }
    }

    #[test]
    fn offensive_player_widens_into_flex() {
        let roster = sample_roster().pruned();
        let slots = eligible_slots(&roster, &player(&["WR"]));
        assert_eq!(slots, vec!["WR".to_string(), "FLEX".to_string()]);
    }

    #[test]
    fn quarterback_gets_no_flex() {
        let roster = sample_roster().pruned();
        let slots = eligible_slots(&roster, &player(&["QB"]));
        assert_eq!(slots, vec!["QB".to_string()]);
    }

    #[test]
    fn umbrella_is_never_added_directly() {
        let roster = sample_roster().pruned();
        // Defensive players carry the umbrella plus their real position.
        let slots = eligible_slots(&roster, &player(&["D", "DB"]));
        // "DB" is the direct slot; "D" is the defensive flex reached
        // through the base set, never the umbrella marker itself.
        assert_eq!(slots, vec!["DB".to_string(), "D".to_string()]);
    }

    #[test]
    fn dual_eligibility_does_not_duplicate_flex() {
        let roster = sample_roster().pruned();
        let slots = eligible_slots(&roster, &player(&["WR", "TE"]));
        assert_eq!(
            slots,
            vec!["WR".to_string(), "FLEX".to_string(), "TE".to_string()]
        );
    }

    #[test]
    fn unknown_positions_yield_empty_result() {
        let roster = sample_roster().pruned();
        assert!(eligible_slots(&roster, &player(&["P"])).is_empty());
        assert!(eligible_slots(&roster, &player(&[])).is_empty());
    }
}
