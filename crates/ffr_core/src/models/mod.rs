pub mod player;
pub mod roster;
pub mod standings;
pub mod team;

pub use player::Player;
pub use roster::{FlexSlot, RosterSettings, SlotCount, BENCH_SLOT};
pub use standings::{standings_table, StandingsRow, StreakType, TeamRecord};
pub use team::{
    Matchup, MatchupOutcome, MatchupSide, PositionPoints, TeamWeek,
    WeeklyBreakdown,
};
