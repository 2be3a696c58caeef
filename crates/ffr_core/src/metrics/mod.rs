pub mod coaching_efficiency;
pub mod eligibility;
pub mod luck;
pub mod optimal_lineup;
pub mod points_by_position;
pub mod power_rank;

pub use coaching_efficiency::{
    CoachingEfficiency, EfficiencyResult, PROHIBITED_STATUSES,
};
pub use eligibility::eligible_slots;
pub use luck::{implied_record, ScheduleLuckCalculator};
pub use optimal_lineup::{OptimalLineup, OptimalLineupSolver};
pub use points_by_position::PointsByPosition;
pub use power_rank::{average_ranks, PowerRanking, PowerRankingComposer};
