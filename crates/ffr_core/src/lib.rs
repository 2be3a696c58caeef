//! # ffr_core - Fantasy League Weekly Metrics Engine
//!
//! Pure-computation engine that turns normalized weekly team/player
//! snapshots into the ranked tables a report renderer consumes:
//! optimal lineups, coaching efficiency, schedule luck, composite
//! power rankings, season averages, and points-by-position breakdowns.
//!
//! ## Features
//! - Deterministic: same snapshot, same tables (stable tie handling)
//! - No I/O: providers feed data in, renderers take tables out
//! - Weeks are independent; season aggregation folds them in order
//! - JSON API for easy integration with non-Rust callers

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod season;
pub mod tables;

// Re-export the main API surface
pub use api::{compute_week_json, WeekRequest};
pub use config::ReportConfig;
pub use engine::{
    TeamPositionPoints, TieCounts, WeekEngine, WeekInput, WeekReport,
};
pub use error::{MetricsError, Result};
pub use metrics::{
    eligible_slots, CoachingEfficiency, EfficiencyResult, OptimalLineup,
    OptimalLineupSolver, PointsByPosition, PowerRanking,
    PowerRankingComposer, ScheduleLuckCalculator, PROHIBITED_STATUSES,
};
pub use models::{
    standings_table, Matchup, MatchupOutcome, MatchupSide, Player,
    PositionPoints, RosterSettings, StandingsRow, TeamRecord, TeamWeek,
    WeeklyBreakdown, BENCH_SLOT,
};
pub use season::{SeasonAverage, SeasonSeries, SeasonTracker};
pub use tables::{
    Metric, Rank, RankedEntry, RankedRow, RankedTableBuilder,
    SeasonAnnotation,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
