//! Report Builder Library
//!
//! Season snapshot JSON → weekly metric tables → report JSON pipeline.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use ffr_core::{
    ReportConfig, SeasonTracker, TeamPositionPoints, WeekEngine, WeekInput,
    WeekReport,
};

/// A whole season's worth of normalized weekly inputs, as produced by
/// the upstream data collaborator.
#[derive(Debug, Deserialize)]
pub struct SeasonSnapshot {
    #[serde(default)]
    pub config: ReportConfig,
    pub weeks: Vec<WeekInput>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Engine version that produced the report
    pub engine_version: String,
    /// Generation time (RFC3339)
    pub generated_at: String,
    /// Number of weeks computed
    pub weeks_computed: usize,
    /// Week carrying the season-average annotations
    pub annotated_week: u32,
}

#[derive(Debug, Serialize)]
pub struct SeasonReport {
    pub metadata: ReportMetadata,
    pub weeks: Vec<WeekReport>,
    pub season_points_by_position: Vec<TeamPositionPoints>,
}

/// Compute every week in a season snapshot and annotate one week with
/// running season averages.
///
/// Weeks are computed in chronological order regardless of snapshot
/// order. `annotate_week` defaults to the latest week present.
pub fn build_report(
    snapshot: SeasonSnapshot,
    annotate_week: Option<u32>,
) -> Result<SeasonReport> {
    let SeasonSnapshot { config, mut weeks } = snapshot;
    if weeks.is_empty() {
        anyhow::bail!("season snapshot contains no weeks");
    }
    weeks.sort_by_key(|input| input.week);

    let engine = WeekEngine::new(config);
    let mut tracker = SeasonTracker::new();
    let mut reports = Vec::with_capacity(weeks.len());
    for input in weeks {
        let week = input.week;
        let report = engine
            .compute(input)
            .with_context(|| format!("failed to compute week {week}"))?;
        tracker.absorb(&report);
        reports.push(report);
    }

    let annotated_week = match annotate_week {
        Some(week) => week,
        None => reports.last().map(|report| report.week).unwrap_or(0),
    };
    let target = reports
        .iter_mut()
        .find(|report| report.week == annotated_week)
        .with_context(|| {
            format!("week {annotated_week} is not in the snapshot")
        })?;
    tracker.annotate(target);
    info!(
        weeks = reports.len(),
        annotated_week, "season report computed"
    );

    Ok(SeasonReport {
        metadata: ReportMetadata {
            engine_version: ffr_core::VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            weeks_computed: reports.len(),
            annotated_week,
        },
        weeks: reports,
        season_points_by_position: tracker.points_by_position_averages(),
    })
}

/// File-to-file wrapper around [`build_report`].
pub fn build_report_file(
    input_json: &Path,
    output_json: &Path,
    annotate_week: Option<u32>,
    pretty: bool,
) -> Result<ReportMetadata> {
    let raw = fs::read_to_string(input_json).with_context(|| {
        format!("Failed to read snapshot file: {}", input_json.display())
    })?;
    let snapshot: SeasonSnapshot =
        serde_json::from_str(&raw).context("Failed to parse snapshot JSON")?;

    let report = build_report(snapshot, annotate_week)?;

    let serialized = if pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("Failed to serialize report")?;

    if let Some(parent) = output_json.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }
    fs::write(output_json, serialized).with_context(|| {
        format!("Failed to write report file: {}", output_json.display())
    })?;

    Ok(report.metadata)
}
