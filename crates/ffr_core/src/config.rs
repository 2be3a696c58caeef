//! League report configuration.
//!
//! The engine never reads configuration ad hoc; every flag is carried in
//! [`ReportConfig`] and handed to the components at construction.

use serde::{Deserialize, Serialize};

/// Per-league switches consumed by the metrics engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Apply the coaching efficiency disqualification rules (invalid
    /// roster, too many inactive bench players).
    #[serde(default)]
    pub disqualification_enabled: bool,

    /// Break ties at the top of ranked tables with sequential ranks
    /// instead of a shared `1*` marker (score tables only).
    #[serde(default)]
    pub resolve_top_ties: bool,

    /// Week for which the manual efficiency override applies.
    #[serde(default)]
    pub override_week: Option<u32>,

    /// Team whose coaching efficiency is forced to zero in the override
    /// week, regardless of the computed value.
    #[serde(default)]
    pub override_team: Option<String>,
}

impl ReportConfig {
    /// True when `team` must have its efficiency zeroed for `week`.
    pub fn overrides_efficiency(&self, week: u32, team: &str) -> bool {
        self.override_week == Some(week)
            && self.override_team.as_deref() == Some(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_requires_both_week_and_team() {
        let config = ReportConfig {
            override_week: Some(3),
            override_team: Some("The Hosers".to_string()),
            ..ReportConfig::default()
        };
        assert!(config.overrides_efficiency(3, "The Hosers"));
        assert!(!config.overrides_efficiency(4, "The Hosers"));
        assert!(!config.overrides_efficiency(3, "Another Team"));

        let unset = ReportConfig::default();
        assert!(!unset.overrides_efficiency(3, "The Hosers"));
    }

    #[test]
    fn defaults_deserialize_from_empty_object() {
        let config: ReportConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ReportConfig::default());
    }
}
