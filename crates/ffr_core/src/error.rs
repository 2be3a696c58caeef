use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("week {week} has no teams")]
    EmptyWeek { week: u32 },

    #[error("unknown team: {team}")]
    UnknownTeam { team: String },

    #[error("no matchup result for team: {team}")]
    MissingMatchup { team: String },

    #[error("metric \"{metric}\" has not been computed for team: {team}")]
    MissingMetric { team: String, metric: &'static str },

    #[error("unsupported schema version: found {found}, expected {expected}")]
    SchemaVersionMismatch { found: u8, expected: u8 },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for MetricsError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            MetricsError::Deserialization(err.to_string())
        } else {
            MetricsError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;
