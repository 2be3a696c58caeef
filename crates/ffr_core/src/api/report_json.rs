//! JSON boundary for callers that integrate through strings rather
//! than the typed structs (scripting hosts, subprocess harnesses).

use serde::Deserialize;

use crate::config::ReportConfig;
use crate::engine::{WeekEngine, WeekInput};
use crate::error::{MetricsError, Result};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct WeekRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub config: ReportConfig,
    pub input: WeekInput,
}

/// Compute one week's report from a JSON [`WeekRequest`] and return
/// the serialized [`crate::engine::WeekReport`].
pub fn compute_week_json(request_json: &str) -> Result<String> {
    let request: WeekRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(MetricsError::SchemaVersionMismatch {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let report = WeekEngine::new(request.config).compute(request.input)?;
    Ok(serde_json::to_string(&report)?)
}
