//! Scenario input bundle
//!
//! JSON-configured inputs for one full generation cycle, used by the CLI
//! driver and integration tests. The engine itself never performs I/O;
//! file loading lives here at the edge.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::aging::AgingRecord;
use crate::models::cash_flow::CashFlowProjection;

/// Errors raised while loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scenario JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Inputs for one alert generation cycle.
///
/// # Example
/// ```
/// use risk_alert_core_rs::Scenario;
///
/// let scenario = Scenario::from_json(
///     r#"{
///         "aging_records": [],
///         "cash_flow_projections": [],
///         "dismissed_ids": ["ar_high_risk-CUST-001"]
///     }"#,
/// ).unwrap();
/// assert_eq!(scenario.dismissed_ids.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// AR aging entries, one per customer
    #[serde(default)]
    pub aging_records: Vec<AgingRecord>,

    /// Cash-flow projections, one per period and location
    #[serde(default)]
    pub cash_flow_projections: Vec<CashFlowProjection>,

    /// Alert ids the user dismissed in earlier cycles
    #[serde(default)]
    pub dismissed_ids: Vec<String>,
}

impl Scenario {
    /// Parse a scenario from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
