//! Aggregate alert metrics
//!
//! Feeds the dashboard header tiles: severity counts, total exposure,
//! average score.

use serde::{Deserialize, Serialize};

use crate::models::alert::{Alert, Severity};

/// Aggregate view over one generation cycle's alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSummary {
    /// Number of critical alerts
    pub critical_count: usize,

    /// Number of warning alerts
    pub warning_count: usize,

    /// Sum of alert exposure amounts (i64 cents)
    pub total_risk_amount: i64,

    /// Arithmetic mean of risk scores; 0.0 for an empty alert list
    pub average_risk_score: f64,
}

/// Summarize an alert list.
///
/// # Example
/// ```
/// use risk_alert_core_rs::summarize;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.critical_count, 0);
/// assert_eq!(summary.average_risk_score, 0.0);
/// ```
pub fn summarize(alerts: &[Alert]) -> AlertSummary {
    let critical_count = alerts
        .iter()
        .filter(|a| a.severity == Severity::Critical)
        .count();
    let warning_count = alerts
        .iter()
        .filter(|a| a.severity == Severity::Warning)
        .count();
    let total_risk_amount = alerts.iter().map(|a| a.amount).sum();

    let average_risk_score = if alerts.is_empty() {
        0.0
    } else {
        alerts.iter().map(|a| a.risk_score as f64).sum::<f64>() / alerts.len() as f64
    };

    AlertSummary {
        critical_count,
        warning_count,
        total_risk_amount,
        average_risk_score,
    }
}
