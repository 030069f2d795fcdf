//! Alert filtering

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::alert::{Alert, AlertType, Severity};

/// Predicate set for narrowing an alert list.
///
/// Every field is optional; absent predicates pass all alerts through
/// unchanged, present predicates combine with AND.
///
/// # Example
/// ```
/// use risk_alert_core_rs::{AlertFilter, Severity};
///
/// let filter = AlertFilter {
///     severity: Some(Severity::Critical),
///     location_id: Some("LOC-NORTH".to_string()),
///     ..AlertFilter::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertFilter {
    /// Keep only alerts with this severity
    pub severity: Option<Severity>,

    /// Keep only alerts of this type
    pub alert_type: Option<AlertType>,

    /// Keep only alerts for this location
    pub location_id: Option<String>,

    /// Drop alerts whose id is in this set
    pub dismissed_ids: Option<HashSet<String>>,
}

impl AlertFilter {
    /// Check one alert against every configured predicate.
    pub fn matches(&self, alert: &Alert) -> bool {
        if let Some(severity) = self.severity {
            if alert.severity != severity {
                return false;
            }
        }

        if let Some(alert_type) = self.alert_type {
            if alert.alert_type != alert_type {
                return false;
            }
        }

        if let Some(ref location_id) = self.location_id {
            if &alert.location_id != location_id {
                return false;
            }
        }

        if let Some(ref dismissed) = self.dismissed_ids {
            if dismissed.contains(&alert.id) {
                return false;
            }
        }

        true
    }
}

/// Apply a filter, preserving input order.
pub fn filter_alerts(alerts: &[Alert], filter: &AlertFilter) -> Vec<Alert> {
    alerts
        .iter()
        .filter(|alert| filter.matches(alert))
        .cloned()
        .collect()
}
