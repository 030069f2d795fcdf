//! Alert output model
//!
//! Alerts are value objects: recomputed on every generation cycle and
//! never mutated afterwards. Dismissal state is tracked by the caller,
//! keyed on the stable alert id.
//!
//! CRITICAL: All money values are i64 (cents)

use serde::{Deserialize, Serialize};

/// Alert category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    /// Receivables whose risk score reached the critical floor
    ArHighRisk,

    /// Credit-limit utilization crossed the alerting floor
    ArCreditLimit,

    /// Projected cash below the minimum operating threshold
    CashFlowShortfall,
}

impl AlertType {
    /// Stable string form, used in alert ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::ArHighRisk => "ar_high_risk",
            AlertType::ArCreditLimit => "ar_credit_limit",
            AlertType::CashFlowShortfall => "cash_flow_shortfall",
        }
    }

    /// Suggested remediation steps for this alert type, in presentation
    /// order. Static lookup table, identical for every alert of the type.
    pub fn action_items(&self) -> &'static [&'static str] {
        match self {
            AlertType::ArHighRisk => &[
                "Contact customer immediately for payment",
                "Review credit terms and consider payment plan",
                "Escalate to collections team",
                "Consider credit hold on future orders",
            ],
            AlertType::ArCreditLimit => &[
                "Review customer credit limit",
                "Request updated financial statements",
                "Implement payment plan",
                "Reduce credit exposure",
            ],
            AlertType::CashFlowShortfall => &[
                "Accelerate AR collections",
                "Defer non-critical expenses",
                "Arrange short-term financing",
                "Review AP payment schedule",
            ],
        }
    }
}

/// Alert urgency tier.
///
/// Derived solely from the numeric risk score via the threshold tables in
/// [`crate::scoring`]; never set independently. Declaration order doubles
/// as sort order: critical before warning before info.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    /// Sort rank: critical(0) < warning(1) < info(2).
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        }
    }
}

/// A generated risk alert.
///
/// `id` is deterministic (alert type plus triggering entity), so
/// regeneration over identical inputs yields identical ids and caller-side
/// dismissal tracking survives refresh cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Stable identifier for dismissal tracking
    /// (e.g. "ar_high_risk-CUST-001")
    pub id: String,

    /// Alert category
    pub alert_type: AlertType,

    /// Urgency tier, derived from `risk_score`
    pub severity: Severity,

    /// Risk score, clamped to [0, 100]
    pub risk_score: u8,

    /// Human-readable headline
    pub title: String,

    /// Exposure magnitude (i64 cents)
    pub amount: i64,

    /// Location the alert belongs to
    pub location_id: String,

    /// Suggested remediation steps, in order
    pub action_items: Vec<String>,
}

impl Alert {
    /// Build an alert of the given type.
    ///
    /// Id and action items are derived here so call sites cannot diverge;
    /// severity must come from the scoring tables, which is why this
    /// constructor stays crate-private.
    pub(crate) fn new(
        alert_type: AlertType,
        severity: Severity,
        risk_score: u8,
        title: String,
        amount: i64,
        location_id: String,
        entity_id: &str,
    ) -> Self {
        Self {
            id: format!("{}-{}", alert_type.as_str(), entity_id),
            alert_type,
            severity,
            risk_score,
            title,
            amount,
            location_id,
            action_items: alert_type
                .action_items()
                .iter()
                .map(|item| item.to_string())
                .collect(),
        }
    }
}
